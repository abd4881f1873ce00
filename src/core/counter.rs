//! Count-up animation for the stats strip

/// Default length of a count-up
pub const DEFAULT_DURATION_MS: u32 = 2000;

/// Roughly one frame at 60 fps
pub const FRAME_MS: u32 = 16;

/// Counts from zero up to `target` over `duration_ms`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAnimation {
    pub target: u32,
    pub duration_ms: u32,
    pub frame_ms: u32,
}

impl CounterAnimation {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            duration_ms: DEFAULT_DURATION_MS,
            frame_ms: FRAME_MS,
        }
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Number of frames, at least one
    pub fn frame_count(&self) -> u32 {
        (self.duration_ms / self.frame_ms.max(1)).max(1)
    }

    /// Value shown at `frame` (1-based). Clamps to the target.
    pub fn value_at(&self, frame: u32) -> u32 {
        let frames = self.frame_count();
        if frame >= frames {
            return self.target;
        }
        (u64::from(self.target) * u64::from(frame) / u64::from(frames)) as u32
    }

    /// Every value shown, ending exactly on the target
    pub fn frames(&self) -> impl Iterator<Item = u32> + '_ {
        (1..=self.frame_count()).map(|f| self.value_at(f))
    }
}

/// Format a stat as shown on the page, e.g. `1,200+`
pub fn format_count(value: u32, suffix: &str) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + suffix.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push_str(suffix);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_end_on_target() {
        let counter = CounterAnimation::new(1250);
        assert_eq!(counter.frames().last(), Some(1250));
        assert_eq!(counter.frame_count(), 125);
    }

    #[test]
    fn test_frames_never_decrease() {
        let counter = CounterAnimation::new(97).with_duration(1000);
        let values: Vec<u32> = counter.frames().collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let counter = CounterAnimation::new(42).with_duration(0);
        assert_eq!(counter.frames().collect::<Vec<_>>(), vec![42]);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0, ""), "0");
        assert_eq!(format_count(999, "+"), "999+");
        assert_eq!(format_count(1200, "+"), "1,200+");
        assert_eq!(format_count(1_000_000, ""), "1,000,000");
    }
}
