//! Testimonial carousel index

/// Time each testimonial stays on screen
pub const DEFAULT_ROTATE_MS: u32 = 5000;

/// Cycles through `len` testimonials, wrapping at both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestimonialRotator {
    len: usize,
    index: usize,
}

impl TestimonialRotator {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn previous(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    /// Jump to a dot; out of range indexes are ignored
    pub fn select(&mut self, index: usize) -> usize {
        if index < self.len {
            self.index = index;
        }
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        let mut rotator = TestimonialRotator::new(3);
        assert_eq!(rotator.next(), 1);
        assert_eq!(rotator.next(), 2);
        assert_eq!(rotator.next(), 0);
    }

    #[test]
    fn test_previous_wraps() {
        let mut rotator = TestimonialRotator::new(3);
        assert_eq!(rotator.previous(), 2);
        assert_eq!(rotator.previous(), 1);
    }

    #[test]
    fn test_select() {
        let mut rotator = TestimonialRotator::new(4);
        assert_eq!(rotator.select(3), 3);
        assert_eq!(rotator.select(9), 3);
    }

    #[test]
    fn test_empty_rotator_is_inert() {
        let mut rotator = TestimonialRotator::new(0);
        assert!(rotator.is_empty());
        assert_eq!(rotator.next(), 0);
        assert_eq!(rotator.previous(), 0);
        assert_eq!(rotator.select(0), 0);
    }
}
