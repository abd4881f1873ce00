//! Navigation shell state: the mobile menu and the sticky header

/// Widest viewport, in CSS pixels, that still shows the mobile menu
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Scroll offset past which the header gets its solid background
pub const HEADER_SOLID_AFTER_PX: f64 = 50.0;

/// Scroll offset past which scrolling down hides the header
pub const HEADER_HIDE_AFTER_PX: f64 = 100.0;

/// Open/closed flag of the mobile menu.
///
/// While the menu is open the page body stops scrolling and the toggle shows
/// a close icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu, returning the new flag
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu, e.g. after a nav link was followed
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Close the menu once the viewport is wider than the mobile layout.
    /// Returns `true` if this closed it.
    pub fn fit_viewport(&mut self, width: f64) -> bool {
        if self.open && width > MOBILE_BREAKPOINT_PX {
            self.open = false;
            true
        } else {
            false
        }
    }

    /// Name of the icon the toggle button shows
    pub fn icon(&self) -> &'static str {
        if self.open { "x" } else { "menu" }
    }

    /// Value for the body's `overflow` style
    pub fn body_overflow(&self) -> &'static str {
        if self.open { "hidden" } else { "" }
    }
}

/// Sticky header reaction to page scrolling.
///
/// Scrolling down past [`HEADER_HIDE_AFTER_PX`] slides the header away and
/// any upward scroll brings it back.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeaderScroll {
    last_offset: f64,
    hidden: bool,
    solid: bool,
}

impl HeaderScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current vertical scroll offset
    pub fn on_scroll(&mut self, offset: f64) {
        self.hidden = offset > self.last_offset && offset > HEADER_HIDE_AFTER_PX;
        self.solid = offset > HEADER_SOLID_AFTER_PX;
        self.last_offset = offset;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether the header shows its scrolled (solid, shadowed) look
    pub fn is_solid(&self) -> bool {
        self.solid
    }

    /// Value for the header's `transform` style
    pub fn transform(&self) -> &'static str {
        if self.hidden { "translateY(-100%)" } else { "translateY(0)" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_closed() {
        let menu = MenuState::new();
        assert!(!menu.is_open());
        assert_eq!(menu.icon(), "menu");
        assert_eq!(menu.body_overflow(), "");
    }

    #[test]
    fn test_toggle_opens_and_locks_scroll() {
        let mut menu = MenuState::new();
        assert!(menu.toggle());
        assert_eq!(menu.icon(), "x");
        assert_eq!(menu.body_overflow(), "hidden");
    }

    #[test]
    fn test_double_toggle_restores_everything() {
        for initial in [MenuState::new(), {
            let mut m = MenuState::new();
            m.toggle();
            m
        }] {
            let mut menu = initial;
            menu.toggle();
            menu.toggle();

            assert_eq!(menu, initial);
            assert_eq!(menu.icon(), initial.icon());
            assert_eq!(menu.body_overflow(), initial.body_overflow());
        }
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut menu = MenuState::new();
        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_widening_past_breakpoint_closes_menu() {
        let mut menu = MenuState::new();
        menu.toggle();

        assert!(!menu.fit_viewport(600.0));
        assert!(menu.is_open());
        assert!(!menu.fit_viewport(768.0));
        assert!(menu.is_open());

        assert!(menu.fit_viewport(1024.0));
        assert!(!menu.is_open());
        assert_eq!(menu.body_overflow(), "");
    }

    #[test]
    fn test_fit_viewport_leaves_closed_menu_alone() {
        let mut menu = MenuState::new();
        assert!(!menu.fit_viewport(1440.0));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_header_hides_only_when_scrolling_down_past_threshold() {
        let mut header = HeaderScroll::new();

        header.on_scroll(80.0);
        assert!(!header.is_hidden());
        assert!(header.is_solid());

        header.on_scroll(300.0);
        assert!(header.is_hidden());
        assert_eq!(header.transform(), "translateY(-100%)");

        header.on_scroll(250.0);
        assert!(!header.is_hidden());
        assert_eq!(header.transform(), "translateY(0)");
    }

    #[test]
    fn test_header_is_transparent_at_top() {
        let mut header = HeaderScroll::new();
        header.on_scroll(200.0);
        header.on_scroll(10.0);
        assert!(!header.is_solid());
        assert!(!header.is_hidden());
    }
}
