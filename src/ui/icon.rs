use leptos::prelude::*;

/// Inline stroke icon
#[component]
pub fn Icon(
    /// Icon name, see [`icons`]
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            <path d=icons::path(name) />
        </svg>
    }
}

/// Predefined icon names
pub mod icons {
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const CHECK: &str = "check";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const LOADER: &str = "loader";
    pub const PHONE: &str = "phone";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const BOOK: &str = "book";
    pub const MESSAGE: &str = "message";

    /// SVG path data for an icon name; unknown names render nothing
    pub fn path(name: &str) -> &'static str {
        match name {
            MENU => "M4 6h16M4 12h16M4 18h16",
            X => "M6 18L18 6M6 6l12 12",
            CHECK => "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
            ALERT_CIRCLE => "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
            LOADER => "M12 3a9 9 0 109 9",
            PHONE => {
                "M3 5a2 2 0 012-2h3.28a1 1 0 01.95.68l1.5 4.49a1 1 0 01-.5 1.21l-2.26 1.13a11.04 11.04 0 005.52 5.52l1.13-2.26a1 1 0 011.21-.5l4.49 1.5a1 1 0 01.68.95V19a2 2 0 01-2 2h-1C9.72 21 3 14.28 3 6V5z"
            }
            CHEVRON_DOWN => "M19 9l-7 7-7-7",
            CHEVRON_LEFT => "M15 19l-7-7 7-7",
            CHEVRON_RIGHT => "M9 5l7 7-7 7",
            BOOK => {
                "M12 6.25v13m0-13C10.83 5.48 9.25 5 7.5 5S4.17 5.48 3 6.25v13C4.17 18.48 5.75 18 7.5 18s3.33.48 4.5 1.25m0-13C13.17 5.48 14.75 5 16.5 5c1.75 0 3.33.48 4.5 1.25v13C19.83 18.48 18.25 18 16.5 18c-1.75 0-3.33.48-4.5 1.25"
            }
            MESSAGE => {
                "M8 12h.01M12 12h.01M16 12h.01M21 12c0 4.42-4.03 8-9 8a9.86 9.86 0 01-4.26-.95L3 20l1.4-3.72C3.51 15.04 3 13.57 3 12c0-4.42 4.03-8 9-8s9 3.58 9 8z"
            }
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::icons;

    #[test]
    fn test_menu_toggle_icons_exist() {
        assert!(!icons::path(icons::MENU).is_empty());
        assert!(!icons::path(icons::X).is_empty());
        assert!(icons::path("unknown").is_empty());
    }

    #[test]
    fn test_menu_state_icons_are_known() {
        use crate::core::MenuState;

        let mut menu = MenuState::new();
        assert!(!icons::path(menu.icon()).is_empty());
        menu.toggle();
        assert!(!icons::path(menu.icon()).is_empty());
    }
}
