//! Static drawer menu data.

/// Symbolic icon identifier for a menu row. Frontends pick the actual glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Home,
    Favourite,
    Profile,
}

impl MenuIcon {
    /// Single-cell glyph used by the TUI frontend.
    pub fn glyph(&self) -> &'static str {
        match self {
            MenuIcon::Home => "⌂",
            MenuIcon::Favourite => "♥",
            MenuIcon::Profile => "☺",
        }
    }
}

/// One row of the drawer menu. Constant data, no lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub icon: MenuIcon,
}

const MENU_ITEMS: [MenuItem; 3] = [
    MenuItem {
        label: "Home",
        icon: MenuIcon::Home,
    },
    MenuItem {
        label: "Favourite",
        icon: MenuIcon::Favourite,
    },
    MenuItem {
        label: "Profile",
        icon: MenuIcon::Profile,
    },
];

/// The drawer's menu rows, in display order.
pub fn menu_items() -> &'static [MenuItem] {
    &MENU_ITEMS
}
