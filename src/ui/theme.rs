/// Design tokens for the treeselect terminal picker.
///
/// All icons used by the widget must be sourced from this module.
pub mod icons {
    pub const POINTER: &str = "›";
    pub const ELLIPSIS: &str = "…";

    // Selection states.
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    pub const SEPARATOR: &str = "─";

    // Navigation hints.
    pub const ARROWS: &str = "↑↓";
}

pub mod icons_ascii {
    pub const POINTER: &str = ">";
    pub const ELLIPSIS: &str = "...";

    // Selection states.
    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";

    // Tree expansion.
    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";

    pub const SEPARATOR: &str = "-";

    // Navigation hints.
    pub const ARROWS: &str = "Up/Down";
}

/// One resolved icon set, picked once per render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSet {
    pub pointer: &'static str,
    pub ellipsis: &'static str,
    pub selected: &'static str,
    pub unselected: &'static str,
    pub expand: &'static str,
    pub collapse: &'static str,
    pub separator: &'static str,
    pub arrows: &'static str,
}

const UNICODE_ICONS: IconSet = IconSet {
    pointer: icons::POINTER,
    ellipsis: icons::ELLIPSIS,
    selected: icons::SELECTED,
    unselected: icons::UNSELECTED,
    expand: icons::EXPAND,
    collapse: icons::COLLAPSE,
    separator: icons::SEPARATOR,
    arrows: icons::ARROWS,
};

const ASCII_ICONS: IconSet = IconSet {
    pointer: icons_ascii::POINTER,
    ellipsis: icons_ascii::ELLIPSIS,
    selected: icons_ascii::SELECTED,
    unselected: icons_ascii::UNSELECTED,
    expand: icons_ascii::EXPAND,
    collapse: icons_ascii::COLLAPSE,
    separator: icons_ascii::SEPARATOR,
    arrows: icons_ascii::ARROWS,
};

impl IconSet {
    pub fn new(supports_unicode: bool) -> Self {
        if supports_unicode {
            UNICODE_ICONS
        } else {
            ASCII_ICONS
        }
    }
}
