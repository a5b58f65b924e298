//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::Color;

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    pub const ERROR: Color = Color::Rgb(224, 108, 117);
    pub const CYAN: Color = Color::Rgb(0, 217, 255);
}

/// Toast styles, one color set per variant
pub mod toast {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ToastColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
        pub close_hint: Color,
    }

    pub const DEFAULT: ToastColors = ToastColors {
        fg: palette::TEXT,
        bg: palette::BG_HIGHLIGHT,
        border: palette::TEXT_MUTED,
        close_hint: palette::TEXT_DIM,
    };

    pub const DESTRUCTIVE: ToastColors = ToastColors {
        fg: palette::TEXT,
        bg: palette::ERROR,
        border: Color::Rgb(255, 135, 145),
        close_hint: Color::Rgb(255, 220, 222),
    };

    pub const ACTION: Color = palette::CYAN;
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::TEXT_MUTED;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const BACKGROUND: Color = palette::BG_DARK;
}
