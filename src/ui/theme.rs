//! Theme system for light/dark mode support

use parking_lot::RwLock;
use ratatui::style::Color;
use std::sync::LazyLock;
use translumen_core::ThemeVariant;

/// All semantic colors used throughout the UI
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub bg_primary: Color,
    pub bg_modal: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Borders
    pub border_focused: Color,
    pub border_unfocused: Color,

    // Accents
    pub accent_primary: Color,
    pub accent_highlight: Color,

    // Status
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,

    // Progress gauge
    pub gauge_filled: Color,
    pub gauge_empty: Color,

    // Status bar
    pub statusbar_bg: Color,
    pub statusbar_mode_bg: Color,
    pub statusbar_mode_fg: Color,
}

impl Theme {
    /// Dark theme - optimized for dark terminal backgrounds
    pub fn dark() -> Self {
        Self {
            bg_primary: Color::Reset,
            bg_modal: Color::Rgb(25, 25, 35),

            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            border_focused: Color::Cyan,
            border_unfocused: Color::DarkGray,

            accent_primary: Color::Cyan,
            accent_highlight: Color::Yellow,

            status_error: Color::Red,
            status_warning: Color::Yellow,
            status_info: Color::Cyan,

            gauge_filled: Color::Cyan,
            gauge_empty: Color::Rgb(40, 40, 50),

            statusbar_bg: Color::Black,
            statusbar_mode_bg: Color::Blue,
            statusbar_mode_fg: Color::White,
        }
    }

    /// Light theme - optimized for light terminal backgrounds
    pub fn light() -> Self {
        Self {
            bg_primary: Color::Reset,
            bg_modal: Color::Rgb(248, 248, 252),

            // Darker text for readability on light backgrounds
            text_primary: Color::Rgb(20, 20, 30),
            text_secondary: Color::Rgb(50, 50, 70),
            text_muted: Color::Rgb(90, 90, 110),

            border_focused: Color::Rgb(30, 90, 160),
            border_unfocused: Color::Rgb(140, 140, 160),

            accent_primary: Color::Rgb(20, 80, 150),
            accent_highlight: Color::Rgb(160, 100, 0),

            status_error: Color::Rgb(180, 30, 30),
            status_warning: Color::Rgb(160, 100, 0),
            status_info: Color::Rgb(20, 80, 150),

            gauge_filled: Color::Rgb(30, 90, 160),
            gauge_empty: Color::Rgb(220, 220, 230),

            statusbar_bg: Color::Rgb(225, 225, 235),
            statusbar_mode_bg: Color::Rgb(30, 90, 160),
            statusbar_mode_fg: Color::White,
        }
    }

    fn for_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Theme::dark(),
            ThemeVariant::Light => Theme::light(),
        }
    }
}

// Global theme state
struct ThemeState {
    theme: Theme,
    variant: ThemeVariant,
}

static THEME_STATE: LazyLock<RwLock<ThemeState>> = LazyLock::new(|| {
    let variant = ThemeVariant::default();
    RwLock::new(ThemeState {
        theme: Theme::for_variant(variant),
        variant,
    })
});

/// Get a read guard to the current theme
pub fn theme() -> parking_lot::MappedRwLockReadGuard<'static, Theme> {
    parking_lot::RwLockReadGuard::map(THEME_STATE.read(), |state| &state.theme)
}

/// Get the current theme variant
pub fn current_variant() -> ThemeVariant {
    THEME_STATE.read().variant
}

/// Set the theme to a specific variant
pub fn set_theme(variant: ThemeVariant) {
    let mut state = THEME_STATE.write();
    state.variant = variant;
    state.theme = Theme::for_variant(variant);
}

/// Toggle between light and dark themes, returning the new variant
pub fn toggle_theme() -> ThemeVariant {
    let next = current_variant().toggle();
    set_theme(next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_palettes() {
        let dark = Theme::for_variant(ThemeVariant::Dark);
        assert_eq!(dark.gauge_filled, Color::Cyan);

        let light = Theme::for_variant(ThemeVariant::Light);
        assert_eq!(light.gauge_filled, Color::Rgb(30, 90, 160));
        assert_ne!(dark.bg_modal, light.bg_modal);
    }
}
