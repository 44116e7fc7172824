//! Color theme for the Waybill TUI.
//!
//! Built around the service's indigo brand color, with an optional
//! high-contrast override for limited terminals.

use ratatui::style::{Color, Modifier, Style};

/// Rendering options resolved from configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
}

mod colors {
    use super::Color;

    pub const BG_DARK: Color = Color::Rgb(18, 18, 24);
    pub const BG_PANEL: Color = Color::Rgb(28, 28, 38);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(44, 44, 60);

    pub const TEXT_PRIMARY: Color = Color::Rgb(225, 225, 235);
    pub const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 185);
    pub const TEXT_MUTED: Color = Color::Rgb(110, 110, 125);

    // Brand indigo.
    pub const PRIMARY: Color = Color::Rgb(46, 49, 146);
    pub const PRIMARY_LIGHT: Color = Color::Rgb(99, 102, 204);

    pub const GREEN: Color = Color::Rgb(96, 186, 120);
    pub const ORANGE: Color = Color::Rgb(240, 150, 70);
    pub const RED: Color = Color::Rgb(225, 85, 90);
}

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub primary_light: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            primary_light: colors::PRIMARY_LIGHT,
            success: colors::GREEN,
            warning: colors::ORANGE,
            error: colors::RED,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            primary: Color::Blue,
            primary_light: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// Display style for a parcel status string.
///
/// The mapping is fixed; a status the service invents later renders
/// unstyled rather than failing.
#[must_use]
pub fn status_style(palette: &Palette, status: &str) -> Style {
    match status {
        "Shipment collected" | "Under customs clearance" => {
            Style::default().fg(palette.primary_light)
        }
        "In transit to destination" => Style::default().fg(palette.warning),
        "Delivered" => Style::default().fg(palette.success),
        "Pending" => Style::default().fg(palette.error),
        _ => Style::default(),
    }
}

/// Style for a form field row, highlighted when focused.
#[must_use]
pub fn field_style(palette: &Palette, focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(palette.text_primary)
            .bg(palette.bg_highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text_secondary)
    }
}

#[cfg(test)]
mod tests {
    use super::{Palette, status_style};
    use ratatui::style::Style;

    #[test]
    fn unmapped_status_renders_unstyled() {
        let palette = Palette::standard();
        assert_eq!(status_style(&palette, "Lost in a wormhole"), Style::default());
        assert_eq!(status_style(&palette, ""), Style::default());
    }

    #[test]
    fn known_statuses_get_distinct_colors() {
        let palette = Palette::standard();
        let delivered = status_style(&palette, "Delivered");
        let pending = status_style(&palette, "Pending");
        let transit = status_style(&palette, "In transit to destination");
        assert_ne!(delivered, pending);
        assert_ne!(pending, transit);
        assert_eq!(
            status_style(&palette, "Shipment collected"),
            status_style(&palette, "Under customs clearance")
        );
    }
}
