//! Color palettes for the two themes.

use ratatui::style::{Color, Modifier, Style};

use crate::core::state::theme::ThemeMode;

/// Resolved colors for the active theme. Every render resolves the palette
/// fresh from [`ThemeMode`], so a toggle restyles the whole screen on the
/// next frame.
#[derive(Debug, Clone)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub border: Color,
    pub error: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(250, 250, 245),
            surface: Color::Rgb(255, 255, 255),
            text: Color::Rgb(30, 30, 30),
            text_muted: Color::Rgb(110, 110, 110),
            primary: Color::Rgb(0, 95, 135),
            border: Color::Rgb(180, 180, 180),
            error: Color::Rgb(175, 30, 30),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(18, 18, 24),
            surface: Color::Rgb(30, 30, 38),
            text: Color::Rgb(225, 225, 225),
            text_muted: Color::Rgb(140, 140, 140),
            primary: Color::Rgb(95, 175, 255),
            border: Color::Rgb(70, 70, 80),
            error: Color::Rgb(255, 105, 97),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn base_style(&self) -> Style {
        Style::default().bg(self.background).fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn focused_style(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_palette_follows_mode() {
        let light = Palette::for_mode(ThemeMode::Light);
        let dark = Palette::for_mode(ThemeMode::Dark);

        assert_eq!(light.background, Palette::light().background);
        assert_eq!(dark.background, Palette::dark().background);
        assert_ne!(light.background, dark.background);
    }
}
