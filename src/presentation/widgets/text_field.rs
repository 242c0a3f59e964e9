//! Bordered text input with optional masking and a reveal indicator.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::core::state::form::IconVariant;
use crate::presentation::theme::Palette;

const MASK_CHAR: char = '\u{2022}'; // •

/// Glyph for the reveal indicator; the "closed" variant marks a masked
/// field, the "open" one a revealed field.
pub fn icon_glyph(icon: IconVariant) -> &'static str {
    match icon {
        IconVariant::EyeClosed => "(\u{25cc})", // (◌)
        IconVariant::EyeOpen => "(\u{25c9})",   // (◉)
    }
}

/// Masked rendering: one mask character per input character, so the width
/// still tracks what was typed without showing it.
pub fn masked_display(value: &str) -> String {
    MASK_CHAR.to_string().repeat(value.chars().count())
}

/// The string the field actually shows for `value`.
pub fn display_value(value: &str, masked: bool) -> String {
    if masked {
        masked_display(value)
    } else {
        value.to_string()
    }
}

pub struct TextField<'a> {
    value: &'a str,
    label: Option<&'a str>,
    masked: bool,
    focused: bool,
    icon: Option<IconVariant>,
    palette: Palette,
}

impl<'a> TextField<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            label: None,
            masked: false,
            focused: false,
            icon: None,
            palette: Palette::light(),
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Reveal indicator shown next to the label, kept in sync with the
    /// masking state by the form state machine.
    pub fn icon(mut self, icon: Option<IconVariant>) -> Self {
        self.icon = icon;
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

impl Widget for TextField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match (self.label, self.icon) {
            (Some(label), Some(icon)) => format!(" {label} {} ", icon_glyph(icon)),
            (Some(label), None) => format!(" {label} "),
            (None, Some(icon)) => format!(" {} ", icon_glyph(icon)),
            (None, None) => String::new(),
        };

        let border_style = if self.focused {
            self.palette.focused_style()
        } else {
            self.palette.border_style()
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let display = display_value(self.value, self.masked);
        buf.set_stringn(
            inner.x,
            inner.y,
            &display,
            inner.width as usize,
            self.palette.base_style(),
        );

        // Cursor cell right after the text, only on the focused field.
        if self.focused {
            let cursor_x = inner.x + (display.width() as u16).min(inner.width - 1);
            if let Some(cell) = buf.cell_mut((cursor_x, inner.y)) {
                cell.set_style(
                    ratatui::style::Style::default()
                        .bg(self.palette.text)
                        .fg(self.palette.background),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::eyre::Result;
    use pretty_assertions::assert_eq;

    use crate::infrastructure::test_terminal::TestTerminal;

    use super::*;

    #[test]
    fn test_masked_display_hides_every_char() {
        assert_eq!(masked_display("hunter2"), "•••••••");
        assert_eq!(masked_display(""), "");
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value("hunter2", true), "•••••••");
        assert_eq!(display_value("hunter2", false), "hunter2");
    }

    #[test]
    fn test_icon_glyphs_differ() {
        assert_ne!(icon_glyph(IconVariant::EyeClosed), icon_glyph(IconVariant::EyeOpen));
    }

    #[test]
    fn test_masked_render_never_leaks_value() -> Result<()> {
        let mut term = TestTerminal::new(40, 3)?;
        term.draw(|f| {
            let field = TextField::new("hunter2").label("Password").masked(true);
            f.render_widget(field, f.area());
        })?;

        let contents = term.contents();
        assert!(!contents.contains("hunter2"));
        assert!(contents.contains("•••••••"));
        assert!(contents.contains("Password"));

        Ok(())
    }

    #[test]
    fn test_plain_render_shows_value_and_open_icon() -> Result<()> {
        let mut term = TestTerminal::new(40, 3)?;
        term.draw(|f| {
            let field = TextField::new("hunter2")
                .label("Password")
                .masked(false)
                .icon(Some(IconVariant::EyeOpen));
            f.render_widget(field, f.area());
        })?;

        let contents = term.contents();
        assert!(contents.contains("hunter2"));
        assert!(contents.contains(icon_glyph(IconVariant::EyeOpen)));

        Ok(())
    }
}
