//! Two-line status bar: theme/visibility indicators plus the last message.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::core::state::form::IconVariant;
use crate::core::state::theme::ThemeMode;
use crate::presentation::widgets::text_field::icon_glyph;

pub struct StatusBarWidget {
    mode: ThemeMode,
    icon: Option<IconVariant>,
    message: Option<String>,
    bar_style: Style,
    message_style: Style,
}

impl StatusBarWidget {
    pub fn new(mode: ThemeMode, icon: Option<IconVariant>, message: Option<String>) -> Self {
        Self {
            mode,
            icon,
            message,
            bar_style: Style::default(),
            message_style: Style::default(),
        }
    }

    pub fn bar_style(mut self, style: Style) -> Self {
        self.bar_style = style;
        self
    }

    pub fn message_style(mut self, style: Style) -> Self {
        self.message_style = style;
        self
    }

    fn indicator_line(&self) -> Line<'static> {
        let theme = match self.mode {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        };
        let mut spans = vec![Span::raw(format!("theme: {theme}"))];
        if let Some(icon) = self.icon {
            let visibility = match icon {
                IconVariant::EyeClosed => "hidden",
                IconVariant::EyeOpen => "visible",
            };
            spans.push(Span::raw("  |  "));
            spans.push(Span::raw(format!(
                "password: {visibility} {}",
                icon_glyph(icon)
            )));
        }
        Line::from(spans)
    }
}

impl Widget for StatusBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        buf.set_style(Rect { height: 1, ..area }, self.bar_style);
        let indicators = self.indicator_line();
        buf.set_line(area.x, area.y, &indicators, area.width);

        if area.height > 1 {
            let message = self.message.unwrap_or_default();
            buf.set_stringn(
                area.x,
                area.y + 1,
                &message,
                area.width as usize,
                self.message_style,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::eyre::Result;

    use crate::infrastructure::test_terminal::TestTerminal;

    use super::*;

    #[test]
    fn test_indicators_reflect_state() -> Result<()> {
        let mut term = TestTerminal::new(60, 2)?;
        term.draw(|f| {
            let bar = StatusBarWidget::new(
                ThemeMode::Dark,
                Some(IconVariant::EyeClosed),
                Some("Welcome back".to_string()),
            );
            f.render_widget(bar, f.area());
        })?;

        let contents = term.contents();
        assert!(contents.contains("theme: dark"));
        assert!(contents.contains("password: hidden"));
        assert!(contents.contains("Welcome back"));

        Ok(())
    }

    #[test]
    fn test_unwired_toggle_hides_indicator() -> Result<()> {
        let mut term = TestTerminal::new(60, 2)?;
        term.draw(|f| {
            let bar = StatusBarWidget::new(ThemeMode::Light, None, None);
            f.render_widget(bar, f.area());
        })?;

        let contents = term.contents();
        assert!(contents.contains("theme: light"));
        assert!(!contents.contains("password:"));

        Ok(())
    }
}
