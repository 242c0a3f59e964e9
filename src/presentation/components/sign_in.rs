//! The sign-in screen.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};

use crate::core::state::AppState;
use crate::presentation::theme::Palette;
use crate::presentation::widgets::TextField;

const FORM_WIDTH: u16 = 48;
const FIELD_HEIGHT: u16 = 3;

pub struct SignInComponent;

impl SignInComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        let palette = Palette::for_mode(state.theme.mode);

        // Theme background over the whole screen.
        frame.render_widget(Block::default().style(palette.base_style()), area);

        let form_area = centered(area, FORM_WIDTH, form_height(state));

        let mut constraints = vec![
            Constraint::Length(1), // Title
            Constraint::Length(1),
        ];
        constraints.extend(
            state
                .form
                .fields
                .iter()
                .map(|_| Constraint::Length(FIELD_HEIGHT)),
        );
        constraints.push(Constraint::Length(1)); // Hint line
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(form_area);

        let title = Paragraph::new("Tourdesk / Sign in")
            .style(palette.title_style())
            .alignment(Alignment::Center);
        frame.render_widget(title, rows[0]);

        for (i, field) in state.form.fields.iter().enumerate() {
            let icon = (state.form.reveal_target() == Some(i))
                .then(|| state.form.icon())
                .flatten();
            let widget = TextField::new(&field.value)
                .label(field.spec.label)
                .masked(state.form.is_masked(i))
                .focused(state.form.focus == i)
                .icon(icon)
                .palette(palette.clone());
            frame.render_widget(widget, rows[2 + i]);
        }

        let hint = Paragraph::new("tab next field  |  ctrl-r reveal  |  ctrl-d theme  |  enter sign in")
            .style(palette.muted_style())
            .alignment(Alignment::Center);
        frame.render_widget(hint, rows[rows.len() - 1]);
    }
}

impl Default for SignInComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn form_height(state: &AppState) -> u16 {
    2 + state.form.fields.len() as u16 * FIELD_HEIGHT + 1
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::eyre::Result;

    use crate::core::msg::{form::FormMsg, theme::ThemeMsg, Msg};
    use crate::core::update::update;
    use crate::infrastructure::test_terminal::TestTerminal;
    use crate::presentation::components::Components;

    use super::*;

    fn render(state: &AppState) -> Result<String> {
        let mut term = TestTerminal::new(80, 16)?;
        let mut components = Components::new();
        term.draw(|f| components.render(f, state))?;
        Ok(term.contents())
    }

    #[test]
    fn test_initial_screen_masks_password() -> Result<()> {
        let mut state = AppState::default();
        for c in "secret".chars() {
            let (next, _) = update(Msg::Form(FormMsg::Input(c)), state);
            state = next;
        }
        let (state, _) = update(Msg::Form(FormMsg::FocusNext), state);
        let mut state = state;
        for c in "hunter2".chars() {
            let (next, _) = update(Msg::Form(FormMsg::Input(c)), state);
            state = next;
        }

        let contents = render(&state)?;
        assert!(contents.contains("Email"));
        assert!(contents.contains("secret")); // email is plain
        assert!(!contents.contains("hunter2")); // password is masked
        assert!(contents.contains("password: hidden"));

        Ok(())
    }

    #[test]
    fn test_reveal_shows_password() -> Result<()> {
        let mut state = AppState::default();
        let (next, _) = update(Msg::Form(FormMsg::FocusNext), state);
        state = next;
        for c in "hunter2".chars() {
            let (next, _) = update(Msg::Form(FormMsg::Input(c)), state);
            state = next;
        }
        let (state, _) = update(Msg::Form(FormMsg::ToggleVisibility), state);

        let contents = render(&state)?;
        assert!(contents.contains("hunter2"));
        assert!(contents.contains("password: visible"));

        Ok(())
    }

    #[test]
    fn test_theme_indicator_tracks_mode() -> Result<()> {
        let state = AppState::default();
        assert!(render(&state)?.contains("theme: light"));

        let (state, _) = update(Msg::Theme(ThemeMsg::Toggle), state);
        assert!(render(&state)?.contains("theme: dark"));

        Ok(())
    }
}
