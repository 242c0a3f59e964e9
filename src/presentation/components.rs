//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::core::state::AppState;
use crate::presentation::widgets::StatusBarWidget;

pub mod sign_in;

pub use sign_in::SignInComponent;

/// Collection of all components
pub struct Components {
    pub sign_in: SignInComponent,
}

impl Components {
    pub fn new() -> Self {
        Self {
            sign_in: SignInComponent::new(),
        }
    }

    /// Main rendering entry point.
    pub fn render(&mut self, frame: &mut Frame<'_>, state: &AppState) {
        let area = frame.area();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Min(0),    // Sign-in form
                Constraint::Length(2), // Status bar (2 rows)
            ])
            .split(area);

        self.sign_in.view(state, frame, layout[0]);

        let styles = &state.config.config.styles;
        let status_bar = StatusBarWidget::new(
            state.theme.mode,
            state.form.icon(),
            state.system.status_message.clone(),
        )
        .bar_style(styles.get("status_bar").copied().unwrap_or_default())
        .message_style(styles.get("status_message").copied().unwrap_or_default());
        frame.render_widget(status_bar, layout[1]);
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}
