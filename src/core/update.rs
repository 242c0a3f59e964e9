use crate::core::cmd::Cmd;
use crate::core::msg::{form::FormMsg, Msg};
use crate::core::state::AppState;

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        Msg::Theme(theme_msg) => {
            let commands = state.theme.update(theme_msg);
            (state, commands)
        }

        // Submit is resolved here so the outcome can reach the status line,
        // which lives in SystemState.
        Msg::Form(FormMsg::Submit) => match state.form.submit() {
            Ok(credentials) => {
                state.system.status_message =
                    Some(format!("Signing in as {}...", credentials.email));
                let commands = vec![Cmd::LogInfo {
                    message: format!("sign-in submitted for {}", credentials.email),
                }];
                (state, commands)
            }
            Err(reason) => {
                state.system.status_message = Some(reason);
                (state, vec![])
            }
        },

        Msg::Form(form_msg) => {
            let commands = state.form.update(form_msg);
            (state, commands)
        }

        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::core::msg::{system::SystemMsg, theme::ThemeMsg};
    use crate::core::state::theme::ThemeMode;
    use crate::domain::preferences::DARK_MODE_KEY;

    use super::*;

    #[test]
    fn test_theme_toggle_flows_to_save_command() {
        let state = AppState::default();

        let (state, cmds) = update(Msg::Theme(ThemeMsg::Toggle), state);
        assert_eq!(state.theme.mode, ThemeMode::Dark);
        assert_eq!(
            cmds,
            vec![Cmd::SavePreference {
                key: DARK_MODE_KEY.to_string(),
                value: "true".to_string(),
            }]
        );
    }

    #[test]
    fn test_submit_failure_sets_status_message() {
        let state = AppState::default();

        let (state, cmds) = update(Msg::Form(FormMsg::Submit), state);
        assert_eq!(state.system.status_message.as_deref(), Some("Email is required"));
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_submit_success_reports_and_logs() {
        let mut state = AppState::default();
        for c in "ann@example.com".chars() {
            let (next, _) = update(Msg::Form(FormMsg::Input(c)), state);
            state = next;
        }
        let (mut state, _) = update(Msg::Form(FormMsg::FocusNext), state);
        for c in "hunter2".chars() {
            let (next, _) = update(Msg::Form(FormMsg::Input(c)), state);
            state = next;
        }

        let (state, cmds) = update(Msg::Form(FormMsg::Submit), state);
        assert_eq!(
            state.system.status_message.as_deref(),
            Some("Signing in as ann@example.com...")
        );
        assert_eq!(cmds.len(), 1);
        match &cmds[0] {
            Cmd::LogInfo { message } => assert!(message.contains("ann@example.com")),
            other => panic!("expected LogInfo, got {other:?}"),
        }
    }

    #[test]
    fn test_system_quit() {
        let state = AppState::default();

        let (state, cmds) = update(Msg::System(SystemMsg::Quit), state);
        assert!(state.system.should_quit);
        assert!(cmds.is_empty());
    }
}
