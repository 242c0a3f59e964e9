use crate::core::cmd::Cmd;
use crate::core::msg::system::SystemMsg;

/// Run-control flags and the status line.
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
}

impl SystemState {
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => self.should_quit = true,
            SystemMsg::Suspend => self.should_suspend = true,
            SystemMsg::Resume => self.should_suspend = false,
            SystemMsg::StatusMessage(message) => self.status_message = Some(message),
            SystemMsg::ClearStatusMessage => self.status_message = None,
        }
        vec![]
    }
}
