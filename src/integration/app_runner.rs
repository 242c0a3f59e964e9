//! Runtime loop: events in, renders out.

use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::Mutex;

use crate::core::cmd::Cmd;
use crate::core::msg::{system::SystemMsg, theme::ThemeMsg, Msg};
use crate::core::state::AppState;
use crate::core::update::update;
use crate::domain::preferences::{PreferenceStore, DARK_MODE_KEY};
use crate::infrastructure::config::Config;
use crate::infrastructure::tui::{event_source::EventSource, Event, TuiLike};
use crate::integration::translator::translate_key;
use crate::presentation::components::Components;

/// Owns the state, the preference store, and the event source; runs the
/// update loop until quit.
pub struct AppRunner {
    state: AppState,
    store: Box<dyn PreferenceStore>,
    event_source: EventSource,
    tui: Option<Arc<Mutex<dyn TuiLike + Send>>>,
    components: Components,
}

impl AppRunner {
    pub fn new_with_real(
        config: Config,
        store: Box<dyn PreferenceStore>,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
    ) -> Self {
        Self::new(config, store, EventSource::real(Arc::clone(&tui)), Some(tui))
    }

    /// Scripted-event runner with no terminal; used by integration tests.
    pub fn new_with_events(
        config: Config,
        store: Box<dyn PreferenceStore>,
        events: impl IntoIterator<Item = Event>,
    ) -> Self {
        Self::new(config, store, EventSource::test(events), None)
    }

    fn new(
        config: Config,
        store: Box<dyn PreferenceStore>,
        event_source: EventSource,
        tui: Option<Arc<Mutex<dyn TuiLike + Send>>>,
    ) -> Self {
        let mut runner = Self {
            state: AppState::new(config),
            store,
            event_source,
            tui,
            components: Components::new(),
        };
        runner.apply_stored_preference();
        runner
    }

    /// Startup half of the dark mode contract: read the raw stored value
    /// once and let the theme state machine decide what it means. A store
    /// read failure degrades to the light default.
    fn apply_stored_preference(&mut self) {
        let raw = match self.store.get(DARK_MODE_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("failed to read stored preferences: {e}");
                None
            }
        };
        self.dispatch(Msg::Theme(ThemeMsg::ApplyStored(raw)));
    }

    fn dispatch(&mut self, msg: Msg) {
        tracing::debug!(?msg, "dispatch");
        let state = std::mem::take(&mut self.state);
        let (next, cmds) = update(msg, state);
        self.state = next;
        for cmd in cmds {
            self.execute(cmd);
        }
    }

    fn execute(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::SavePreference { key, value } => {
                if let Err(e) = self.store.set(&key, &value) {
                    tracing::error!("failed to persist {key}: {e}");
                    self.state.system.status_message =
                        Some("Could not save preferences".to_string());
                }
            }
            Cmd::LogInfo { message } => tracing::info!("{message}"),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        if let Some(tui) = &self.tui {
            tui.lock().await.enter()?;
        }

        loop {
            let Some(event) = self.event_source.next().await else {
                break;
            };

            match event {
                Event::Quit => self.dispatch(Msg::System(SystemMsg::Quit)),
                Event::Key(key) => {
                    let bindings = self.state.config.config.keybindings.clone();
                    if let Some(msg) = translate_key(key, &bindings) {
                        self.dispatch(msg);
                    }
                }
                Event::Init | Event::Render => self.draw().await?,
                Event::Resize(w, h) => {
                    if let Some(tui) = &self.tui {
                        tui.lock().await.resize(Rect::new(0, 0, w, h))?;
                    }
                    self.draw().await?;
                }
                _ => {}
            }

            if self.state.system.should_suspend {
                self.dispatch(Msg::System(SystemMsg::Resume));
                if let Some(tui) = &self.tui {
                    let mut guard = tui.lock().await;
                    // Stops the process via SIGTSTP; execution resumes here
                    // on SIGCONT, back into the alternate screen.
                    guard.suspend()?;
                    guard.enter()?;
                }
            } else if self.state.system.should_quit {
                break;
            }
        }

        if let Some(tui) = &self.tui {
            tui.lock().await.exit()?;
        }
        Ok(())
    }

    async fn draw(&mut self) -> Result<()> {
        let Some(tui) = &self.tui else {
            return Ok(());
        };
        let components = &mut self.components;
        let state = &self.state;
        tui.lock()
            .await
            .draw(&mut |frame| components.render(frame, state))?;
        Ok(())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use crate::core::state::theme::ThemeMode;
    use crate::domain::preferences::MemoryPreferenceStore;

    use super::*;

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[tokio::test]
    async fn test_startup_applies_stored_preference() -> Result<()> {
        let store = MemoryPreferenceStore::with_entries([(DARK_MODE_KEY, "true")]);
        let mut runner =
            AppRunner::new_with_events(Config::default(), Box::new(store), vec![]);
        runner.run().await?;

        assert_eq!(runner.state().theme.mode, ThemeMode::Dark);

        Ok(())
    }

    #[tokio::test]
    async fn test_toggle_key_flips_theme_and_persists() -> Result<()> {
        let store = MemoryPreferenceStore::new();
        let mut runner = AppRunner::new_with_events(
            Config::new()?,
            Box::new(store),
            vec![ctrl('d')],
        );
        runner.run().await?;

        assert_eq!(runner.state().theme.mode, ThemeMode::Dark);

        Ok(())
    }
}
