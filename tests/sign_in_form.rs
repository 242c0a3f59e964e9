//! Password visibility and submit flow through the runtime.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use tourdesk::core::state::form::{IconVariant, Visibility};
use tourdesk::domain::preferences::MemoryPreferenceStore;
use tourdesk::infrastructure::config::Config;
use tourdesk::infrastructure::tui::Event;
use tourdesk::integration::app_runner::AppRunner;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn type_text(text: &str) -> Vec<Event> {
    text.chars().map(|c| key(KeyCode::Char(c))).collect()
}

async fn run_with(events: Vec<Event>) -> Result<AppRunner> {
    let mut runner = AppRunner::new_with_events(
        Config::new()?,
        Box::new(MemoryPreferenceStore::new()),
        events,
    );
    runner.run().await?;
    Ok(runner)
}

#[tokio::test]
async fn password_starts_hidden_every_session() -> Result<()> {
    let runner = run_with(vec![]).await?;
    let form = &runner.state().form;

    assert_eq!(form.visibility, Visibility::Hidden);
    assert_eq!(form.icon(), Some(IconVariant::EyeClosed));
    assert!(form.is_masked(1));

    Ok(())
}

#[tokio::test]
async fn reveal_toggle_keeps_icon_in_sync() -> Result<()> {
    let mut events = type_text("ann@example.com");
    events.push(key(KeyCode::Tab));
    events.extend(type_text("hunter2"));
    events.push(ctrl('r'));

    let runner = run_with(events).await?;
    let form = &runner.state().form;

    assert_eq!(form.visibility, Visibility::Visible);
    assert_eq!(form.icon(), Some(IconVariant::EyeOpen));
    assert!(!form.is_masked(1));
    assert_eq!(form.fields[1].value, "hunter2");

    Ok(())
}

#[tokio::test]
async fn second_toggle_masks_again() -> Result<()> {
    let runner = run_with(vec![ctrl('r'), ctrl('r')]).await?;
    let form = &runner.state().form;

    assert_eq!(form.visibility, Visibility::Hidden);
    assert_eq!(form.icon(), Some(IconVariant::EyeClosed));
    assert!(form.is_masked(1));

    Ok(())
}

#[tokio::test]
async fn tab_cycles_focus_and_typing_follows() -> Result<()> {
    let mut events = type_text("ann");
    events.push(key(KeyCode::Tab));
    events.extend(type_text("pw"));
    // Terminals report shift-tab as BackTab with the shift modifier set.
    events.push(Event::Key(KeyEvent::new(
        KeyCode::BackTab,
        KeyModifiers::SHIFT,
    )));
    events.extend(type_text("@example.com"));

    let runner = run_with(events).await?;
    let form = &runner.state().form;

    assert_eq!(form.fields[0].value, "ann@example.com");
    assert_eq!(form.fields[1].value, "pw");

    Ok(())
}

#[tokio::test]
async fn submit_with_empty_form_reports_first_missing_field() -> Result<()> {
    let runner = run_with(vec![key(KeyCode::Enter)]).await?;

    assert_eq!(
        runner.state().system.status_message.as_deref(),
        Some("Email is required")
    );

    Ok(())
}

#[tokio::test]
async fn submit_with_valid_form_greets_the_user() -> Result<()> {
    let mut events = type_text("ann@example.com");
    events.push(key(KeyCode::Tab));
    events.extend(type_text("hunter2"));
    events.push(key(KeyCode::Enter));

    let runner = run_with(events).await?;

    assert_eq!(
        runner.state().system.status_message.as_deref(),
        Some("Signing in as ann@example.com...")
    );

    Ok(())
}
