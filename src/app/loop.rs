use crate::app::{
    action::Action, command::Command, dispatch, input::map_event_to_action, reducer,
    state::AppState, ui,
};
use crate::domain::browser::{BrowserFacade, PaletteSignal};
use crate::theme::Theme;
use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    facade: Arc<dyn BrowserFacade>,
    signals: mpsc::Receiver<PaletteSignal>,
) -> Result<()> {
    let (event_tx, event_rx) = mpsc::channel::<std::io::Result<Event>>(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(err) => {
                let _ = event_tx.blocking_send(Err(err));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, facade, event_rx, signals).await
}

/// The core loop with an injected event stream, so tests can drive it with a
/// scripted channel and a `TestBackend`.
pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    facade: Arc<dyn BrowserFacade>,
    mut event_rx: mpsc::Receiver<std::io::Result<Event>>,
    mut signals: mpsc::Receiver<PaletteSignal>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel::<Action>(100);
    let mut tick = tokio::time::interval(TICK_RATE);
    let theme = Theme::from_palette_type(app_state.config.theme);

    // Forward background visibility signals into the action stream. The
    // subscription lives exactly as long as this loop.
    let signal_tx = action_tx.clone();
    let signal_task = tokio::spawn(async move {
        while let Some(signal) = signals.recv().await {
            let action = match signal {
                PaletteSignal::Open => Action::ToggleOverlay,
                PaletteSignal::Close => Action::CloseOverlay,
            };
            if signal_tx.send(action).await.is_err() {
                break;
            }
        }
    });

    // One-shot catalog augmentation at startup.
    dispatch::handle_command(Command::FetchTabs, facade.clone(), action_tx.clone());

    let result = loop {
        if let Err(err) = terminal.draw(|f| ui::draw(f, &mut app_state, &theme)) {
            break Err(err.into());
        }

        let action = tokio::select! {
            _ = tick.tick() => Some(Action::Tick),
            Some(received) = event_rx.recv() => {
                let event = match received {
                    Ok(event) => event,
                    Err(err) => break Err(err.into()),
                };
                let size = match terminal.size() {
                    Ok(size) => size,
                    Err(err) => break Err(err.into()),
                };
                map_event_to_action(event, &app_state, size)
            },
            Some(action) = action_rx.recv() => Some(action),
        };

        if let Some(action) = action {
            if action == Action::Quit {
                break Ok(());
            }
            let command = reducer::update(&mut app_state, action);
            if app_state.should_quit {
                break Ok(());
            }
            if let Some(command) = command {
                dispatch::handle_command(command, facade.clone(), action_tx.clone());
            }
        }
    };

    signal_task.abort();
    result
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod loop_tests;
