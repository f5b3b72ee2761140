use crate::app::{action::Action, catalog, command::Command};
use crate::domain::browser::BrowserFacade;
use crate::domain::models::LocalAction;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::warn;

const FOCUS_DELAY: Duration = Duration::from_millis(100);

/// Execute the effect a reducer step asked for. Remote work is spawned so the
/// render loop never blocks on the socket; local callbacks run inline.
pub fn handle_command(
    command: Command,
    facade: Arc<dyn BrowserFacade>,
    action_tx: mpsc::Sender<Action>,
) {
    match command {
        Command::FetchTabs => {
            tokio::spawn(async move {
                match facade.get_tabs().await {
                    Ok(tabs) => {
                        let _ = action_tx.send(Action::TabsLoaded(tabs)).await;
                    }
                    Err(error) => {
                        // The catalog stays at its built-in entries.
                        warn!(%error, "tab augmentation failed");
                    }
                }
            });
        }
        Command::Relay {
            action,
            entry,
            query,
        } => {
            tokio::spawn(async move {
                if let Err(error) = facade.relay(&action, &entry, &query).await {
                    // Fire-and-forget: no retry, and the optimistic toast has
                    // already been shown.
                    warn!(%action, %error, "relay to background process failed");
                }
            });
        }
        Command::RunLocal { action, query } => run_local(action, &query),
        Command::ScheduleFocus => {
            tokio::spawn(async move {
                tokio::time::sleep(FOCUS_DELAY).await;
                let _ = action_tx.send(Action::FocusQuery).await;
            });
        }
    }
}

fn run_local(action: LocalAction, query: &str) {
    match action {
        LocalAction::WebSearch => {
            if query.is_empty() {
                return;
            }
            let url = catalog::search_url(query);
            if cfg!(test) {
                return;
            }
            if let Err(error) = open::that_detached(&url) {
                warn!(%url, %error, "failed to hand the search off to a browser");
            }
        }
    }
}
