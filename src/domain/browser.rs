use crate::domain::models::CommandEntry;
use anyhow::Result;
use async_trait::async_trait;

/// Overlay lifecycle signals sent by the background process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteSignal {
    /// `open-warp`: toggles, opening when closed and closing when open.
    Open,
    /// `close-warp`: close unconditionally.
    Close,
}

/// Boundary to the privileged background process. The palette only ever
/// sends typed requests through this trait; it never sees the transport.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrowserFacade: Send + Sync {
    /// Fetch the current set of open tabs as dynamic catalog entries.
    /// Awaits exactly one response.
    async fn get_tabs(&self) -> Result<Vec<CommandEntry>>;

    /// Relay an activated command to the background process. No response is
    /// awaited; completion means the request left this process.
    async fn relay(&self, action: &str, entry: &CommandEntry, query: &str) -> Result<()>;
}
