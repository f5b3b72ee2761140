use crate::domain::models::{CommandEntry, LocalAction};

/// Effects the reducer asks the runtime to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// One-shot catalog augmentation; issued once at mount.
    FetchTabs,
    /// Forward an activated command to the background process.
    /// Fire-and-forget: no response awaited, failures logged only.
    Relay {
        action: String,
        entry: CommandEntry,
        query: String,
    },
    /// Run a local action in-process with the query as argument.
    RunLocal {
        action: LocalAction,
        query: String,
    },
    /// Focus the query field shortly after the overlay opens.
    ScheduleFocus,
}
