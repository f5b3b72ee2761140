use crate::domain::models::CommandEntry;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Visibility ---
    ToggleOverlay, // `open-warp` signal or the local toggle key
    CloseOverlay,  // `close-warp` signal, Escape, click outside the palette
    FocusQuery,    // deferred focus after the overlay opens

    // --- Query input ---
    QueryInput(crossterm::event::KeyEvent),

    // --- Selection cursor ---
    CursorNext,
    CursorPrev,
    CursorHome,
    CursorEnd,
    CursorSet(usize), // pointer hover over a visible row

    // --- Activation ---
    Activate,             // Enter on the current cursor
    ActivateIndex(usize), // pointer click on a visible row

    // --- Async results ---
    TabsLoaded(Vec<CommandEntry>), // dynamic entries arrived from the background
}
