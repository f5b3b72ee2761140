//! Warp: a command palette for driving a browser from the terminal.
//!
//! The palette itself is a small Elm-style core (state, reducer, effects)
//! rendered with ratatui. Privileged browser operations are relayed to a
//! background process over a Unix socket.

pub mod app;
pub mod components;
pub mod domain;
pub mod infrastructure;
pub mod theme;
