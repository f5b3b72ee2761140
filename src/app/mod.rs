pub mod action;
pub mod catalog;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod filter;
pub mod input;
pub mod r#loop;
pub mod reducer;
pub mod state;
pub mod ui;
