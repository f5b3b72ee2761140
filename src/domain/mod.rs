pub mod browser;
pub mod models;
