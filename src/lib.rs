pub mod config;
pub mod game;
pub mod layout;
pub mod layout_constants;
pub mod tui;
pub mod types;

#[cfg(test)]
mod integration_tests;
