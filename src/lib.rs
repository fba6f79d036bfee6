pub mod api;
pub mod board;
pub mod commands;
pub mod config;
pub mod models;
pub mod tui;
pub mod utils;

/// ASCII art logo for slate CLI
pub const LOGO: &str = "\
   ┌─┐┬  ┌─┐┌┬┐┌─┐
   └─┐│  ├─┤ │ ├┤
   └─┘┴─┘┴ ┴ ┴ └─┘";
