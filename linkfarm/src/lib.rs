pub mod config;
pub mod host;
pub mod listing;
pub mod shell;
pub mod util;
