#![forbid(unsafe_code)]

pub mod bridge;
pub mod config;
pub mod error;
pub mod reader;
pub mod session;
pub mod switch;
pub mod teardown;
pub mod terminal;
pub mod tokenizer;
pub mod view;

// Re-export the entry points so hosts can just use `linkfarm_core::run`
pub use bridge::{BridgeOutcome, BridgeReport, run};
pub use config::BridgeConfig;
pub use error::BridgeError;
pub use session::{Session, SessionHost};
pub use view::{LinkEntry, Manifest, RecordOutcome};
