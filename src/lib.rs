pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::HttpPageAgent;
pub use app::Relay;
pub use config::TomlSettingsStore;
pub use crate::core::{dispatcher::PayloadDispatcher, handoff::HandoffSlot, resolver::ContentResolver};
pub use domain::model::{CapturedContent, DispatchOutcome, FollowUp, PageTarget, Payload, Settings};
pub use utils::error::{RelayError, Result};
