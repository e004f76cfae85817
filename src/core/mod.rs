pub mod dispatcher;
pub mod extract;
pub mod gdocs;
pub mod handoff;
pub mod resolver;

pub use crate::domain::model::{CapturedContent, DispatchOutcome, Payload, PageTarget, Settings};
pub use crate::domain::ports::{PageAgent, SettingsStore};
pub use crate::utils::error::Result;
