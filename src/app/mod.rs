pub mod triggers;

pub use triggers::Relay;
