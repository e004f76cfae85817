// Adapters layer: concrete implementations of the domain ports.

pub mod page_agent;

pub use page_agent::HttpPageAgent;
