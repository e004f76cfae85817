#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_settings;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_settings::TomlSettingsStore;
