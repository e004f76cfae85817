use crate::domain::model::Settings;
use crate::domain::ports::SettingsStore;
use crate::utils::error::{RelayError, Result};
use crate::utils::validation::{validate_no_control_chars, validate_optional_url, Validate};
use async_trait::async_trait;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var regex"));

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_optional_url("webhook_url", &self.webhook_url)?;
        validate_no_control_chars("auth_token", &self.auth_token)?;
        Ok(())
    }
}

impl Settings {
    /// Parse settings TOML, replacing `${VAR}` with environment values.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        let processed = substitute_env_vars(content);
        toml::from_str(&processed)
    }

    /// Trimmed copy, as the options page stores them.
    pub fn normalized(&self) -> Self {
        Self {
            webhook_url: self.webhook_url.trim().to_string(),
            auth_token: self.auth_token.trim().to_string(),
        }
    }
}

/// Unset variables are left as written.
fn substitute_env_vars(content: &str) -> String {
    ENV_VAR
        .replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
}

/// Settings persisted as a small TOML file.
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
}

impl TomlSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SettingsStore for TomlSettingsStore {
    async fn load(&self) -> Result<Settings> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings file at {}, using defaults", self.path.display());
                return Ok(Settings::default());
            }
            Err(e) => return Err(RelayError::Io(e)),
        };

        Settings::from_toml_str(&content).map_err(|e| RelayError::SettingsParse {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        let settings = settings.normalized();
        settings.validate()?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let encoded = toml::to_string(&settings)?;
        tokio::fs::write(&self.path, encoded).await?;
        debug!("Settings saved to {}", self.path.display());
        Ok(())
    }
}
