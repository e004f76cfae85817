#![allow(dead_code)]

use clip_relay::domain::ports::SettingsStore;
use clip_relay::{HttpPageAgent, Relay, Settings, TomlSettingsStore};
use tempfile::TempDir;

/// Relay wired to a settings file inside `temp_dir` and an agent whose Google
/// Docs exports go to `export_base`.
pub async fn relay_with_settings(
    temp_dir: &TempDir,
    webhook_url: &str,
    auth_token: &str,
    export_base: &str,
) -> anyhow::Result<Relay<TomlSettingsStore, HttpPageAgent>> {
    let store = TomlSettingsStore::new(temp_dir.path().join("clip-relay.toml"));
    store
        .save(&Settings {
            webhook_url: webhook_url.to_string(),
            auth_token: auth_token.to_string(),
        })
        .await?;
    let agent = HttpPageAgent::new().with_export_base(export_base);
    Ok(Relay::new(store, agent))
}

pub fn article_page(title: &str, body_words: usize) -> String {
    format!(
        r#"<html><head><title>{}</title></head><body>
<header>Site header</header>
<nav><a href="/">Home</a> <a href="/about">About</a></nav>
<article><p>{}</p></article>
<footer>Footer links</footer>
</body></html>"#,
        title,
        vec!["lorem"; body_words].join("   ")
    )
}
