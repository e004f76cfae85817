use crate::domain::model::PageTarget;
use crate::utils::error::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "clip-relay")]
#[command(about = "Send page or Google Docs content to a webhook")]
pub struct CliConfig {
    #[arg(long, global = true, default_value = "./clip-relay.toml")]
    pub settings: PathBuf,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Context-menu flow: resolve the page and deliver it
    Send {
        #[command(flatten)]
        page: PageArgs,

        #[arg(long, default_value = "", help = "Selection reported by the menu click")]
        selection: String,
    },
    /// Shortcut flow: capture the selection, then show and optionally send it
    Shortcut {
        #[command(flatten)]
        page: PageArgs,

        #[arg(long, default_value = "", help = "Text selected in the page")]
        page_selection: String,

        #[arg(long, help = "Deliver the captured content after showing it")]
        send: bool,
    },
    /// Read or change the stored webhook settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum SettingsAction {
    Show,
    Set {
        #[arg(long, default_value = "")]
        webhook_url: String,

        #[arg(long, default_value = "")]
        auth_token: String,
    },
}

#[derive(Debug, Clone, Args)]
pub struct PageArgs {
    #[arg(long)]
    pub url: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long, help = "Saved HTML of the page; fetched from --url when absent")]
    pub html_file: Option<PathBuf>,
}

impl PageArgs {
    pub async fn to_target(&self, selection: &str) -> Result<PageTarget> {
        let mut target = PageTarget::new(self.url.clone()).with_selection(selection);
        if let Some(title) = &self.title {
            target = target.with_title(title.clone());
        }
        if let Some(path) = &self.html_file {
            target = target.with_html(tokio::fs::read_to_string(path).await?);
        }
        Ok(target)
    }
}
