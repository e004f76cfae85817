use clap::Parser;
use clip_relay::config::cli::{Command, SettingsAction};
use clip_relay::domain::model::{FollowUp, MENU_ID, SEND_SELECTION_COMMAND};
use clip_relay::domain::ports::SettingsStore;
use clip_relay::utils::error::{ErrorCategory, RelayError};
use clip_relay::utils::logger;
use clip_relay::{CliConfig, HttpPageAgent, Relay, Settings, TomlSettingsStore};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let store = TomlSettingsStore::new(config.settings.clone());
    let relay = Relay::new(store, HttpPageAgent::new());

    if let Err(e) = run(&relay, config.command).await {
        tracing::error!("❌ {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        let exit_code = match e.category() {
            ErrorCategory::Configuration => 1,
            _ => 2,
        };
        std::process::exit(exit_code);
    }
}

async fn run(
    relay: &Relay<TomlSettingsStore, HttpPageAgent>,
    command: Command,
) -> Result<(), RelayError> {
    match command {
        Command::Send { page, selection } => {
            let target = page.to_target("").await?;
            relay.on_context_menu(MENU_ID, &target, &selection).await;
        }
        Command::Shortcut {
            page,
            page_selection,
            send,
        } => {
            let target = page.to_target(&page_selection).await?;
            if relay.on_command(SEND_SELECTION_COMMAND, &target).await == Some(FollowUp::OpenComposer)
            {
                match relay.take_captured().await {
                    Some(captured) => {
                        println!("{}", serde_json::to_string_pretty(&captured)?);
                        if send {
                            let outcome = relay.send_captured(&captured).await?;
                            println!("📤 {:?}", outcome);
                        }
                    }
                    None => println!("Nothing captured"),
                }
            }
        }
        Command::Settings { action } => {
            let store = relay.settings_store();
            match action {
                SettingsAction::Show => {
                    let settings = store.load().await?;
                    println!("settings file: {}", store.path().display());
                    println!("webhook_url:   {}", settings.webhook_url);
                    println!(
                        "auth_token:    {}",
                        if settings.auth_token.is_empty() {
                            "(none)"
                        } else {
                            "********"
                        }
                    );
                }
                SettingsAction::Set {
                    webhook_url,
                    auth_token,
                } => {
                    store
                        .save(&Settings {
                            webhook_url,
                            auth_token,
                        })
                        .await?;
                    println!("Saved.");
                }
            }
        }
    }
    Ok(())
}
