use std::path::Path;

use clap::Parser;
use livematch::adapter::inbound::cli::command::{
    Cli, Commands, ConfigCommand, NotifyCommand, PatchCommand,
};
use livematch::adapter::inbound::cli::output::{self, OutputConfig};
use livematch::adapter::inbound::cli::{config, diagnostic, notify, patch};
use livematch::error::{ConfigError, Error, Result};
use livematch::infrastructure::config::settings::Config;
use tracing::debug;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(
        cli.json,
        cli.quiet,
        cli.verbose,
        cli.color.enabled(output::stdout_is_terminal()),
    ));

    let settings = load_config(&cli.config);
    settings.logging.init(cli.verbose);
    debug!(config = %cli.config.display(), "livematch starting");

    if let Err(e) = dispatch(&cli, &settings).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn dispatch(cli: &Cli, settings: &Config) -> Result<()> {
    match &cli.command {
        Commands::Patch(PatchCommand::Apply(args)) => patch::execute_apply(settings, args),
        Commands::Patch(PatchCommand::List) => {
            patch::execute_list();
            Ok(())
        }
        Commands::Patch(PatchCommand::Show(args)) => patch::execute_show(args),
        Commands::Notify(NotifyCommand::Telegram(args)) => {
            notify::execute_telegram(settings, args).await
        }
        Commands::Notify(NotifyCommand::TelegramMessage(args)) => {
            notify::execute_telegram_message(settings, args).await
        }
        Commands::Notify(NotifyCommand::Webhook(args)) => {
            notify::execute_webhook(settings, args).await
        }
        Commands::Config(ConfigCommand::Show) => config::execute_show(&cli.config, settings),
    }
}

/// Load the configuration or exit. Parse errors are rendered against the
/// file content.
fn load_config(path: &Path) -> Config {
    let result = if path.exists() {
        match std::fs::read_to_string(path) {
            Ok(content) => Config::parse_toml(&content).map_err(|e| (e, Some(content))),
            Err(e) => Err((Error::from(ConfigError::ReadFile(e)), None)),
        }
    } else {
        Config::load_or_default(path).map_err(|e| (e, None))
    };

    match result {
        Ok(config) => config,
        Err((err, content)) => {
            let upgraded = content.and_then(|content| {
                diagnostic::toml_diagnostic(&err, &path.display().to_string(), &content)
            });
            match upgraded {
                Some(report) => diagnostic::render(report),
                None => output::error(&err.to_string()),
            }
            std::process::exit(1);
        }
    }
}
