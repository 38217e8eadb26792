use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use uvsafe_core::{AppError, Config, ConfigError};

mod cli;
mod handlers;
mod render;

use cli::{Cli, Commands};
use handlers::Output;
use render::Style;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    if let Err(e) = uvsafe_core::init(filter) {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli).await {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{}", err);
            eprintln!("{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String, AppError> {
    let out = Output {
        json: cli.json,
        style: Style {
            color: std::io::stdout().is_terminal(),
        },
    };

    // Offline commands need no configuration
    match &cli.command {
        Commands::Classify { value } => return handlers::classify(*value, out),
        Commands::Icon { description } => return handlers::icon(description.as_deref(), out),
        _ => {}
    }

    let path = match &cli.config {
        Some(p) => p.clone(),
        None => Config::config_path()?,
    };

    // Config commands only read the file and report parse failures themselves
    if let Commands::Config { action } = &cli.command {
        let loaded = Config::load(&path).map(|mut config| {
            config.apply_env_overrides();
            config
        });
        return handlers::config_action(loaded, &path, *action);
    }

    let mut config = Config::load_or_create(&path)?;
    config.apply_env_overrides();
    tracing::debug!("Loaded config from {}", path.display());

    let validation = config.validate();
    if !validation.is_valid() {
        return Err(ConfigError::Invalid(validation.error_summary()).into());
    }
    for warning in &validation.warnings {
        tracing::warn!("Config warning: {}", warning);
    }

    match &cli.command {
        Commands::Now(args) => handlers::now(&config, args, out).await,
        Commands::Forecast(args) => handlers::forecast(&config, args, out).await,
        Commands::Classify { .. } | Commands::Icon { .. } | Commands::Config { .. } => {
            Ok(String::new())
        }
    }
}
