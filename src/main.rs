use anyhow::Result;
use clap::Parser;
use email_roi::cli::{Cli, Commands};
use email_roi::commands::{self, CalculateConfig, ExportConfig};
use email_roi::config::{self, RoiConfig};
use email_roi::formatting::{ColorMode, FormattingConfig};

// Main orchestrator function
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let formatting_config = create_formatting_config(cli.plain);

    match cli.command {
        Commands::Calculate {
            inputs,
            format,
            output,
        } => {
            let config = load_config(cli.config.as_deref())?;
            commands::handle_calculate(CalculateConfig {
                inputs: inputs.apply(config.default_inputs()),
                format,
                output,
                options: config.report_options(),
                formatting_config,
                unicode: !cli.plain,
            })
        }
        Commands::Export {
            inputs,
            format,
            output,
        } => {
            let config = load_config(cli.config.as_deref())?;
            commands::handle_export(ExportConfig {
                inputs: inputs.apply(config.default_inputs()),
                format: format.into(),
                output,
                options: config.report_options(),
                formatting_config,
            })
        }
        Commands::Init { force } => commands::init_config(force),
    }
}

// Explicit --config must load; otherwise discover or fall back to defaults
fn load_config(path: Option<&std::path::Path>) -> Result<RoiConfig> {
    match path {
        Some(path) => Ok(config::load_config_from(path)?),
        None => Ok(config::load_config()),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::new(ColorMode::Never)
    } else {
        FormattingConfig::from_env()
    }
}
