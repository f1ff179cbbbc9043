//! Finance tracker operator CLI
//!
//! ```sh
//! # Validate the config file (~/.config/finance-tracker/config.toml)
//! finance-cli check
//!
//! # Compute the page a listing would serve
//! finance-cli paginate --total 10 --size 5 --offset 8
//!
//! # Print the health report
//! finance-cli --config /etc/finance-tracker/config.toml health
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use finance_tracker::config::LoggingConfig;
use finance_tracker::logging::init_tracing;
use finance_tracker::{
    default_config_path, AppConfig, AppError, HealthCheckup, PaginationValidator,
    RuntimeEnvironment,
};

/// Pagination and health tooling for the finance tracker.
#[derive(Parser, Debug)]
#[command(name = "finance-cli", version, about = "Finance tracker operator tools")]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "FINANCE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the configuration file and print the effective settings.
    Check,
    /// Compute sanitized page bounds for a listing.
    Paginate {
        /// Records matching the query before pagination.
        #[arg(long, allow_negative_numbers = true)]
        total: i64,
        /// Requested page size.
        #[arg(long, allow_negative_numbers = true)]
        size: Option<i64>,
        /// Requested offset.
        #[arg(long, allow_negative_numbers = true)]
        offset: Option<i64>,
    },
    /// Print the health report as JSON.
    Health,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(default_config_path);

    let loaded = AppConfig::load(&config_path);

    let mut logging = match loaded {
        Ok(ref cfg) => cfg.logging.clone(),
        Err(_) => LoggingConfig::default(),
    };
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    init_tracing(&logging);
    if let Some(ref level) = cli.log_level {
        info!("CLI override: log_level = {}", level);
    }

    let mut config = match loaded {
        Ok(cfg) => {
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            if matches!(cli.command, Command::Check) {
                return Err(e.into());
            }
            error!("Using default configuration.");
            AppConfig::default()
        }
    };
    config.logging = logging;

    let pagination = config.pagination_config()?;

    match cli.command {
        Command::Check => {
            println!("Configuration is valid");
            println!("   Config file : {}", config_path.display());
            println!("   Address     : {}", config.server.address());
            println!(
                "   Page size   : default {}, max {}",
                pagination.default_page_size(),
                pagination.max_page_size()
            );
            println!("   Log level   : {}", config.logging.level);
        }
        Command::Paginate {
            total,
            size,
            offset,
        } => {
            let validator = PaginationValidator::new(pagination);
            let result = validator.validate(size, offset, total);
            if result.is_empty() {
                info!("Empty page for total={} offset={:?}", total, offset);
            }
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Health => {
            let checkup = HealthCheckup::new(RuntimeEnvironment::detect(), pagination);
            println!("{}", serde_json::to_string_pretty(&checkup.report())?);
        }
    }

    Ok(())
}
