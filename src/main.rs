use clap::Parser;
use dish_decider::StartMode;
use dish_decider::core::catalog::{self, Catalog};
use dish_decider::core::config::{self, CliOverrides, DeciderConfig};
use dish_decider::tui;
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "dish-decider", about = "Swipe through dishes and pick where to eat")]
struct Args {
    /// JSON catalog of restaurants and dishes (defaults to the built-in sample)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Start with a group session or jump straight to solo preferences
    #[arg(short, long, default_value_t, value_enum)]
    mode: StartMode,

    /// Config file to use instead of ~/.dish-decider/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config errors are only logged once the logger exists
    let loaded = match args.config {
        Some(ref path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let (file_config, config_error) = match loaded {
        Ok(c) => (c, None),
        Err(e) => (DeciderConfig::default(), Some(e)),
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            catalog: args.catalog.as_deref(),
        },
    );

    // Initialize file logger - writes to dish-decider.log unless configured otherwise
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = LevelFilter::from_str(&resolved.log_level).unwrap_or(LevelFilter::Debug);

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    if let Some(e) = config_error {
        warn!("Ignoring config file: {}", e);
    }
    info!("Dish Decider starting up in {:?} mode", args.mode);

    let catalog = match resolved.catalog_file {
        Some(ref path) => catalog::load_catalog(path).unwrap_or_else(|e| {
            warn!("Falling back to sample catalog: {}", e);
            Catalog::sample()
        }),
        None => Catalog::sample(),
    };

    tui::run(resolved, catalog, args.mode)
}
