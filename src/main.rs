//=========================================================================
// Sam and Sadie - Binary Entry Point
//
// Usage:
//   sam-and-sadie [CONFIG.toml]
//
// Without an argument `level.toml` in the working directory is used if
// present, otherwise the stock level. Log level follows RUST_LOG
// (default: info).
//
//=========================================================================

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::info;

use sam_and_sadie::config::LevelConfig;
use sam_and_sadie::EngineBuilder;

const DEFAULT_CONFIG: &str = "level.toml";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config(env::args_os().nth(1).map(PathBuf::from))?;

    EngineBuilder::new()
        .with_config(config)
        .build()
        .context("Failed to build level")?
        .run()
        .context("Engine stopped with an error")?;

    Ok(())
}

fn load_config(explicit: Option<PathBuf>) -> anyhow::Result<LevelConfig> {
    let path = match explicit {
        Some(path) => path,
        None if Path::new(DEFAULT_CONFIG).exists() => PathBuf::from(DEFAULT_CONFIG),
        None => {
            info!("No configuration file, using the stock level");
            return Ok(LevelConfig::default());
        }
    };

    info!("Loading configuration from {}", path.display());
    LevelConfig::load(&path).with_context(|| format!("Invalid configuration in {}", path.display()))
}
