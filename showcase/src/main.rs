use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use showcase::{paths, Config, Error, Result};
use simplelog::{ConfigBuilder, WriteLogger};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config_path = paths::config_file();
    let config = match &config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    init_logging(&config)?;
    match &config_path {
        Some(path) if path.exists() => log::info!("loaded config from {}", path.display()),
        _ => log::info!("using default config"),
    }
    log::debug!("{config:?}");

    let result = showcase::app::run(&config);
    if let Err(e) = &result {
        log::error!("{e}");
    }
    result
}

fn init_logging(config: &Config) -> Result<()> {
    let path = match paths::cache_dir() {
        Some(cache) => {
            fs::create_dir_all(&cache).map_err(|source| Error::LogFile {
                path: cache.clone(),
                source,
            })?;
            paths::rotate_logs(&cache);
            paths::log_file().unwrap_or_else(|| cache.join("latest.log"))
        }
        None => PathBuf::from(paths::FALLBACK_LOG_FILE),
    };

    let log_file = File::create(&path).map_err(|source| Error::LogFile {
        path: path.clone(),
        source,
    })?;

    let log_config = ConfigBuilder::new()
        .set_target_level(simplelog::LevelFilter::Error)
        .set_thread_level(simplelog::LevelFilter::Off)
        .build();
    WriteLogger::init(config.level_filter()?, log_config, log_file)?;
    Ok(())
}
