//! log4rs setup for the binary.
//!
//! Configuration is read from `log4rs.yml` (or the file named by
//! `IPKIT_LOG_CONFIG`). Without a config file, logs go to stderr at `info`.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Environment variable naming the log4rs config file.
pub const LOG_CONFIG_ENV: &str = "IPKIT_LOG_CONFIG";

/// Config file used when [`LOG_CONFIG_ENV`] is unset.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

const FALLBACK_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Path of the log4rs config file to load.
pub fn log_config_path() -> String {
    std::env::var(LOG_CONFIG_ENV).unwrap_or_else(|_| DEFAULT_LOG_CONFIG.to_string())
}

/// Initialise the global logger once.
pub fn init_logging() -> Result<(), Box<dyn Error>> {
    let path = log_config_path();
    if Path::new(&path).exists() {
        log4rs::init_file(&path, Default::default())?;
        log::debug!("Logging configured from {path}");
    } else {
        log4rs::init_config(fallback_config()?)?;
        log::debug!("No log config at {path}, logging to stderr");
    }
    Ok(())
}

fn fallback_config() -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_config_builds() {
        let config = fallback_config().expect("fallback config");
        assert_eq!(config.root().level(), LevelFilter::Info);
        assert_eq!(config.appenders().len(), 1);
    }
}
