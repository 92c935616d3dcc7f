use log::{info, LevelFilter};
use std::path::Path;

// For file-based logging with rotation
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::error::{Error, Result};

/// Environment variable that overrides the configured level
pub const LOG_ENV: &str = "PERCEPTIVE_LOG";

/// Initialize a rotating file logger in `log_dir` with timestamp, level and
/// module path. `PERCEPTIVE_LOG` overrides `level` when set to a valid level.
pub fn init_logger<P: AsRef<Path>>(log_dir: P, level: LevelFilter) -> Result<()> {
    let log_dir = log_dir.as_ref();
    std::fs::create_dir_all(log_dir)?;

    let log_file_path = log_dir.join("perceptive.log");
    let archived_logs_pattern = format!("{}/perceptive.{{}}.log", log_dir.display());

    // Rotate at 10MB, keep 5 archives
    let file_trigger = SizeTrigger::new(10 * 1024 * 1024);
    let file_roller = FixedWindowRoller::builder()
        .build(&archived_logs_pattern, 5)
        .map_err(|e| Error::Configuration(format!("Failed to create log roller: {}", e)))?;
    let compound_policy = CompoundPolicy::new(Box::new(file_trigger), Box::new(file_roller));

    let rolling_file = RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] [{M}:{L}] - {m}{n}",
        )))
        .build(&log_file_path, Box::new(compound_policy))?;

    let level = resolve_level(std::env::var(LOG_ENV).ok().as_deref(), level);

    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(rolling_file)))
        .build(Root::builder().appender("file").build(level))
        .map_err(|e| Error::Configuration(format!("Failed to build log config: {}", e)))?;

    log4rs::init_config(config)
        .map_err(|e| Error::Configuration(format!("Failed to initialize log4rs: {}", e)))?;

    info!("Logging to file: {}", log_file_path.display());
    Ok(())
}

fn resolve_level(env_value: Option<&str>, fallback: LevelFilter) -> LevelFilter {
    env_value
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_overrides_level() {
        assert_eq!(
            resolve_level(Some("trace"), LevelFilter::Info),
            LevelFilter::Trace
        );
        assert_eq!(
            resolve_level(Some("nonsense"), LevelFilter::Warn),
            LevelFilter::Warn
        );
        assert_eq!(resolve_level(None, LevelFilter::Debug), LevelFilter::Debug);
    }
}
