//! Rolling File Logger
//!
//! log4rs set up with a stderr console appender and a size-triggered
//! rolling file: `<dir>/<name>.log` is active, archives are
//! `<dir>/<name>.1.log` up to `<dir>/<name>.<max_archives>.log`.
//!
//! `tracing` events reach log4rs through tracing's `log` feature, so callers
//! keep using `tracing::info!` and friends.

use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Config;

const FILE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l:<5} {t} - {m}{n}";
const CONSOLE_PATTERN: &str = "{d(%H:%M:%S)} {h({l:<5})} {t} - {m}{n}";

/// Rotation limits
#[derive(Debug, Clone, Copy)]
pub struct RollingConfig {
    /// Size threshold of the active file
    pub max_bytes: u64,
    /// Archived files kept next to the active one
    pub max_archives: u32,
}

impl Default for RollingConfig {
    fn default() -> Self {
        Self {
            max_bytes: 1024 * 1024,
            max_archives: 4,
        }
    }
}

/// Size-rolled file appender writing `<dir>/<name>.log`
pub fn file_appender(dir: &Path, name: &str, cfg: RollingConfig) -> Result<RollingFileAppender> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log dir {}", dir.display()))?;

    let path = dir.join(format!("{name}.log"));
    let archived_pattern = dir.join(format!("{name}.{{}}.log"));
    let archived_pattern = format!("{}", archived_pattern.display());

    let window_roller = FixedWindowRoller::builder()
        .base(1)
        .build(&archived_pattern, cfg.max_archives)?;
    let size_trigger = SizeTrigger::new(cfg.max_bytes);
    let compound_policy = CompoundPolicy::new(Box::new(size_trigger), Box::new(window_roller));

    let appender = RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
        .build(path, Box::new(compound_policy))?;
    Ok(appender)
}

/// `RUST_LOG` as a single level (`debug`, `warn`, ...), `info` otherwise
pub fn level_from_env() -> LevelFilter {
    parse_level(std::env::var("RUST_LOG").ok().as_deref())
}

fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info)
}

/// stderr plus the rolling file, both at `level`
pub fn build_config(dir: &Path, name: &str, cfg: RollingConfig, level: LevelFilter) -> Result<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();
    let file = file_appender(dir, name, cfg)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .appender(Appender::builder().build("file", Box::new(file)))
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(level),
        )?;
    Ok(config)
}

/// Install the global logger with default rotation limits.
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<()> {
    init_logger_with(log_dir, app_name, RollingConfig::default())
}

pub fn init_logger_with(log_dir: impl AsRef<Path>, app_name: &str, cfg: RollingConfig) -> Result<()> {
    let dir = log_dir.as_ref();
    let config = build_config(dir, app_name, cfg, level_from_env())?;
    log4rs::init_config(config)?;

    tracing::info!(dir = %dir.display(), "{} logger initialized", app_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Record};
    use log4rs::append::Append;
    use std::fs;

    fn write_line(appender: &RollingFileAppender, msg: &str) {
        appender
            .append(
                &Record::builder()
                    .args(format_args!("{}", msg))
                    .level(Level::Info)
                    .target("pets")
                    .build(),
            )
            .unwrap();
    }

    #[test]
    fn test_writes_to_active_file() {
        let dir = tempfile::tempdir().unwrap();
        let appender = file_appender(dir.path(), "app", RollingConfig::default()).unwrap();

        write_line(&appender, "hello");
        appender.flush();

        let content = fs::read_to_string(dir.path().join("app.log")).unwrap();
        assert!(content.contains("INFO"));
        assert!(content.contains("pets - hello"));
    }

    #[test]
    fn test_rolls_into_numbered_archives() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = RollingConfig {
            max_bytes: 80,
            max_archives: 2,
        };
        let appender = file_appender(dir.path(), "app", cfg).unwrap();

        // ~55 bytes per line: every second line rolls, the 21st stays active
        for i in 0..21 {
            write_line(&appender, &format!("line number {:04}", i));
        }
        appender.flush();

        assert!(dir.path().join("app.log").exists());
        assert!(dir.path().join("app.1.log").exists());
        assert!(dir.path().join("app.2.log").exists());
        assert!(!dir.path().join("app.3.log").exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 3);
    }

    #[test]
    fn test_creates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("logs");

        file_appender(&nested, "app", RollingConfig::default()).unwrap();

        assert!(nested.is_dir());
    }

    #[test]
    fn test_level_parsing() {
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some(" WARN ")), LevelFilter::Warn);
        assert_eq!(parse_level(Some("pixel_pets_server=trace")), LevelFilter::Info);
        assert_eq!(parse_level(None), LevelFilter::Info);
    }

    #[test]
    fn test_build_config_registers_both_appenders() {
        let dir = tempfile::tempdir().unwrap();
        let config = build_config(dir.path(), "app", RollingConfig::default(), LevelFilter::Warn).unwrap();

        let names: Vec<&str> = config.appenders().iter().map(|a| a.name()).collect();
        assert_eq!(names, ["stderr", "file"]);
        assert_eq!(config.root().level(), LevelFilter::Warn);
    }
}
