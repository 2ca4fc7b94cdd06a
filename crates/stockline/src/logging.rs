//! File-backed tracing setup.
//!
//! Stdout belongs to the dashboard, so log output goes to
//! `~/.local/state/stockline/stockline.log`. The filter comes from
//! `STOCKLINE_LOG` when set, otherwise from the `[log] filter` config key.

use std::fs;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "STOCKLINE_LOG";
const LOG_FILE: &str = "stockline.log";

fn log_dir() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".local").join("state").join("stockline"))
}

fn env_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. The returned guard flushes pending
/// lines when dropped and must outlive the event loop.
pub fn init_logging(configured_filter: &str) -> Option<WorkerGuard> {
    let dir = log_dir()?;
    if fs::create_dir_all(&dir).is_err() {
        return None;
    }

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(configured_filter))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;
    Some(guard)
}

#[cfg(test)]
mod tests {
    use super::{env_filter, LOG_ENV};
    use crate::test_utils::{env_lock, EnvVarGuard};

    #[test]
    fn env_filter_prefers_environment() {
        let _guard = env_lock();
        let _env = EnvVarGuard::set(LOG_ENV, "stockline=trace".to_string());

        assert_eq!(env_filter("warn").to_string(), "stockline=trace");
    }

    #[test]
    fn env_filter_falls_back_to_config() {
        let _guard = env_lock();
        let _env = EnvVarGuard::unset(LOG_ENV);

        assert_eq!(env_filter("debug").to_string(), "debug");
    }

    #[test]
    fn env_filter_falls_back_to_info_on_bad_directive() {
        let _guard = env_lock();
        let _env = EnvVarGuard::unset(LOG_ENV);

        assert_eq!(env_filter("[[").to_string(), "info");
    }
}
