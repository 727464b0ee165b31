//! Client configuration resolved from flags, environment and platform dirs.

use std::path::PathBuf;

use runtime::RuntimeConfig;

/// Platform data directory for the file repository.
///
/// - Linux: `~/.local/share/hamster` (or `$XDG_DATA_HOME/hamster`)
/// - macOS: `~/Library/Application Support/hamster`
/// - Windows: `%APPDATA%\hamster`
/// - Fallback: `./hamster_data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "hamster")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./hamster_data"))
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub runtime: RuntimeConfig,
    /// Write a log file here in addition to stderr.
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Environment-driven runtime settings, always backed by a data directory.
    ///
    /// `data_dir` and `log_dir` override `HAMSTER_DATA_DIR`/`HAMSTER_LOG_DIR`.
    pub fn resolve(data_dir_flag: Option<PathBuf>, log_dir_flag: Option<PathBuf>) -> Self {
        let mut runtime = RuntimeConfig::from_env();
        runtime.data_dir = data_dir_flag
            .or(runtime.data_dir)
            .or_else(|| Some(data_dir()));

        let log_dir =
            log_dir_flag.or_else(|| std::env::var_os("HAMSTER_LOG_DIR").map(PathBuf::from));

        Self { runtime, log_dir }
    }
}
