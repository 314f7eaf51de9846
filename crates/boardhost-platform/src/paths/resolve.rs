use std::path::PathBuf;

use boardhost_common::PlatformError;

const APP_NAME: &str = "boardhost";

/// Returns the platform-specific configuration directory.
///
/// - Windows: `%APPDATA%\boardhost`
/// - Linux: `$XDG_CONFIG_HOME/boardhost` (defaults to `~/.config/boardhost`)
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))
}

/// Returns the platform-specific data directory.
///
/// - Windows: `%APPDATA%\boardhost`
/// - Linux: `$XDG_DATA_HOME/boardhost` (defaults to `~/.local/share/boardhost`)
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    dirs::data_dir()
        .map(|p| p.join(APP_NAME))
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))
}

/// `data_dir()/logs`
pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

/// `log_dir()/crash-reports`
pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(log_dir()?.join("crash-reports"))
}
