//! Application directory resolution.
//!
//! Paths follow the XDG Base Directory layout via `directories-next`:
//!
//! - [`get_app_config_dir()`]: e.g. `~/.config/campipe`.
//! - [`get_app_state_dir()`]: e.g. `~/.local/state/Campipe/campipe`, where
//!   relative log file paths are resolved.
//!
//! Both return [`ConfigError::DirectoryUnavailable`] (wrapped in
//! [`CoreError::Config`]) when the home directory cannot be determined.

use crate::error::{ConfigError, CoreError};
use directories_next::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "Campipe";
const APPLICATION: &str = "campipe";

/// Returns the application-specific configuration directory.
pub fn get_app_config_dir() -> Result<PathBuf, CoreError> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            CoreError::Config(ConfigError::DirectoryUnavailable {
                dir_type: "App Config".to_string(),
            })
        })
}

/// Returns the application-specific state directory.
///
/// `directories-next` has no state directory, so on Linux this honours
/// `$XDG_STATE_HOME` (falling back to `~/.local/state`) and elsewhere uses the
/// local data directory.
pub fn get_app_state_dir() -> Result<PathBuf, CoreError> {
    let base = BaseDirs::new()
        .map(|dirs| {
            #[cfg(target_os = "linux")]
            {
                match std::env::var("XDG_STATE_HOME") {
                    Ok(state_home) if !state_home.is_empty() => PathBuf::from(state_home),
                    _ => dirs.home_dir().join(".local/state"),
                }
            }
            #[cfg(not(target_os = "linux"))]
            {
                dirs.data_local_dir().to_path_buf()
            }
        })
        .ok_or_else(|| {
            CoreError::Config(ConfigError::DirectoryUnavailable {
                dir_type: "App State".to_string(),
            })
        })?;

    Ok(base.join(ORGANIZATION).join(APPLICATION))
}
