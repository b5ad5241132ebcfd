use log::debug;
use std::path::PathBuf;

/// Overrides the location of the user config file.
/// The config tests point this at a fixture file.
pub const CONFIG_ENV_VAR: &str = "TABTWIN_CONFIG";

/// The config path set in the environment, if any
pub fn config_override() -> Option<PathBuf> {
    let path = std::env::var_os(CONFIG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);

    if let Some(ref path) = path {
        debug!("config path overridden by {}: {:?}", CONFIG_ENV_VAR, path);
    }

    path
}
