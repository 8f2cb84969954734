use std::path::PathBuf;

/// Fetch the home directory on unix systems via the $HOME env variable.
///
/// # Panics
///
/// Panics if $HOME variable is not set.
#[must_use]
pub fn get_home_dir() -> PathBuf {
    let home = std::env::var("HOME").expect("$HOME not found");
    PathBuf::from(home)
}

/// Fetch the config directory for locating any user set srok configuration.
///
/// Defaults to `$XDG_CONFIG_HOME` or `$HOME/.config/srok` if `$XDG_CONFIG_HOME` cannot be found.
#[must_use]
pub fn get_config_dir() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map_or_else(|_| get_home_dir().join(".config"), PathBuf::from);
    config_dir.join("srok")
}
