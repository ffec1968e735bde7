//! Path helpers for the Zellij plugin sandbox.
//!
//! In the sandbox the host filesystem is mounted under `/host`, which points
//! to the cwd of the last focused terminal (usually the user's home).

use std::path::PathBuf;

/// Returns the data directory, `/host/.local/share/zellij/launchpad`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("launchpad")
}

/// Location of the persisted preference document.
#[must_use]
pub fn preferences_file() -> PathBuf {
    get_data_dir().join("preferences.json")
}

/// Rewrites a `~`-prefixed path to its `/host` equivalent.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_maps_to_host_mount() {
        assert_eq!(expand_tilde("~/fallback.toml"), "/host/fallback.toml");
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("/etc/launchpad.toml"), "/etc/launchpad.toml");
        assert_eq!(expand_tilde("a~b"), "a~b");
    }

    #[test]
    fn preferences_live_in_data_dir() {
        assert_eq!(
            preferences_file(),
            PathBuf::from("/host/.local/share/zellij/launchpad/preferences.json")
        );
    }
}
