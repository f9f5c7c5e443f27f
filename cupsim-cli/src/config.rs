/// Config file loading and creation for the cupsim CLI.
///
/// Config lives at ~/.config/cupsim/config.toml.
/// All fields are optional. CLI args override config values.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Deserialize, Default)]
pub struct CupsimConfig {
    pub balls: Option<usize>,
    pub max_diameter: Option<u32>,
    pub trials: Option<usize>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# cupsim configuration
# All values here can be overridden by CLI flags.

# Number of ball/cup pairs in the initial population
# balls = 10000

# Largest diameter in the uniform [1, N] draw
# max_diameter = 10

# Repeat the full simulation this many times and average the estimates
# trials = 1
";

/// Returns the default config path: ~/.config/cupsim/config.toml
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home).join(".config").join("cupsim").join("config.toml")
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> CupsimConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content)
            .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display()))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => CupsimConfig::default(),
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config() -> PathBuf {
    let path = config_path();

    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    // Create parent directories
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| bail(format!("Failed to create directory {}: {e}", parent.display())));
    }

    std::fs::write(&path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parses_all_keys() {
        let cfg: CupsimConfig =
            toml::from_str("balls = 5000\nmax_diameter = 12\ntrials = 3\n").unwrap();
        assert_eq!(cfg.balls, Some(5000));
        assert_eq!(cfg.max_diameter, Some(12));
        assert_eq!(cfg.trials, Some(3));
    }

    #[test]
    fn test_config_allows_missing_keys() {
        let cfg: CupsimConfig = toml::from_str("balls = 100\n").unwrap();
        assert_eq!(cfg.balls, Some(100));
        assert_eq!(cfg.max_diameter, None);
        assert_eq!(cfg.trials, None);
    }

    #[test]
    fn test_default_template_is_valid_toml() {
        let cfg: CupsimConfig = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(cfg.balls, None);
    }
}
