//! Configuration file management for boxplan.
//!
//! Provides a TOML-based config file at `~/.config/boxplan/config.toml`
//! and a catalog-path resolution chain: CLI flag > env var > config file.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Environment variable naming the catalog JSON file.
pub const CATALOG_ENV_VAR: &str = "BOXPLAN_CATALOG";

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    pub catalog: CatalogSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogSection {
    /// Path to the catalog JSON file.
    pub path: String,
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the boxplan config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/boxplan` or
/// `~/.config/boxplan`, regardless of platform.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("boxplan");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("boxplan")
}

/// Return the path to the boxplan config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns an error if it does not exist.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents).context("failed to parse config file")?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;
    Ok(())
}

// -----------------------------------------------------------------------
// Resolution
// -----------------------------------------------------------------------

/// Resolve the catalog file path: CLI flag > `BOXPLAN_CATALOG` env var >
/// config file. Errors with setup guidance when none is available.
pub fn resolve_catalog_path(flag: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(PathBuf::from(path));
    }
    if let Ok(path) = std::env::var(CATALOG_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    if let Ok(config) = load_config() {
        return Ok(PathBuf::from(config.catalog.path));
    }
    bail!(
        "no catalog configured: pass --catalog, set {CATALOG_ENV_VAR}, \
         or run `boxplan init <catalog>` first"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_takes_precedence() {
        let path =
            resolve_catalog_path(Some("/tmp/flagged.json")).expect("flag always resolves");
        assert_eq!(path, PathBuf::from("/tmp/flagged.json"));
    }

    #[test]
    fn env_var_is_used_when_no_flag() {
        // SAFETY: test-only; env var manipulation is safe in single-threaded tests.
        unsafe { std::env::set_var(CATALOG_ENV_VAR, "/tmp/from-env.json") };
        let path = resolve_catalog_path(None).expect("env var should resolve");
        unsafe { std::env::remove_var(CATALOG_ENV_VAR) };
        assert_eq!(path, PathBuf::from("/tmp/from-env.json"));
    }

    #[test]
    fn config_file_round_trips_through_toml() {
        let config = ConfigFile {
            catalog: CatalogSection {
                path: "/data/catalog.json".to_string(),
            },
        };
        let text = toml::to_string_pretty(&config).expect("serialize");
        let parsed: ConfigFile = toml::from_str(&text).expect("parse");
        assert_eq!(parsed.catalog.path, "/data/catalog.json");
    }
}
