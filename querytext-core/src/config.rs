//! User configuration stored as YAML.
//!
//! # Storage layout
//!
//! ```text
//! ~/.querytext/
//!   config.yaml   (mode 0600, written by `querytext config init`)
//! ```
//!
//! # API pattern
//!
//! Every function touching the filesystem has two forms:
//! - `fn_at(home: &Path, …)`: explicit home; used in tests with `TempDir`
//! - `fn(…)`: derives home from `dirs::home_dir()`, delegates to `_at`
//!
//! Tests must NEVER call the no-arg wrappers; always use `_at`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Current on-disk config schema version.
pub const CONFIG_VERSION: u32 = 1;

/// Default `EnvFilter` directive when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// ---------------------------------------------------------------------------
// RenderConfig
// ---------------------------------------------------------------------------

/// Rendering and CLI preferences. Every field has a default so partial files load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub version: u32,
    /// Record byte offsets of tracked literals while rendering.
    pub track_substitutions: bool,
    /// Colour tracked literals in terminal output.
    pub highlight: bool,
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            track_substitutions: false,
            highlight: false,
            log_filter: None,
        }
    }
}

impl RenderConfig {
    /// The effective log filter directive.
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

// ---------------------------------------------------------------------------
// 1. Paths
// ---------------------------------------------------------------------------

/// `<home>/.querytext/config.yaml`: pure, no I/O.
pub fn config_path_at(home: &Path) -> PathBuf {
    home.join(".querytext").join("config.yaml")
}

// ---------------------------------------------------------------------------
// 2. Load
// ---------------------------------------------------------------------------

/// Load `<home>/.querytext/config.yaml`.
///
/// A missing file yields [`RenderConfig::default`]; malformed YAML is
/// `ConfigError::Parse` with the path attached.
pub fn load_at(home: &Path) -> Result<RenderConfig, ConfigError> {
    let path = config_path_at(home);
    if !path.exists() {
        return Ok(RenderConfig::default());
    }
    let contents = std::fs::read_to_string(&path)?;
    if contents.trim().is_empty() {
        return Ok(RenderConfig::default());
    }
    serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse { path, source: e })
}

/// `load_at` convenience wrapper.
pub fn load() -> Result<RenderConfig, ConfigError> {
    load_at(&home()?)
}

// ---------------------------------------------------------------------------
// 3. Save (atomic)
// ---------------------------------------------------------------------------

/// Atomically save `config` to `<home>/.querytext/config.yaml`.
///
/// Write flow: serialize → `.yaml.tmp` sibling → `chmod 0600` → `rename`.
pub fn save_at(home: &Path, config: &RenderConfig) -> Result<PathBuf, ConfigError> {
    let path = config_path_at(home);
    if let Some(dir) = path.parent() {
        if !dir.exists() {
            std::fs::create_dir_all(dir)?;
            set_dir_permissions(dir)?;
        }
    }
    let tmp_path = path.with_file_name("config.yaml.tmp");

    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(&tmp_path, yaml)?;
    set_file_permissions(&tmp_path)?;
    std::fs::rename(&tmp_path, &path)?;
    Ok(path)
}

/// `save_at` convenience wrapper.
pub fn save(config: &RenderConfig) -> Result<PathBuf, ConfigError> {
    save_at(&home()?, config)
}

// ---------------------------------------------------------------------------
// 4. Init
// ---------------------------------------------------------------------------

/// Write a default config if none exists.
///
/// Idempotent: an existing file is loaded and returned unchanged. The `bool`
/// is `true` when a new file was written.
pub fn init_at(home: &Path) -> Result<(RenderConfig, bool), ConfigError> {
    if config_path_at(home).exists() {
        return Ok((load_at(home)?, false));
    }
    let config = RenderConfig::default();
    save_at(home, &config)?;
    Ok((config, true))
}

/// `init_at` convenience wrapper.
pub fn init() -> Result<(RenderConfig, bool), ConfigError> {
    init_at(&home()?)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn home() -> Result<PathBuf, ConfigError> {
    dirs::home_dir().ok_or(ConfigError::HomeNotFound)
}

#[cfg(unix)]
fn set_dir_permissions(path: &Path) -> Result<(), ConfigError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o700))?;
    Ok(())
}
#[cfg(not(unix))]
fn set_dir_permissions(_path: &Path) -> Result<(), ConfigError> {
    Ok(())
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> Result<(), ConfigError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    Ok(())
}
#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> Result<(), ConfigError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_home() -> TempDir {
        TempDir::new().expect("tempdir")
    }

    #[test]
    fn config_path_is_correct() {
        let home = make_home();
        let path = config_path_at(home.path());
        assert!(path.ends_with(".querytext/config.yaml"));
    }

    #[test]
    fn missing_config_loads_defaults() {
        let home = make_home();
        let config = load_at(home.path()).expect("load");
        assert_eq!(config, RenderConfig::default());
        assert!(!config.track_substitutions);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let home = make_home();
        let config = RenderConfig {
            track_substitutions: true,
            highlight: true,
            log_filter: Some("querytext_renderer=trace".to_string()),
            ..RenderConfig::default()
        };
        save_at(home.path(), &config).expect("save");
        let loaded = load_at(home.path()).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn atomic_write_cleans_up_tmp() {
        let home = make_home();
        let path = save_at(home.path(), &RenderConfig::default()).expect("save");
        let tmp = path.with_file_name("config.yaml.tmp");
        assert!(!tmp.exists(), ".tmp must be gone after successful save");
    }

    #[test]
    fn config_dir_created_with_perms() {
        let home = make_home();
        save_at(home.path(), &RenderConfig::default()).expect("save");
        let dir = home.path().join(".querytext");
        assert!(dir.exists());
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&dir).unwrap().permissions().mode() & 0o777;
            assert_eq!(mode, 0o700);
        }
    }

    #[test]
    fn log_filter_falls_back_to_default() {
        assert_eq!(RenderConfig::default().log_filter(), DEFAULT_LOG_FILTER);
        let config = RenderConfig {
            log_filter: Some("debug".to_string()),
            ..RenderConfig::default()
        };
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn home_not_found_error_message() {
        assert!(ConfigError::HomeNotFound.to_string().contains("home directory"));
    }
}
