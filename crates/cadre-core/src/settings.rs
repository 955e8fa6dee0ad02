//! Settings system for the cadre framework.
//!
//! This module provides the [`Settings`] struct, which holds framework
//! configuration, and a process-global, write-once accessor. Settings are
//! loaded once during the single-threaded configuration phase and are
//! read-only afterwards.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{CadreError, CadreResult};

static GLOBAL_SETTINGS: OnceLock<Settings> = OnceLock::new();

/// The complete set of framework settings.
///
/// # Examples
///
/// ```
/// use cadre_core::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.log_level, "info");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether debug mode is enabled.
    pub debug: bool,
    /// The log filter directive passed to the tracing subscriber
    /// (e.g. `"info"`, `"cadre_http=debug"`).
    pub log_level: String,
    /// Hostnames that this application can serve.
    pub allowed_hosts: Vec<String>,
    /// Modules whose controllers are registered at startup, in registration
    /// order. Order matters: it determines route matching precedence.
    pub installed_modules: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            allowed_hosts: Vec::new(),
            installed_modules: Vec::new(),
        }
    }
}

impl Settings {
    /// Parses settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`CadreError::ConfigurationError`] if the TOML is invalid.
    pub fn from_toml(source: &str) -> CadreResult<Self> {
        toml::from_str(source)
            .map_err(|e| CadreError::ConfigurationError(format!("invalid settings TOML: {e}")))
    }

    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> CadreResult<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    /// Installs these settings as the process-global instance.
    ///
    /// # Errors
    ///
    /// Returns [`CadreError::ImproperlyConfigured`] if settings have already
    /// been installed.
    pub fn install_global(self) -> CadreResult<()> {
        GLOBAL_SETTINGS
            .set(self)
            .map_err(|_| CadreError::ImproperlyConfigured("settings already installed".into()))
    }

    /// Returns the process-global settings, falling back to defaults if
    /// [`Settings::install_global`] was never called.
    pub fn global() -> &'static Self {
        GLOBAL_SETTINGS.get_or_init(Self::default)
    }
}
