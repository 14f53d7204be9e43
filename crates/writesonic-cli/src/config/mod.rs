//! Configuration management.

pub mod credentials;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use writesonic::{
    Engine, GenerationSettings, Result, WritesonicError, DEFAULT_COPIES, DEFAULT_ENGINE,
    DEFAULT_LANGUAGE,
};

pub use credentials::{Credential, CredentialSource};

/// Persisted CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Writesonic API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Default engine tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_engine: Option<Engine>,

    /// Default language code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,

    /// Default number of copies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_copies: Option<u32>,
}

/// Per-invocation values given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub engine: Option<Engine>,
    pub language: Option<String>,
    pub copies: Option<u32>,
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "writesonic", "writesonic").ok_or_else(|| {
            WritesonicError::Config("could not determine config directory".to_string())
        })?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from `path`. A missing file yields an empty config.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(WritesonicError::Config(format!(
                    "read {}: {e}",
                    path.display()
                )))
            }
        };

        toml::from_str(&content)
            .map_err(|e| WritesonicError::Config(format!("parse {}: {e}", path.display())))
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save configuration to `path`, readable and writable by the owner only.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_err = |e: std::io::Error| {
            WritesonicError::Config(format!("write {}: {e}", path.display()))
        };

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(config_err)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| WritesonicError::Config(format!("serialize config: {e}")))?;
        std::fs::write(path, content).map_err(config_err)?;
        restrict_permissions(path).map_err(config_err)?;

        Ok(())
    }

    /// Remove the config file at the default location.
    pub fn clear() -> Result<PathBuf> {
        let path = Self::path()?;
        Self::clear_at(&path)?;
        Ok(path)
    }

    /// Remove the config file at `path`. A missing file is not an error.
    pub fn clear_at(path: &Path) -> Result<()> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(WritesonicError::Config(format!(
                "remove {}: {e}",
                path.display()
            ))),
        }
    }

    /// Stored API key, if set and non-empty.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }

    /// Stored language, if set and non-empty.
    pub fn language(&self) -> Option<&str> {
        self.default_language.as_deref().filter(|l| !l.is_empty())
    }

    /// Stored copy count. Zero counts as unset.
    pub fn copies(&self) -> Option<u32> {
        self.default_copies.filter(|&c| c > 0)
    }

    /// Resolve generation settings: override, then stored default, then
    /// fallback, independently for each field.
    pub fn generation_settings(&self, overrides: &Overrides) -> GenerationSettings {
        let engine = overrides
            .engine
            .or(self.default_engine)
            .unwrap_or(DEFAULT_ENGINE);

        let language = overrides
            .language
            .as_deref()
            .filter(|l| !l.is_empty())
            .or_else(|| self.language())
            .unwrap_or(DEFAULT_LANGUAGE);

        let copies = overrides
            .copies
            .filter(|&c| c > 0)
            .or_else(|| self.copies())
            .unwrap_or(DEFAULT_COPIES);

        GenerationSettings::new(engine, language, copies)
    }

    /// Store every given override as the new default. Returns false if
    /// nothing changed.
    pub fn apply_defaults(&mut self, overrides: &Overrides) -> bool {
        let mut changed = false;

        if let Some(engine) = overrides.engine {
            self.default_engine = Some(engine);
            changed = true;
        }
        if let Some(language) = overrides.language.as_deref().filter(|l| !l.is_empty()) {
            self.default_language = Some(language.to_string());
            changed = true;
        }
        if let Some(copies) = overrides.copies.filter(|&c| c > 0) {
            self.default_copies = Some(copies);
            changed = true;
        }

        changed
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
