//! API key resolution: environment aliases first, then the config file.

use std::fmt;

use super::Config;

/// Environment variables accepted for the API key, highest priority first.
pub const API_KEY_ENV_VARS: [&str; 15] = [
    "WRITESONIC_API_KEY",
    "WRITESONIC_KEY",
    "WRITESONIC_API",
    "API_KEY_WRITESONIC",
    "API_WRITESONIC",
    "WRITESONIC_PK",
    "WRITESONIC_PUBLIC",
    "WRITESONIC_API_SECRET",
    "WRITESONIC_SECRET_KEY",
    "WRITESONIC_API_SECRET_KEY",
    "WRITESONIC_SECRET",
    "SECRET_WRITESONIC",
    "API_SECRET_WRITESONIC",
    "SK_WRITESONIC",
    "WRITESONIC_SK",
];

/// Where a resolved API key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// The named environment variable
    Environment(&'static str),
    /// The persisted config file
    ConfigFile,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Environment(name) => write!(f, "environment variable {name}"),
            Self::ConfigFile => f.write_str("config file"),
        }
    }
}

/// A resolved API key.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub key: String,
    pub source: CredentialSource,
}

impl Credential {
    /// Key with all but the first and last four characters hidden.
    pub fn masked(&self) -> String {
        mask_key(&self.key)
    }
}

// Keep the key out of debug logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("key", &self.masked())
            .field("source", &self.source)
            .finish()
    }
}

/// Resolve the API key from the process environment and `config`.
pub fn resolve(config: &Config) -> Option<Credential> {
    resolve_with(|name| std::env::var(name).ok(), config)
}

/// Resolve the API key with a custom environment lookup.
///
/// The first alias with a non-empty value wins; the config file is only
/// consulted when no alias is set.
pub fn resolve_with<F>(lookup: F, config: &Config) -> Option<Credential>
where
    F: Fn(&str) -> Option<String>,
{
    API_KEY_ENV_VARS
        .iter()
        .find_map(|&name| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .map(|key| Credential {
                    key,
                    source: CredentialSource::Environment(name),
                })
        })
        .or_else(|| {
            config.api_key().map(|key| Credential {
                key: key.to_string(),
                source: CredentialSource::ConfigFile,
            })
        })
}

/// Mask a key for display: `abcd...wxyz`, or `****` for short keys.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
