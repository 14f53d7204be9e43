use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::WritesonicError;

/// Fallback engine when neither a flag nor the config file picks one
pub const DEFAULT_ENGINE: Engine = Engine::Good;

/// Fallback language code
pub const DEFAULT_LANGUAGE: &str = "en";

/// Fallback number of copies
pub const DEFAULT_COPIES: u32 = 1;

/// Quality tier used by the remote generation operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Cheapest, lowest quality
    Economy,
    /// Middle tier
    Average,
    /// Default tier
    #[default]
    Good,
    /// Highest quality
    Premium,
}

impl Engine {
    /// All engines, cheapest first
    pub const ALL: [Self; 4] = [Self::Economy, Self::Average, Self::Good, Self::Premium];

    /// Wire name sent in the `engine` query parameter
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Economy => "economy",
            Self::Average => "average",
            Self::Good => "good",
            Self::Premium => "premium",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Engine {
    type Err = WritesonicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|engine| engine.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| WritesonicError::InvalidEngine(s.to_string()))
    }
}

/// Per-run generation defaults, attached to every request as query parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Engine tier
    pub engine: Engine,

    /// Language code, e.g. "en"
    pub language: String,

    /// Number of variants generated server-side
    pub copies: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            engine: DEFAULT_ENGINE,
            language: DEFAULT_LANGUAGE.to_string(),
            copies: DEFAULT_COPIES,
        }
    }
}

impl GenerationSettings {
    /// Create settings from explicit values
    #[must_use]
    pub fn new(engine: Engine, language: impl Into<String>, copies: u32) -> Self {
        Self {
            engine,
            language: language.into(),
            copies,
        }
    }

    /// Query parameters sent with every request, in wire order
    #[must_use]
    pub fn query_params(&self) -> [(&'static str, String); 3] {
        [
            ("engine", self.engine.as_str().to_string()),
            ("language", self.language.clone()),
            ("num_copies", self.copies.to_string()),
        ]
    }
}
