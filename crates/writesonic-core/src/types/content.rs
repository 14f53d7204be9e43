use serde::{Deserialize, Serialize};

/// A single generated text, returned by most content endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentResult {
    /// Generated text
    #[serde(default)]
    pub text: String,
}

/// Landing page copy returned by the landing-pages endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingPage {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub subtitle: String,

    #[serde(default)]
    pub main_feature_title: String,

    #[serde(default)]
    pub main_feature_subtitle: String,

    #[serde(default)]
    pub feature_1_title: String,

    #[serde(default)]
    pub feature_1_subtitle: String,

    #[serde(default)]
    pub feature_2_title: String,

    #[serde(default)]
    pub feature_2_subtitle: String,

    #[serde(default)]
    pub feature_3_title: String,

    #[serde(default)]
    pub feature_3_subtitle: String,

    /// Call-to-action text
    #[serde(default)]
    pub cta: String,

    /// Button label
    #[serde(default)]
    pub button: String,
}

impl LandingPage {
    /// Labelled fields in display order
    #[must_use]
    pub fn rows(&self) -> [(&'static str, &str); 12] {
        [
            ("Title", &self.title),
            ("Subtitle", &self.subtitle),
            ("Main Feature Title", &self.main_feature_title),
            ("Main Feature Subtitle", &self.main_feature_subtitle),
            ("Feature 1 Title", &self.feature_1_title),
            ("Feature 1 Subtitle", &self.feature_1_subtitle),
            ("Feature 2 Title", &self.feature_2_title),
            ("Feature 2 Subtitle", &self.feature_2_subtitle),
            ("Feature 3 Title", &self.feature_3_title),
            ("Feature 3 Subtitle", &self.feature_3_subtitle),
            ("CTA", &self.cta),
            ("Button", &self.button),
        ]
    }
}

/// Which result shape an operation returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    /// A list of [`ContentResult`]
    Text,
    /// A list of [`LandingPage`]
    LandingPage,
}

/// Decoded output of one generation call.
///
/// Serializes as the bare list, exactly as the API returned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Generated {
    /// Plain text results
    Text(Vec<ContentResult>),
    /// Structured landing page records
    LandingPages(Vec<LandingPage>),
}

impl Generated {
    /// Number of results
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Text(items) => items.len(),
            Self::LandingPages(pages) => pages.len(),
        }
    }

    /// Returns true if the API returned no results
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Which shape this value holds
    #[must_use]
    pub const fn kind(&self) -> ResultKind {
        match self {
            Self::Text(_) => ResultKind::Text,
            Self::LandingPages(_) => ResultKind::LandingPage,
        }
    }
}
