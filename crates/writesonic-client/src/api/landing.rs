//! Landing page endpoints.

use crate::WritesonicClient;
use writesonic_core::{
    ContentResult, GenerationSettings, LandingHeadlines, LandingPage, LandingPageRequest, Result,
};

/// Landing page endpoints
pub struct LandingApi<'a> {
    client: &'a WritesonicClient,
}

impl<'a> LandingApi<'a> {
    pub(crate) const fn new(client: &'a WritesonicClient) -> Self {
        Self { client }
    }

    /// Generate full landing page copy. This is the only endpoint returning
    /// structured records instead of plain text.
    pub async fn page(
        &self,
        settings: &GenerationSettings,
        request: &LandingPageRequest,
    ) -> Result<Vec<LandingPage>> {
        self.client.post_landing(settings, request).await
    }

    /// Generate landing page headlines
    pub async fn headlines(
        &self,
        settings: &GenerationSettings,
        request: &LandingHeadlines,
    ) -> Result<Vec<ContentResult>> {
        self.client.post_text(settings, request).await
    }
}
