//! Content transformation endpoints.

use crate::WritesonicClient;
use writesonic_core::{
    ContentResult, GenerationSettings, Rephrase, Result, RewriteWithKeywords, Shorten, ToneChanger,
};

/// Content transformation endpoints
pub struct RewriteApi<'a> {
    client: &'a WritesonicClient,
}

impl<'a> RewriteApi<'a> {
    pub(crate) const fn new(client: &'a WritesonicClient) -> Self {
        Self { client }
    }

    pub async fn rephrase(
        &self,
        settings: &GenerationSettings,
        request: &Rephrase,
    ) -> Result<Vec<ContentResult>> {
        self.client.post_text(settings, request).await
    }

    pub async fn shorten(
        &self,
        settings: &GenerationSettings,
        request: &Shorten,
    ) -> Result<Vec<ContentResult>> {
        self.client.post_text(settings, request).await
    }

    /// Change the tone of existing content
    pub async fn tone(
        &self,
        settings: &GenerationSettings,
        request: &ToneChanger,
    ) -> Result<Vec<ContentResult>> {
        self.client.post_text(settings, request).await
    }

    /// Rewrite content around target SEO keywords
    pub async fn keywords(
        &self,
        settings: &GenerationSettings,
        request: &RewriteWithKeywords,
    ) -> Result<Vec<ContentResult>> {
        self.client.post_text(settings, request).await
    }
}
