//! Article writer endpoints.

use crate::WritesonicClient;
use writesonic_core::{ArticleWriter, ContentResult, GenerationSettings, InstantArticle, Result};

/// Article writer endpoints
pub struct ArticleApi<'a> {
    client: &'a WritesonicClient,
}

impl<'a> ArticleApi<'a> {
    pub(crate) const fn new(client: &'a WritesonicClient) -> Self {
        Self { client }
    }

    /// Generate a long-form SEO article from a title, intro and section list
    pub async fn write(
        &self,
        settings: &GenerationSettings,
        request: &ArticleWriter,
    ) -> Result<Vec<ContentResult>> {
        self.client.post_text(settings, request).await
    }

    /// Generate a full article from a title alone
    pub async fn instant(
        &self,
        settings: &GenerationSettings,
        request: &InstantArticle,
    ) -> Result<Vec<ContentResult>> {
        self.client.post_text(settings, request).await
    }
}
