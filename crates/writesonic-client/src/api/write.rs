//! Standalone writing endpoints.

use crate::WritesonicClient;
use writesonic_core::{Conclusion, ContentResult, GenerationSettings, MetaBlog, Paragraph, Result};

/// Standalone writing endpoints
pub struct WriteApi<'a> {
    client: &'a WritesonicClient,
}

impl<'a> WriteApi<'a> {
    pub(crate) const fn new(client: &'a WritesonicClient) -> Self {
        Self { client }
    }

    /// Write a structured paragraph on a topic
    pub async fn paragraph(
        &self,
        settings: &GenerationSettings,
        request: &Paragraph,
    ) -> Result<Vec<ContentResult>> {
        self.client.post_text(settings, request).await
    }

    /// SEO meta title and description for a blog post
    pub async fn meta(
        &self,
        settings: &GenerationSettings,
        request: &MetaBlog,
    ) -> Result<Vec<ContentResult>> {
        self.client.post_text(settings, request).await
    }

    pub async fn conclusion(
        &self,
        settings: &GenerationSettings,
        request: &Conclusion,
    ) -> Result<Vec<ContentResult>> {
        self.client.post_text(settings, request).await
    }
}
