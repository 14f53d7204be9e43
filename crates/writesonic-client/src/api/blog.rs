//! Blog API endpoints.

use crate::WritesonicClient;
use writesonic_core::{BlogIdeas, ContentResult, GenerationSettings, Result};

/// Blog API endpoints
pub struct BlogApi<'a> {
    client: &'a WritesonicClient,
}

impl<'a> BlogApi<'a> {
    pub(crate) const fn new(client: &'a WritesonicClient) -> Self {
        Self { client }
    }

    /// Generate blog post ideas for a topic
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let ideas = client
    ///     .blog()
    ///     .ideas(&settings, &BlogIdeas { topic: "AI tools".into(), primary_keyword: None })
    ///     .await?;
    /// ```
    pub async fn ideas(
        &self,
        settings: &GenerationSettings,
        request: &BlogIdeas,
    ) -> Result<Vec<ContentResult>> {
        self.client.post_text(settings, request).await
    }
}
