//! Marketing copy endpoints.

use crate::WritesonicClient;
use writesonic_core::{
    Aida, BulletPointAnswers, CallToAction, ContentResult, GenerationSettings, Pas, Result,
};

/// Marketing copy endpoints
pub struct CopyApi<'a> {
    client: &'a WritesonicClient,
}

impl<'a> CopyApi<'a> {
    pub(crate) const fn new(client: &'a WritesonicClient) -> Self {
        Self { client }
    }

    /// Pain-Agitate-Solution copy
    pub async fn pas(&self, settings: &GenerationSettings, request: &Pas) -> Result<Vec<ContentResult>> {
        self.client.post_text(settings, request).await
    }

    /// Attention-Interest-Desire-Action copy
    pub async fn aida(&self, settings: &GenerationSettings, request: &Aida) -> Result<Vec<ContentResult>> {
        self.client.post_text(settings, request).await
    }

    /// Calls to action for a product
    pub async fn call_to_action(
        &self,
        settings: &GenerationSettings,
        request: &CallToAction,
    ) -> Result<Vec<ContentResult>> {
        self.client.post_text(settings, request).await
    }

    /// Bullet-point answers to a question
    pub async fn bullet_points(
        &self,
        settings: &GenerationSettings,
        request: &BulletPointAnswers,
    ) -> Result<Vec<ContentResult>> {
        self.client.post_text(settings, request).await
    }
}
