//! Main Writesonic API client implementation.

use crate::api::*;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client as HttpClient;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;
use writesonic_core::{
    decode, decode_landing_pages, decode_text_results, ContentRequest, ContentResult, Generated,
    GenerationSettings, LandingPage, Result, ValidationErrorBody, WritesonicError,
};

/// The Writesonic content API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.writesonic.com/v2/business/content";

/// Header carrying the API key
const API_KEY_HEADER: &str = "X-API-Key";

/// Main Writesonic API client
#[derive(Clone)]
pub struct WritesonicClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    api_key: String,
    base_url: String,
}

impl WritesonicClient {
    /// Create a new client with the given API key using default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        WritesonicClientBuilder::new(api_key).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> WritesonicClientBuilder {
        WritesonicClientBuilder::new(api_key)
    }

    /// Blog endpoints
    #[must_use]
    pub const fn blog(&self) -> BlogApi<'_> {
        BlogApi::new(self)
    }

    /// Article writer endpoints
    #[must_use]
    pub const fn articles(&self) -> ArticleApi<'_> {
        ArticleApi::new(self)
    }

    /// Landing page endpoints
    #[must_use]
    pub const fn landing(&self) -> LandingApi<'_> {
        LandingApi::new(self)
    }

    /// Marketing copy endpoints (PAS, AIDA, CTA, bullets)
    #[must_use]
    pub const fn copy(&self) -> CopyApi<'_> {
        CopyApi::new(self)
    }

    /// Content transformation endpoints
    #[must_use]
    pub const fn rewrite(&self) -> RewriteApi<'_> {
        RewriteApi::new(self)
    }

    /// Standalone writing endpoints (paragraph, meta, conclusion)
    #[must_use]
    pub const fn write(&self) -> WriteApi<'_> {
        WriteApi::new(self)
    }

    /// Send `request` to its endpoint and decode the result shape it declares
    pub async fn generate<R: ContentRequest>(
        &self,
        settings: &GenerationSettings,
        request: &R,
    ) -> Result<Generated> {
        let body = self.post_raw(R::PATH, settings, Some(request)).await?;
        decode(R::KIND, &body)
    }

    /// POST to a text-result endpoint
    pub(crate) async fn post_text<R: ContentRequest>(
        &self,
        settings: &GenerationSettings,
        request: &R,
    ) -> Result<Vec<ContentResult>> {
        let body = self.post_raw(R::PATH, settings, Some(request)).await?;
        decode_text_results(&body)
    }

    /// POST to a landing-page endpoint
    pub(crate) async fn post_landing<R: ContentRequest>(
        &self,
        settings: &GenerationSettings,
        request: &R,
    ) -> Result<Vec<LandingPage>> {
        let body = self.post_raw(R::PATH, settings, Some(request)).await?;
        decode_landing_pages(&body)
    }

    /// Perform one authenticated POST and return the raw success body.
    ///
    /// `settings` always become the `engine`, `language` and `num_copies`
    /// query parameters. Only HTTP 200 counts as success.
    pub async fn post_raw<B: Serialize + ?Sized>(
        &self,
        path: &str,
        settings: &GenerationSettings,
        body: Option<&B>,
    ) -> Result<Vec<u8>> {
        let url = self.build_url(path, settings)?;
        debug!(url = %url, has_body = body.is_some(), "POST request");

        let mut request = self
            .inner
            .http
            .post(url)
            .header(API_KEY_HEADER, &self.inner.api_key)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request.send().await.map_err(transport_error)?;
        self.handle_response(response).await
    }

    /// Build the endpoint URL with the generation query parameters
    fn build_url(&self, path: &str, settings: &GenerationSettings) -> Result<Url> {
        let raw = format!("{}{}", self.inner.base_url, path);
        let mut url = Url::parse(&raw).map_err(|e| WritesonicError::InvalidUrl(format!("{raw}: {e}")))?;

        url.query_pairs_mut().extend_pairs(settings.query_params());

        Ok(url)
    }

    /// Read the body and classify the response by status code
    async fn handle_response(&self, response: reqwest::Response) -> Result<Vec<u8>> {
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport_error)?;
        debug!(status, bytes = body.len(), "response received");

        if status == 200 {
            return Ok(body.to_vec());
        }

        warn!(status, "Writesonic API returned an error");
        Err(classify_error(status, &body))
    }
}

/// Convert a non-200 response into a [`WritesonicError`]
fn classify_error(status: u16, body: &[u8]) -> WritesonicError {
    if status == 422 {
        if let Ok(parsed) = serde_json::from_slice::<ValidationErrorBody>(body) {
            if let Some(message) = parsed.summary() {
                return WritesonicError::Validation {
                    message: message.to_string(),
                    details: parsed.detail,
                };
            }
        }
    }

    WritesonicError::Api {
        code: status,
        message: String::from_utf8_lossy(body).into_owned(),
    }
}

/// Map a reqwest failure onto a transport error kind
fn transport_error(err: reqwest::Error) -> WritesonicError {
    if err.is_timeout() {
        WritesonicError::Timeout(err.to_string())
    } else if err.is_connect() {
        WritesonicError::Connection(err.to_string())
    } else {
        WritesonicError::Http(err.to_string())
    }
}

/// Builder for configuring a [`WritesonicClient`]
pub struct WritesonicClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: String,
}

impl WritesonicClientBuilder {
    /// Create a new builder with the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: format!("writesonic-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set a request timeout. No timeout is applied by default.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<WritesonicClient> {
        let mut http = HttpClient::builder()
            .user_agent(&self.user_agent)
            .gzip(true);

        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        let http = http
            .build()
            .map_err(|e| WritesonicError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(WritesonicClient {
            inner: Arc::new(ClientInner {
                http,
                api_key: self.api_key,
                base_url: self.base_url,
            }),
        })
    }
}
