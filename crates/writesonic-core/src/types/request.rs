//! Request bodies, one type per remote operation.

use serde::Serialize;

use super::ResultKind;

/// A request body bound to the endpoint that accepts it
pub trait ContentRequest: Serialize {
    /// Path appended to the content API base URL
    const PATH: &'static str;

    /// Result shape the endpoint returns
    const KIND: ResultKind = ResultKind::Text;
}

/// Split a comma-separated list, trimming whitespace and dropping empty items
#[must_use]
pub fn split_comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

// ============================================================================
// Blog
// ============================================================================

/// Blog post ideas for a topic
#[derive(Debug, Clone, Serialize)]
pub struct BlogIdeas {
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_keyword: Option<String>,
}

impl ContentRequest for BlogIdeas {
    const PATH: &'static str = "/blog-ideas";
}

// ============================================================================
// Articles
// ============================================================================

/// Long-form SEO article (AI Article Writer v3)
#[derive(Debug, Clone, Serialize)]
pub struct ArticleWriter {
    pub article_title: String,
    pub article_intro: String,
    pub article_sections: Vec<String>,
}

impl ContentRequest for ArticleWriter {
    const PATH: &'static str = "/ai-article-writer-v3";
}

/// Instant article from a title alone
#[derive(Debug, Clone, Serialize)]
pub struct InstantArticle {
    pub article_title: String,
}

impl ContentRequest for InstantArticle {
    const PATH: &'static str = "/instant-article-writer";
}

// ============================================================================
// Landing pages
// ============================================================================

/// Full landing page copy
#[derive(Debug, Clone, Serialize)]
pub struct LandingPageRequest {
    pub product_name: String,
    pub product_description: String,
    pub feature_1: String,
    pub feature_2: String,
    pub feature_3: String,
}

impl ContentRequest for LandingPageRequest {
    const PATH: &'static str = "/landing-pages";
    const KIND: ResultKind = ResultKind::LandingPage;
}

/// Landing page headlines
#[derive(Debug, Clone, Serialize)]
pub struct LandingHeadlines {
    pub product_name: String,
    pub product_description: String,
}

impl ContentRequest for LandingHeadlines {
    const PATH: &'static str = "/landing-page-headlines";
}

// ============================================================================
// Marketing copy
// ============================================================================

/// Pain-Agitate-Solution copy
#[derive(Debug, Clone, Serialize)]
pub struct Pas {
    pub product_name: String,
    pub product_description: String,
}

impl ContentRequest for Pas {
    const PATH: &'static str = "/pas";
}

/// Attention-Interest-Desire-Action copy
#[derive(Debug, Clone, Serialize)]
pub struct Aida {
    pub product_name: String,
    pub product_description: String,
}

impl ContentRequest for Aida {
    const PATH: &'static str = "/aida";
}

/// Calls to action
#[derive(Debug, Clone, Serialize)]
pub struct CallToAction {
    pub product_name: String,
}

impl ContentRequest for CallToAction {
    const PATH: &'static str = "/call-to-action";
}

/// Bullet-point answers to a question
#[derive(Debug, Clone, Serialize)]
pub struct BulletPointAnswers {
    pub question: String,
}

impl ContentRequest for BulletPointAnswers {
    const PATH: &'static str = "/bulletpoint-answers";
}

// ============================================================================
// Rewriting
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct Rephrase {
    pub content_to_rephrase: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone_of_voice: Option<String>,
}

impl ContentRequest for Rephrase {
    const PATH: &'static str = "/content-rephrase";
}

#[derive(Debug, Clone, Serialize)]
pub struct Shorten {
    pub content_to_shorten: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone_of_voice: Option<String>,
}

impl ContentRequest for Shorten {
    const PATH: &'static str = "/content-shorten";
}

#[derive(Debug, Clone, Serialize)]
pub struct ToneChanger {
    pub content_to_change: String,
    pub tone: String,
}

impl ContentRequest for ToneChanger {
    const PATH: &'static str = "/tone-changer";
}

/// Rewrite content around target keywords.
///
/// `keywords` is sent as the raw comma-separated string.
#[derive(Debug, Clone, Serialize)]
pub struct RewriteWithKeywords {
    pub content: String,
    pub keywords: String,
}

impl ContentRequest for RewriteWithKeywords {
    const PATH: &'static str = "/rewrite-with-keywords";
}

// ============================================================================
// Writing utilities
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct Paragraph {
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl ContentRequest for Paragraph {
    const PATH: &'static str = "/paragraph-writer";
}

/// SEO meta title and description for a blog post
#[derive(Debug, Clone, Serialize)]
pub struct MetaBlog {
    pub blog_title: String,
    pub blog_description: String,
}

impl ContentRequest for MetaBlog {
    const PATH: &'static str = "/meta-blog";
}

#[derive(Debug, Clone, Serialize)]
pub struct Conclusion {
    pub topic: String,
}

impl ContentRequest for Conclusion {
    const PATH: &'static str = "/conclusion-writer";
}
