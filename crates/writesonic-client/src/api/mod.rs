//! API endpoint modules.

mod article;
mod blog;
mod copy;
mod landing;
mod rewrite;
mod write;

pub use article::ArticleApi;
pub use blog::BlogApi;
pub use copy::CopyApi;
pub use landing::LandingApi;
pub use rewrite::RewriteApi;
pub use write::WriteApi;
