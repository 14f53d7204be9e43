//! `writesonic blog-ideas` - Blog post ideas for a topic.

use anyhow::Result;
use writesonic::BlogIdeas;

use super::{non_empty, Context};
use crate::cli::args::BlogIdeasArgs;

pub async fn execute(ctx: &Context, args: BlogIdeasArgs) -> Result<()> {
    let request = BlogIdeas {
        topic: args.topic,
        primary_keyword: non_empty(args.keyword),
    };

    ctx.generate(&request).await
}
