//! `writesonic article` - Long-form and instant articles.

use anyhow::Result;
use writesonic::{split_comma_list, ArticleWriter, InstantArticle};

use super::Context;
use crate::cli::args::{ArticleArgs, ArticleCommands};

pub async fn execute(ctx: &Context, args: ArticleArgs) -> Result<()> {
    match args.command {
        ArticleCommands::Write {
            title,
            intro,
            sections,
        } => {
            let request = ArticleWriter {
                article_title: title,
                article_intro: intro,
                article_sections: split_comma_list(&sections),
            };
            ctx.generate(&request).await
        }
        ArticleCommands::Instant { title } => {
            ctx.generate(&InstantArticle {
                article_title: title,
            })
            .await
        }
    }
}
