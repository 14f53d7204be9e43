//! `writesonic write` - Paragraphs, meta tags and conclusions.

use anyhow::Result;
use writesonic::{Conclusion, MetaBlog, Paragraph};

use super::{non_empty, Context};
use crate::cli::args::{WriteArgs, WriteCommands};

pub async fn execute(ctx: &Context, args: WriteArgs) -> Result<()> {
    match args.command {
        WriteCommands::Paragraph {
            topic,
            instructions,
        } => {
            let request = Paragraph {
                topic,
                instructions: non_empty(instructions),
            };
            ctx.generate(&request).await
        }
        WriteCommands::Meta { title, desc } => {
            let request = MetaBlog {
                blog_title: title,
                blog_description: desc,
            };
            ctx.generate(&request).await
        }
        WriteCommands::Conclusion { topic } => ctx.generate(&Conclusion { topic }).await,
    }
}
