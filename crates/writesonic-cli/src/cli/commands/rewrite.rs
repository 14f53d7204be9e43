//! `writesonic rewrite` - Rephrase, shorten, re-tone or keyword-rewrite content.

use anyhow::Result;
use writesonic::{Rephrase, RewriteWithKeywords, Shorten, ToneChanger};

use super::{non_empty, Context};
use crate::cli::args::{RewriteArgs, RewriteCommands};

pub async fn execute(ctx: &Context, args: RewriteArgs) -> Result<()> {
    match args.command {
        RewriteCommands::Rephrase { content, tone } => {
            let request = Rephrase {
                content_to_rephrase: content,
                tone_of_voice: non_empty(tone),
            };
            ctx.generate(&request).await
        }
        RewriteCommands::Shorten { content, tone } => {
            let request = Shorten {
                content_to_shorten: content,
                tone_of_voice: non_empty(tone),
            };
            ctx.generate(&request).await
        }
        RewriteCommands::Tone { content, tone } => {
            let request = ToneChanger {
                content_to_change: content,
                tone,
            };
            ctx.generate(&request).await
        }
        RewriteCommands::Keywords { content, keywords } => {
            ctx.generate(&RewriteWithKeywords { content, keywords }).await
        }
    }
}
