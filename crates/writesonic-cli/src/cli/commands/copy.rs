//! `writesonic copy` - PAS, AIDA, CTA and bullet-point copy.

use anyhow::Result;
use writesonic::{Aida, BulletPointAnswers, CallToAction, Pas};

use super::Context;
use crate::cli::args::{CopyArgs, CopyCommands};

pub async fn execute(ctx: &Context, args: CopyArgs) -> Result<()> {
    match args.command {
        CopyCommands::Pas { name, desc } => {
            ctx.generate(&Pas {
                product_name: name,
                product_description: desc,
            })
            .await
        }
        CopyCommands::Aida { name, desc } => {
            ctx.generate(&Aida {
                product_name: name,
                product_description: desc,
            })
            .await
        }
        CopyCommands::Cta { name } => ctx.generate(&CallToAction { product_name: name }).await,
        CopyCommands::Bullets { question } => {
            ctx.generate(&BulletPointAnswers { question }).await
        }
    }
}
