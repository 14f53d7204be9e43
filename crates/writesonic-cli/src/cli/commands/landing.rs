//! `writesonic landing` - Landing page copy and headlines.

use anyhow::Result;
use writesonic::{LandingHeadlines, LandingPageRequest};

use super::Context;
use crate::cli::args::{LandingArgs, LandingCommands};

pub async fn execute(ctx: &Context, args: LandingArgs) -> Result<()> {
    match args.command {
        LandingCommands::Page {
            name,
            desc,
            feature_1,
            feature_2,
            feature_3,
        } => {
            let request = LandingPageRequest {
                product_name: name,
                product_description: desc,
                feature_1,
                feature_2,
                feature_3,
            };
            ctx.generate(&request).await
        }
        LandingCommands::Headline { name, desc } => {
            let request = LandingHeadlines {
                product_name: name,
                product_description: desc,
            };
            ctx.generate(&request).await
        }
    }
}
