//! Strict decoders from raw response bytes into the known result shapes.

use crate::{ContentResult, Generated, LandingPage, Result, ResultKind};

/// Decode a list of `{text}` objects
pub fn decode_text_results(body: &[u8]) -> Result<Vec<ContentResult>> {
    Ok(serde_json::from_slice(body)?)
}

/// Decode a list of landing page records
pub fn decode_landing_pages(body: &[u8]) -> Result<Vec<LandingPage>> {
    Ok(serde_json::from_slice(body)?)
}

/// Decode `body` with the decoder for `kind`
pub fn decode(kind: ResultKind, body: &[u8]) -> Result<Generated> {
    match kind {
        ResultKind::Text => decode_text_results(body).map(Generated::Text),
        ResultKind::LandingPage => decode_landing_pages(body).map(Generated::LandingPages),
    }
}
