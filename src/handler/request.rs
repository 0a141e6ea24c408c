use thiserror::Error;

use super::route::Creation;
use crate::catalog::NewEntity;

/// A write body that does not fit its operation's shape.
#[derive(Debug, Error)]
#[error("Invalid request body: {0}")]
pub struct InvalidBody(#[from] serde_json::Error);

pub(crate) fn parse(kind: Creation, body: &str) -> Result<NewEntity, InvalidBody> {
    Ok(match kind {
        Creation::Album => NewEntity::Album(serde_json::from_str(body)?),
        Creation::Track => NewEntity::Track(serde_json::from_str(body)?),
        Creation::Video => NewEntity::Video(serde_json::from_str(body)?),
        Creation::Lyric => NewEntity::Lyric(serde_json::from_str(body)?),
    })
}
