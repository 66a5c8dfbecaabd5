//! The core data type produced by the load pipeline.
//!
//! `FeedItem` is the only shape the rest of an application ever sees: every
//! transport and decoding concern is resolved before one is constructed, so
//! holders can treat the fields as already validated.

use url::Url;
use uuid::Uuid;

/// A single feed entry, decoded and validated from the remote payload.
///
/// Items are created only by a successful decode of the response envelope
/// and are never mutated afterwards; the caller owns them once a load
/// completes. Equality is structural over all fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    /// Stable unique identifier assigned by the feed backend.
    pub id: Uuid,

    /// Optional caption text.
    pub description: Option<String>,

    /// Optional human-readable location tag.
    pub location: Option<String>,

    /// Where the item's image lives. Always a well-formed URL; payloads
    /// carrying a malformed one fail the whole load.
    pub image_url: Url,
}
