//! Pure mapping from a raw transport outcome to the domain result.
//!
//! This is where the pipeline's two validation policies live: only HTTP
//! 200 carries a payload, and decoding is all-or-nothing. The function is
//! stateless and synchronous; identical inputs always produce structurally
//! equal outputs.

use crate::feed::{FeedItem, LoadError};
use serde::Deserialize;
use url::Url;
use uuid::Uuid;

const OK_200: u16 = 200;

/// Top-level document shape. Unknown sibling fields are ignored.
#[derive(Deserialize)]
struct Envelope {
    items: Vec<RemoteItem>,
}

/// One element of `items` as it appears on the wire. The `id` and `image`
/// fields are validated during deserialization; a malformed value in any
/// element fails the whole decode.
#[derive(Deserialize)]
struct RemoteItem {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

impl From<RemoteItem> for FeedItem {
    fn from(remote: RemoteItem) -> Self {
        FeedItem {
            id: remote.id,
            description: remote.description,
            location: remote.location,
            image_url: remote.image,
        }
    }
}

/// Map a raw response to the domain result.
///
/// Anything other than status 200 is invalid regardless of body content,
/// and no decode is attempted. A decode failure anywhere in the envelope
/// yields [`LoadError::InvalidData`] with no partial results; the serde
/// cause is logged and discarded. Item order follows the document array.
pub(crate) fn map_items(body: &[u8], status: u16) -> Result<Vec<FeedItem>, LoadError> {
    if status != OK_200 {
        return Err(LoadError::InvalidData);
    }

    let envelope: Envelope = serde_json::from_slice(body).map_err(|err| {
        tracing::debug!(error = %err, "feed payload failed to decode");
        LoadError::InvalidData
    })?;

    Ok(envelope.items.into_iter().map(FeedItem::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use serde_json::json;

    /// Builds an item and its wire form together so tests can assert
    /// field-for-field equality between payload and output.
    fn make_item(
        id: Uuid,
        description: Option<&str>,
        location: Option<&str>,
        image_url: &str,
    ) -> (FeedItem, serde_json::Value) {
        let item = FeedItem {
            id,
            description: description.map(str::to_string),
            location: location.map(str::to_string),
            image_url: Url::parse(image_url).unwrap(),
        };

        let mut json = json!({
            "id": id.to_string(),
            "image": image_url,
        });
        if let Some(d) = description {
            json["description"] = json!(d);
        }
        if let Some(l) = location {
            json["location"] = json!(l);
        }

        (item, json)
    }

    fn items_json(items: &[serde_json::Value]) -> Vec<u8> {
        serde_json::to_vec(&json!({ "items": items })).unwrap()
    }

    #[test]
    fn test_non_200_statuses_are_invalid_even_with_valid_payload() {
        let valid_empty = items_json(&[]);

        for status in [199, 201, 300, 400, 500] {
            assert_eq!(
                map_items(&valid_empty, status),
                Err(LoadError::InvalidData),
                "status {status} should be rejected"
            );
        }
    }

    #[test]
    fn test_malformed_json_is_invalid() {
        assert_eq!(map_items(b"not json", 200), Err(LoadError::InvalidData));
    }

    #[test]
    fn test_missing_items_field_is_invalid() {
        let body = serde_json::to_vec(&json!({ "entries": [] })).unwrap();
        assert_eq!(map_items(&body, 200), Err(LoadError::InvalidData));
    }

    #[test]
    fn test_empty_items_yields_empty_feed() {
        assert_eq!(map_items(&items_json(&[]), 200), Ok(vec![]));
    }

    #[test]
    fn test_items_map_in_document_order() {
        let (item1, json1) = make_item(Uuid::new_v4(), None, None, "http://a-url.com/");
        let (item2, json2) = make_item(
            Uuid::new_v4(),
            Some("a description"),
            Some("a location"),
            "http://another-url.com/",
        );

        let result = map_items(&items_json(&[json1, json2]), 200);

        assert_eq!(result, Ok(vec![item1, item2]));
    }

    #[test]
    fn test_malformed_id_fails_the_whole_decode() {
        let (_, good) = make_item(Uuid::new_v4(), None, None, "http://a-url.com/");
        let bad = json!({ "id": "not-a-uuid", "image": "http://a-url.com/" });

        assert_eq!(
            map_items(&items_json(&[good, bad]), 200),
            Err(LoadError::InvalidData)
        );
    }

    #[test]
    fn test_malformed_image_url_fails_the_whole_decode() {
        let bad = json!({ "id": Uuid::new_v4().to_string(), "image": "not a url" });

        assert_eq!(
            map_items(&items_json(&[bad]), 200),
            Err(LoadError::InvalidData)
        );
    }

    #[test]
    fn test_missing_image_field_fails_the_whole_decode() {
        let bad = json!({ "id": Uuid::new_v4().to_string() });

        assert_eq!(
            map_items(&items_json(&[bad]), 200),
            Err(LoadError::InvalidData)
        );
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let (item, mut json) = make_item(Uuid::new_v4(), None, None, "http://a-url.com/");
        json["likes"] = json!(42);
        let body = serde_json::to_vec(&json!({ "items": [json], "next_page": null })).unwrap();

        assert_eq!(map_items(&body, 200), Ok(vec![item]));
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let (_, json) = make_item(Uuid::new_v4(), Some("desc"), None, "http://a-url.com/");
        let body = items_json(&[json]);

        assert_eq!(map_items(&body, 200), map_items(&body, 200));
    }

    proptest! {
        /// The 200-only contract holds for every status code and payload,
        /// not just the sampled ones above.
        #[test]
        fn non_200_status_is_rejected_for_any_payload(
            status in 100u16..=599,
            body in proptest::collection::vec(any::<u8>(), 0..256),
        ) {
            prop_assume!(status != 200);
            prop_assert_eq!(map_items(&body, status), Err(LoadError::InvalidData));
        }
    }
}
