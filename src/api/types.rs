//! Wire types for the NASA Image and Video Library and the view-facing
//! [`MediaItem`] built from them.
//!
//! Every endpoint wraps its payload in `{"collection": {"items": [...]}}`.
//! Fields the library omits are common, so almost everything is optional.

use nasaview_core::MediaType;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct CollectionResponse<T> {
    pub collection: Collection<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Collection<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

// ---------------------------------------------------------------------------
// Search items
// ---------------------------------------------------------------------------

/// One entry of a `/search` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub data: Vec<ItemData>,
    #[serde(default)]
    pub links: Vec<ItemLink>,
}

/// Descriptive fields of a catalog item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemData {
    pub nasa_id: Option<String>,
    pub title: Option<String>,
    pub media_type: Option<String>,
    pub description: Option<String>,
    pub date_created: Option<String>,
}

/// A preview link (thumbnail or caption file) attached to a search item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemLink {
    pub href: Option<String>,
}

/// One file of an `/asset/{id}` manifest.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ManifestEntry {
    pub href: String,
}

// ---------------------------------------------------------------------------
// View-facing types
// ---------------------------------------------------------------------------

/// Title shown for items that carry none.
pub const UNTITLED: &str = "No Title";

/// A search hit as the list view sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaItem {
    /// Upstream `nasa_id`; absent when the item carried no data entry.
    pub id: Option<String>,
    pub title: Option<String>,
    /// `None` when the upstream type is missing or not one we know.
    pub media_type: Option<MediaType>,
    pub thumbnail_url: Option<String>,
}

impl MediaItem {
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => UNTITLED,
        }
    }
}

impl From<SearchItem> for MediaItem {
    fn from(item: SearchItem) -> Self {
        let data = item.data.into_iter().next().unwrap_or_default();
        let thumbnail_url = item.links.into_iter().next().and_then(|l| l.href);

        Self {
            id: data.nasa_id,
            title: data.title,
            media_type: data.media_type.and_then(|t| t.parse().ok()),
            thumbnail_url,
        }
    }
}

/// Descriptive fields of one asset, from the `nasa_id` lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssetMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date_created: Option<String>,
}

impl From<ItemData> for AssetMetadata {
    fn from(data: ItemData) -> Self {
        Self {
            title: data.title,
            description: data.description,
            date_created: data.date_created,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_search(json: &str) -> Vec<SearchItem> {
        serde_json::from_str::<CollectionResponse<SearchItem>>(json)
            .unwrap()
            .collection
            .items
    }

    #[test]
    fn full_item_converts() {
        let items = parse_search(
            r#"{"collection":{"items":[{
                "data":[{"nasa_id":"as11-40-5874","title":"Apollo 11","media_type":"image"}],
                "links":[{"href":"https://example.test/thumb.jpg","rel":"preview"}]
            }]}}"#,
        );
        let item = MediaItem::from(items[0].clone());
        assert_eq!(item.id.as_deref(), Some("as11-40-5874"));
        assert_eq!(item.display_title(), "Apollo 11");
        assert_eq!(item.media_type, Some(MediaType::Image));
        assert_eq!(item.thumbnail_url.as_deref(), Some("https://example.test/thumb.jpg"));
    }

    #[test]
    fn missing_title_and_links() {
        let items = parse_search(
            r#"{"collection":{"items":[{"data":[{"nasa_id":"x","media_type":"audio"}]}]}}"#,
        );
        let item = MediaItem::from(items[0].clone());
        assert_eq!(item.display_title(), UNTITLED);
        assert_eq!(item.thumbnail_url, None);
    }

    #[test]
    fn missing_data_entry_leaves_no_id() {
        let items = parse_search(r#"{"collection":{"items":[{"data":[],"links":[]}]}}"#);
        let item = MediaItem::from(items[0].clone());
        assert_eq!(item.id, None);
        assert_eq!(item.media_type, None);
    }

    #[test]
    fn unknown_media_type_maps_to_none() {
        let items = parse_search(
            r#"{"collection":{"items":[{"data":[{"nasa_id":"x","media_type":"model"}]}]}}"#,
        );
        assert_eq!(MediaItem::from(items[0].clone()).media_type, None);
    }

    #[test]
    fn collection_without_items_is_empty() {
        assert!(parse_search(r#"{"collection":{}}"#).is_empty());
    }

    #[test]
    fn manifest_entries_parse() {
        let manifest: CollectionResponse<ManifestEntry> = serde_json::from_str(
            r#"{"collection":{"version":"1.0","items":[{"href":"a~orig.jpg"},{"href":"a~thumb.jpg"}]}}"#,
        )
        .unwrap();
        let hrefs: Vec<_> = manifest.collection.items.into_iter().map(|e| e.href).collect();
        assert_eq!(hrefs, vec!["a~orig.jpg", "a~thumb.jpg"]);
    }
}
