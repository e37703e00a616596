//! Request and response models for the Raindrop.io REST API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reference to a collection by id, serialized as `{"$id": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionRef {
    #[serde(rename = "$id")]
    pub id: i64,
}

impl CollectionRef {
    /// The "Unsorted" collection, where bookmarks land by default.
    pub const UNSORTED: Self = Self { id: 0 };

    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

impl Default for CollectionRef {
    fn default() -> Self {
        Self::UNSORTED
    }
}

/// Body of a create-bookmark request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBookmark {
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub collection: CollectionRef,
}

impl NewBookmark {
    /// A bookmark for `link` in the default collection.
    pub fn new(link: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            title: None,
            tags: None,
            collection: CollectionRef::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn in_collection(mut self, collection: CollectionRef) -> Self {
        self.collection = collection;
        self
    }
}

/// A bookmark as returned by the API.
///
/// Timestamps are kept as the ISO-8601 strings the API sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub created: String,
    #[serde(rename = "lastUpdate", default)]
    pub last_update: String,
}

/// A collection as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(rename = "_id")]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub created: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<CollectionRef>,
}

/// Sort orders accepted by the search endpoint. A leading `-` means descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "created")]
    Created,
    #[serde(rename = "-created")]
    CreatedDesc,
    #[serde(rename = "last_update")]
    LastUpdate,
    #[serde(rename = "-last_update")]
    LastUpdateDesc,
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "-title")]
    TitleDesc,
    #[serde(rename = "domain")]
    Domain,
    #[serde(rename = "-domain")]
    DomainDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 8] = [
        SortOrder::Created,
        SortOrder::CreatedDesc,
        SortOrder::LastUpdate,
        SortOrder::LastUpdateDesc,
        SortOrder::Title,
        SortOrder::TitleDesc,
        SortOrder::Domain,
        SortOrder::DomainDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Created => "created",
            SortOrder::CreatedDesc => "-created",
            SortOrder::LastUpdate => "last_update",
            SortOrder::LastUpdateDesc => "-last_update",
            SortOrder::Title => "title",
            SortOrder::TitleDesc => "-title",
            SortOrder::Domain => "domain",
            SortOrder::DomainDesc => "-domain",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .iter()
            .find(|order| order.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Unknown sort order: {}", s))
    }
}

/// Query-string parameters for a bookmark search.
///
/// `tags` is already comma joined; `word` is sent as `"true"`/`"false"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub search: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perpage: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<bool>,
}

impl SearchQuery {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..Default::default()
        }
    }

    /// Filter by tags; they are sent comma joined.
    pub fn with_tags<S: AsRef<str>>(mut self, tags: &[S]) -> Self {
        let joined = tags.iter().map(|t| t.as_ref()).collect::<Vec<&str>>().join(",");
        self.tags = Some(joined);
        self
    }
}

/// Response from creating a bookmark.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookmarkResponse {
    #[serde(default)]
    pub result: bool,
    pub item: Bookmark,
}

/// Response from searching bookmarks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub result: bool,
    #[serde(default)]
    pub items: Vec<Bookmark>,
    #[serde(default)]
    pub count: u64,
}

/// Response from listing collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionsResponse {
    #[serde(default)]
    pub result: bool,
    #[serde(default)]
    pub items: Vec<Collection>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_bookmark_omits_absent_fields() {
        let body = serde_json::to_value(NewBookmark::new("https://example.com")).unwrap();

        assert_eq!(
            body,
            json!({
                "link": "https://example.com",
                "collection": {"$id": 0}
            })
        );
    }

    #[test]
    fn test_new_bookmark_with_all_fields() {
        let bookmark = NewBookmark::new("https://example.com")
            .with_title("Example")
            .with_tags(vec!["rust".to_string(), "web".to_string()])
            .in_collection(CollectionRef::new(42));

        let body = serde_json::to_value(bookmark).unwrap();
        assert_eq!(
            body,
            json!({
                "link": "https://example.com",
                "title": "Example",
                "tags": ["rust", "web"],
                "collection": {"$id": 42}
            })
        );
    }

    #[test]
    fn test_bookmark_without_tags_deserializes() {
        let bookmark: Bookmark = serde_json::from_value(json!({
            "_id": 7,
            "title": "Example",
            "link": "https://example.com",
            "created": "2024-01-02T03:04:05.000Z",
            "lastUpdate": "2024-01-03T03:04:05.000Z",
            "excerpt": "ignored"
        }))
        .unwrap();

        assert_eq!(bookmark.id, Some(7));
        assert!(bookmark.tags.is_none());
        assert_eq!(bookmark.last_update, "2024-01-03T03:04:05.000Z");
    }

    #[test]
    fn test_collection_parent_reference() {
        let collection: Collection = serde_json::from_value(json!({
            "_id": 12,
            "title": "Reading",
            "count": 3,
            "created": "2024-01-02T03:04:05.000Z",
            "parent": {"$id": 5}
        }))
        .unwrap();

        assert_eq!(collection.parent, Some(CollectionRef::new(5)));
    }

    #[test]
    fn test_sort_order_round_trips_through_str() {
        for order in SortOrder::ALL {
            assert_eq!(order.as_str().parse::<SortOrder>().unwrap(), order);
            assert_eq!(
                serde_json::to_value(order).unwrap(),
                json!(order.as_str())
            );
        }
        assert!("newest".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_search_query_joins_tags() {
        let query = SearchQuery::new("rust").with_tags(&["a", "b"]);
        assert_eq!(query.tags.as_deref(), Some("a,b"));
    }
}
