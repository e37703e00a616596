// search-bookmarks: full-text search over saved bookmarks

use crate::error::ToolResult;
use crate::format::{format_timestamp, BLOCK_SEPARATOR};
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_array, json_schema_boolean, json_schema_enum, json_schema_number,
    json_schema_object, json_schema_string, Tool,
};
use crate::validation::Arguments;
use chrono::{Local, TimeZone};
use raindrop_sdk::{Bookmark, RaindropClient, SearchQuery, SearchResponse, SortOrder};
use tracing::info;

pub const NAME: &str = "search-bookmarks";

pub const NO_RESULTS: &str = "No bookmarks found matching your search.";

const MAX_PER_PAGE: i64 = 50;

const SORT_KEYS: [&str; 8] = [
    "created",
    "-created",
    "last_update",
    "-last_update",
    "title",
    "-title",
    "domain",
    "-domain",
];

/// Tool to search bookmarks
pub struct SearchBookmarksTool {
    client: RaindropClient,
}

impl SearchBookmarksTool {
    pub fn new(client: RaindropClient) -> Self {
        Self { client }
    }
}

/// Validated arguments of `search-bookmarks`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchBookmarksArgs {
    pub query: String,
    pub tags: Option<Vec<String>>,
    pub page: Option<u32>,
    pub perpage: Option<u32>,
    pub sort: Option<SortOrder>,
    pub collection: Option<i64>,
    pub word: Option<bool>,
}

impl SearchBookmarksArgs {
    pub fn parse(arguments: &serde_json::Value) -> ToolResult<Self> {
        let mut args = Arguments::new(arguments);

        let query = args.required_non_empty_string("query");
        let tags = args.optional_string_list("tags");
        let page = args.optional_integer("page", Some(0), Some(i64::from(u32::MAX)));
        let perpage = args.optional_integer("perpage", Some(1), Some(MAX_PER_PAGE));
        let sort = args.optional_enum("sort", &SORT_KEYS);
        let collection = args.optional_integer("collection", None, None);
        let word = args.optional_bool("word");

        args.finish()?;
        Ok(Self {
            query: query.unwrap_or_default(),
            tags,
            page: page.and_then(|p| u32::try_from(p).ok()),
            perpage: perpage.and_then(|p| u32::try_from(p).ok()),
            sort: sort.and_then(|s| s.parse().ok()),
            collection,
            word,
        })
    }

    /// Collection to search (0 = all) and the query string.
    pub fn to_request(&self) -> (i64, SearchQuery) {
        let mut query = SearchQuery::new(self.query.clone());
        if let Some(tags) = &self.tags {
            query = query.with_tags(tags.as_slice());
        }
        query.page = self.page;
        query.perpage = self.perpage;
        query.sort = self.sort;
        query.word = self.word;

        (self.collection.unwrap_or(0), query)
    }
}

/// Page shown in the results header: the zero-based requested page plus one.
pub fn display_page(page: Option<u32>) -> u64 {
    u64::from(page.unwrap_or(0)) + 1
}

fn format_bookmark<Tz>(item: &Bookmark, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let tags = match item.tags.as_deref() {
        Some(tags) if !tags.is_empty() => tags.join(", "),
        _ => "No tags".to_string(),
    };

    format!(
        "\nTitle: {}\nURL: {}\nTags: {}\nCreated: {}\nLast Updated: {}\n{}",
        item.title,
        item.link,
        tags,
        format_timestamp(&item.created, tz),
        format_timestamp(&item.last_update, tz),
        BLOCK_SEPARATOR
    )
}

pub fn format_search_results<Tz>(response: &SearchResponse, page: Option<u32>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if response.items.is_empty() {
        return NO_RESULTS.to_string();
    }

    let blocks = response
        .items
        .iter()
        .map(|item| format_bookmark(item, tz))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Found {} total bookmarks (showing {} on page {}):\n{}",
        response.count,
        response.items.len(),
        display_page(page),
        blocks
    )
}

#[async_trait::async_trait]
impl Tool for SearchBookmarksTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: NAME.to_string(),
            description: "Search through your Raindrop.io bookmarks".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "query": json_schema_string("Search query"),
                    "tags": json_schema_array(
                        serde_json::json!({"type": "string"}),
                        "Filter by tags (optional)"
                    ),
                    "page": json_schema_number("Page number (0-based, optional)"),
                    "perpage": json_schema_number("Items per page (1-50, optional)"),
                    "sort": json_schema_enum(
                        &SORT_KEYS,
                        "Sort order (optional). Prefix with - for descending order."
                    ),
                    "collection": json_schema_number(
                        "Collection ID to search in (optional, 0 for all collections)"
                    ),
                    "word": json_schema_boolean("Whether to match exact words only (optional)")
                }),
                vec!["query"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> ToolResult<CallToolResult> {
        let args = SearchBookmarksArgs::parse(&arguments)?;
        let (collection_id, query) = args.to_request();

        let response = self
            .client
            .raindrops()
            .search(collection_id, &query)
            .await?;
        info!(
            collection = collection_id,
            total = response.count,
            returned = response.items.len(),
            "Bookmark search finished"
        );

        Ok(CallToolResult::text(format_search_results(
            &response, args.page, &Local,
        )))
    }
}
