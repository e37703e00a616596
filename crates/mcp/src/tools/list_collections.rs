// list-collections: show the account's collections

use crate::error::ToolResult;
use crate::format::{format_timestamp, BLOCK_SEPARATOR};
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, Tool};
use crate::validation::Arguments;
use chrono::{Local, TimeZone};
use raindrop_sdk::{Collection, CollectionsResponse, RaindropClient};
use tracing::info;

pub const NAME: &str = "list-collections";

pub const NO_COLLECTIONS: &str = "No collections found.";

/// Tool to list collections
pub struct ListCollectionsTool {
    client: RaindropClient,
}

impl ListCollectionsTool {
    pub fn new(client: RaindropClient) -> Self {
        Self { client }
    }
}

fn format_collection<Tz>(collection: &Collection, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let parent = collection
        .parent
        .map(|p| p.id.to_string())
        .unwrap_or_else(|| "None".to_string());

    format!(
        "\nName: {}\nID: {}\nCount: {} bookmarks\nParent: {}\nCreated: {}\n{}",
        collection.title,
        collection.id,
        collection.count,
        parent,
        format_timestamp(&collection.created, tz),
        BLOCK_SEPARATOR
    )
}

pub fn format_collections<Tz>(response: &CollectionsResponse, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if response.items.is_empty() {
        return NO_COLLECTIONS.to_string();
    }

    let blocks = response
        .items
        .iter()
        .map(|c| format_collection(c, tz))
        .collect::<Vec<_>>()
        .join("\n");

    format!("Found {} collections:\n{}", response.items.len(), blocks)
}

#[async_trait::async_trait]
impl Tool for ListCollectionsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: NAME.to_string(),
            description: "List all your Raindrop.io collections".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> ToolResult<CallToolResult> {
        // No fields, but a non-object payload is still rejected.
        Arguments::new(&arguments).finish()?;

        let response = self.client.collections().list().await?;
        info!(count = response.items.len(), "Collections listed");

        Ok(CallToolResult::text(format_collections(&response, &Local)))
    }
}
