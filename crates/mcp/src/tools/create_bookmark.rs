// create-bookmark: save a link to Raindrop.io

use crate::error::ToolResult;
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_array, json_schema_number, json_schema_object, json_schema_string, Tool,
};
use crate::validation::Arguments;
use raindrop_sdk::{CollectionRef, CreateBookmarkResponse, NewBookmark, RaindropClient};
use tracing::info;

pub const NAME: &str = "create-bookmark";

/// Tool to create a bookmark
pub struct CreateBookmarkTool {
    client: RaindropClient,
}

impl CreateBookmarkTool {
    pub fn new(client: RaindropClient) -> Self {
        Self { client }
    }
}

/// Validated arguments of `create-bookmark`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBookmarkArgs {
    pub url: String,
    pub title: Option<String>,
    pub tags: Option<Vec<String>>,
    pub collection: Option<i64>,
}

impl CreateBookmarkArgs {
    pub fn parse(arguments: &serde_json::Value) -> ToolResult<Self> {
        let mut args = Arguments::new(arguments);

        let url = args.required_url("url");
        let title = args.optional_string("title");
        let tags = args.optional_string_list("tags");
        let collection = args.optional_integer("collection", None, None);

        args.finish()?;
        Ok(Self {
            url: url.unwrap_or_default(),
            title,
            tags,
            collection,
        })
    }

    /// Request body; a missing collection means Unsorted (id 0).
    pub fn into_request(self) -> NewBookmark {
        NewBookmark {
            link: self.url,
            title: self.title,
            tags: self.tags,
            collection: CollectionRef::new(self.collection.unwrap_or(0)),
        }
    }
}

pub fn format_created(response: &CreateBookmarkResponse) -> String {
    format!("Bookmark created successfully: {}", response.item.link)
}

#[async_trait::async_trait]
impl Tool for CreateBookmarkTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: NAME.to_string(),
            description: "Create a new bookmark in Raindrop.io".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "url": json_schema_string("URL to bookmark"),
                    "title": json_schema_string("Title for the bookmark (optional)"),
                    "tags": json_schema_array(
                        serde_json::json!({"type": "string"}),
                        "Tags for the bookmark (optional)"
                    ),
                    "collection": json_schema_number("Collection ID to save to (optional)")
                }),
                vec!["url"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> ToolResult<CallToolResult> {
        let request = CreateBookmarkArgs::parse(&arguments)?.into_request();

        let response = self.client.raindrops().create(&request).await?;
        info!(link = %response.item.link, collection = request.collection.id, "Bookmark created");

        Ok(CallToolResult::text(format_created(&response)))
    }
}
