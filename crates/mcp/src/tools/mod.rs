pub mod create_bookmark;
pub mod list_collections;
pub mod search_bookmarks;
mod registry;

pub use create_bookmark::CreateBookmarkTool;
pub use list_collections::ListCollectionsTool;
pub use search_bookmarks::SearchBookmarksTool;
pub use registry::{
    json_schema_array, json_schema_boolean, json_schema_enum, json_schema_number,
    json_schema_object, json_schema_string, Tool, ToolRegistry,
};

use raindrop_sdk::RaindropClient;
use std::sync::Arc;

/// Registry holding the three Raindrop tools in catalog order.
pub fn raindrop_registry(client: &RaindropClient) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(CreateBookmarkTool::new(client.clone())));
    registry.register(Arc::new(SearchBookmarksTool::new(client.clone())));
    registry.register(Arc::new(ListCollectionsTool::new(client.clone())));
    registry
}
