// Tool trait, registry and JSON schema helpers

use crate::error::{ToolError, ToolResult};
use crate::protocol::{CallToolResult, ToolSchema};
use std::sync::Arc;

/// Tool executor trait
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool schema for MCP
    fn schema(&self) -> ToolSchema;

    /// Validate arguments, call the API and format the answer
    async fn execute(&self, arguments: serde_json::Value) -> ToolResult<CallToolResult>;
}

/// Registry of available tools.
///
/// Listing keeps registration order; calls are resolved by name.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool. A tool with the same name replaces the earlier one in place.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.schema().name;
        match self.tools.iter().position(|t| t.schema().name == name) {
            Some(index) => self.tools[index] = tool,
            None => self.tools.push(tool),
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.schema().name == name).cloned()
    }

    /// List all tool schemas
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        self.tools.iter().map(|t| t.schema()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Look up `name` and run it.
    pub async fn call(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> ToolResult<CallToolResult> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        tool.execute(arguments).await
    }
}

// Helper functions for creating tool schemas

pub fn json_schema_object(properties: serde_json::Value, required: Vec<&str>) -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "description": description
    })
}

pub fn json_schema_enum(values: &[&str], description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "enum": values,
        "description": description
    })
}

pub fn json_schema_number(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "number",
        "description": description
    })
}

pub fn json_schema_boolean(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "boolean",
        "description": description
    })
}

pub fn json_schema_array(items: serde_json::Value, description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "array",
        "items": items,
        "description": description
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct EchoTool {
        name: &'static str,
        description: &'static str,
    }

    #[async_trait::async_trait]
    impl Tool for EchoTool {
        fn schema(&self) -> ToolSchema {
            ToolSchema {
                name: self.name.to_string(),
                description: self.description.to_string(),
                input_schema: json_schema_object(json!({}), vec![]),
            }
        }

        async fn execute(&self, arguments: serde_json::Value) -> ToolResult<CallToolResult> {
            Ok(CallToolResult::text(arguments.to_string()))
        }
    }

    fn echo(name: &'static str, description: &'static str) -> Arc<dyn Tool> {
        Arc::new(EchoTool { name, description })
    }

    #[test]
    fn test_listing_keeps_registration_order() {
        let mut registry = ToolRegistry::new();
        assert!(registry.is_empty());
        registry.register(echo("b", "second"));
        registry.register(echo("a", "first"));
        registry.register(echo("c", "third"));

        let names: Vec<String> = registry.list_schemas().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_reregistering_replaces_in_place() {
        let mut registry = ToolRegistry::new();
        registry.register(echo("a", "old"));
        registry.register(echo("b", "other"));
        registry.register(echo("a", "new"));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.list_schemas()[0].description, "new");
    }

    #[tokio::test]
    async fn test_call_dispatches_by_name() {
        let mut registry = ToolRegistry::new();
        registry.register(echo("a", "echo"));

        let result = registry.call("a", json!({"x": 1})).await.unwrap();
        assert_eq!(result.content[0].as_text(), r#"{"x":1}"#);
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let registry = ToolRegistry::new();

        let err = registry.call("missing", json!({})).await.unwrap_err();
        assert!(matches!(err, ToolError::UnknownTool(ref name) if name == "missing"));
        assert_eq!(err.to_string(), "Unknown tool: missing");
    }

    #[test]
    fn test_schema_helpers() {
        assert_eq!(
            json_schema_array(json!({"type": "string"}), "Tags"),
            json!({"type": "array", "items": {"type": "string"}, "description": "Tags"})
        );
        assert_eq!(
            json_schema_enum(&["a", "b"], "Pick"),
            json!({"type": "string", "enum": ["a", "b"], "description": "Pick"})
        );
    }
}
