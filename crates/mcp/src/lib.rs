// MCP (Model Context Protocol) server for Raindrop.io
// Exposes bookmark creation, search and collection listing as tools

pub mod config;
pub mod error;
pub mod format;
pub mod protocol;
pub mod server;
pub mod tools;
pub mod validation;

pub use config::McpConfig;
pub use error::{ToolError, ToolResult};
pub use server::McpServer;
