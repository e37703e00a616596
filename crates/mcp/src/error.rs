// Error taxonomy for tool calls

use crate::protocol::JsonRpcError;
use crate::validation::Violation;
use raindrop_sdk::RaindropError;

pub type ToolResult<T> = Result<T, ToolError>;

/// Failure of a single tool call. Every variant reaches the caller as a
/// JSON-RPC error whose message is this type's `Display` output.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Required process configuration is missing.
    ///
    /// Raised while loading configuration at startup, before any request is
    /// read; the token is not looked up again per call.
    #[error("{0}")]
    Configuration(String),

    /// Arguments broke the tool's input contract; holds every violation.
    #[error("Invalid arguments: {}", join_violations(.0))]
    Validation(Vec<Violation>),

    /// The Raindrop API call failed.
    #[error(transparent)]
    Remote(#[from] RaindropError),

    /// No tool with this name is registered.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ToolError {
    pub fn to_rpc_error(&self) -> JsonRpcError {
        let code = match self {
            Self::Validation(_) => JsonRpcError::INVALID_PARAMS,
            Self::UnknownTool(_) => JsonRpcError::METHOD_NOT_FOUND,
            Self::Configuration(_) | Self::Remote(_) => JsonRpcError::INTERNAL_ERROR,
        };
        JsonRpcError::custom(code, self.to_string())
    }
}
