// MCP server: newline-delimited JSON-RPC 2.0 over stdio
//
// Every request runs on its own task, so a slow API call never stops the
// reader from picking up the next line. Responses funnel through one writer
// task and may leave in a different order than requests arrived.

use crate::protocol::{
    CallToolParams, InitializeParams, InitializeResult, JsonRpcError, JsonRpcRequest,
    JsonRpcResponse, ListToolsResult, ServerCapabilities, ServerInfo, ToolsCapability,
    PROTOCOL_VERSION,
};
use crate::tools::ToolRegistry;
use anyhow::Result;
use bytes::{Bytes, BytesMut};
use futures_util::{SinkExt, StreamExt};
use serde::Serialize;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::codec::{
    AnyDelimiterCodec, AnyDelimiterCodecError, Decoder, FramedRead, FramedWrite, LinesCodec,
};
use tracing::{debug, error, info, warn};

pub const SERVER_NAME: &str = "raindrop-mcp";

/// Longest accepted input line, newline excluded.
pub const MAX_MESSAGE_BYTES: usize = 4 * 1024 * 1024;

/// One unit read off the input stream.
#[derive(Debug, PartialEq)]
enum Frame {
    Line(Bytes),
    /// A line longer than the limit; its bytes are skipped up to the next newline.
    Oversized,
}

/// Splits input on `\n` without decoding it, so a bad line never ends the stream.
struct MessageFramer {
    lines: AnyDelimiterCodec,
}

impl MessageFramer {
    fn new(max_length: usize) -> Self {
        Self {
            lines: AnyDelimiterCodec::new_with_max_length(
                b"\n".to_vec(),
                b"\n".to_vec(),
                max_length,
            ),
        }
    }

    fn frame(
        result: Result<Option<Bytes>, AnyDelimiterCodecError>,
    ) -> Result<Option<Frame>, AnyDelimiterCodecError> {
        match result {
            Ok(line) => Ok(line.map(Frame::Line)),
            Err(AnyDelimiterCodecError::MaxChunkLengthExceeded) => Ok(Some(Frame::Oversized)),
            Err(e) => Err(e),
        }
    }
}

impl Decoder for MessageFramer {
    type Item = Frame;
    type Error = AnyDelimiterCodecError;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<Frame>, Self::Error> {
        Self::frame(self.lines.decode(buf))
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Frame>, Self::Error> {
        Self::frame(self.lines.decode_eof(buf))
    }
}

#[derive(Clone)]
pub struct McpServer {
    registry: Arc<ToolRegistry>,
    max_message_bytes: usize,
}

fn to_result(value: impl Serialize) -> Result<serde_json::Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            max_message_bytes: MAX_MESSAGE_BYTES,
        }
    }

    /// Override the input line limit.
    pub fn with_max_message_bytes(mut self, max_message_bytes: usize) -> Self {
        self.max_message_bytes = max_message_bytes;
        self
    }

    /// Serve on the process's stdin/stdout until stdin closes.
    pub async fn start(&self) -> Result<()> {
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serve on any line-oriented byte stream pair.
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let mut frames = FramedRead::new(reader, MessageFramer::new(self.max_message_bytes));
        let (response_tx, mut response_rx) = mpsc::unbounded_channel::<JsonRpcResponse>();

        let writer_task = tokio::spawn(async move {
            let mut sink = FramedWrite::new(writer, LinesCodec::new());
            while let Some(response) = response_rx.recv().await {
                match serde_json::to_string(&response) {
                    Ok(json) => sink.send(json).await?,
                    Err(e) => error!(error = %e, "Failed to serialize response"),
                }
            }
            Ok::<_, tokio_util::codec::LinesCodecError>(())
        });

        if self.registry.is_empty() {
            warn!("No tools registered");
        }
        info!(tools = self.registry.len(), "MCP server listening on stdio");

        let mut in_flight = JoinSet::new();
        let mut read_error = None;
        while let Some(frame) = frames.next().await {
            let line = match frame {
                Ok(Frame::Line(line)) => line,
                Ok(Frame::Oversized) => {
                    warn!(limit = self.max_message_bytes, "Discarding oversized message");
                    let _ = response_tx.send(JsonRpcResponse::error(
                        serde_json::Value::Null,
                        JsonRpcError::invalid_request(format!(
                            "message exceeds {} bytes",
                            self.max_message_bytes
                        )),
                    ));
                    continue;
                }
                Err(e) => {
                    error!(error = %e, "Failed to read input");
                    read_error = Some(e);
                    break;
                }
            };

            let message = match std::str::from_utf8(&line) {
                Ok(message) => message.trim(),
                Err(e) => {
                    warn!(error = %e, "Received message that is not UTF-8");
                    let _ = response_tx.send(JsonRpcResponse::error(
                        serde_json::Value::Null,
                        JsonRpcError::parse_error(e),
                    ));
                    continue;
                }
            };
            if message.is_empty() {
                continue;
            }

            let server = self.clone();
            let response_tx = response_tx.clone();
            let message = message.to_string();
            in_flight.spawn(async move {
                if let Some(response) = server.handle_message(&message).await {
                    // Only fails once the writer is gone, at which point nobody is listening.
                    let _ = response_tx.send(response);
                }
            });

            while in_flight.try_join_next().is_some() {}
        }

        debug!(pending = in_flight.len(), "Input closed, draining in-flight requests");
        while in_flight.join_next().await.is_some() {}
        drop(response_tx);
        writer_task.await??;

        if let Some(e) = read_error {
            return Err(e.into());
        }

        info!("MCP server stopped");
        Ok(())
    }

    /// Handle one raw JSON-RPC message. Notifications produce no response.
    pub async fn handle_message(&self, line: &str) -> Option<JsonRpcResponse> {
        let value: serde_json::Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Received malformed JSON");
                return Some(JsonRpcResponse::error(
                    serde_json::Value::Null,
                    JsonRpcError::parse_error(e),
                ));
            }
        };

        let id = value.get("id").cloned().unwrap_or(serde_json::Value::Null);
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => return Some(JsonRpcResponse::error(id, JsonRpcError::invalid_request(e))),
        };

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                id,
                JsonRpcError::invalid_request("jsonrpc must be \"2.0\""),
            ));
        }

        if request.is_notification() {
            debug!(method = %request.method, "Notification received");
            return None;
        }

        let result = self.handle_request(&request.method, request.params).await;
        Some(match result {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::error(id, error),
        })
    }

    async fn handle_request(
        &self,
        method: &str,
        params: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, JsonRpcError> {
        debug!(method = %method, "Request received");

        match method {
            "initialize" => self.handle_initialize(params),
            "ping" => Ok(serde_json::json!({})),
            "tools/list" => to_result(ListToolsResult {
                tools: self.registry.list_schemas(),
            }),
            "tools/call" => self.handle_tools_call(params).await,
            _ => Err(JsonRpcError::method_not_found(method)),
        }
    }

    fn handle_initialize(
        &self,
        params: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, JsonRpcError> {
        let params: InitializeParams = params
            .and_then(|p| serde_json::from_value(p).ok())
            .unwrap_or_default();

        if let Some(client) = &params.client_info {
            info!(
                client = %client.name,
                client_version = %client.version,
                protocol = params.protocol_version.as_deref().unwrap_or("unknown"),
                "Client connected"
            );
        }

        to_result(InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        })
    }

    async fn handle_tools_call(
        &self,
        params: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, JsonRpcError> {
        let params: CallToolParams = params
            .ok_or_else(|| JsonRpcError::invalid_params("Missing params for tools/call"))
            .and_then(|p| {
                serde_json::from_value(p).map_err(|e| {
                    JsonRpcError::invalid_params(format!("Invalid params for tools/call: {}", e))
                })
            })?;

        match self.registry.call(&params.name, params.arguments).await {
            Ok(result) => {
                debug!(tool = %params.name, "Tool call succeeded");
                to_result(result)
            }
            Err(e) => {
                warn!(tool = %params.name, error = %e, "Tool call failed");
                Err(e.to_rpc_error())
            }
        }
    }
}
