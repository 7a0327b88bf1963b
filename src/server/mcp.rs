//! MCP server over stdio
//!
//! Publishes the tool catalog through `tools/list` and routes `tools/call`
//! into the [`Dispatcher`]. Not-found and invalid-argument outcomes are
//! ordinary tool results; only storage failures become protocol errors.

use std::sync::Arc;
use crate::tools::{self, Dispatcher};
use mcp_sdk_rs::server::{Server, ServerHandler};
use mcp_sdk_rs::types::{
    Tool, ToolResult, ListToolsResult, MessageContent,
    Implementation, ClientCapabilities, ServerCapabilities
};
use mcp_sdk_rs::error::ErrorCode;
use mcp_sdk_rs::transport::stdio::StdioTransport;
use mcp_sdk_rs::error::Error;
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::mpsc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use serde::Deserialize;

#[derive(Deserialize)]
struct CallToolRequest {
    name: String,
    arguments: Option<Value>,
}

#[derive(Clone)]
pub struct McpService {
    dispatcher: Dispatcher,
}

impl McpService {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub async fn run_stdio(&self) -> anyhow::Result<()> {
        let (read_tx, read_rx) = mpsc::channel::<String>(32);
        let (write_tx, mut write_rx) = mpsc::channel::<String>(32);

        // Stdin reader
        tokio::spawn(async move {
            let stdin = tokio::io::stdin();
            let mut reader = BufReader::new(stdin).lines();
            while let Ok(Some(line)) = reader.next_line().await {
                if read_tx.send(line).await.is_err() {
                    break;
                }
            }
        });

        // Stdout writer
        tokio::spawn(async move {
            let mut stdout = tokio::io::stdout();
            while let Some(msg) = write_rx.recv().await {
                let _ = stdout.write_all(msg.as_bytes()).await;
                let _ = stdout.write_all(b"\n").await;
                let _ = stdout.flush().await;
            }
        });

        tracing::info!("MCP server listening on stdio");
        let transport = StdioTransport::new(read_rx, write_tx);
        let server = Server::new(Arc::new(transport), Arc::new(self.clone()));
        server.start().await?;
        Ok(())
    }

    fn list_tools(&self) -> Result<Value, Error> {
        let tools = tools::catalog()
            .into_iter()
            .map(|spec| -> Result<Tool, Error> {
                Ok(Tool {
                    name: spec.name.to_string(),
                    description: spec.description.to_string(),
                    input_schema: serde_json::from_value(spec.input_schema)
                        .map_err(|e| Error::protocol(ErrorCode::ParseError, e.to_string()))?,
                    annotations: None,
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        let result = ListToolsResult { tools, next_cursor: None };
        serde_json::to_value(result).map_err(|e| Error::protocol(ErrorCode::InternalError, e.to_string()))
    }

    fn call_tool(&self, params: Option<Value>) -> Result<Value, Error> {
        let req: CallToolRequest = params.and_then(|v| serde_json::from_value(v).ok())
            .ok_or(Error::protocol(ErrorCode::InvalidParams, "Missing params"))?;

        let response = self.dispatcher.call(&req.name, req.arguments).map_err(|e| match e {
            crate::Error::UnknownTool(name) => Error::protocol(ErrorCode::MethodNotFound, name),
            other => Error::protocol(ErrorCode::InternalError, other.to_string()),
        })?;

        // Plain clients read `content`; structured ones get the full response
        let result = ToolResult {
            content: vec![MessageContent::Text { text: response.message.clone() }],
            structured_content: Some(
                serde_json::to_value(&response)
                    .map_err(|e| Error::protocol(ErrorCode::InternalError, e.to_string()))?,
            ),
        };

        serde_json::to_value(result).map_err(|e| Error::protocol(ErrorCode::InternalError, e.to_string()))
    }
}

#[async_trait]
impl ServerHandler for McpService {
    async fn initialize(
        &self,
        _implementation: Implementation,
        _capabilities: ClientCapabilities
    ) -> Result<ServerCapabilities, Error> {
        Ok(ServerCapabilities::default())
    }

    async fn shutdown(&self) -> Result<(), Error> {
        Ok(())
    }

    async fn handle_method(&self, method: &str, params: Option<Value>) -> Result<Value, Error> {
        match method {
            "tools/list" => self.list_tools(),
            "tools/call" => {
                // SQLite calls block; keep them off the async workers
                let service = self.clone();
                tokio::task::spawn_blocking(move || service.call_tool(params))
                    .await
                    .map_err(|e| Error::protocol(ErrorCode::InternalError, e.to_string()))?
            }
            _ => Err(Error::protocol(ErrorCode::MethodNotFound, method.to_string()))
        }
    }
}
