//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes review analysis to AI assistants over stdio. Each `#[tool]`
//! method delegates to `veracity-core`; no scoring happens here.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use veracity_core::{Analyzer, DEFAULT_MAX_INPUT_BYTES};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_review` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeReviewParams {
    /// The review text to analyze.
    pub text: String,
}

/// Parameters for the `scan_patterns` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ScanPatternsParams {
    /// The review text to scan.
    pub text: String,
}

/// MCP server exposing review analysis.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    analyzer: Arc<Analyzer>,
    max_input_bytes: Option<usize>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new(Analyzer::new(), Some(DEFAULT_MAX_INPUT_BYTES))
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a server around `analyzer`, rejecting texts over `max_input_bytes`.
    pub fn new(analyzer: Analyzer, max_input_bytes: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            analyzer: Arc::new(analyzer),
            max_input_bytes,
        }
    }

    fn check_input(&self, text: &str) -> Result<(), McpError> {
        if let Some(max) = self.max_input_bytes
            && text.len() > max
        {
            return Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            ));
        }
        Ok(())
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Analyze a review for authenticity and sentiment.
    #[tool(
        description = "Score a review for authenticity (isFake, confidence, reasons), sentiment, and lexical metrics"
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.0.text.len()))]
    fn analyze_review(
        &self,
        params: Parameters<AnalyzeReviewParams>,
    ) -> Result<CallToolResult, McpError> {
        let Parameters(params) = params;
        tracing::debug!(tool = "analyze_review", "executing MCP tool");
        self.check_input(&params.text)?;

        let report = self.analyzer.analyze(&params.text);
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "analyze_review",
            is_fake = report.is_fake(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Count detector hits in a review.
    #[tool(description = "Count matches of each review pattern detector (promotional, emotional, pronouns, capitals, punctuation, fake tells)")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.0.text.len()))]
    fn scan_patterns(
        &self,
        params: Parameters<ScanPatternsParams>,
    ) -> Result<CallToolResult, McpError> {
        let Parameters(params) = params;
        tracing::debug!(tool = "scan_patterns", "executing MCP tool");
        self.check_input(&params.text)?;

        let report = self.analyzer.matcher().scan(&params.text);
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(tool = "scan_patterns", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_review to score review text for authenticity and sentiment.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
