//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes message analysis and rewriting over the MCP protocol so AI
//! assistants can check a draft before sending it on a user's behalf.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer — it wraps the same core library that
//! the CLI commands use. Each `#[tool]` method delegates to `tactful-core`
//! rather than implementing business logic directly.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use tactful_core::{Lexicon, analyze_with, apply_single_replacement, generate_supportive_version_with};

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

/// Parameters for the `analyze_message` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeMessageParams {
    /// The message text to analyze.
    pub text: String,
}

/// Parameters for the `apply_replacement` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ApplyReplacementParams {
    /// The message text.
    pub text: String,
    /// Text to replace (literal, case-insensitive), usually an issue's `matched_text`.
    pub matched_text: String,
    /// Replacement, usually an issue's `suggested_replacement`. Empty deletes.
    #[serde(default)]
    pub replacement: String,
}

/// Parameters for the `generate_supportive_version` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SupportiveVersionParams {
    /// The message text to rewrite.
    pub text: String,
}

#[derive(Serialize)]
struct Rewritten<'a> {
    text: &'a str,
    changed: bool,
}

/// MCP server exposing message analysis to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ProjectServer {
    lexicon: Arc<Lexicon>,
    max_input: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new(Lexicon::builtin().clone(), Some(tactful_core::DEFAULT_MAX_INPUT_BYTES))
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl ProjectServer {
    /// Create a new MCP server instance.
    pub fn new(lexicon: Lexicon, max_input: Option<usize>) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
            max_input,
            tool_router: Self::tool_router(),
        }
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        match self.max_input {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
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
            to_json(&info)?
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

    /// Score a message.
    #[tool(
        description = "Score a message for respectfulness and mental-health impact (0-100 each). Returns issues with suggested replacements, tips, and positive notes. Returns null for empty text."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_message(
        &self,
        Parameters(params): Parameters<AnalyzeMessageParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_message", "executing MCP tool");
        self.check_size(&params.text)?;

        let report = analyze_with(&params.text, &self.lexicon);
        let json = to_json(&report)?;

        tracing::info!(
            tool = "analyze_message",
            score = report.as_ref().map(|r| r.score),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Replace one term.
    #[tool(
        description = "Replace every case-insensitive occurrence of matched_text (taken literally) with replacement."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn apply_replacement(
        &self,
        Parameters(params): Parameters<ApplyReplacementParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "apply_replacement", "executing MCP tool");
        self.check_size(&params.text)?;

        let text = apply_single_replacement(&params.text, &params.matched_text, &params.replacement);
        let json = to_json(&Rewritten {
            changed: text != params.text,
            text: &text,
        })?;

        tracing::info!(tool = "apply_replacement", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Rewrite the whole message.
    #[tool(
        description = "Rewrite a message in a more supportive tone: replaces every flagged term and adds empathetic framing when the scores are low."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn generate_supportive_version(
        &self,
        Parameters(params): Parameters<SupportiveVersionParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "generate_supportive_version", "executing MCP tool");
        self.check_size(&params.text)?;

        let text = generate_supportive_version_with(&params.text, &self.lexicon);
        let json = to_json(&Rewritten {
            changed: text != params.text,
            text: &text,
        })?;

        tracing::info!(tool = "generate_supportive_version", "MCP tool completed");
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
                "{} MCP server. Analyze a draft message with analyze_message, then fix single \
                 issues with apply_replacement or rewrite it with generate_supportive_version.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
