//! MCP server implementation for fhir-mcp.
//!
//! This crate wires the definition index into rmcp tool handlers and exposes
//! the MCP-facing query surface plus the transport runners.

mod format;
mod helpers;
mod tools;
pub mod server;

use std::sync::Arc;

use fhir_core::index::DefinitionIndex;
use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};

/// Recognized default for the search result cap.
pub const DEFAULT_SEARCH_LIMIT: usize = 30;

const SERVER_INSTRUCTIONS: &str = r"fhir-mcp provides read-only MCP tools over the FHIR R5 StructureDefinitions.

Workflow:
1. Call `get_resource_definition` with a resource type (e.g. 'Patient', 'Observation')
   to see its top-level elements. Matching is case-insensitive.
2. Elements typed BackboneElement are nested groups; expand them with
   `get_backbone_element`, passing the resource type and the full dotted path
   (e.g. resource_type='Patient', path='Patient.contact').
3. Use `search_fhir_elements` to find elements by keyword across every resource;
   it matches short descriptions and definition texts.
4. `list_resource_types` returns every indexed resource type name.

Notes:
- Cardinality renders as `min..max`, with `*` meaning unbounded.
- Polymorphic elements carry the `[x]` marker in their path.
- Search results are capped; refine the keyword when the cap is reached.
- `health` returns `ok`.";

/// MCP server wrapper around the definition index and tool routers.
#[derive(Clone)]
pub struct FhirMcp {
    tool_router: ToolRouter<Self>,
    index: Arc<DefinitionIndex>,
    search_limit: usize,
}

impl FhirMcp {
    /// Creates a new server owning the index.
    #[must_use]
    pub fn new(index: DefinitionIndex, search_limit: usize) -> Self {
        Self::with_index(Arc::new(index), search_limit)
    }

    /// Creates a new server using a shared index handle.
    #[must_use]
    pub fn with_index(index: Arc<DefinitionIndex>, search_limit: usize) -> Self {
        let tool_router =
            Self::tool_router_core() + Self::tool_router_query() + Self::tool_router_context();
        Self {
            tool_router,
            index,
            search_limit,
        }
    }

    pub(crate) fn index(&self) -> &DefinitionIndex {
        &self.index
    }

    pub(crate) const fn search_limit(&self) -> usize {
        self.search_limit
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl FhirMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl ServerHandler for FhirMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
