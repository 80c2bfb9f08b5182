use fhir_core::index::QueryError;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::{FhirMcp, format, helpers};

/// Parameters for summarizing a resource definition.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetResourceDefinitionParams {
    pub resource_type: String,
}

/// Parameters for expanding a BackboneElement.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetBackboneElementParams {
    pub resource_type: String,
    pub path: String,
}

/// Parameters for searching elements by keyword.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SearchFhirElementsParams {
    pub keyword: String,
    pub limit: Option<usize>,
}

#[tool_router(router = tool_router_query, vis = "pub")]
impl FhirMcp {
    #[tool(
        description = "Return the top-level element list for a FHIR R5 resource type (e.g. 'Patient', 'Observation'). BackboneElement fields can be expanded with get_backbone_element."
    )]
    async fn get_resource_definition(
        &self,
        Parameters(params): Parameters<GetResourceDefinitionParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let text = match self.index().resource_summary(&params.resource_type) {
            Ok(summary) => format::resource_summary(&summary),
            Err(QueryError::UnknownResource(name)) => {
                format::unknown_resource(&name, &self.index().list_resources())
            }
            Err(err) => err.to_string(),
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(
        description = "Expand a BackboneElement within a FHIR R5 resource. Provide the resource type and the full dotted path (e.g. resource_type='Patient', path='Patient.contact')."
    )]
    async fn get_backbone_element(
        &self,
        Parameters(params): Parameters<GetBackboneElementParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let text = match self
            .index()
            .backbone_children(&params.resource_type, &params.path)
        {
            Ok(expansion) => {
                format::backbone_expansion(&params.resource_type, &params.path, &expansion)
            }
            Err(QueryError::UnknownResource(name)) => {
                format::unknown_resource(&name, &self.index().list_resources())
            }
            Err(err) => err.to_string(),
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(
        description = "Search across all FHIR R5 resource elements by keyword. Matches against the short description and definition fields."
    )]
    async fn search_fhir_elements(
        &self,
        Parameters(params): Parameters<SearchFhirElementsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        if params.keyword.trim().is_empty() {
            return Err(helpers::invalid_params("keyword is required"));
        }
        let limit = params.limit.unwrap_or(self.search_limit());
        if limit == 0 {
            return Err(helpers::invalid_params("limit must be positive"));
        }

        let results = self.index().search_elements(&params.keyword, limit);
        Ok(CallToolResult::success(vec![Content::text(
            format::search_results(&params.keyword, &results, limit),
        )]))
    }

    #[tool(description = "List every indexed resource type name.")]
    async fn list_resource_types(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::json(
            self.index().list_resources(),
        )?]))
    }
}
