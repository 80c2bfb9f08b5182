//! MCP tool modules.
//!
//! Tools are grouped by domain: definition queries and contextual help for
//! navigating the index.

pub mod query;
mod context;
