//! Document model and schema constants for fhir-mcp.
//!
//! This crate defines the serde view of the FHIR R5 definitions bundle shared
//! by the loader, index, and MCP layer, plus the vocabulary constants those
//! components filter and format with.

pub mod models;
pub mod schema;

pub use models::*;
