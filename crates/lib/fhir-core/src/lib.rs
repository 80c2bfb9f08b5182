//! Definition index and bundle loader for fhir-mcp.
//!
//! This crate owns the in-memory index over FHIR R5 StructureDefinitions,
//! derives element descriptors from raw snapshot elements, and provides the
//! one-time bundle loader the daemon runs before serving queries.

pub mod element;
pub mod index;
pub mod loader;
pub mod paths;
