//! sltable: Column Selection, Sorting and Rendering for Resource Listings
//!
//! A static field registry declares, per entity kind, which columns exist and
//! where each lives in a remote record. A listing validates the requested
//! columns and sort key, derives the minimal field mask, fetches records
//! through a [`source::RecordSource`], sorts them, projects each into display
//! strings, and renders a table or JSON.

pub mod cli;
pub mod config;
pub mod error;
pub mod listing;
pub mod logging;
pub mod mask;
pub mod project;
pub mod record;
pub mod registry;
pub mod render;
pub mod select;
pub mod sort;
pub mod source;
pub mod types;

pub use error::{ApiError, ProjectionError, RegistryError, SourceError};
pub use listing::{ListPlan, ListRequest, ListingService};
pub use types::{ColumnName, EntityKind, RenderMode, SortKey};
