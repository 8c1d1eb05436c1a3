//! Table Builder SDK - Shared library for the JSON table builder tool
//!
//! Provides the logic behind the browser-based table builder:
//! - JSON ingestion and validation (datasets as arrays of plain objects)
//! - Semantic type inference over sampled rows
//! - The mutable column configuration model the editor UI drives
//! - The filter predicate library used by the live preview
//! - Deterministic generation of the output source modules
//!
//! Everything is client-local and ephemeral: no server, no persistence,
//! single-threaded mutation.

pub mod config;
pub mod filters;
pub mod generate;
pub mod infer;
pub mod ingest;
pub mod models;

// Re-export commonly used types
pub use config::{auto_options, OptionField, TableModel};
pub use filters::{row_matches_global, FilterValue};
pub use generate::{CodeGenerator, GeneratedModules};
pub use infer::{classify_column, classify_value, detect_columns};
pub use ingest::{parse_dataset, sample_dataset, IngestError};
pub use models::{
    ColumnConfig, Dataset, FilterKind, FilterOption, OptionsMode, RawRecord, SemanticType,
    VisibilityState,
};
