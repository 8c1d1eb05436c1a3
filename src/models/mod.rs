//! Models module for the SDK
//!
//! Defines the core data structures shared by inference, configuration,
//! filtering and code generation.

pub mod column_config;
pub mod dataset;
pub mod semantic_type;

pub use column_config::{ColumnConfig, FilterOption, OptionsMode};
pub use dataset::{Dataset, RawRecord};
pub use semantic_type::{FilterKind, SemanticType};

/// Per-column visibility, keyed by column id.
///
/// Kept key-consistent with the column collection: seeded on dataset
/// replacement, pruned on column deletion. A `BTreeMap` so that anything
/// derived from it (the generated initial-visibility literal in
/// particular) is byte-deterministic.
pub type VisibilityState = std::collections::BTreeMap<String, bool>;
