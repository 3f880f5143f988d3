// ============================================================
// Layer 4 - Input Pipeline
// ============================================================
// Everything between the files on disk and the domain types.
//
//   hierarchy .tsv ──► load_type_hierarchy ──► TypeHierarchy
//   gold .json     ──► load_ground_truth   ──► GroundTruth
//   system .json   ──► load_system_output  ──► Vec<Prediction>
//
// All loaders tolerate a UTF-8 byte order mark, which some of the
// published Wikidata files carry.

/// Structured input-format errors
pub mod error;

/// Text clean-up applied before parsing
pub mod preprocessor;

/// Ordered, id-indexed collection of gold questions
pub mod dataset;

/// File readers for the three input kinds
pub mod loader;
