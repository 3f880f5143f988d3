// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Pure Rust types describing the SMART task: questions, answer
// categories, system predictions and the DBpedia type hierarchy.
//
// Rules for this layer:
//   - NO file I/O
//   - NO printing
//   - Only plain structs, enums, and traits
//
// Every other layer speaks in these types, so the scorers can be
// unit tested without touching the filesystem.

// Gold questions, predictions, categories and ids
pub mod question;

// The DBpedia ontology class tree
pub mod hierarchy;

// Core abstractions shared by both evaluation tracks
pub mod traits;
