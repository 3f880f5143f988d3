use thiserror::Error;

/// Input files that parse but do not describe a usable dataset.
#[derive(Error, Debug)]
pub enum LoadError {
    /// A hierarchy row without the three Type / Depth / Parent columns
    #[error("line {line}: expected 3 tab-separated columns, found {found}")]
    MissingColumns { line: u64, found: usize },

    /// A hierarchy row whose depth is not a non-negative integer
    #[error("line {line}: invalid depth '{value}' for type '{type_name}'")]
    InvalidDepth {
        line: u64,
        type_name: String,
        value: String,
    },

    #[error("type hierarchy '{0}' contains no types")]
    EmptyHierarchy(String),

    #[error("'{0}' does not contain a JSON array of questions")]
    NotAnArray(String),
}
