// ============================================================
// Layer 4 - Text Preprocessor
// ============================================================
// Small clean-up steps applied to raw file contents and to type
// names before they reach the domain layer.
//
//   1. Drop a leading byte order mark (U+FEFF), which Windows
//      tools prepend to UTF-8 JSON exports
//   2. Trim stray whitespace around type names, so "dbo:Person "
//      and "dbo:Person" compare equal

const BOM: char = '\u{FEFF}';

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Returns the text without a leading byte order mark.
    pub fn strip_bom<'a>(&self, text: &'a str) -> &'a str {
        text.strip_prefix(BOM).unwrap_or(text)
    }

    /// Trims each type name and drops the ones left empty.
    pub fn clean_types(&self, types: Vec<String>) -> Vec<String> {
        types
            .into_iter()
            .filter_map(|t| {
                let trimmed = t.trim();
                if trimmed.is_empty() {
                    None
                } else if trimmed.len() == t.len() {
                    Some(t)
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_bom() {
        let p = Preprocessor::new();
        assert_eq!(p.strip_bom("\u{FEFF}[1, 2]"), "[1, 2]");
        assert_eq!(p.strip_bom("[1, 2]"), "[1, 2]");
    }

    #[test]
    fn test_bom_only_stripped_at_start() {
        let p = Preprocessor::new();
        assert_eq!(p.strip_bom("a\u{FEFF}"), "a\u{FEFF}");
    }

    #[test]
    fn test_clean_types_trims_and_drops_blanks() {
        let p = Preprocessor::new();
        let types = vec![
            " dbo:Person".to_string(),
            "".to_string(),
            "dbo:Agent".to_string(),
            "   ".to_string(),
        ];
        assert_eq!(p.clean_types(types), vec!["dbo:Person", "dbo:Agent"]);
    }
}
