// ============================================================
// Layer 4 - Input Loaders
// ============================================================
// Reads the three SMART input files.
//
// Type hierarchy (TSV, header row skipped):
//   Type            Depth   Parent
//   dbo:Agent       1       owl:Thing
//   dbo:Person      2       dbo:Agent
//
// Ground truth / system output (JSON array):
//   [{"id": "dbpedia_1", "question": "...", "category": "resource",
//     "type": ["dbo:Person", "dbo:Agent"]}, ...]
//
// Bad records in the JSON files are reported with a warning and
// skipped; a malformed hierarchy row is a hard error because every
// resource score depends on it.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::data::{
    dataset::{Duplicates, GroundTruth},
    error::LoadError,
    preprocessor::Preprocessor,
};
use crate::domain::hierarchy::TypeHierarchy;
use crate::domain::question::{Category, GoldQuestion, Prediction};

// ─── Type hierarchy ───────────────────────────────────────────────────────────
pub fn load_type_hierarchy(path: &Path) -> Result<TypeHierarchy> {
    tracing::info!("Loading type hierarchy from {}", path.display());

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_path(path)
        .with_context(|| format!("Cannot open type hierarchy '{}'", path.display()))?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result
            .with_context(|| format!("Cannot read type hierarchy '{}'", path.display()))?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() < 3 {
            return Err(LoadError::MissingColumns {
                line,
                found: record.len(),
            }
            .into());
        }

        let type_name = record[0].trim().to_string();
        let depth_field = record[1].trim();
        let depth = depth_field.parse::<usize>().map_err(|_| LoadError::InvalidDepth {
            line,
            type_name: type_name.clone(),
            value: depth_field.to_string(),
        })?;
        let parent = record[2].trim().to_string();

        rows.push((type_name, depth, parent));
    }

    let hierarchy = TypeHierarchy::from_rows(rows);
    if hierarchy.is_empty() {
        return Err(LoadError::EmptyHierarchy(path.display().to_string()).into());
    }

    tracing::info!(
        "{} types loaded (max depth: {})",
        hierarchy.len(),
        hierarchy.max_depth()
    );
    Ok(hierarchy)
}

// ─── Ground truth ─────────────────────────────────────────────────────────────
/// Controls which gold records survive loading.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroundTruthOptions<'a> {
    /// Resource types missing from this hierarchy are dropped
    pub hierarchy: Option<&'a TypeHierarchy>,

    /// Skip questions whose text is null or blank
    pub skip_empty_questions: bool,

    /// Which record wins when an id repeats
    pub duplicates: Duplicates,
}

pub fn load_ground_truth(path: &Path, options: GroundTruthOptions<'_>) -> Result<GroundTruth> {
    tracing::info!("Loading ground truth from {}", path.display());

    let records: Vec<GoldQuestion> = read_json_array(path)?;
    let prep = Preprocessor::new();
    let mut ground_truth = GroundTruth::with_duplicates(options.duplicates);

    for mut question in records {
        if options.skip_empty_questions && question.is_empty() {
            tracing::warn!("Question text for ID {} is empty", question.id);
            continue;
        }

        question.types = prep.clean_types(std::mem::take(&mut question.types));

        if let (Some(hierarchy), Category::Resource) = (options.hierarchy, &question.category) {
            question.types.retain(|t| {
                let known = hierarchy.contains(t);
                if !known {
                    tracing::warn!("Unknown type \"{}\" for question ID {}", t, question.id);
                }
                known
            });
        }

        ground_truth.insert(question);
    }

    tracing::info!("{} questions loaded", ground_truth.len());
    Ok(ground_truth)
}

// ─── System output ────────────────────────────────────────────────────────────
/// Predictions in file order. Duplicated ids are kept; callers decide.
pub fn load_system_output(path: &Path) -> Result<Vec<Prediction>> {
    tracing::info!("Loading system predictions from {}", path.display());

    let prep = Preprocessor::new();
    let predictions: Vec<Prediction> = read_json_array::<Prediction>(path)?
        .into_iter()
        .map(|mut p| {
            p.types = prep.clean_types(std::mem::take(&mut p.types));
            p
        })
        .collect();

    tracing::info!("{} predictions loaded", predictions.len());
    Ok(predictions)
}

// ─── Helpers ──────────────────────────────────────────────────────────────────
/// Reads a JSON array, skipping (with a warning) elements that do not
/// deserialise into `T`.
fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;
    let text = Preprocessor::new().strip_bom(&text);

    let value: serde_json::Value = serde_json::from_str(text)
        .with_context(|| format!("Invalid JSON in '{}'", path.display()))?;

    let serde_json::Value::Array(items) = value else {
        return Err(LoadError::NotAnArray(path.display().to_string()).into());
    };

    let mut records = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<T>(item) {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!("Skipping record #{} in '{}': {}", i, path.display(), e),
        }
    }

    Ok(records)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::question::QuestionId;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    const HIERARCHY_TSV: &str = "Type\tDepth\tParent\n\
        dbo:Agent\t1\towl:Thing\n\
        dbo:Person\t2\tdbo:Agent\n\
        dbo:Athlete\t3\tdbo:Person  \n";

    #[test]
    fn test_load_type_hierarchy() {
        let f = write_temp(HIERARCHY_TSV);
        let h = load_type_hierarchy(f.path()).unwrap();
        assert_eq!(h.len(), 3);
        assert_eq!(h.max_depth(), 3);
        assert_eq!(h.path("dbo:Athlete"), ["dbo:Athlete", "dbo:Person", "dbo:Agent"]);
    }

    #[test]
    fn test_hierarchy_bad_depth_is_an_error() {
        let f = write_temp("Type\tDepth\tParent\ndbo:Agent\tone\towl:Thing\n");
        let err = load_type_hierarchy(f.path()).unwrap_err();
        let load_err = err.downcast_ref::<LoadError>().unwrap();
        assert!(matches!(load_err, LoadError::InvalidDepth { line: 2, .. }));
    }

    #[test]
    fn test_hierarchy_missing_column_is_an_error() {
        let f = write_temp("Type\tDepth\tParent\ndbo:Agent\t1\n");
        let err = load_type_hierarchy(f.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::MissingColumns { found: 2, .. })
        ));
    }

    #[test]
    fn test_header_only_hierarchy_is_empty() {
        let f = write_temp("Type\tDepth\tParent\n");
        let err = load_type_hierarchy(f.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::EmptyHierarchy(_))
        ));
    }

    #[test]
    fn test_ground_truth_filters_empty_questions_and_unknown_types() {
        let h = write_temp(HIERARCHY_TSV);
        let h = load_type_hierarchy(h.path()).unwrap();
        let gold = write_temp(
            r#"[
                {"id": "dbpedia_1", "question": "Who won?", "category": "resource",
                 "type": ["dbo:Athlete", "dbo:Spaceship"]},
                {"id": "dbpedia_2", "question": null, "category": "boolean", "type": ["boolean"]},
                {"id": "dbpedia_3", "question": "When?", "category": "literal", "type": ["date"]}
            ]"#,
        );

        let gt = load_ground_truth(
            gold.path(),
            GroundTruthOptions {
                hierarchy: Some(&h),
                skip_empty_questions: true,
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(gt.len(), 2);
        let q1 = gt.get(&QuestionId::new("dbpedia_1")).unwrap();
        assert_eq!(q1.types, vec!["dbo:Athlete"]);
        // literal types are never checked against the hierarchy
        let q3 = gt.get(&QuestionId::new("dbpedia_3")).unwrap();
        assert_eq!(q3.types, vec!["date"]);
    }

    #[test]
    fn test_ground_truth_keeps_empty_questions_when_asked() {
        let gold = write_temp(r#"[{"id": 7, "question": "", "category": "boolean", "type": ["boolean"]}]"#);
        let gt = load_ground_truth(gold.path(), GroundTruthOptions::default()).unwrap();
        assert_eq!(gt.len(), 1);
    }

    #[test]
    fn test_duplicate_policy_is_applied() {
        let gold = write_temp(
            r#"[
                {"id": 1, "question": "When?", "category": "literal", "type": ["date"]},
                {"id": 1, "question": "Who?", "category": "resource", "type": ["Q5"]}
            ]"#,
        );
        let id = QuestionId::new("1");

        let first = load_ground_truth(
            gold.path(),
            GroundTruthOptions {
                duplicates: Duplicates::KeepFirst,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(first.get(&id).unwrap().category, Category::Literal);

        let last = load_ground_truth(gold.path(), GroundTruthOptions::default()).unwrap();
        assert_eq!(last.get(&id).unwrap().category, Category::Resource);
        assert_eq!(last.len(), 1);
    }

    #[test]
    fn test_system_output_with_bom_and_bad_record() {
        let f = write_temp(
            "\u{FEFF}[{\"id\": 1, \"category\": \"literal\", \"type\": [\"number\"]},\
             {\"category\": \"boolean\"}]",
        );
        let preds = load_system_output(f.path()).unwrap();
        assert_eq!(preds.len(), 1);
        assert_eq!(preds[0].id.as_str(), "1");
        assert_eq!(preds[0].category, Some(Category::Literal));
    }

    #[test]
    fn test_non_array_json_is_rejected() {
        let f = write_temp(r#"{"id": 1}"#);
        let err = load_system_output(f.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::NotAnArray(_))
        ));
    }
}
