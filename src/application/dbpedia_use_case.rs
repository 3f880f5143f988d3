// ============================================================
// Layer 2 - DbpediaUseCase
// ============================================================
// Scores a DBpedia-track submission:
//
//   Step 1: Load the type hierarchy          (Layer 4 - data)
//   Step 2: Load the ground truth            (Layer 4 - data)
//   Step 3: Load the system output           (Layer 4 - data)
//   Step 4: Score every gold question        (Layer 5 - scoring)
//   Step 5: Optionally save the report       (Layer 6 - infra)
//
// Per question:
//   - wrong or missing category → accuracy 0, no type score
//   - right category            → accuracy 1, then
//       literal  → NDCG of a single hit/miss on the top type
//       resource → lenient NDCG@5 and NDCG@10 over the ranked types
//       boolean  → no type score

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::dataset::{Duplicates, GroundTruth};
use crate::data::loader::{
    load_ground_truth, load_system_output, load_type_hierarchy, GroundTruthOptions,
};
use crate::domain::hierarchy::TypeHierarchy;
use crate::domain::question::{Category, GoldQuestion, Prediction, QuestionId};
use crate::domain::traits::{Evaluator, Report};
use crate::infra::report_writer::ReportWriter;
use crate::scoring::{mean, ndcg};

// ─── Configuration ───────────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbpediaConfig {
    pub type_hierarchy: PathBuf,
    pub ground_truth: PathBuf,
    pub system_output: PathBuf,

    /// Where to save the report as JSON, if anywhere
    pub report: Option<PathBuf>,
}

impl Default for DbpediaConfig {
    fn default() -> Self {
        Self {
            type_hierarchy: PathBuf::from("dbpedia_types.tsv"),
            ground_truth: PathBuf::from("smarttask_dbpedia_test.json"),
            system_output: PathBuf::from("system_output.json"),
            report: None,
        }
    }
}

// ─── Report ──────────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DbpediaReport {
    /// Questions scored for category accuracy
    pub questions: usize,
    pub accuracy: f64,

    /// Questions that also received a type score
    pub type_questions: usize,
    pub ndcg_5: f64,
    pub ndcg_10: f64,
}

impl Report for DbpediaReport {
    fn summary(&self) -> String {
        format!(
            "Evaluation results:\n\
             -------------------\n\
             Category prediction (based on {} questions)\n  \
             Accuracy: {:5.3}\n\
             Type ranking (based on {} questions)\n  \
             NDCG@5:  {:5.3}\n  \
             NDCG@10: {:5.3}",
            self.questions, self.accuracy, self.type_questions, self.ndcg_5, self.ndcg_10,
        )
    }
}

// ─── DbpediaUseCase ──────────────────────────────────────────────────────────
pub struct DbpediaUseCase {
    config: DbpediaConfig,
}

impl DbpediaUseCase {
    pub fn new(config: DbpediaConfig) -> Self {
        Self { config }
    }
}

impl Evaluator for DbpediaUseCase {
    type Report = DbpediaReport;

    fn evaluate(&self) -> Result<DbpediaReport> {
        let cfg = &self.config;
        tracing::debug!("DBpedia config: {}", serde_json::to_string(cfg)?);

        // ── Steps 1-3: Load inputs ───────────────────────────────────────────
        let hierarchy = load_type_hierarchy(&cfg.type_hierarchy)?;
        let ground_truth = load_ground_truth(
            &cfg.ground_truth,
            GroundTruthOptions {
                hierarchy: Some(&hierarchy),
                skip_empty_questions: true,
                duplicates: Duplicates::KeepLast,
            },
        )?;
        let predictions = load_system_output(&cfg.system_output)?;

        // ── Step 4: Score ────────────────────────────────────────────────────
        let report = score(&ground_truth, predictions, &hierarchy);

        // ── Step 5: Save ─────────────────────────────────────────────────────
        if let Some(path) = &cfg.report {
            ReportWriter::new().write_json(path, &report)?;
        }

        Ok(report)
    }
}

// ─── Scoring ─────────────────────────────────────────────────────────────────
/// NDCG@5 and NDCG@10 for a single question
#[derive(Debug, Clone, Copy, PartialEq)]
struct TypeScore {
    ndcg_5: f64,
    ndcg_10: f64,
}

/// Scores predictions against the ground truth. A later prediction for
/// the same id replaces an earlier one.
pub fn score(
    ground_truth: &GroundTruth,
    predictions: Vec<Prediction>,
    hierarchy: &TypeHierarchy,
) -> DbpediaReport {
    if ground_truth.is_empty() {
        tracing::warn!("Ground truth contains no questions");
    }

    let by_id: HashMap<QuestionId, Prediction> =
        predictions.into_iter().map(|p| (p.id.clone(), p)).collect();

    let mut accuracy = Vec::with_capacity(ground_truth.len());
    let mut ndcg_5 = Vec::new();
    let mut ndcg_10 = Vec::new();

    for gold in ground_truth.iter() {
        let prediction = by_id.get(&gold.id);
        if prediction.is_none() {
            tracing::warn!("No prediction made for question ID {}", gold.id);
        }

        let predicted_category = prediction.and_then(|p| p.category.as_ref());
        if predicted_category != Some(&gold.category) {
            accuracy.push(0.0);
            continue;
        }
        accuracy.push(1.0);

        let predicted_types: &[String] = prediction.map(|p| p.types.as_slice()).unwrap_or(&[]);
        if let Some(s) = score_types(gold, predicted_types, hierarchy) {
            tracing::debug!(
                "Question {}: NDCG@5 {:.3}, NDCG@10 {:.3}",
                gold.id,
                s.ndcg_5,
                s.ndcg_10
            );
            ndcg_5.push(s.ndcg_5);
            ndcg_10.push(s.ndcg_10);
        }
    }

    if ndcg_5.is_empty() {
        tracing::warn!("No question received a type score");
    }

    DbpediaReport {
        questions: accuracy.len(),
        accuracy: mean(&accuracy).unwrap_or(0.0),
        type_questions: ndcg_5.len(),
        ndcg_5: mean(&ndcg_5).unwrap_or(0.0),
        ndcg_10: mean(&ndcg_10).unwrap_or(0.0),
    }
}

/// Type score for a question whose category was predicted correctly.
fn score_types(
    gold: &GoldQuestion,
    predicted: &[String],
    hierarchy: &TypeHierarchy,
) -> Option<TypeScore> {
    let (gains, ideal) = match gold.category {
        Category::Literal => {
            let Some(gold_type) = gold.types.first() else {
                tracing::warn!("No gold types given for question ID {}", gold.id);
                return None;
            };
            let hit = predicted.first() == Some(gold_type);
            (vec![if hit { 1.0 } else { 0.0 }], vec![1.0])
        }
        Category::Resource => {
            if gold.types.is_empty() {
                tracing::warn!("No gold types given for question ID {}", gold.id);
                return None;
            }
            let gold_types = hierarchy.most_specific(&gold.types);
            (
                ndcg::type_gains(predicted, &gold_types, hierarchy),
                ndcg::ideal_gains(&gold_types, hierarchy),
            )
        }
        Category::Boolean | Category::Other(_) => return None,
    };

    Some(TypeScore {
        ndcg_5: ndcg::ndcg(&gains, &ideal, 5),
        ndcg_10: ndcg::ndcg(&gains, &ideal, 10),
    })
}
