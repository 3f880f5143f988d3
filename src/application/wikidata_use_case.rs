// ============================================================
// Layer 2 - WikidataUseCase
// ============================================================
// Scores a Wikidata-track submission. Unlike the DBpedia track,
// iteration runs over the PREDICTIONS:
//
//   for each prediction:
//     gold not found        → rank 0
//     category mismatch     → rank 0
//     boolean               → rank 1
//     literal / resource    → position in the gold list of the
//                             first predicted type it contains
//     rr = 1 / rank  (0 when rank is 0)
//
//   category_matched_accuracy = category hits / predictions
//   type_mrr                  = Σ rr / predictions with a gold match
//
// Both aggregates are rounded to two decimals.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::dataset::{Duplicates, GroundTruth};
use crate::data::loader::{load_ground_truth, load_system_output, GroundTruthOptions};
use crate::domain::question::{Category, Prediction, QuestionId};
use crate::domain::traits::{Evaluator, Report};
use crate::infra::report_writer::ReportWriter;
use crate::scoring::rank::{gold_rank, reciprocal_rank, round2};

// ─── Configuration ───────────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikidataConfig {
    pub ground_truth: PathBuf,
    pub predictions: PathBuf,

    /// Per-prediction JSON with rank and rr appended
    pub ranked_output: Option<PathBuf>,

    /// Results go to `<prefix><timestamp>.json`
    pub results_prefix: Option<String>,
}

impl Default for WikidataConfig {
    fn default() -> Self {
        Self {
            ground_truth: PathBuf::from("lcquad2_gold_standard.json"),
            predictions: PathBuf::from("lcquad2_predictions.json"),
            ranked_output: None,
            results_prefix: None,
        }
    }
}

// ─── Per-prediction record ───────────────────────────────────────────────────
/// A prediction with its rank and reciprocal rank, as written to the
/// ranked output file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPrediction {
    pub id: QuestionId,
    pub question: String,
    pub category: String,
    #[serde(rename = "type")]
    pub types: Vec<String>,
    pub rank: usize,
    pub rr: f64,
}

// ─── Report ──────────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WikidataReport {
    pub predictions: usize,
    /// Predictions whose id exists in the ground truth
    pub matched: usize,
    pub category_hits: usize,
    pub category_matched_accuracy: f64,
    pub type_mrr: f64,
}

impl WikidataReport {
    /// The two headline numbers in the published results layout
    pub fn results(&self) -> Vec<serde_json::Value> {
        vec![serde_json::json!({
            "category_matched_accuracy": self.category_matched_accuracy,
            "type_mrr": self.type_mrr,
        })]
    }
}

impl Report for WikidataReport {
    fn summary(&self) -> String {
        format!(
            "{} predictions, {} matched to the ground truth\n\
             catg_matched = {:?}\n\
             mrr = {:?}",
            self.predictions, self.matched, self.category_matched_accuracy, self.type_mrr,
        )
    }
}

// ─── WikidataUseCase ─────────────────────────────────────────────────────────
pub struct WikidataUseCase {
    config: WikidataConfig,
}

impl WikidataUseCase {
    pub fn new(config: WikidataConfig) -> Self {
        Self { config }
    }
}

impl Evaluator for WikidataUseCase {
    type Report = WikidataReport;

    fn evaluate(&self) -> Result<WikidataReport> {
        let cfg = &self.config;
        tracing::debug!("Wikidata config: {}", serde_json::to_string(cfg)?);

        let predictions = load_system_output(&cfg.predictions)?;
        // the first gold record for a repeated id is the one that counts
        let ground_truth = load_ground_truth(
            &cfg.ground_truth,
            GroundTruthOptions {
                duplicates: Duplicates::KeepFirst,
                ..Default::default()
            },
        )?;

        let (report, ranked) = score(&ground_truth, &predictions);

        let writer = ReportWriter::new();
        if let Some(path) = &cfg.ranked_output {
            writer.write_json(path, &ranked)?;
        }
        if let Some(prefix) = &cfg.results_prefix {
            writer.write_timestamped(prefix, &report.results())?;
        }

        Ok(report)
    }
}

// ─── Scoring ─────────────────────────────────────────────────────────────────
pub fn score(
    ground_truth: &GroundTruth,
    predictions: &[Prediction],
) -> (WikidataReport, Vec<RankedPrediction>) {
    let mut matched = 0;
    let mut category_hits = 0;
    let mut sum_rr = 0.0;
    let mut ranked = Vec::with_capacity(predictions.len());

    for prediction in predictions {
        let rank = match ground_truth.get(&prediction.id) {
            None => {
                tracing::debug!("Question ID {} not in the ground truth", prediction.id);
                0
            }
            Some(gold) => {
                matched += 1;
                if prediction.category.as_ref() != Some(&gold.category) {
                    0
                } else {
                    category_hits += 1;
                    if gold.category == Category::Boolean {
                        1
                    } else if gold.category.has_types() {
                        gold_rank(&prediction.types, &gold.types)
                    } else {
                        0
                    }
                }
            }
        };

        let rr = reciprocal_rank(rank);
        sum_rr += rr;

        ranked.push(RankedPrediction {
            id: prediction.id.clone(),
            question: prediction.question.clone().unwrap_or_default(),
            category: prediction
                .category
                .as_ref()
                .map(|c| c.as_str().to_string())
                .unwrap_or_default(),
            types: prediction.types.clone(),
            rank,
            rr,
        });
    }

    let report = WikidataReport {
        predictions: predictions.len(),
        matched,
        category_hits,
        category_matched_accuracy: round2(ratio(category_hits as f64, predictions.len())),
        type_mrr: round2(ratio(sum_rr, matched)),
    };

    (report, ranked)
}

fn ratio(numerator: f64, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator / denominator as f64
    }
}
