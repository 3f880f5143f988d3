// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// One subcommand per SMART track:
//
//   smart-eval dbpedia  <hierarchy.tsv> <gold.json> <system.json>
//   smart-eval wikidata <gold.json> <predictions.json>
//
// Each Args struct converts into its application-layer config,
// so the use cases never see clap types.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::application::dbpedia_use_case::DbpediaConfig;
use crate::application::wikidata_use_case::WikidataConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a DBpedia-track submission (accuracy, lenient NDCG@5/10)
    Dbpedia(DbpediaArgs),

    /// Score a Wikidata-track submission (accuracy, MRR)
    Wikidata(WikidataArgs),
}

#[derive(Args, Debug)]
pub struct DbpediaArgs {
    /// Type hierarchy TSV with Type, Depth and Parent columns (header row required)
    pub type_hierarchy_tsv: PathBuf,

    /// Ground truth JSON, in the training data format
    pub ground_truth_json: PathBuf,

    /// System output JSON: a list of {id, category, type} records
    pub system_output_json: PathBuf,

    /// Also save the scores as JSON to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl From<DbpediaArgs> for DbpediaConfig {
    fn from(a: DbpediaArgs) -> Self {
        DbpediaConfig {
            type_hierarchy: a.type_hierarchy_tsv,
            ground_truth: a.ground_truth_json,
            system_output: a.system_output_json,
            report: a.report,
        }
    }
}

#[derive(Args, Debug)]
pub struct WikidataArgs {
    /// Gold standard JSON
    pub ground_truth_json: PathBuf,

    /// System predictions JSON
    pub predictions_json: PathBuf,

    /// Write every prediction with its rank and reciprocal rank to this path
    #[arg(long)]
    pub ranked_output: Option<PathBuf>,

    /// Write the headline scores to <PREFIX><timestamp>.json
    #[arg(long, value_name = "PREFIX")]
    pub results_prefix: Option<String>,
}

impl From<WikidataArgs> for WikidataConfig {
    fn from(a: WikidataArgs) -> Self {
        WikidataConfig {
            ground_truth: a.ground_truth_json,
            predictions: a.predictions_json,
            ranked_output: a.ranked_output,
            results_prefix: a.results_prefix,
        }
    }
}
