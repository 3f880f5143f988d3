// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Parses arguments, routes to the right use case and prints the
// report. All scoring is delegated to Layer 2 (application).

pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::Commands;
use tracing_subscriber::EnvFilter;

use crate::application::dbpedia_use_case::DbpediaUseCase;
use crate::application::wikidata_use_case::WikidataUseCase;
use crate::domain::traits::{Evaluator, Report};

const DEFAULT_LOG_DIRECTIVE: &str = "smart_eval=info";
const VERBOSE_LOG_DIRECTIVE: &str = "smart_eval=debug";

#[derive(Parser, Debug)]
#[command(
    name = "smart-eval",
    version,
    about = "Score answer category and answer type predictions for the SMART task."
)]
pub struct Cli {
    /// Log per-question details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the subcommand's use case. Routes only, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Dbpedia(args) => run_evaluator(DbpediaUseCase::new(args.into())),
            Commands::Wikidata(args) => run_evaluator(WikidataUseCase::new(args.into())),
        }
    }

    /// Log filter: `RUST_LOG` when it is set, `smart_eval=info` otherwise.
    /// `--verbose` always turns on debug output for this crate.
    pub fn log_filter(&self) -> Result<EnvFilter> {
        self.log_filter_from(EnvFilter::try_from_default_env().ok())
    }

    fn log_filter_from(&self, from_env: Option<EnvFilter>) -> Result<EnvFilter> {
        let filter = match from_env {
            Some(filter) => filter,
            None => EnvFilter::new(DEFAULT_LOG_DIRECTIVE),
        };
        if !self.verbose {
            return Ok(filter);
        }
        let debug = VERBOSE_LOG_DIRECTIVE
            .parse()
            .context("invalid log directive")?;
        Ok(filter.add_directive(debug))
    }
}

fn run_evaluator<E: Evaluator>(evaluator: E) -> Result<()> {
    let report = evaluator.evaluate()?;
    println!("\n{}", report.summary());
    Ok(())
}
