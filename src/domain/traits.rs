// ============================================================
// Layer 3 - Core Traits (Abstractions)
// ============================================================
// Both evaluation tracks follow the same shape: load inputs, score
// every question, hand back a report. The CLI layer only sees these
// traits, so adding a third track means one new use case and one
// new subcommand, nothing else.

use anyhow::Result;

// ─── Evaluator ────────────────────────────────────────────────────────────────
/// Any component that scores a system's output against the ground truth.
///
/// Implementations:
///   - DbpediaUseCase  → accuracy + lenient NDCG@5/10
///   - WikidataUseCase → accuracy + MRR
pub trait Evaluator {
    type Report: Report;

    /// Run the full evaluation and return the aggregated scores.
    fn evaluate(&self) -> Result<Self::Report>;
}

// ─── Report ───────────────────────────────────────────────────────────────────
/// Aggregated scores that can be rendered for the console.
pub trait Report {
    /// Human readable multi-line summary
    fn summary(&self) -> String;
}
