// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// Output concerns shared by both evaluation tracks:
//
//   report_writer.rs - JSON report files, plain and timestamped
//
// Kept apart from the use cases so the scoring code never touches
// the filesystem and can be tested with in-memory data.

/// JSON report and results file writer
pub mod report_writer;
