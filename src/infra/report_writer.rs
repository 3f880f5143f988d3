// ============================================================
// Layer 6 - Report Writer
// ============================================================
// Saves evaluation outputs to disk as pretty-printed JSON.
//
// Two kinds of file:
//   1. A fixed path (DBpedia report, Wikidata ranked predictions)
//   2. A timestamped results file, so repeated runs never
//      overwrite each other:
//        final_scores_2026-10-19T14-03-52.json
//
// Parent directories are created on demand, like `mkdir -p`.

use std::{fs, path::Path, path::PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::Serialize;

/// Colons are not valid in Windows file names, hence the dashes.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

pub struct ReportWriter;

impl ReportWriter {
    pub fn new() -> Self {
        Self
    }

    /// Serialise `value` to `path`, replacing any existing file.
    pub fn write_json<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(value)?;
        fs::write(path, json)
            .with_context(|| format!("Cannot write '{}'", path.display()))?;

        tracing::info!("Wrote {}", path.display());
        Ok(())
    }

    /// Serialise `value` to `<prefix><timestamp>.json` and return the path.
    pub fn write_timestamped<T: Serialize + ?Sized>(
        &self,
        prefix: &str,
        value: &T,
    ) -> Result<PathBuf> {
        let path = timestamped_path(prefix, Local::now());
        self.write_json(&path, value)?;
        Ok(path)
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn timestamped_path(prefix: &str, now: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!("{}{}.json", prefix, now.format(TIMESTAMP_FORMAT)))
}
