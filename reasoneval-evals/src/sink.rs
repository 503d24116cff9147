// Copyright 2025 ReasonEval Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Persistence for evaluation records. [`JsonlSink`] appends one JSON
//! object per line, stamped with the write time, so repeated runs
//! accumulate into a reviewable log.

use reasoneval_core::EvaluationRecord;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Destination for finished evaluation records.
pub trait EvaluationSink: Send + Sync {
    fn record(&self, record: &EvaluationRecord) -> Result<(), SinkError>;
}

#[derive(Serialize)]
struct TimestampedRecord<'a> {
    timestamp: String,
    #[serde(flatten)]
    record: &'a EvaluationRecord,
}

/// Append-only JSON Lines file sink. The timestamp is assigned at
/// write time, not at evaluation time.
pub struct JsonlSink {
    path: PathBuf,
}

impl JsonlSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EvaluationSink for JsonlSink {
    fn record(&self, record: &EvaluationRecord) -> Result<(), SinkError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let stamped = TimestampedRecord {
            timestamp: chrono::Utc::now().to_rfc3339(),
            record,
        };
        let line = serde_json::to_string(&stamped)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        debug!(path = %self.path.display(), "appended evaluation record");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> EvaluationRecord {
        EvaluationRecord {
            question: "Is a tomato a fruit?".to_string(),
            final_answer: "Yes".to_string(),
            reasoning: "1. A fruit develops from a flower\n2. A tomato does".to_string(),
            logical_consistency_score: 80.0,
            completeness_score: 75.0,
            instruction_following_score: 100.0,
            hallucination_risk_score: 10.0,
            overall_score: 84.75,
            verdict: "Good Reasoning".to_string(),
            detected_issues: "None".to_string(),
        }
    }

    #[test]
    fn test_appends_one_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("evaluations.jsonl");
        let sink = JsonlSink::new(&path);

        sink.record(&sample_record()).unwrap();
        sink.record(&sample_record()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed["question"], "Is a tomato a fruit?");
        assert_eq!(parsed["verdict"], "Good Reasoning");
        assert!(parsed["timestamp"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn test_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("logs").join("out.jsonl");
        let sink = JsonlSink::new(&path);

        sink.record(&sample_record()).unwrap();
        assert!(path.exists());
    }
}
