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

use serde::{Deserialize, Serialize};

/// Flat record handed to an evaluation sink for persistence.
///
/// The core fills every field; the timestamp is assigned by the sink
/// at write time, which is why it is absent here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub question: String,
    pub final_answer: String,
    pub reasoning: String,
    pub logical_consistency_score: f64,
    pub completeness_score: f64,
    pub instruction_following_score: f64,
    pub hallucination_risk_score: f64,
    pub overall_score: f64,
    pub verdict: String,

    /// Detected issues joined with `"; "`, or `"None"` when the
    /// evaluation found nothing to flag.
    pub detected_issues: String,
}

impl EvaluationRecord {
    /// Format an issue list the way sinks store it.
    pub fn format_issues(issues: &[String]) -> String {
        if issues.is_empty() {
            "None".to_string()
        } else {
            issues.join("; ")
        }
    }
}
