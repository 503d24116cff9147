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

//! Aggregate category scores and the final verdict.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-category mean scores, each in [0, 100] and rounded to two
/// decimal places.
///
/// `hallucination_risk_score` is the only inverted axis: higher means
/// more risk, and the aggregator folds `100 - risk` into the overall
/// score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub logical_consistency_score: f64,
    pub completeness_score: f64,
    pub instruction_following_score: f64,
    pub hallucination_risk_score: f64,
}

/// Binary quality classification derived from the weighted overall
/// score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    GoodReasoning,
    FlawedReasoning,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::GoodReasoning => "Good Reasoning",
            Verdict::FlawedReasoning => "Flawed Reasoning",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round to exactly two decimal places, matching the precision of
/// every score the system reports.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
