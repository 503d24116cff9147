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

//! Scoring configuration: category weights and the verdict threshold.
//!
//! Built once at startup and handed to the scorer; never mutated
//! afterwards.

use serde::{Deserialize, Serialize};

/// Weight of each category in the overall score.
///
/// The hallucination-risk weight applies to the *inverted* axis
/// (`100 - risk`), so all four weights must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub logical_consistency: f64,
    pub completeness: f64,
    pub instruction_following: f64,
    pub hallucination_risk: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            logical_consistency: 0.35,
            completeness: 0.25,
            instruction_following: 0.20,
            hallucination_risk: 0.20,
        }
    }
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.logical_consistency
            + self.completeness
            + self.instruction_following
            + self.hallucination_risk
    }
}

/// Immutable scoring configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,

    /// Overall score (0-100) at or above which the verdict is
    /// `GoodReasoning`.
    pub good_reasoning_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            good_reasoning_threshold: 70.0,
        }
    }
}

impl ScoringConfig {
    /// Check that the weights form a convex combination. Returns the
    /// offending sum on failure so callers can report it.
    pub fn validate(&self) -> Result<(), f64> {
        let sum = self.weights.sum();
        if (sum - 1.0).abs() < 1e-9 {
            Ok(())
        } else {
            Err(sum)
        }
    }
}
