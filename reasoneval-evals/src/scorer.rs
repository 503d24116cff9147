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

//! Aggregator: category means, weighted overall score, verdict.

use reasoneval_core::score::round2;
use reasoneval_core::{CategoryResults, EvaluationResult, ScoreSet, ScoringConfig, Verdict};

/// Aggregates rule results into category scores and the final verdict.
///
/// Holds an immutable [`ScoringConfig`]; weights and the verdict
/// threshold are never hard-coded at call sites.
pub struct Scorer {
    config: ScoringConfig,
}

impl Scorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Mean rule score per category, each rounded to two decimals.
    pub fn calculate_scores(&self, evaluation: &EvaluationResult) -> ScoreSet {
        ScoreSet {
            logical_consistency_score: category_mean(&evaluation.logical_consistency, 0.0),
            completeness_score: category_mean(&evaluation.completeness, 0.0),
            instruction_following_score: category_mean(&evaluation.instruction_following, 0.0),
            // An empty risk category means no evidence of risk.
            hallucination_risk_score: category_mean(&evaluation.hallucination_risk, 100.0),
        }
    }

    /// Weighted overall score in [0, 100], rounded to two decimals.
    /// Hallucination risk enters inverted: lower risk raises the
    /// overall score.
    pub fn overall_score(&self, scores: &ScoreSet) -> f64 {
        let weights = &self.config.weights;
        round2(
            scores.logical_consistency_score * weights.logical_consistency
                + scores.completeness_score * weights.completeness
                + scores.instruction_following_score * weights.instruction_following
                + (100.0 - scores.hallucination_risk_score) * weights.hallucination_risk,
        )
    }

    pub fn verdict(&self, scores: &ScoreSet) -> Verdict {
        if self.overall_score(scores) >= self.config.good_reasoning_threshold {
            Verdict::GoodReasoning
        } else {
            Verdict::FlawedReasoning
        }
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

fn category_mean(results: &CategoryResults, empty_default: f64) -> f64 {
    if results.is_empty() {
        return empty_default;
    }
    let sum: u32 = results.scores().map(u32::from).sum();
    round2(sum as f64 / results.len() as f64)
}
