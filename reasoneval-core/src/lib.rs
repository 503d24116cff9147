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

//! Shared contracts for the ReasonEval reasoning-quality evaluator.
//!
//! Everything an evaluation produces is a plain, serde-serializable
//! value: the split response, per-rule results grouped into four fixed
//! categories, aggregate scores and the final verdict. All of it is
//! created fresh per evaluation and immutable afterwards; there is no
//! cross-call state anywhere in the data model.

use thiserror::Error;

pub mod config;
pub mod record;
pub mod response;
pub mod rule;
pub mod score;

pub use config::{ScoringConfig, ScoringWeights};
pub use record::EvaluationRecord;
pub use response::ParsedResponse;
pub use rule::{Category, CategoryResults, EvaluationResult, RuleOutcome, RuleResult};
pub use score::{ScoreSet, Verdict};

/// Errors the evaluation core can surface to its caller.
///
/// The pipeline itself is total: every component returns a well-formed
/// result for any string input, and deficiency is reported through
/// scores and issues rather than errors. The two variants here cover
/// the only conditions checked *before* the pipeline runs.
#[derive(Debug, Error)]
pub enum EvalError {
    /// A required input field (the question) was missing or blank.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The response source failed to produce a raw response.
    #[error("response unavailable: {0}")]
    ResponseUnavailable(String),
}
