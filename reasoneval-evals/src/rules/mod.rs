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

//! The rule bank: eleven independent heuristic checks grouped into
//! four fixed categories.
//!
//! Every rule is a pure function over some subset of `(steps, answer,
//! question, raw reasoning)` returning a [`RuleResult`]. Rules never
//! fail; degenerate input maps to a documented default score. Scores
//! start at a base (usually 100), lose fixed penalties per detected
//! deficiency and clamp at 0.
//!
//! The instruction-following rules inspect the *raw reasoning text*
//! rather than the segmented steps, since they judge the formatting
//! the segmenter may have normalized away.

pub mod completeness;
pub mod hallucination_risk;
pub mod instruction_following;
pub mod logical_consistency;

use reasoneval_core::EvaluationResult;

/// Run all eleven rules in declared category-then-rule order and
/// assemble the full evaluation, including the formatted issue list.
pub fn evaluate_reasoning(
    steps: &[String],
    answer: &str,
    question: &str,
    raw_reasoning: &str,
) -> EvaluationResult {
    let mut result = EvaluationResult::default();

    result
        .logical_consistency
        .push("step_count", logical_consistency::check_step_count(steps));
    result
        .logical_consistency
        .push("logical_flow", logical_consistency::check_logical_flow(steps));
    result.logical_consistency.push(
        "contradictions",
        logical_consistency::check_contradictions(steps),
    );
    result.logical_consistency.push(
        "answer_support",
        logical_consistency::check_answer_support(steps, answer),
    );

    result.completeness.push(
        "missing_steps",
        completeness::check_missing_steps(steps, question),
    );
    result
        .completeness
        .push("step_depth", completeness::check_step_depth(steps));
    result
        .completeness
        .push("substance", completeness::check_substance(steps));

    result.instruction_following.push(
        "step_format",
        instruction_following::check_step_format(raw_reasoning),
    );
    result.instruction_following.push(
        "explicit_numbering",
        instruction_following::check_explicit_numbering(raw_reasoning),
    );

    result.hallucination_risk.push(
        "unsupported_claims",
        hallucination_risk::check_unsupported_claims(steps),
    );
    result.hallucination_risk.push(
        "vague_statements",
        hallucination_risk::check_vague_statements(steps),
    );

    result.collect_issues();
    result
}
