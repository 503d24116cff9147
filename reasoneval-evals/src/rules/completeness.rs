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

//! Completeness rules: missing computation steps, step depth, and
//! first-principles substance.

use reasoneval_core::RuleResult;

/// Question markers that imply an explicit calculation is expected.
const CALCULATION_QUESTION_MARKERS: [&str; 8] =
    ["+", "-", "*", "/", "calculate", "compute", "sum", "product"];

/// Step markers that count as showing a computation.
const CALCULATION_STEP_MARKERS: [&str; 6] = ["+", "-", "*", "/", "=", "equals"];

/// Hedging vocabulary that makes a step shallow.
const VAGUE_WORDS: [&str; 6] = ["maybe", "perhaps", "possibly", "might", "could be", "seems"];

/// First-principles vocabulary expected from deep reasoning.
const PRINCIPLES_VOCABULARY: [&str; 9] = [
    "fundamental",
    "break down",
    "truth",
    "assumption",
    "axiom",
    "specifically",
    "precisely",
    "definition",
    "core",
];

/// Causal connectives linking steps to their justification.
const CAUSAL_VOCABULARY: [&str; 7] = [
    "because",
    "since",
    "implies",
    "causes",
    "leads to",
    "result of",
    "due to",
];

/// Detect obvious gaps: a calculation question with no computation
/// shown, or reasoning that is too short overall.
pub fn check_missing_steps(steps: &[String], question: &str) -> RuleResult {
    if steps.is_empty() {
        return RuleResult::flagged(0, "No reasoning provided");
    }

    let mut score = 100;
    let mut issues = Vec::new();

    if CALCULATION_QUESTION_MARKERS
        .iter()
        .any(|marker| question.contains(marker))
    {
        let has_calculation = steps.iter().any(|step| {
            CALCULATION_STEP_MARKERS
                .iter()
                .any(|marker| step.contains(marker))
        });
        if !has_calculation {
            score -= 30;
            issues.push(
                "Question requires calculation but no explicit computation shown".to_string(),
            );
        }
    }

    let total_length: usize = steps.iter().map(|step| step.chars().count()).sum();
    if total_length < 100 {
        score -= 20;
        issues.push("Reasoning is too brief".to_string());
    }

    RuleResult::from_penalties(score, issues)
}

/// Evaluate whether steps are deep enough: average word count and
/// hedging-language density.
pub fn check_step_depth(steps: &[String]) -> RuleResult {
    if steps.is_empty() {
        return RuleResult::flagged(0, "No steps to evaluate");
    }

    let mut score = 100;
    let mut issues = Vec::new();

    let total_words: usize = steps.iter().map(|step| step.split_whitespace().count()).sum();
    let average_words = total_words as f64 / steps.len() as f64;
    if average_words < 5.0 {
        score -= 30;
        issues.push("Steps are too shallow (very short)".to_string());
    } else if average_words < 8.0 {
        score -= 15;
        issues.push("Steps could be more detailed".to_string());
    }

    let vague_count = steps
        .iter()
        .filter(|step| {
            let lower = step.to_lowercase();
            VAGUE_WORDS.iter().any(|word| lower.contains(word))
        })
        .count();
    if vague_count as f64 > steps.len() as f64 * 0.4 {
        score -= 20;
        issues.push("Too many vague or uncertain statements".to_string());
    }

    RuleResult::from_penalties(score, issues)
}

/// Look for indicators of first-principles thinking and causal
/// reasoning across the joined step text.
pub fn check_substance(steps: &[String]) -> RuleResult {
    if steps.is_empty() {
        return RuleResult::flagged(0, "No steps to evaluate");
    }

    let mut score = 100;
    let mut issues = Vec::new();

    let full_text = steps.join(" ").to_lowercase();

    let found_principles = PRINCIPLES_VOCABULARY
        .iter()
        .filter(|indicator| full_text.contains(**indicator))
        .count();
    if found_principles == 0 {
        score -= 20;
        issues.push(
            "Lack of first-principles language (e.g., 'fundamental', 'assumption')".to_string(),
        );
    }

    let found_causal = CAUSAL_VOCABULARY
        .iter()
        .filter(|indicator| full_text.contains(**indicator))
        .count();
    if (found_causal as f64) < steps.len() as f64 * 0.5 {
        score -= 15;
        issues.push("Weak causal reasoning (few 'because', 'since', etc.)".to_string());
    }

    RuleResult::from_penalties(score, issues)
}
