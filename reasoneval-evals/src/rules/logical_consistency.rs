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

//! Logical-consistency rules: step count, inter-step flow,
//! self-contradiction markers, and answer support.

use reasoneval_core::RuleResult;
use std::collections::HashSet;

/// Words and phrases that signal a logical transition between steps.
const TRANSITION_WORDS: [&str; 13] = [
    "therefore",
    "thus",
    "so",
    "hence",
    "consequently",
    "then",
    "next",
    "after",
    "because",
    "since",
    "as a result",
    "this means",
    "which gives",
];

/// Markers of self-correction or contradiction within a step.
const CONTRADICTION_MARKERS: [&str; 3] = ["however", "but actually", "correction"];

/// Multiple reasoning steps are the baseline expectation; fewer than
/// three is already a deficiency.
pub fn check_step_count(steps: &[String]) -> RuleResult {
    match steps.len() {
        0 => RuleResult::flagged(0, "No reasoning steps found"),
        1 => RuleResult::flagged(30, "Only one reasoning step provided"),
        2 => RuleResult::flagged(60, "Only two reasoning steps (minimal)"),
        _ => RuleResult::clean(100),
    }
}

/// Penalize reasoning whose steps lack transition language or are too
/// short to carry a coherent argument.
pub fn check_logical_flow(steps: &[String]) -> RuleResult {
    if steps.len() < 2 {
        return RuleResult::flagged(50, "Insufficient steps to evaluate flow");
    }

    let mut score = 100;
    let mut issues = Vec::new();

    let transitions_found = steps
        .iter()
        .filter(|step| {
            let lower = step.to_lowercase();
            TRANSITION_WORDS.iter().any(|word| lower.contains(word))
        })
        .count();
    if (transitions_found as f64) < steps.len() as f64 * 0.3 {
        score -= 20;
        issues.push("Weak logical connections between steps".to_string());
    }

    let very_short_steps = steps
        .iter()
        .filter(|step| step.split_whitespace().count() < 5)
        .count();
    if very_short_steps as f64 > steps.len() as f64 * 0.4 {
        score -= 15;
        issues.push("Some steps are too brief or disconnected".to_string());
    }

    RuleResult::from_penalties(score, issues)
}

/// Flag explicit self-corrections, one penalty per offending step with
/// its 1-based index in the issue note.
pub fn check_contradictions(steps: &[String]) -> RuleResult {
    if steps.len() < 2 {
        return RuleResult::clean(100);
    }

    let mut score = 100;
    let mut issues = Vec::new();
    for (i, step) in steps.iter().enumerate() {
        let lower = step.to_lowercase();
        if CONTRADICTION_MARKERS.iter().any(|m| lower.contains(m)) {
            score -= 20;
            issues.push(format!(
                "Possible self-correction or contradiction in step {}",
                i + 1
            ));
        }
    }

    RuleResult::from_penalties(score, issues)
}

/// Check that the final answer's key terms actually appear somewhere
/// in the reasoning.
pub fn check_answer_support(steps: &[String], answer: &str) -> RuleResult {
    if answer.is_empty() || steps.is_empty() {
        return RuleResult::flagged(0, "Missing answer or reasoning");
    }

    let answer_lower = answer.to_lowercase();
    let answer_words: HashSet<&str> = answer_lower
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|word| word.chars().count() > 3)
        .collect();

    if answer_words.is_empty() {
        return RuleResult::flagged(50, "Cannot extract key terms from answer");
    }

    let reasoning_text = steps.join(" ").to_lowercase();
    let matching_terms = answer_words
        .iter()
        .filter(|word| reasoning_text.contains(**word))
        .count();

    if matching_terms == 0 {
        RuleResult::flagged(20, "Answer not clearly derived from reasoning")
    } else if (matching_terms as f64) < answer_words.len() as f64 * 0.3 {
        RuleResult::flagged(50, "Weak connection between reasoning and answer")
    } else {
        RuleResult::clean(100)
    }
}
