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

//! Hallucination-risk rules. Unlike the other categories, a *higher*
//! score here means *more* risk; the scorer inverts this axis when
//! folding it into the overall score.
//!
//! The empty-step default is 100 on both rules: no claims means no
//! unsupported claims, so the category reports no evidence of risk.

use reasoneval_core::RuleResult;
use regex::Regex;
use std::sync::OnceLock;

/// Hedging vocabulary that signals vague or uncertain statements.
const VAGUE_INDICATORS: [&str; 14] = [
    "probably",
    "maybe",
    "perhaps",
    "might",
    "could",
    "seems",
    "appears",
    "likely",
    "possibly",
    "somewhat",
    "kind of",
    "sort of",
    "approximately",
    "roughly",
];

/// Justification connectives that excuse an assertive statement.
const JUSTIFICATION_WORDS: [&str; 3] = ["because", "since", "as"];

fn assertive_patterns() -> &'static [Regex; 4] {
    static PATTERNS: OnceLock<[Regex; 4]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            Regex::new(r"\bit is\b.*\b(?:obvious|clear|evident)\b").expect("valid regex"),
            Regex::new(r"\bwe know that\b").expect("valid regex"),
            Regex::new(r"\bit must be\b").expect("valid regex"),
            Regex::new(r"\bclearly\b").expect("valid regex"),
        ]
    })
}

/// Flag assertive statements ("clearly", "we know that", ...) with no
/// justification connective in the same step. At most one increment
/// per step; the penalty is capped at 40.
pub fn check_unsupported_claims(steps: &[String]) -> RuleResult {
    if steps.is_empty() {
        return RuleResult::clean(100);
    }

    let unsupported_count = steps
        .iter()
        .filter(|step| {
            let lower = step.to_lowercase();
            assertive_patterns().iter().any(|p| p.is_match(&lower))
                && !JUSTIFICATION_WORDS.iter().any(|word| lower.contains(word))
        })
        .count();

    if unsupported_count == 0 {
        return RuleResult::clean(100);
    }

    let penalty = (unsupported_count as i32 * 15).min(40);
    RuleResult::flagged(
        (100 - penalty) as u8,
        format!("Found {} potentially unsupported claim(s)", unsupported_count),
    )
}

/// Measure the density of vague language across steps.
pub fn check_vague_statements(steps: &[String]) -> RuleResult {
    if steps.is_empty() {
        return RuleResult::clean(100);
    }

    let vague_count = steps
        .iter()
        .filter(|step| {
            let lower = step.to_lowercase();
            VAGUE_INDICATORS.iter().any(|word| lower.contains(word))
        })
        .count();

    let ratio_base = steps.len() as f64;
    if vague_count as f64 > ratio_base * 0.5 {
        RuleResult::flagged(60, "Excessive vague or uncertain language")
    } else if vague_count as f64 > ratio_base * 0.3 {
        RuleResult::flagged(80, "Moderate use of vague language")
    } else {
        RuleResult::clean(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_steps_means_no_risk() {
        assert_eq!(check_unsupported_claims(&[]), RuleResult::clean(100));
        assert_eq!(check_vague_statements(&[]), RuleResult::clean(100));
    }

    #[test]
    fn test_unsupported_claim_without_justification() {
        let result = check_unsupported_claims(&steps(&[
            "Clearly the moon orbits in under one month",
        ]));
        assert_eq!(result.score, 85);
        assert_eq!(
            result.issue.as_deref(),
            Some("Found 1 potentially unsupported claim(s)")
        );
    }

    #[test]
    fn test_assertion_with_justification_passes() {
        let result = check_unsupported_claims(&steps(&[
            "Clearly the sum is even, because both addends are even",
        ]));
        assert_eq!(result, RuleResult::clean(100));
    }

    #[test]
    fn test_unsupported_penalty_caps_at_forty() {
        let assertive: Vec<String> = (0..5)
            .map(|i| format!("clearly point {} holds on its own", i))
            .collect();
        let result = check_unsupported_claims(&assertive);
        assert_eq!(result.score, 60);
        assert_eq!(
            result.issue.as_deref(),
            Some("Found 5 potentially unsupported claim(s)")
        );
    }

    #[test]
    fn test_one_increment_per_step() {
        // Two assertive phrases in one step still count once.
        let result = check_unsupported_claims(&steps(&[
            "clearly we know that the orbit is round, it must be round",
        ]));
        assert_eq!(result.score, 85);
    }

    #[test]
    fn test_vague_statements_moderate() {
        let result = check_vague_statements(&steps(&[
            "it might rain on the parade",
            "the forecast said sun for the afternoon",
            "the clouds say otherwise to me",
        ]));
        // 1 of 3 steps is vague: above 30%, below 50%.
        assert_eq!(result.score, 80);
        assert_eq!(result.issue.as_deref(), Some("Moderate use of vague language"));
    }

    #[test]
    fn test_vague_statements_excessive() {
        let result = check_vague_statements(&steps(&[
            "probably fine in the end",
            "maybe not after all",
        ]));
        assert_eq!(result.score, 60);
        assert_eq!(result.issue.as_deref(), Some("Excessive vague or uncertain language"));
    }

    #[test]
    fn test_precise_language_passes() {
        let result = check_vague_statements(&steps(&[
            "the mass is 3 kilograms exactly",
            "the volume is 2 liters by measurement",
            "density is therefore 1.5 kilograms per liter",
        ]));
        assert_eq!(result, RuleResult::clean(100));
    }
}
