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

//! Instruction-following rules. These inspect the raw reasoning text
//! (not the segmented steps) because they judge the formatting the
//! response actually used.

use reasoneval_core::RuleResult;
use regex::Regex;
use std::sync::OnceLock;

fn numbered_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^\s*\d+[.)]").expect("valid regex"))
}

fn step_label() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?mi)^\s*step\s+\d+").expect("valid regex"))
}

fn bullet_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^\s*[-*•]").expect("valid regex"))
}

fn ordinal_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?mi)^\s*(?:first|second|third|next|then|finally)").expect("valid regex")
    })
}

/// Verify some step-by-step structure exists: numbered lines, `Step N`
/// labels, bullets, or ordinal words at line starts.
pub fn check_step_format(reasoning: &str) -> RuleResult {
    if reasoning.is_empty() {
        return RuleResult::flagged(0, "No reasoning provided");
    }

    let has_structure = numbered_line().is_match(reasoning)
        || step_label().is_match(reasoning)
        || bullet_line().is_match(reasoning)
        || ordinal_line().is_match(reasoning);

    if has_structure {
        RuleResult::clean(100)
    } else {
        RuleResult::flagged(60, "No clear step-by-step structure")
    }
}

/// Grade how explicitly the steps are numbered or labeled.
pub fn check_explicit_numbering(reasoning: &str) -> RuleResult {
    if reasoning.is_empty() {
        return RuleResult::flagged(0, "No reasoning provided");
    }

    let numbered_items = numbered_line().find_iter(reasoning).count();
    let step_labels = step_label().find_iter(reasoning).count();

    match numbered_items + step_labels {
        n if n >= 3 => RuleResult::clean(100),
        2 => RuleResult::flagged(70, "Limited explicit numbering"),
        1 => RuleResult::flagged(40, "Minimal explicit numbering"),
        _ => RuleResult::flagged(20, "No explicit step numbering"),
    }
}
