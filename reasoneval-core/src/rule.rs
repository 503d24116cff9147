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

//! Per-rule results and their grouping into the four fixed categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four fixed quality dimensions, in declaration order.
///
/// Declaration order is load-bearing: the detected-issue list is
/// assembled by iterating categories in this order, then rules in
/// their per-category declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    LogicalConsistency,
    Completeness,
    InstructionFollowing,
    HallucinationRisk,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::LogicalConsistency,
        Category::Completeness,
        Category::InstructionFollowing,
        Category::HallucinationRisk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::LogicalConsistency => "logical_consistency",
            Category::Completeness => "completeness",
            Category::InstructionFollowing => "instruction_following",
            Category::HallucinationRisk => "hallucination_risk",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single heuristic rule.
///
/// `issue` is `Some` iff the rule detected a deficiency; a clean pass
/// carries no issue rather than an empty string. When one rule detects
/// several deficiencies their notes are joined with `"; "` in
/// detection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    /// Score in [0, 100].
    pub score: u8,

    /// Description of the detected deficiency, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
}

impl RuleResult {
    /// A passing result with no issue.
    pub fn clean(score: u8) -> Self {
        Self { score, issue: None }
    }

    /// A result flagging a single deficiency.
    pub fn flagged(score: u8, issue: impl Into<String>) -> Self {
        Self {
            score,
            issue: Some(issue.into()),
        }
    }

    /// Build a result from a penalty-adjusted score and accumulated
    /// issue notes. The score is clamped to [0, 100]; an empty note
    /// list yields a clean result.
    pub fn from_penalties(score: i32, issues: Vec<String>) -> Self {
        let score = score.clamp(0, 100) as u8;
        if issues.is_empty() {
            Self::clean(score)
        } else {
            Self::flagged(score, issues.join("; "))
        }
    }
}

/// One rule's name paired with its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub rule: String,
    #[serde(flatten)]
    pub result: RuleResult,
}

/// Ordered results for every rule of one category.
///
/// The rule set per category is fixed and exhaustive: every rule runs
/// and produces a result even on degenerate input, so the length never
/// varies between evaluations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResults {
    pub rules: Vec<RuleOutcome>,
}

impl CategoryResults {
    pub fn push(&mut self, rule: impl Into<String>, result: RuleResult) {
        self.rules.push(RuleOutcome {
            rule: rule.into(),
            result,
        });
    }

    /// Rule scores in declaration order.
    pub fn scores(&self) -> impl Iterator<Item = u8> + '_ {
        self.rules.iter().map(|r| r.result.score)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Full rule-bank output: one `CategoryResults` per category plus the
/// formatted issue list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub logical_consistency: CategoryResults,
    pub completeness: CategoryResults,
    pub instruction_following: CategoryResults,
    pub hallucination_risk: CategoryResults,

    /// Issues formatted as `[<category>] <issue>`, in category-then-rule
    /// order, omitting rules without an issue.
    pub detected_issues: Vec<String>,
}

impl EvaluationResult {
    pub fn category(&self, category: Category) -> &CategoryResults {
        match category {
            Category::LogicalConsistency => &self.logical_consistency,
            Category::Completeness => &self.completeness,
            Category::InstructionFollowing => &self.instruction_following,
            Category::HallucinationRisk => &self.hallucination_risk,
        }
    }

    /// Assemble `detected_issues` from the per-rule results.
    pub fn collect_issues(&mut self) {
        let mut issues = Vec::new();
        for category in Category::ALL {
            for outcome in &self.category(category).rules {
                if let Some(issue) = &outcome.result.issue {
                    issues.push(format!("[{}] {}", category, issue));
                }
            }
        }
        self.detected_issues = issues;
    }
}
