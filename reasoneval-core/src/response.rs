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

use serde::{Deserialize, Serialize};

/// A raw model response split into its answer and reasoning narrative.
///
/// Both fields are always present; a field the splitter could not
/// extract is the empty string, never absent. An empty raw response
/// yields both fields empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResponse {
    /// The final answer extracted from the response.
    pub answer: String,

    /// The reasoning narrative preceding (or containing) the answer.
    pub reasoning: String,
}

impl ParsedResponse {
    pub fn new(answer: impl Into<String>, reasoning: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            reasoning: reasoning.into(),
        }
    }

    /// True when neither an answer nor any reasoning was extracted.
    pub fn is_empty(&self) -> bool {
        self.answer.is_empty() && self.reasoning.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let parsed = ParsedResponse::default();
        assert!(parsed.is_empty());
        assert_eq!(parsed.answer, "");
        assert_eq!(parsed.reasoning, "");
    }

    #[test]
    fn test_serialization_round_trip() {
        let parsed = ParsedResponse::new("42", "1. Think.\n2. Conclude.");
        let json = serde_json::to_string(&parsed).unwrap();
        let back: ParsedResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, back);
    }
}
