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

//! Response splitter: separates raw model output into an answer and a
//! reasoning narrative.
//!
//! Strategies cascade, first applicable wins:
//!
//! 1. explicit `REASONING:` / `FINAL ANSWER:` blocks (the canonical
//!    format, short-circuits everything else when both capture),
//! 2. labeled-answer patterns (`final answer:`, `answer:`,
//!    `therefore ... the answer is ...`, `the result/solution is ...`),
//! 3. last non-blank line as the answer,
//! 4. reasoning-span derivation from the text preceding the answer.
//!
//! The splitter never fails; it degrades to best-effort extraction and
//! returns empty fields for blank input.

use reasoneval_core::ParsedResponse;
use regex::Regex;
use tracing::debug;

pub struct ResponseParser {
    explicit_reasoning: Regex,
    explicit_answer: Regex,
    answer_patterns: Vec<Regex>,
}

impl ResponseParser {
    pub fn new() -> Self {
        Self {
            explicit_reasoning: Regex::new(r"(?si)REASONING:\s*(.*?)\s*(?:FINAL ANSWER:|$)")
                .expect("valid regex"),
            explicit_answer: Regex::new(r"(?si)FINAL ANSWER:\s*(.*)").expect("valid regex"),
            answer_patterns: vec![
                Regex::new(r"(?im)(?:final answer|answer):\s*(.+?)(?:\n|$)")
                    .expect("valid regex"),
                Regex::new(r"(?im)(?:therefore|thus|so),?\s+(?:the answer is|it is)\s+(.+?)(?:\n|$)")
                    .expect("valid regex"),
                Regex::new(r"(?im)(?:the result is|the solution is)\s+(.+?)(?:\n|$)")
                    .expect("valid regex"),
            ],
        }
    }

    /// Split raw text into answer and reasoning. Total: any input maps
    /// to a well-formed `ParsedResponse`.
    pub fn split(&self, raw: &str) -> ParsedResponse {
        if raw.trim().is_empty() {
            return ParsedResponse::default();
        }

        // Strategy 1: explicit blocks. Both captures present means the
        // response used the canonical format and we are done.
        let mut reasoning = self
            .explicit_reasoning
            .captures(raw)
            .map(|c| c[1].trim().to_string())
            .unwrap_or_default();
        let mut answer = self
            .explicit_answer
            .captures(raw)
            .map(|c| c[1].trim().to_string())
            .unwrap_or_default();

        if !reasoning.is_empty() && !answer.is_empty() {
            return ParsedResponse { answer, reasoning };
        }

        // Strategy 2: labeled-answer fallbacks, first match wins.
        for pattern in &self.answer_patterns {
            if let Some(captures) = pattern.captures(raw) {
                answer = captures[1].trim().to_string();
                break;
            }
        }

        // Strategy 3: last non-blank line.
        if answer.is_empty() {
            if let Some(line) = raw.lines().map(str::trim).filter(|l| !l.is_empty()).last() {
                answer = line.to_string();
            }
        }

        // Strategy 4: derive the reasoning span. Reasoning captured by
        // the explicit block always short-circuits this derivation.
        if reasoning.is_empty() {
            reasoning = self.derive_reasoning_span(raw, &answer);
        }

        debug!(
            answer_len = answer.len(),
            reasoning_len = reasoning.len(),
            "split response"
        );
        ParsedResponse { answer, reasoning }
    }

    /// Default the reasoning to the whole raw text, then try to trim
    /// it to the span preceding the answer's last occurrence. Preferred
    /// cut points, in priority order, are the markers `"Final Answer"`,
    /// `"Answer:"` and `"Therefore"` (case-sensitive); without one the
    /// cut lands immediately before the answer. An answer that cannot
    /// be located leaves the full text in place.
    fn derive_reasoning_span(&self, raw: &str, answer: &str) -> String {
        if answer.is_empty() {
            return raw.to_string();
        }
        let answer_index = match rfind_case_insensitive(raw, answer) {
            Some(index) if index > 0 => index,
            _ => return raw.to_string(),
        };

        let prefix = &raw[..answer_index];
        let marker = prefix
            .rfind("Final Answer")
            .or_else(|| prefix.rfind("Answer:"))
            .or_else(|| prefix.rfind("Therefore"));

        match marker {
            Some(position) if position > 0 => raw[..position].trim().to_string(),
            _ => prefix.trim().to_string(),
        }
    }
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte index of the last case-insensitive occurrence of `needle` in
/// `haystack`, validated against the original string's char
/// boundaries (lowercasing can shift byte offsets for non-ASCII
/// text, in which case the occurrence is treated as not found).
fn rfind_case_insensitive(haystack: &str, needle: &str) -> Option<usize> {
    let haystack_lower = haystack.to_lowercase();
    let needle_lower = needle.to_lowercase();
    haystack_lower
        .rfind(&needle_lower)
        .filter(|&index| haystack.is_char_boundary(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_fields() {
        let parser = ResponseParser::new();
        assert_eq!(parser.split(""), ParsedResponse::default());
        assert_eq!(parser.split("   \n\t  "), ParsedResponse::default());
    }

    #[test]
    fn test_explicit_blocks() {
        let parser = ResponseParser::new();
        let raw = "REASONING:\n1. First, X.\n2. Then, Y.\nFINAL ANSWER:\nZ";
        let parsed = parser.split(raw);
        assert_eq!(parsed.answer, "Z");
        assert!(parsed.reasoning.contains("1. First, X."));
        assert!(parsed.reasoning.contains("2. Then, Y."));
        assert!(!parsed.reasoning.contains("FINAL ANSWER"));
    }

    #[test]
    fn test_explicit_blocks_case_insensitive() {
        let parser = ResponseParser::new();
        let raw = "reasoning: think hard about it\nfinal answer: 42";
        let parsed = parser.split(raw);
        assert_eq!(parsed.answer, "42");
        assert_eq!(parsed.reasoning, "think hard about it");
    }

    #[test]
    fn test_labeled_answer_fallback() {
        let parser = ResponseParser::new();
        let raw = "I worked through the problem.\nAnswer: the mitochondria\nSome trailing note";
        let parsed = parser.split(raw);
        assert_eq!(parsed.answer, "the mitochondria");
    }

    #[test]
    fn test_therefore_answer_fallback() {
        let parser = ResponseParser::new();
        let raw = "The angles sum to 180 degrees.\nTherefore, the answer is 60 degrees.";
        let parsed = parser.split(raw);
        assert_eq!(parsed.answer, "60 degrees.");
    }

    #[test]
    fn test_last_line_fallback() {
        let parser = ResponseParser::new();
        let raw = "Some musings without labels.\nMore musings.\nThe sky is blue.";
        let parsed = parser.split(raw);
        assert_eq!(parsed.answer, "The sky is blue.");
        // Answer found at the end; reasoning trims to the preceding span.
        assert!(parsed.reasoning.contains("Some musings"));
        assert!(!parsed.reasoning.contains("sky is blue"));
    }

    #[test]
    fn test_reasoning_trims_at_preceding_marker() {
        let parser = ResponseParser::new();
        let raw = "Step one.\nStep two.\nTherefore, the answer is 7.";
        let parsed = parser.split(raw);
        assert_eq!(parsed.answer, "7.");
        assert_eq!(parsed.reasoning, "Step one.\nStep two.");
    }

    #[test]
    fn test_answer_at_start_keeps_full_reasoning() {
        let parser = ResponseParser::new();
        // The whole text is the answer, located at byte 0, so the span
        // derivation leaves the reasoning untrimmed.
        let raw = "blue skies ahead";
        let parsed = parser.split(raw);
        assert_eq!(parsed.answer, "blue skies ahead");
        assert_eq!(parsed.reasoning, raw);
    }

    #[test]
    fn test_marker_at_start_cuts_before_answer() {
        let parser = ResponseParser::new();
        let raw = "Answer: yes";
        let parsed = parser.split(raw);
        assert_eq!(parsed.answer, "yes");
        // "Answer:" sits at byte 0, which is not a usable cut point, so
        // the reasoning falls back to the span before the answer itself.
        assert_eq!(parsed.reasoning, "Answer:");
    }

    #[test]
    fn test_determinism() {
        let parser = ResponseParser::new();
        let raw = "REASONING:\nBecause of A, B follows.\nFINAL ANSWER:\nB";
        assert_eq!(parser.split(raw), parser.split(raw));
    }
}
