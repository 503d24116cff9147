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

//! Step segmenter: cuts a reasoning narrative into an ordered
//! sequence of discrete steps.
//!
//! Strategies cascade in fixed order, each requiring at least two
//! captured segments to be accepted (a single match is not a list):
//! numbered markers, `Step N` labels, bullets, ordinal transition
//! words, paragraph split, sentence split, whole-text fallback.
//! Exactly one strategy's output is ever returned.
//!
//! The marker strategies locate marker positions and slice the text
//! between consecutive markers, so a step may span multiple lines.
//! Every returned segment is whitespace-trimmed. Segmentation is
//! lossy by design but deterministic: identical input always yields
//! identical output.

use regex::Regex;
use tracing::debug;

pub struct StepSegmenter {
    numbered: Regex,
    step_label: Regex,
    bullet: Regex,
    ordinal: Regex,
    sentence_boundary: Regex,
}

impl StepSegmenter {
    pub fn new() -> Self {
        Self {
            // `1.`, `2)` and emphasized `**3.**` markers at line starts.
            numbered: Regex::new(r"(?m)^\s*(?:\*\*)?\d+[.)](?:\*\*)?\s+").expect("valid regex"),
            step_label: Regex::new(r"(?mi)^\s*(?:\*\*)?step\s+(?:\d+|[a-z])\b(?:\*\*)?[:\s]\s*")
                .expect("valid regex"),
            bullet: Regex::new(r"(?m)^\s*[-*•]\s+").expect("valid regex"),
            ordinal: Regex::new(
                r"(?mi)^\s*(?:first|second|third|fourth|fifth|next|then|finally)\b[,:]?\s+",
            )
            .expect("valid regex"),
            sentence_boundary: Regex::new(r"[.!?]+\s+").expect("valid regex"),
        }
    }

    /// Segment reasoning text into steps. Total: blank input yields an
    /// empty sequence, anything else at least one step.
    pub fn segment(&self, reasoning: &str) -> Vec<String> {
        let trimmed = reasoning.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        for (strategy, marker) in [
            ("numbered", &self.numbered),
            ("step_label", &self.step_label),
            ("bullet", &self.bullet),
            ("ordinal", &self.ordinal),
        ] {
            if let Some(steps) = split_between_markers(marker, reasoning) {
                debug!(strategy, step_count = steps.len(), "segmented reasoning");
                return steps;
            }
        }

        let paragraphs: Vec<String> = reasoning
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        if paragraphs.len() >= 2 {
            debug!(strategy = "paragraph", step_count = paragraphs.len(), "segmented reasoning");
            return paragraphs;
        }

        let sentences: Vec<String> = self
            .sentence_boundary
            .split(reasoning)
            .map(str::trim)
            .filter(|s| !s.is_empty() && s.chars().count() > 10)
            .map(str::to_string)
            .collect();
        if sentences.len() >= 2 {
            debug!(strategy = "sentence", step_count = sentences.len(), "segmented reasoning");
            return sentences;
        }

        vec![trimmed.to_string()]
    }
}

impl Default for StepSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Capture the text between consecutive marker matches. Accepted only
/// when at least two non-empty segments result; otherwise the caller
/// falls through to the next strategy.
fn split_between_markers(marker: &Regex, text: &str) -> Option<Vec<String>> {
    let matches: Vec<(usize, usize)> = marker.find_iter(text).map(|m| (m.start(), m.end())).collect();
    if matches.len() < 2 {
        return None;
    }

    let mut steps = Vec::new();
    for (i, &(_, end)) in matches.iter().enumerate() {
        let until = matches.get(i + 1).map(|&(start, _)| start).unwrap_or(text.len());
        let segment = text[end..until].trim();
        if !segment.is_empty() {
            steps.push(segment.to_string());
        }
    }

    if steps.len() >= 2 {
        Some(steps)
    } else {
        None
    }
}
