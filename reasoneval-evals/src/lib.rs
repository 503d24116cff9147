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

//! # ReasonEval Evaluation Pipeline
//!
//! Turns a free-text "reasoning + answer" LLM response into a
//! structured quality verdict, without ever judging factual
//! correctness: every signal is a deterministic, rule-based check of
//! structural and linguistic quality.
//!
//! The pipeline runs four strictly sequential stages:
//!
//! 1. **Response splitting** ([`ResponseParser`]) — cascading,
//!    fallback-driven extraction of the answer and the reasoning
//!    narrative from raw text.
//! 2. **Step segmentation** ([`StepSegmenter`]) — cascading pattern
//!    strategies that cut the narrative into ordered reasoning steps.
//! 3. **Rule bank** ([`rules`]) — eleven independent heuristic rules
//!    across four fixed quality categories, each producing a 0-100
//!    score and an optional issue.
//! 4. **Scoring** ([`Scorer`]) — per-category means, a weighted
//!    overall score and the binary verdict.
//!
//! The core is pure and stateless; the only suspending operation is
//! fetching the raw response from a [`ResponseSource`], which lies
//! outside the pipeline boundary.
//!
//! ## Example
//!
//! ```rust
//! use reasoneval_evals::ReasoningEvaluator;
//!
//! let evaluator = ReasoningEvaluator::new();
//! let raw = "REASONING:\n1. First, define the terms.\n2. Then, deduce.\nFINAL ANSWER:\n42";
//! let output = evaluator.evaluate(raw, "What is the answer?").unwrap();
//! assert_eq!(output.parsed.answer, "42");
//! assert_eq!(output.steps.len(), 2);
//! ```

pub mod llm_client;
pub mod parser;
pub mod pipeline;
pub mod rules;
pub mod scorer;
pub mod segmenter;
pub mod sink;

pub use llm_client::{OllamaClient, ResponseSource, SourceError, DEFAULT_PROMPT_TEMPLATE};
pub use parser::ResponseParser;
pub use pipeline::{EvaluationOutput, ReasoningEvaluator};
pub use scorer::Scorer;
pub use segmenter::StepSegmenter;
pub use sink::{EvaluationSink, JsonlSink, SinkError};

pub use reasoneval_core::{
    Category, CategoryResults, EvalError, EvaluationRecord, EvaluationResult, ParsedResponse,
    RuleResult, ScoreSet, ScoringConfig, ScoringWeights, Verdict,
};
