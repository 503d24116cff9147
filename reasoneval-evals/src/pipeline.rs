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

//! End-to-end pipeline: split the raw response, segment the reasoning
//! into steps, run every rule, aggregate scores, and reach a verdict.
//!
//! Deficient reasoning is reported through scores and issue notes, not
//! through errors. The only error conditions are a blank question and
//! a response source that fails to deliver text at all.

use crate::llm_client::ResponseSource;
use crate::parser::ResponseParser;
use crate::rules::evaluate_reasoning;
use crate::scorer::Scorer;
use crate::segmenter::StepSegmenter;
use reasoneval_core::{
    EvalError, EvaluationRecord, EvaluationResult, ParsedResponse, ScoreSet, ScoringConfig,
    Verdict,
};
use tracing::{debug, info};

/// Everything produced for one response: intermediate artifacts plus
/// the final scores and verdict.
#[derive(Debug, Clone)]
pub struct EvaluationOutput {
    pub parsed: ParsedResponse,
    pub steps: Vec<String>,
    pub evaluation: EvaluationResult,
    pub scores: ScoreSet,
    pub overall_score: f64,
    pub verdict: Verdict,
}

impl EvaluationOutput {
    /// Flatten the output into the persistable row shape.
    pub fn to_record(&self, question: &str) -> EvaluationRecord {
        EvaluationRecord {
            question: question.to_string(),
            final_answer: self.parsed.answer.clone(),
            reasoning: self.parsed.reasoning.clone(),
            logical_consistency_score: self.scores.logical_consistency_score,
            completeness_score: self.scores.completeness_score,
            instruction_following_score: self.scores.instruction_following_score,
            hallucination_risk_score: self.scores.hallucination_risk_score,
            overall_score: self.overall_score,
            verdict: self.verdict.as_str().to_string(),
            detected_issues: EvaluationRecord::format_issues(&self.evaluation.detected_issues),
        }
    }
}

/// The evaluator. Construction compiles every pattern once; the same
/// instance can evaluate any number of responses.
pub struct ReasoningEvaluator {
    parser: ResponseParser,
    segmenter: StepSegmenter,
    scorer: Scorer,
}

impl ReasoningEvaluator {
    pub fn new() -> Self {
        Self::with_config(ScoringConfig::default())
    }

    pub fn with_config(config: ScoringConfig) -> Self {
        Self {
            parser: ResponseParser::new(),
            segmenter: StepSegmenter::new(),
            scorer: Scorer::new(config),
        }
    }

    /// Evaluate a raw response against the question it answered.
    pub fn evaluate(
        &self,
        raw_response: &str,
        question: &str,
    ) -> Result<EvaluationOutput, EvalError> {
        if question.trim().is_empty() {
            return Err(EvalError::InvalidInput("question is blank".to_string()));
        }

        let parsed = self.parser.split(raw_response);
        let steps = self.segmenter.segment(&parsed.reasoning);
        debug!(
            steps = steps.len(),
            answer_len = parsed.answer.len(),
            "segmented response"
        );

        let evaluation = evaluate_reasoning(&steps, &parsed.answer, question, &parsed.reasoning);
        let scores = self.scorer.calculate_scores(&evaluation);
        let overall_score = self.scorer.overall_score(&scores);
        let verdict = self.scorer.verdict(&scores);
        info!(
            overall = overall_score,
            verdict = verdict.as_str(),
            issues = evaluation.detected_issues.len(),
            "evaluation complete"
        );

        Ok(EvaluationOutput {
            parsed,
            steps,
            evaluation,
            scores,
            overall_score,
            verdict,
        })
    }

    /// Fetch a response for the question from `source`, then evaluate
    /// it. Source failures map to [`EvalError::ResponseUnavailable`].
    pub async fn evaluate_question(
        &self,
        source: &dyn ResponseSource,
        question: &str,
    ) -> Result<EvaluationOutput, EvalError> {
        if question.trim().is_empty() {
            return Err(EvalError::InvalidInput("question is blank".to_string()));
        }

        let raw = source
            .fetch(question)
            .await
            .map_err(|e| EvalError::ResponseUnavailable(e.to_string()))?;
        self.evaluate(&raw, question)
    }
}

impl Default for ReasoningEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
