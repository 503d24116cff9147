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

//! End-to-end pipeline tests: raw response in, verdict and persisted
//! record out.

use async_trait::async_trait;
use reasoneval_evals::{
    EvalError, EvaluationSink, JsonlSink, OllamaClient, ReasoningEvaluator, ResponseSource,
    SourceError, Verdict,
};

struct CannedSource(String);

#[async_trait]
impl ResponseSource for CannedSource {
    async fn fetch(&self, _question: &str) -> Result<String, SourceError> {
        Ok(self.0.clone())
    }
}

struct FailingSource;

#[async_trait]
impl ResponseSource for FailingSource {
    async fn fetch(&self, _question: &str) -> Result<String, SourceError> {
        Err(SourceError::ApiError("503: overloaded".to_string()))
    }
}

#[test]
fn canonical_response_splits_and_segments() {
    let evaluator = ReasoningEvaluator::new();
    let raw = "REASONING:\n1. First, X.\n2. Then, Y.\nFINAL ANSWER:\nZ";
    let output = evaluator.evaluate(raw, "What is Z?").unwrap();

    assert_eq!(output.parsed.answer, "Z");
    assert_eq!(output.steps, vec!["First, X.", "Then, Y."]);
    assert!(output.overall_score >= 0.0 && output.overall_score <= 100.0);
}

#[test]
fn well_structured_reasoning_earns_good_verdict() {
    let raw = "REASONING:\n\
        1. By definition, a fruit is the seed-bearing structure that develops from the flower of a plant.\n\
        2. A tomato develops from the tomato flower and contains seeds, so it satisfies that definition.\n\
        3. Therefore, because the tomato meets the fundamental definition, it is classified as a fruit.\n\
        \n\
        FINAL ANSWER: Yes, a tomato is a fruit.";
    let evaluator = ReasoningEvaluator::new();
    let output = evaluator.evaluate(raw, "Is a tomato a fruit?").unwrap();

    assert_eq!(output.verdict, Verdict::GoodReasoning);
    assert!(output.overall_score >= 70.0);
    assert_eq!(output.steps.len(), 3);
}

#[test]
fn unstructured_one_liner_earns_flawed_verdict() {
    let evaluator = ReasoningEvaluator::new();
    let output = evaluator.evaluate("maybe yes", "Is a tomato a fruit?").unwrap();

    assert_eq!(output.verdict, Verdict::FlawedReasoning);
    assert!(!output.evaluation.detected_issues.is_empty());
}

#[test]
fn deficient_reasoning_is_reported_not_rejected() {
    let evaluator = ReasoningEvaluator::new();
    // Empty response, blank reasoning, no steps: still a result.
    let output = evaluator.evaluate("", "Why?").unwrap();
    assert_eq!(output.verdict, Verdict::FlawedReasoning);
    assert_eq!(output.scores.hallucination_risk_score, 100.0);
}

#[test]
fn evaluation_is_deterministic() {
    let evaluator = ReasoningEvaluator::new();
    let raw = "First, consider the premise.\nThen, draw the conclusion.\nAnswer: it follows";
    let a = evaluator.evaluate(raw, "Does it follow?").unwrap();
    let b = evaluator.evaluate(raw, "Does it follow?").unwrap();

    assert_eq!(a.parsed, b.parsed);
    assert_eq!(a.steps, b.steps);
    assert_eq!(a.overall_score, b.overall_score);
    assert_eq!(a.verdict, b.verdict);
}

#[test]
fn record_round_trips_through_jsonl_sink() {
    let evaluator = ReasoningEvaluator::new();
    let raw = "REASONING:\n1. Light scatters.\n2. Blue scatters most.\nFINAL ANSWER: Rayleigh scattering";
    let output = evaluator.evaluate(raw, "Why is the sky blue?").unwrap();
    let record = output.to_record("Why is the sky blue?");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("evaluations.jsonl");
    let sink = JsonlSink::new(&path);
    sink.record(&record).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let row: serde_json::Value = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
    assert_eq!(row["question"], "Why is the sky blue?");
    assert_eq!(row["final_answer"], "Rayleigh scattering");
    assert_eq!(row["overall_score"], output.overall_score);
    assert_eq!(row["verdict"], output.verdict.as_str());
}

#[tokio::test]
async fn evaluate_question_uses_the_source() {
    let evaluator = ReasoningEvaluator::new();
    let source = CannedSource(
        "REASONING:\n1. Water boils at 100 degrees Celsius at sea level, because that is where vapor pressure equals atmospheric pressure.\n2. Therefore the boiling point at sea level is 100 degrees Celsius.\nFINAL ANSWER: 100 degrees Celsius".to_string(),
    );
    let output = evaluator
        .evaluate_question(&source, "At what temperature does water boil?")
        .await
        .unwrap();
    assert_eq!(output.parsed.answer, "100 degrees Celsius");
}

#[tokio::test]
async fn evaluate_question_maps_source_failures() {
    let evaluator = ReasoningEvaluator::new();
    let err = evaluator
        .evaluate_question(&FailingSource, "Anything?")
        .await
        .unwrap_err();
    assert!(matches!(err, EvalError::ResponseUnavailable(_)));
    assert!(err.to_string().contains("overloaded"));
}

#[tokio::test]
async fn evaluate_question_rejects_blank_question() {
    let evaluator = ReasoningEvaluator::new();
    let err = evaluator
        .evaluate_question(&FailingSource, "  \t ")
        .await
        .unwrap_err();
    // Rejected before the source is ever consulted.
    assert!(matches!(err, EvalError::InvalidInput(_)));
}

#[tokio::test]
async fn full_pipeline_against_mock_server() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/generate")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"response": "REASONING:\n1. A prime number is, by definition, a natural number with exactly two divisors.\n2. The number 7 is divisible only by 1 and 7, so it has exactly two divisors.\n3. Therefore, because 7 satisfies the definition, 7 is prime.\n\nFINAL ANSWER: Yes, 7 is a prime number."}"#,
        )
        .create_async()
        .await;

    let client = OllamaClient::new("llama3").with_base_url(server.url());
    let evaluator = ReasoningEvaluator::new();
    let output = evaluator
        .evaluate_question(&client, "Is 7 a prime number?")
        .await
        .unwrap();

    assert_eq!(output.parsed.answer, "Yes, 7 is a prime number.");
    assert_eq!(output.steps.len(), 3);
    assert_eq!(output.verdict, Verdict::GoodReasoning);
}
