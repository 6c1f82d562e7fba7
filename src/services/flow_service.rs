use crate::dto::flow_dto::{
    ExerciseRequest, QuizRequest, RecommendationsRequest, RefactorAnalysisRequest,
    RefactorChallengeRequest, SoftSkillAnalysisRequest, SoftSkillScenarioRequest,
};
use crate::error::{Error, Result};
use crate::models::exercise::{AnalysisResult, ExerciseResult, RefactorChallenge, ScenarioResult};
use crate::models::quiz::{Quiz, QuizQuestion};
use crate::models::recommendation::RecommendationsResult;
use crate::services::llm_client::{GenerationBackend, GenerationRequest};
use crate::services::prompts::{self, Flow};
use crate::utils::markdown::sanitize_markdown;
use rand::seq::SliceRandom;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use validator::Validate;

/// Output side of a flow: the JSON schema handed to the model and the
/// post-validation cleanup applied before the value leaves the service.
pub trait FlowOutput: DeserializeOwned + Validate {
    fn json_schema() -> JsonValue;

    fn sanitized(self) -> Self
    where
        Self: Sized,
    {
        self
    }
}

fn string_object(fields: &[&str]) -> JsonValue {
    let properties: serde_json::Map<String, JsonValue> = fields
        .iter()
        .map(|f| (f.to_string(), serde_json::json!({ "type": "string" })))
        .collect();
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": fields,
        "additionalProperties": false
    })
}

impl FlowOutput for ExerciseResult {
    fn json_schema() -> JsonValue {
        string_object(&["exercise"])
    }

    fn sanitized(self) -> Self {
        Self {
            exercise: sanitize_markdown(&self.exercise),
        }
    }
}

impl FlowOutput for Quiz {
    fn json_schema() -> JsonValue {
        serde_json::json!({
            "type": "object",
            "properties": {
                "title": { "type": "string" },
                "questions": {
                    "type": "array",
                    "minItems": 15,
                    "maxItems": 15,
                    "items": {
                        "type": "object",
                        "properties": {
                            "question": { "type": "string" },
                            "options": {
                                "type": "array",
                                "minItems": 4,
                                "maxItems": 4,
                                "items": { "type": "string" }
                            },
                            "correctAnswer": { "type": "integer", "minimum": 0, "maximum": 3 }
                        },
                        "required": ["question", "options", "correctAnswer"],
                        "additionalProperties": false
                    }
                }
            },
            "required": ["title", "questions"],
            "additionalProperties": false
        })
    }
}

impl FlowOutput for RefactorChallenge {
    fn json_schema() -> JsonValue {
        string_object(&["codeToRefactor", "optimalSolution"])
    }
}

impl FlowOutput for AnalysisResult {
    fn json_schema() -> JsonValue {
        string_object(&["analysis"])
    }

    fn sanitized(self) -> Self {
        Self {
            analysis: sanitize_markdown(&self.analysis),
        }
    }
}

impl FlowOutput for ScenarioResult {
    fn json_schema() -> JsonValue {
        string_object(&["scenario"])
    }

    fn sanitized(self) -> Self {
        Self {
            scenario: sanitize_markdown(&self.scenario),
        }
    }
}

impl FlowOutput for RecommendationsResult {
    fn json_schema() -> JsonValue {
        let list = serde_json::json!({
            "type": "array",
            "items": {
                "type": "object",
                "properties": {
                    "title": { "type": "string" },
                    "url": { "type": "string" },
                    "description": { "type": "string" }
                },
                "required": ["title", "url", "description"],
                "additionalProperties": false
            }
        });
        serde_json::json!({
            "type": "object",
            "properties": {
                "udemy": list,
                "youtube": list,
                "percipio": list
            },
            "required": ["udemy", "youtube", "percipio"],
            "additionalProperties": false
        })
    }
}

#[derive(Clone)]
pub struct FlowService {
    backend: Arc<dyn GenerationBackend>,
    shuffle_quiz_options: bool,
}

impl FlowService {
    pub fn new(backend: Arc<dyn GenerationBackend>, shuffle_quiz_options: bool) -> Self {
        Self {
            backend,
            shuffle_quiz_options,
        }
    }

    pub async fn generate_exercise(&self, req: &ExerciseRequest) -> Result<ExerciseResult> {
        req.validate()?;
        self.run(Flow::GenerateExercise, prompts::exercise_prompt(req))
            .await
    }

    pub async fn generate_quiz(&self, req: &QuizRequest) -> Result<Quiz> {
        req.validate()?;
        let mut quiz: Quiz = self
            .run(Flow::GenerateQuiz, prompts::quiz_prompt(req))
            .await?;
        if self.shuffle_quiz_options {
            let mut rng = rand::thread_rng();
            for question in &mut quiz.questions {
                shuffle_options(question, &mut rng);
            }
        }
        Ok(quiz)
    }

    pub async fn generate_refactor_challenge(
        &self,
        req: &RefactorChallengeRequest,
    ) -> Result<RefactorChallenge> {
        req.validate()?;
        self.run(
            Flow::GenerateRefactorChallenge,
            prompts::refactor_challenge_prompt(req),
        )
        .await
    }

    pub async fn analyze_refactor_solution(
        &self,
        req: &RefactorAnalysisRequest,
    ) -> Result<AnalysisResult> {
        req.validate()?;
        self.run(
            Flow::AnalyzeRefactorSolution,
            prompts::refactor_analysis_prompt(req),
        )
        .await
    }

    pub async fn generate_recommendations(
        &self,
        req: &RecommendationsRequest,
    ) -> Result<RecommendationsResult> {
        req.validate()?;
        let result: RecommendationsResult = self
            .run(
                Flow::GenerateRecommendations,
                prompts::recommendations_prompt(req),
            )
            .await?;
        if result.is_empty() {
            tracing::warn!(technology = %req.technology, "Model returned no recommendations");
        } else {
            tracing::info!(technology = %req.technology, count = result.len(), "Recommendations generated");
        }
        Ok(result)
    }

    pub async fn generate_soft_skill_scenario(
        &self,
        req: &SoftSkillScenarioRequest,
    ) -> Result<ScenarioResult> {
        req.validate()?;
        self.run(
            Flow::GenerateSoftSkillScenario,
            prompts::soft_skill_scenario_prompt(req),
        )
        .await
    }

    pub async fn analyze_soft_skill_solution(
        &self,
        req: &SoftSkillAnalysisRequest,
    ) -> Result<AnalysisResult> {
        req.validate()?;
        self.run(
            Flow::AnalyzeSoftSkillSolution,
            prompts::soft_skill_analysis_prompt(req),
        )
        .await
    }

    async fn run<O: FlowOutput>(&self, flow: Flow, prompt: String) -> Result<O> {
        let request = GenerationRequest {
            flow,
            system_prompt: flow.system_prompt().to_string(),
            prompt,
            output_schema: O::json_schema(),
        };

        tracing::info!(%flow, "Dispatching generation request");
        let raw = self.backend.generate(request).await.map_err(|e| {
            tracing::error!(%flow, error = %e, "Generation backend call failed");
            Error::Generation(format!("{} backend call failed: {}", flow, e))
        })?;

        let output: O = serde_json::from_value(raw).map_err(|e| {
            tracing::error!(%flow, error = %e, "Model output does not match schema");
            Error::Generation(format!("{} output does not match schema: {}", flow, e))
        })?;

        output.validate().map_err(|e| {
            tracing::error!(%flow, error = %e, "Model output failed validation");
            Error::Generation(format!("{} output failed validation: {}", flow, e))
        })?;

        tracing::info!(%flow, "Generation request completed");
        Ok(output.sanitized())
    }
}

/// Shuffles options in place and re-points `correct_answer` at the same text.
pub fn shuffle_options(question: &mut QuizQuestion, rng: &mut impl rand::Rng) {
    let Some(correct) = question.correct_option().map(str::to_string) else {
        return;
    };
    question.options.shuffle(rng);
    if let Some(idx) = question.options.iter().position(|o| *o == correct) {
        question.correct_answer = idx;
    }
}
