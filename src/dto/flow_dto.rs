use crate::models::exercise::Difficulty;
use crate::models::quiz::FailedQuestion;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ExerciseRequest {
    #[validate(custom(function = "crate::utils::validation::validate_not_blank"))]
    pub technology: String,
    pub difficulty: Difficulty,
    #[validate(custom(function = "crate::utils::validation::validate_language_code"))]
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct QuizRequest {
    #[validate(custom(function = "crate::utils::validation::validate_not_blank"))]
    pub technology: String,
    #[validate(custom(function = "crate::utils::validation::validate_language_code"))]
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RefactorChallengeRequest {
    #[validate(custom(function = "crate::utils::validation::validate_not_blank"))]
    pub technology: String,
    pub difficulty: Difficulty,
    #[validate(custom(function = "crate::utils::validation::validate_language_code"))]
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefactorAnalysisRequest {
    #[validate(custom(function = "crate::utils::validation::validate_not_blank"))]
    pub original_code: String,
    #[validate(custom(function = "crate::utils::validation::validate_not_blank"))]
    pub user_solution: String,
    #[validate(custom(function = "crate::utils::validation::validate_not_blank"))]
    pub optimal_solution: String,
    #[validate(custom(function = "crate::utils::validation::validate_not_blank"))]
    pub technology: String,
    #[validate(custom(function = "crate::utils::validation::validate_language_code"))]
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SoftSkillScenarioRequest {
    #[validate(custom(function = "crate::utils::validation::validate_not_blank"))]
    pub skill_type: String,
    #[validate(custom(function = "crate::utils::validation::validate_language_code"))]
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SoftSkillAnalysisRequest {
    #[validate(custom(function = "crate::utils::validation::validate_not_blank"))]
    pub scenario: String,
    #[validate(custom(function = "crate::utils::validation::validate_not_blank"))]
    pub user_solution: String,
    #[validate(custom(function = "crate::utils::validation::validate_language_code"))]
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsRequest {
    #[validate(custom(function = "crate::utils::validation::validate_not_blank"))]
    pub technology: String,
    #[validate(custom(function = "crate::utils::validation::validate_not_blank"))]
    pub level: String,
    #[validate(nested)]
    pub failed_questions: Vec<FailedQuestion>,
    #[validate(custom(function = "crate::utils::validation::validate_language_code"))]
    pub language: String,
}
