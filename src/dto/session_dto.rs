use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreatedResponse {
    pub session_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SelectQuizPayload {
    #[validate(custom(function = "crate::utils::validation::validate_language_code"))]
    pub language: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RetryQuizPayload {
    #[validate(custom(function = "crate::utils::validation::validate_language_code"))]
    pub language: Option<String>,
}

/// One entry per question; `null` marks a question left unanswered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAnswersPayload {
    pub answers: Vec<Option<usize>>,
}
