use crate::{
    dto::flow_dto::{
        ExerciseRequest, QuizRequest, RecommendationsRequest, RefactorAnalysisRequest,
        RefactorChallengeRequest, SoftSkillAnalysisRequest, SoftSkillScenarioRequest,
    },
    error::Result,
    AppState,
};
use axum::{extract::State, response::IntoResponse, Json};

#[axum::debug_handler]
pub async fn generate_exercise(
    State(state): State<AppState>,
    Json(payload): Json<ExerciseRequest>,
) -> Result<impl IntoResponse> {
    let exercise = state.flow_service.generate_exercise(&payload).await?;
    Ok(Json(exercise))
}

#[axum::debug_handler]
pub async fn generate_quiz(
    State(state): State<AppState>,
    Json(payload): Json<QuizRequest>,
) -> Result<impl IntoResponse> {
    let quiz = state.flow_service.generate_quiz(&payload).await?;
    Ok(Json(quiz))
}

#[axum::debug_handler]
pub async fn generate_refactor_challenge(
    State(state): State<AppState>,
    Json(payload): Json<RefactorChallengeRequest>,
) -> Result<impl IntoResponse> {
    let challenge = state
        .flow_service
        .generate_refactor_challenge(&payload)
        .await?;
    Ok(Json(challenge))
}

#[axum::debug_handler]
pub async fn analyze_refactor_solution(
    State(state): State<AppState>,
    Json(payload): Json<RefactorAnalysisRequest>,
) -> Result<impl IntoResponse> {
    let analysis = state.flow_service.analyze_refactor_solution(&payload).await?;
    Ok(Json(analysis))
}

#[axum::debug_handler]
pub async fn generate_recommendations(
    State(state): State<AppState>,
    Json(payload): Json<RecommendationsRequest>,
) -> Result<impl IntoResponse> {
    let recommendations = state.flow_service.generate_recommendations(&payload).await?;
    Ok(Json(recommendations))
}

#[axum::debug_handler]
pub async fn generate_soft_skill_scenario(
    State(state): State<AppState>,
    Json(payload): Json<SoftSkillScenarioRequest>,
) -> Result<impl IntoResponse> {
    let scenario = state
        .flow_service
        .generate_soft_skill_scenario(&payload)
        .await?;
    Ok(Json(scenario))
}

#[axum::debug_handler]
pub async fn analyze_soft_skill_solution(
    State(state): State<AppState>,
    Json(payload): Json<SoftSkillAnalysisRequest>,
) -> Result<impl IntoResponse> {
    let analysis = state
        .flow_service
        .analyze_soft_skill_solution(&payload)
        .await?;
    Ok(Json(analysis))
}
