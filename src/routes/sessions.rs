use crate::{
    dto::session_dto::{
        RetryQuizPayload, SelectQuizPayload, SessionCreatedResponse, SubmitAnswersPayload,
    },
    error::Result,
    services::pipeline_service::RecommendationDispatch,
    AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

#[axum::debug_handler]
pub async fn create_session(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let session_id = state.pipeline.store().create_session()?;
    Ok((StatusCode::CREATED, Json(SessionCreatedResponse { session_id })))
}

#[axum::debug_handler]
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.pipeline.store().remove_session(id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn list_quizzes(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let pipelines = state.pipeline.store().snapshot_all(id)?;
    Ok(Json(json!({ "items": pipelines })))
}

#[axum::debug_handler]
pub async fn get_quiz(
    State(state): State<AppState>,
    Path((id, slug)): Path<(Uuid, String)>,
) -> Result<impl IntoResponse> {
    let pipeline = state.pipeline.store().snapshot(id, &slug)?;
    Ok(Json(pipeline))
}

#[axum::debug_handler]
pub async fn select_quiz(
    State(state): State<AppState>,
    Path((id, slug)): Path<(Uuid, String)>,
    Json(payload): Json<SelectQuizPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let pipeline = state
        .pipeline
        .select_technology(id, &slug, &payload.language)
        .await?;
    Ok(Json(pipeline))
}

/// Scores the answers and hands the recommendation fetch to a background task.
#[axum::debug_handler]
pub async fn submit_answers(
    State(state): State<AppState>,
    Path((id, slug)): Path<(Uuid, String)>,
    Json(payload): Json<SubmitAnswersPayload>,
) -> Result<impl IntoResponse> {
    let result = state.pipeline.submit_answers(id, &slug, &payload.answers)?;

    let pipeline = state.pipeline.clone();
    let task_slug = slug.clone();
    tokio::spawn(async move {
        match pipeline.fetch_recommendations(id, &task_slug).await {
            Ok(RecommendationDispatch::Dispatched) => {}
            Ok(RecommendationDispatch::AlreadyRequested) => {
                tracing::debug!(session_id = %id, slug = %task_slug, "Recommendations already requested");
            }
            Err(e) => {
                tracing::error!(session_id = %id, slug = %task_slug, error = %e, "Recommendation task failed");
            }
        }
    });

    Ok(Json(result))
}

#[axum::debug_handler]
pub async fn retry_quiz(
    State(state): State<AppState>,
    Path((id, slug)): Path<(Uuid, String)>,
    payload: Option<Json<RetryQuizPayload>>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload.unwrap_or_default();
    payload.validate()?;
    let pipeline = state
        .pipeline
        .retry(id, &slug, payload.language.as_deref())
        .await?;
    Ok(Json(pipeline))
}

#[axum::debug_handler]
pub async fn toggle_answers(
    State(state): State<AppState>,
    Path((id, slug)): Path<(Uuid, String)>,
) -> Result<impl IntoResponse> {
    let pipeline = state.pipeline.toggle_answers(id, &slug)?;
    Ok(Json(pipeline))
}
