use crate::error::{Error, Result};
use crate::models::catalog::{SOFT_SKILLS, TECHNOLOGIES};
use crate::models::learning_path::{find_learning_path, LEARNING_PATHS};
use axum::{extract::Path, response::IntoResponse, Json};

pub async fn list_technologies() -> impl IntoResponse {
    Json(TECHNOLOGIES)
}

pub async fn list_soft_skills() -> impl IntoResponse {
    Json(SOFT_SKILLS)
}

pub async fn list_learning_paths() -> impl IntoResponse {
    Json(LEARNING_PATHS)
}

pub async fn get_learning_path(Path(slug): Path<String>) -> Result<impl IntoResponse> {
    let path = find_learning_path(&slug)
        .ok_or_else(|| Error::NotFound(format!("No learning path for '{}'", slug)))?;
    Ok(Json(path))
}
