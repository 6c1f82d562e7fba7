pub mod catalog;
pub mod flows;
pub mod health;
pub mod sessions;

use crate::middleware::rate_limit::{rps_middleware, RateLimiter};
use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Every API route. Flow and session groups each get their own limiter so a
/// burst of generation calls cannot starve session polling.
pub fn router(state: AppState, api_rps: u32) -> Router {
    let base_routes = Router::new()
        .route("/health", get(health::health))
        .route("/api/catalog/technologies", get(catalog::list_technologies))
        .route("/api/catalog/soft-skills", get(catalog::list_soft_skills))
        .route("/api/catalog/paths", get(catalog::list_learning_paths))
        .route("/api/catalog/paths/:slug", get(catalog::get_learning_path));

    let flow_api = Router::new()
        .route("/api/flows/exercise", post(flows::generate_exercise))
        .route("/api/flows/quiz", post(flows::generate_quiz))
        .route(
            "/api/flows/refactor-challenge",
            post(flows::generate_refactor_challenge),
        )
        .route(
            "/api/flows/refactor-analysis",
            post(flows::analyze_refactor_solution),
        )
        .route(
            "/api/flows/recommendations",
            post(flows::generate_recommendations),
        )
        .route(
            "/api/flows/soft-skill-scenario",
            post(flows::generate_soft_skill_scenario),
        )
        .route(
            "/api/flows/soft-skill-analysis",
            post(flows::analyze_soft_skill_solution),
        )
        .layer(axum::middleware::from_fn_with_state(
            RateLimiter::new(api_rps),
            rps_middleware,
        ));

    let session_api = Router::new()
        .route("/api/sessions", post(sessions::create_session))
        .route(
            "/api/sessions/:id",
            axum::routing::delete(sessions::delete_session),
        )
        .route("/api/sessions/:id/quizzes", get(sessions::list_quizzes))
        .route(
            "/api/sessions/:id/quizzes/:slug",
            get(sessions::get_quiz).post(sessions::select_quiz),
        )
        .route(
            "/api/sessions/:id/quizzes/:slug/submit",
            post(sessions::submit_answers),
        )
        .route(
            "/api/sessions/:id/quizzes/:slug/retry",
            post(sessions::retry_quiz),
        )
        .route(
            "/api/sessions/:id/quizzes/:slug/toggle-answers",
            post(sessions::toggle_answers),
        )
        .layer(axum::middleware::from_fn_with_state(
            RateLimiter::new(api_rps),
            rps_middleware,
        ));

    base_routes
        .merge(flow_api)
        .merge(session_api)
        .with_state(state)
}
