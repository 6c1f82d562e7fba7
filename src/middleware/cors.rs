use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// The training front-end is served from a different origin and only talks JSON.
pub fn api_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(Any)
}
