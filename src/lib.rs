pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::config::Config;
use crate::error::Result;
use crate::services::{
    flow_service::FlowService,
    llm_client::{GenerationBackend, OpenAiBackend},
    pipeline_service::PipelineService,
    session_store::SessionStore,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub flow_service: FlowService,
    pub pipeline: PipelineService,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let backend = OpenAiBackend::from_config(config)?;
        Ok(Self::with_backend(
            Arc::new(backend),
            config.quiz_shuffle_options,
        ))
    }

    pub fn with_backend(backend: Arc<dyn GenerationBackend>, shuffle_quiz_options: bool) -> Self {
        let flow_service = FlowService::new(backend, shuffle_quiz_options);
        let pipeline = PipelineService::new(SessionStore::new(), flow_service.clone());
        Self {
            flow_service,
            pipeline,
        }
    }
}
