use crate::dto::flow_dto::{QuizRequest, RecommendationsRequest};
use crate::error::{Error, Result};
use crate::models::catalog;
use crate::models::quiz::QuizResult;
use crate::services::flow_service::FlowService;
use crate::services::session_store::{Completion, FlowTicket, QuizLoad, SessionStore, SlugPipeline};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationDispatch {
    Dispatched,
    AlreadyRequested,
}

/// Drives the per-technology quiz pipeline: quiz load, scoring and the
/// one-shot recommendation fetch. State lives in the [`SessionStore`]; this
/// type only sequences the store transitions around the async flow calls.
#[derive(Clone)]
pub struct PipelineService {
    store: SessionStore,
    flows: FlowService,
}

impl PipelineService {
    pub fn new(store: SessionStore, flows: FlowService) -> Self {
        Self { store, flows }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Starts a quiz load for `slug` unless one is already loaded or loading.
    pub async fn select_technology(
        &self,
        session_id: Uuid,
        slug: &str,
        language: &str,
    ) -> Result<SlugPipeline> {
        let technology = catalog::find_technology(slug)
            .ok_or_else(|| Error::NotFound(format!("Unknown technology '{}'", slug)))?;
        let request = QuizRequest {
            technology: technology.name.to_string(),
            language: language.to_string(),
        };
        request.validate()?;

        match self
            .store
            .begin_quiz_load(session_id, slug, &request.technology, &request.language)?
        {
            QuizLoad::Existing(pipeline) => {
                tracing::debug!(
                    session_id = %session_id,
                    slug,
                    stage = pipeline.state.stage(),
                    "Quiz already requested, ignoring selection"
                );
                Ok(pipeline)
            }
            QuizLoad::Started(ticket) => {
                self.spawn_quiz_load(session_id, ticket, request).await?;
                self.store.snapshot(session_id, slug)
            }
        }
    }

    /// Discards quiz, result and recommendations and loads a fresh quiz.
    pub async fn retry(
        &self,
        session_id: Uuid,
        slug: &str,
        language: Option<&str>,
    ) -> Result<SlugPipeline> {
        let current = self.store.snapshot(session_id, slug)?;
        let request = QuizRequest {
            technology: current.technology,
            language: language.unwrap_or(&current.language).to_string(),
        };
        request.validate()?;

        let (ticket, _) = self
            .store
            .retry(session_id, slug, Some(request.language.as_str()))?;
        self.spawn_quiz_load(session_id, ticket, request).await?;
        self.store.snapshot(session_id, slug)
    }

    /// Runs the load as its own task. The caller may stop waiting (a dropped
    /// request) but the ticket is still completed.
    async fn spawn_quiz_load(
        &self,
        session_id: Uuid,
        ticket: FlowTicket,
        request: QuizRequest,
    ) -> Result<()> {
        let service = self.clone();
        tokio::spawn(async move { service.load_quiz(session_id, ticket, request).await })
            .await
            .map_err(|e| Error::Internal(format!("Quiz load task failed: {}", e)))?
    }

    async fn load_quiz(
        &self,
        session_id: Uuid,
        ticket: FlowTicket,
        request: QuizRequest,
    ) -> Result<()> {
        let outcome = self.flows.generate_quiz(&request).await.map_err(|e| {
            tracing::error!(
                session_id = %session_id,
                slug = %ticket.slug,
                generation = ticket.generation,
                error = %e,
                "Quiz load failed"
            );
            failure_message(&e)
        });

        if self.store.complete_quiz_load(session_id, &ticket, outcome)? == Completion::Superseded {
            tracing::info!(
                session_id = %session_id,
                slug = %ticket.slug,
                generation = ticket.generation,
                "Quiz load superseded"
            );
        }
        Ok(())
    }

    pub fn submit_answers(
        &self,
        session_id: Uuid,
        slug: &str,
        answers: &[Option<usize>],
    ) -> Result<QuizResult> {
        let result = self.store.submit_answers(session_id, slug, answers)?;
        tracing::info!(
            session_id = %session_id,
            slug,
            score = result.score,
            level = %result.level,
            failed = result.failed_questions.len(),
            "Quiz submitted"
        );
        Ok(result)
    }

    /// Requests recommendations for the slug's quiz result. Only the first
    /// call per result reaches the backend.
    pub async fn fetch_recommendations(
        &self,
        session_id: Uuid,
        slug: &str,
    ) -> Result<RecommendationDispatch> {
        let Some(job) = self.store.claim_recommendations(session_id, slug)? else {
            return Ok(RecommendationDispatch::AlreadyRequested);
        };

        let request = RecommendationsRequest {
            technology: job.technology,
            level: job.result.level.to_string(),
            failed_questions: job.result.failed_questions,
            language: job.language,
        };

        let outcome = self
            .flows
            .generate_recommendations(&request)
            .await
            .map_err(|e| {
                tracing::error!(
                    session_id = %session_id,
                    slug,
                    generation = job.ticket.generation,
                    error = %e,
                    "Recommendations failed"
                );
                failure_message(&e)
            });

        if self
            .store
            .complete_recommendations(session_id, &job.ticket, outcome)?
            == Completion::Superseded
        {
            tracing::info!(
                session_id = %session_id,
                slug,
                generation = job.ticket.generation,
                "Recommendations superseded"
            );
        }
        Ok(RecommendationDispatch::Dispatched)
    }

    pub fn toggle_answers(&self, session_id: Uuid, slug: &str) -> Result<SlugPipeline> {
        self.store.toggle_answers(session_id, slug)
    }
}

fn failure_message(err: &Error) -> String {
    match err {
        Error::Generation(_) => "generation failed".to_string(),
        other => other.to_string(),
    }
}
