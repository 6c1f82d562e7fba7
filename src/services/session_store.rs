use crate::error::{Error, Result};
use crate::models::quiz::{Quiz, QuizResult};
use crate::models::recommendation::RecommendationsResult;
use crate::services::grading_service::GradingService;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum PipelineState {
    Idle {
        error: Option<String>,
    },
    QuizLoading,
    QuizReady {
        quiz: Quiz,
    },
    Submitted {
        quiz: Quiz,
        result: QuizResult,
        error: Option<String>,
    },
    RecommendationsLoading {
        quiz: Quiz,
        result: QuizResult,
    },
    RecommendationsReady {
        quiz: Quiz,
        result: QuizResult,
        recommendations: RecommendationsResult,
    },
}

impl PipelineState {
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineState::Idle { .. } => "idle",
            PipelineState::QuizLoading => "quiz_loading",
            PipelineState::QuizReady { .. } => "quiz_ready",
            PipelineState::Submitted { .. } => "submitted",
            PipelineState::RecommendationsLoading { .. } => "recommendations_loading",
            PipelineState::RecommendationsReady { .. } => "recommendations_ready",
        }
    }

    pub fn quiz(&self) -> Option<&Quiz> {
        match self {
            PipelineState::Idle { .. } | PipelineState::QuizLoading => None,
            PipelineState::QuizReady { quiz }
            | PipelineState::Submitted { quiz, .. }
            | PipelineState::RecommendationsLoading { quiz, .. }
            | PipelineState::RecommendationsReady { quiz, .. } => Some(quiz),
        }
    }

    pub fn result(&self) -> Option<&QuizResult> {
        match self {
            PipelineState::Submitted { result, .. }
            | PipelineState::RecommendationsLoading { result, .. }
            | PipelineState::RecommendationsReady { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn recommendations(&self) -> Option<&RecommendationsResult> {
        match self {
            PipelineState::RecommendationsReady {
                recommendations, ..
            } => Some(recommendations),
            _ => None,
        }
    }
}

/// Per-technology pipeline entry inside one session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlugPipeline {
    pub slug: String,
    pub technology: String,
    pub language: String,
    pub generation: u64,
    pub show_answers: bool,
    pub recommendations_requested: bool,
    pub state: PipelineState,
    pub updated_at: DateTime<Utc>,
}

impl SlugPipeline {
    fn new(slug: &str, technology: &str, language: &str) -> Self {
        Self {
            slug: slug.to_string(),
            technology: technology.to_string(),
            language: language.to_string(),
            generation: 0,
            show_answers: false,
            recommendations_requested: false,
            state: PipelineState::Idle { error: None },
            updated_at: Utc::now(),
        }
    }

    fn transition(&mut self, state: PipelineState) {
        tracing::debug!(
            slug = %self.slug,
            generation = self.generation,
            from = self.state.stage(),
            to = state.stage(),
            "Pipeline transition"
        );
        self.state = state;
        self.updated_at = Utc::now();
    }

    fn restart(&mut self) -> FlowTicket {
        self.generation += 1;
        self.show_answers = false;
        self.recommendations_requested = false;
        self.transition(PipelineState::QuizLoading);
        FlowTicket {
            slug: self.slug.clone(),
            generation: self.generation,
        }
    }
}

/// Identifies the request that started an async flow. A completion is only
/// applied while the entry still carries the same generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowTicket {
    pub slug: String,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Superseded,
}

#[derive(Debug)]
pub enum QuizLoad {
    Started(FlowTicket),
    Existing(SlugPipeline),
}

/// Everything needed to build a RecommendationsRequest for a claimed entry.
#[derive(Debug, Clone)]
pub struct RecommendationJob {
    pub ticket: FlowTicket,
    pub technology: String,
    pub language: String,
    pub result: QuizResult,
}

#[derive(Debug)]
struct Session {
    pipelines: HashMap<String, SlugPipeline>,
    created_at: DateTime<Utc>,
    last_seen: DateTime<Utc>,
}

#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_session<T>(
        &self,
        session_id: Uuid,
        f: impl FnOnce(&mut Session) -> Result<T>,
    ) -> Result<T> {
        let mut guard = self
            .sessions
            .lock()
            .map_err(|_| Error::Internal("Session store lock poisoned".to_string()))?;
        let session = guard
            .get_mut(&session_id)
            .ok_or_else(|| Error::NotFound(format!("Session {} not found", session_id)))?;
        session.last_seen = Utc::now();
        f(session)
    }

    fn with_pipeline<T>(
        &self,
        session_id: Uuid,
        slug: &str,
        f: impl FnOnce(&mut SlugPipeline) -> Result<T>,
    ) -> Result<T> {
        self.with_session(session_id, |session| {
            let pipeline = session.pipelines.get_mut(slug).ok_or_else(|| {
                Error::NotFound(format!("No quiz for '{}' in session {}", slug, session_id))
            })?;
            f(pipeline)
        })
    }

    pub fn create_session(&self) -> Result<Uuid> {
        let id = Uuid::new_v4();
        let mut guard = self
            .sessions
            .lock()
            .map_err(|_| Error::Internal("Session store lock poisoned".to_string()))?;
        let now = Utc::now();
        guard.insert(
            id,
            Session {
                pipelines: HashMap::new(),
                created_at: now,
                last_seen: now,
            },
        );
        tracing::info!(session_id = %id, "Session created");
        Ok(id)
    }

    pub fn remove_session(&self, session_id: Uuid) -> Result<()> {
        let mut guard = self
            .sessions
            .lock()
            .map_err(|_| Error::Internal("Session store lock poisoned".to_string()))?;
        match guard.remove(&session_id) {
            Some(session) => {
                tracing::info!(
                    session_id = %session_id,
                    age_secs = (Utc::now() - session.created_at).num_seconds(),
                    "Session removed"
                );
                Ok(())
            }
            None => Err(Error::NotFound(format!("Session {} not found", session_id))),
        }
    }

    /// Drops sessions not touched within `max_idle` and returns how many went.
    /// Completions for an evicted session fail with `NotFound`.
    pub fn evict_idle(&self, max_idle: chrono::Duration) -> Result<usize> {
        let cutoff = Utc::now() - max_idle;
        let mut guard = self
            .sessions
            .lock()
            .map_err(|_| Error::Internal("Session store lock poisoned".to_string()))?;
        let before = guard.len();
        guard.retain(|id, session| {
            let keep = session.last_seen >= cutoff;
            if !keep {
                tracing::debug!(
                    session_id = %id,
                    age_secs = (Utc::now() - session.created_at).num_seconds(),
                    slugs = session.pipelines.len(),
                    "Evicting idle session"
                );
            }
            keep
        });
        Ok(before - guard.len())
    }

    pub fn session_count(&self) -> Result<usize> {
        let guard = self
            .sessions
            .lock()
            .map_err(|_| Error::Internal("Session store lock poisoned".to_string()))?;
        Ok(guard.len())
    }

    pub fn snapshot(&self, session_id: Uuid, slug: &str) -> Result<SlugPipeline> {
        self.with_pipeline(session_id, slug, |p| Ok(p.clone()))
    }

    pub fn snapshot_all(&self, session_id: Uuid) -> Result<Vec<SlugPipeline>> {
        self.with_session(session_id, |session| {
            let mut all: Vec<SlugPipeline> = session.pipelines.values().cloned().collect();
            all.sort_by(|a, b| a.slug.cmp(&b.slug));
            Ok(all)
        })
    }

    /// idle -> quiz_loading. A slug that already has a quiz, or a load in
    /// flight, is left as it is.
    pub fn begin_quiz_load(
        &self,
        session_id: Uuid,
        slug: &str,
        technology: &str,
        language: &str,
    ) -> Result<QuizLoad> {
        self.with_session(session_id, |session| {
            let pipeline = session
                .pipelines
                .entry(slug.to_string())
                .or_insert_with(|| SlugPipeline::new(slug, technology, language));

            match pipeline.state {
                PipelineState::Idle { .. } => {
                    pipeline.technology = technology.to_string();
                    pipeline.language = language.to_string();
                    Ok(QuizLoad::Started(pipeline.restart()))
                }
                _ => Ok(QuizLoad::Existing(pipeline.clone())),
            }
        })
    }

    pub fn complete_quiz_load(
        &self,
        session_id: Uuid,
        ticket: &FlowTicket,
        outcome: std::result::Result<Quiz, String>,
    ) -> Result<Completion> {
        self.with_pipeline(session_id, &ticket.slug, |pipeline| {
            if pipeline.generation != ticket.generation
                || pipeline.state != PipelineState::QuizLoading
            {
                tracing::debug!(
                    slug = %ticket.slug,
                    ticket_generation = ticket.generation,
                    current_generation = pipeline.generation,
                    "Discarding superseded quiz load"
                );
                return Ok(Completion::Superseded);
            }

            match outcome {
                Ok(quiz) => pipeline.transition(PipelineState::QuizReady { quiz }),
                Err(error) => pipeline.transition(PipelineState::Idle { error: Some(error) }),
            }
            Ok(Completion::Applied)
        })
    }

    /// quiz_ready -> submitted. Scoring runs under the lock so two racing
    /// submissions cannot both be recorded.
    pub fn submit_answers(
        &self,
        session_id: Uuid,
        slug: &str,
        answers: &[Option<usize>],
    ) -> Result<QuizResult> {
        self.with_pipeline(session_id, slug, |pipeline| {
            let PipelineState::QuizReady { quiz } = &pipeline.state else {
                return Err(Error::State(format!(
                    "Cannot submit answers for '{}' while {}",
                    slug,
                    pipeline.state.stage()
                )));
            };

            let result = GradingService::score_quiz(quiz, answers)?;
            let quiz = quiz.clone();
            pipeline.transition(PipelineState::Submitted {
                quiz,
                result: result.clone(),
                error: None,
            });
            Ok(result)
        })
    }

    /// submitted -> recommendations_loading, at most once per quiz result.
    /// Returns `None` when the fetch was already claimed or there is no result yet.
    pub fn claim_recommendations(
        &self,
        session_id: Uuid,
        slug: &str,
    ) -> Result<Option<RecommendationJob>> {
        self.with_pipeline(session_id, slug, |pipeline| {
            if pipeline.recommendations_requested {
                return Ok(None);
            }
            let PipelineState::Submitted { quiz, result, .. } = &pipeline.state else {
                return Ok(None);
            };

            let quiz = quiz.clone();
            let result = result.clone();
            pipeline.recommendations_requested = true;
            pipeline.transition(PipelineState::RecommendationsLoading {
                quiz,
                result: result.clone(),
            });

            Ok(Some(RecommendationJob {
                ticket: FlowTicket {
                    slug: pipeline.slug.clone(),
                    generation: pipeline.generation,
                },
                technology: pipeline.technology.clone(),
                language: pipeline.language.clone(),
                result,
            }))
        })
    }

    pub fn complete_recommendations(
        &self,
        session_id: Uuid,
        ticket: &FlowTicket,
        outcome: std::result::Result<RecommendationsResult, String>,
    ) -> Result<Completion> {
        self.with_pipeline(session_id, &ticket.slug, |pipeline| {
            if pipeline.generation != ticket.generation {
                tracing::debug!(
                    slug = %ticket.slug,
                    ticket_generation = ticket.generation,
                    current_generation = pipeline.generation,
                    "Discarding superseded recommendations"
                );
                return Ok(Completion::Superseded);
            }

            let PipelineState::RecommendationsLoading { quiz, result } = &pipeline.state else {
                return Ok(Completion::Superseded);
            };
            let quiz = quiz.clone();
            let result = result.clone();

            match outcome {
                Ok(recommendations) => pipeline.transition(PipelineState::RecommendationsReady {
                    quiz,
                    result,
                    recommendations,
                }),
                Err(error) => pipeline.transition(PipelineState::Submitted {
                    quiz,
                    result,
                    error: Some(error),
                }),
            }
            Ok(Completion::Applied)
        })
    }

    /// Drops quiz, result and recommendations for the slug and starts a fresh load.
    pub fn retry(
        &self,
        session_id: Uuid,
        slug: &str,
        language: Option<&str>,
    ) -> Result<(FlowTicket, SlugPipeline)> {
        self.with_pipeline(session_id, slug, |pipeline| {
            if let Some(language) = language {
                pipeline.language = language.to_string();
            }
            let ticket = pipeline.restart();
            tracing::info!(slug, generation = ticket.generation, "Quiz retry requested");
            Ok((ticket, pipeline.clone()))
        })
    }

    pub fn toggle_answers(&self, session_id: Uuid, slug: &str) -> Result<SlugPipeline> {
        self.with_pipeline(session_id, slug, |pipeline| {
            if pipeline.state.result().is_none() {
                return Err(Error::State(format!(
                    "No submitted answers to show for '{}'",
                    slug
                )));
            }
            pipeline.show_answers = !pipeline.show_answers;
            pipeline.updated_at = Utc::now();
            Ok(pipeline.clone())
        })
    }
}
