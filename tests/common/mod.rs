#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;
use training_backend::error::{Error, Result};
use training_backend::services::llm_client::{GenerationBackend, GenerationRequest};
use training_backend::services::prompts::Flow;
use training_backend::{routes, AppState};

/// In-process backend that answers every flow with canned, valid output and
/// records each request it sees.
#[derive(Default)]
pub struct ScriptedBackend {
    requests: Mutex<Vec<GenerationRequest>>,
    overrides: Mutex<HashMap<Flow, JsonValue>>,
}

impl ScriptedBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond_with(&self, flow: Flow, value: JsonValue) {
        self.overrides.lock().unwrap().insert(flow, value);
    }

    pub fn calls(&self, flow: Flow) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.flow == flow)
            .count()
    }

    pub fn requests(&self, flow: Flow) -> Vec<GenerationRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.flow == flow)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl GenerationBackend for ScriptedBackend {
    async fn generate(&self, request: GenerationRequest) -> Result<JsonValue> {
        let flow = request.flow;
        self.requests.lock().unwrap().push(request);
        if let Some(value) = self.overrides.lock().unwrap().get(&flow) {
            return Ok(value.clone());
        }
        canned(flow)
    }
}

/// Quiz whose answer key is option 1 everywhere.
pub fn quiz_json(title: &str) -> JsonValue {
    let questions: Vec<JsonValue> = (0..15)
        .map(|i| {
            json!({
                "question": format!("Question {}", i + 1),
                "options": [
                    format!("Q{} first", i + 1),
                    format!("Q{} second", i + 1),
                    format!("Q{} third", i + 1),
                    format!("Q{} fourth", i + 1)
                ],
                "correctAnswer": 1
            })
        })
        .collect();
    json!({ "title": title, "questions": questions })
}

pub fn recommendations_json() -> JsonValue {
    json!({
        "udemy": [
            { "title": "C# Basics", "url": "https://www.udemy.com/courses/search/?q=c%23+basics", "description": "Start here" },
            { "title": "LINQ in depth", "url": "https://www.udemy.com/courses/search/?q=linq", "description": "Query syntax" }
        ],
        "youtube": [
            { "title": "C# crash course", "url": "https://www.youtube.com/results?search_query=c%23", "description": "One hour" },
            { "title": "Async C#", "url": "https://www.youtube.com/results?search_query=async+c%23", "description": "Tasks" },
            { "title": "EF Core", "url": "https://www.youtube.com/results?search_query=ef+core", "description": "ORM" }
        ],
        "percipio": [
            { "title": "C# Fundamentals", "url": "https://example.percipio.com/search?q=c%23", "description": "Track" }
        ]
    })
}

fn canned(flow: Flow) -> Result<JsonValue> {
    Ok(match flow {
        Flow::GenerateExercise => json!({ "exercise": "## FizzBuzz\nPrint numbers 1 to 100." }),
        Flow::GenerateQuiz => quiz_json("C# Skills Check"),
        Flow::GenerateRefactorChallenge => json!({
            "codeToRefactor": "int f(int a){if(a>5){return a*42;}return 0;}",
            "optimalSolution": "const int Factor = 42;\nint Scale(int value) => value > 5 ? value * Factor : 0;"
        }),
        Flow::AnalyzeRefactorSolution => json!({ "analysis": "Good naming. Consider a constant." }),
        Flow::GenerateRecommendations => recommendations_json(),
        Flow::GenerateSoftSkillScenario => json!({ "scenario": "Two teammates disagree on a deadline." }),
        Flow::AnalyzeSoftSkillSolution => json!({ "analysis": "You listened before proposing a plan." }),
    })
}

pub struct FailingBackend;

#[async_trait]
impl GenerationBackend for FailingBackend {
    async fn generate(&self, _request: GenerationRequest) -> Result<JsonValue> {
        Err(Error::Internal("provider unavailable".into()))
    }
}

pub fn app(backend: Arc<dyn GenerationBackend>) -> Router {
    let state = AppState::with_backend(backend, false);
    routes::router(state, 1_000)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<JsonValue>) -> (StatusCode, JsonValue) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let res = app.clone().oneshot(request).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), 1024 * 1024).await.unwrap();
    let value = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Polls the slug until it reaches `stage` or gives up after ~2s.
pub async fn wait_for_stage(app: &Router, session: &str, slug: &str, stage: &str) -> JsonValue {
    let uri = format!("/api/sessions/{}/quizzes/{}", session, slug);
    for _ in 0..100 {
        let (status, body) = send(app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        if body["state"]["stage"] == stage {
            return body;
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }
    panic!("{} never reached stage {}", slug, stage);
}
