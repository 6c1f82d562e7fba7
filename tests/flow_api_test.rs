mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{app, send, FailingBackend, ScriptedBackend};
use serde_json::json;
use training_backend::services::prompts::Flow;

#[tokio::test]
async fn health_and_catalogs() {
    let app = app(ScriptedBackend::new());

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, "GET", "/api/catalog/technologies", None).await;
    assert_eq!(status, StatusCode::OK);
    let slugs: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["csharp", "angular", "ionic", "blazor", "razor"]);
    assert_eq!(body[0]["name"], "C#");

    let (status, body) = send(&app, "GET", "/api/catalog/soft-skills", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);
    assert_eq!(body[1]["value"], "conflict-resolution");
}

#[tokio::test]
async fn learning_paths_are_served_per_technology() {
    let backend = ScriptedBackend::new();
    let app = app(backend.clone());

    let (status, body) = send(&app, "GET", "/api/catalog/paths", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);

    let (status, body) = send(&app, "GET", "/api/catalog/paths/angular", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Angular");
    assert_eq!(body["descriptionKey"], "technologies.angular.description");
    let levels = body["levels"].as_array().unwrap();
    assert_eq!(levels.len(), 3);
    assert_eq!(levels[2]["name"], "Advanced");
    let resource = &levels[0]["modules"][0]["resources"][1];
    assert_eq!(resource["type"], "video");
    assert_eq!(resource["duration"], "35m");

    let (status, body) = send(&app, "GET", "/api/catalog/paths/cobol", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("cobol"));

    assert_eq!(backend.calls(Flow::GenerateQuiz), 0);
}

#[tokio::test]
async fn every_flow_returns_typed_output() {
    let backend = ScriptedBackend::new();
    let app = app(backend.clone());

    let (status, body) = send(
        &app,
        "POST",
        "/api/flows/exercise",
        Some(json!({ "technology": "C#", "difficulty": "beginner", "language": "en" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["exercise"].as_str().unwrap().contains("FizzBuzz"));

    let (status, body) = send(
        &app,
        "POST",
        "/api/flows/quiz",
        Some(json!({ "technology": "C#", "language": "en" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 15);
    assert!(questions
        .iter()
        .all(|q| q["options"].as_array().unwrap().len() == 4));

    let (status, body) = send(
        &app,
        "POST",
        "/api/flows/refactor-challenge",
        Some(json!({ "technology": "C#", "difficulty": "intermediate", "language": "en" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["codeToRefactor"].is_string());
    assert!(body["optimalSolution"].is_string());

    let (status, body) = send(
        &app,
        "POST",
        "/api/flows/refactor-analysis",
        Some(json!({
            "originalCode": "int f(int a){return a*42;}",
            "userSolution": "int Scale(int value) => value * Factor;",
            "optimalSolution": "const int Factor = 42;",
            "technology": "C#",
            "language": "en"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["analysis"].is_string());

    let (status, body) = send(
        &app,
        "POST",
        "/api/flows/recommendations",
        Some(json!({
            "technology": "C#",
            "level": "Beginner",
            "failedQuestions": [
                { "question": "What is LINQ?", "userAnswer": "no answer", "correctAnswer": "A query syntax" }
            ],
            "language": "en"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["udemy"].as_array().unwrap().len(), 2);
    assert_eq!(body["youtube"].as_array().unwrap().len(), 3);

    let (status, body) = send(
        &app,
        "POST",
        "/api/flows/soft-skill-scenario",
        Some(json!({ "skillType": "teamwork", "language": "en" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["scenario"].is_string());

    let (status, body) = send(
        &app,
        "POST",
        "/api/flows/soft-skill-analysis",
        Some(json!({
            "scenario": "Two teammates disagree on a deadline.",
            "userSolution": "I would meet both of them.",
            "language": "en"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["analysis"].is_string());

    for flow in [
        Flow::GenerateExercise,
        Flow::GenerateQuiz,
        Flow::GenerateRefactorChallenge,
        Flow::AnalyzeRefactorSolution,
        Flow::GenerateRecommendations,
        Flow::GenerateSoftSkillScenario,
        Flow::AnalyzeSoftSkillSolution,
    ] {
        assert_eq!(backend.calls(flow), 1, "{}", flow);
    }
}

#[tokio::test]
async fn invalid_input_is_rejected_before_dispatch() {
    let backend = ScriptedBackend::new();
    let app = app(backend.clone());

    let (status, body) = send(
        &app,
        "POST",
        "/api/flows/quiz",
        Some(json!({ "technology": "   ", "language": "en" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = send(
        &app,
        "POST",
        "/api/flows/soft-skill-scenario",
        Some(json!({ "skillType": "teamwork", "language": "EN" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(backend.calls(Flow::GenerateQuiz), 0);
    assert_eq!(backend.calls(Flow::GenerateSoftSkillScenario), 0);
}

#[tokio::test]
async fn malformed_model_output_is_bad_gateway() {
    let backend = ScriptedBackend::new();
    backend.respond_with(
        Flow::GenerateQuiz,
        json!({ "title": "Too short", "questions": [] }),
    );
    let app = app(backend.clone());

    let (status, body) = send(
        &app,
        "POST",
        "/api/flows/quiz",
        Some(json!({ "technology": "Angular", "language": "en" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "generation failed");
}

#[tokio::test]
async fn backend_failure_is_bad_gateway() {
    let app = app(Arc::new(FailingBackend));

    let (status, body) = send(
        &app,
        "POST",
        "/api/flows/exercise",
        Some(json!({ "technology": "Blazor", "difficulty": "advanced", "language": "en" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "generation failed");
}

#[tokio::test]
async fn model_markdown_is_sanitized() {
    let backend = ScriptedBackend::new();
    backend.respond_with(
        Flow::GenerateSoftSkillScenario,
        json!({ "scenario": "Read [this](javascript:alert(1)) <script>x</script>" }),
    );
    let app = app(backend);

    let (status, body) = send(
        &app,
        "POST",
        "/api/flows/soft-skill-scenario",
        Some(json!({ "skillType": "leadership", "language": "en" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let scenario = body["scenario"].as_str().unwrap();
    assert!(!scenario.contains("javascript:"));
    assert!(!scenario.contains("<script>"));
}
