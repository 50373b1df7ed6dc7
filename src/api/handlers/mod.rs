use axum::{extract::State, http::StatusCode, response::Html, response::IntoResponse, Json};

use crate::agents::Agents;
use crate::llm::LlmError;
use crate::models::*;
use crate::risk;

// ============================================================
// Error Handling
// ============================================================

/// Log a failed provider call and hand the error text back to the UI.
///
/// Nothing is retried: the user reads the message and presses the button
/// again if they want another attempt.
fn upstream_error(e: LlmError) -> (StatusCode, String) {
    let status = match e {
        LlmError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
        _ => StatusCode::BAD_GATEWAY,
    };
    tracing::error!("Provider error: {}", e);
    (status, e.to_string())
}

// ============================================================
// UI + Health
// ============================================================

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../index.html"))
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Risk Screen
// ============================================================

pub async fn screen_risk(Json(input): Json<RiskInput>) -> Json<RiskReport> {
    Json(risk::assess(&input.text))
}

// ============================================================
// Stages
// ============================================================

pub async fn questioner(
    State(agents): State<Agents>,
    Json(input): Json<QuestionInput>,
) -> Result<Json<StageOutput>, (StatusCode, String)> {
    agents
        .questioner(&input.question)
        .await
        .map(Json)
        .map_err(upstream_error)
}

pub async fn researcher(
    State(agents): State<Agents>,
    Json(input): Json<QuestionInput>,
) -> Result<Json<StageOutput>, (StatusCode, String)> {
    agents
        .researcher(&input.question)
        .await
        .map(Json)
        .map_err(upstream_error)
}

pub async fn verifier(
    State(agents): State<Agents>,
    Json(input): Json<VerifyInput>,
) -> Result<Json<StageOutput>, (StatusCode, String)> {
    agents
        .verifier(&input.question, &input.research)
        .await
        .map(Json)
        .map_err(upstream_error)
}

pub async fn planner(
    State(agents): State<Agents>,
    Json(input): Json<PlanInput>,
) -> Result<Json<StageOutput>, (StatusCode, String)> {
    agents
        .planner(&input.research, &input.feedback, &input.original_question)
        .await
        .map(Json)
        .map_err(upstream_error)
}

pub async fn assistant(
    State(agents): State<Agents>,
    Json(input): Json<FollowUpInput>,
) -> Result<Json<StageOutput>, (StatusCode, String)> {
    agents
        .assistant(&input.plan, &input.follow_up)
        .await
        .map(Json)
        .map_err(upstream_error)
}

pub async fn explainer(
    State(agents): State<Agents>,
    Json(input): Json<ExplainInput>,
) -> Result<Json<StageOutput>, (StatusCode, String)> {
    agents
        .explainer(&input.notes)
        .await
        .map(Json)
        .map_err(upstream_error)
}
