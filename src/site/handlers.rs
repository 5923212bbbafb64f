use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
};
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;
use uuid::Uuid;

use super::{AppState, supported_locale, templates};
use crate::catalog;

#[derive(Debug, Deserialize)]
pub(super) struct LangQuery {
    pub lang: Option<String>,
}

fn page_locale(state: &AppState, query: &LangQuery) -> String {
    query
        .lang
        .as_deref()
        .and_then(supported_locale)
        .map(String::from)
        .unwrap_or_else(|| state.default_locale.clone())
}

/// GET / — the whole page. The first render also launches the single
/// live-review fetch; this render itself never waits for it.
pub(super) async fn handle_home(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> impl IntoResponse {
    Arc::clone(&state.board).ensure_started(Arc::clone(&state.service));

    let lang = page_locale(&state, &query);
    let snapshot = state.board.snapshot();

    let mut context = tera::Context::new();
    context.insert("lang", &lang);
    context.insert("other_lang", if lang == "zh" { "en" } else { "zh" });
    context.insert("t", &templates::page_strings(&lang));
    context.insert("services", &catalog::localized_services(&lang));
    context.insert("reviews", snapshot.reviews());
    context.insert("live", &snapshot.is_live());
    context.insert("pending", &!snapshot.phase.is_resolved());

    match state.templates.render("index.html", &context) {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!("template render failed: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, "template error").into_response()
        }
    }
}

/// GET /api/reviews — resolve-and-report. Waits for the single fetch so the
/// page's one follow-up request gets a final answer, not a poll loop.
pub(super) async fn handle_reviews(State(state): State<AppState>) -> impl IntoResponse {
    Arc::clone(&state.board).ensure_started(Arc::clone(&state.service));
    state.board.resolved().await;

    let snapshot = state.board.snapshot();
    Json(serde_json::json!({
        "phase": snapshot.phase,
        "live": snapshot.is_live(),
        "reviews": snapshot.reviews(),
    }))
}

#[derive(Debug, Deserialize)]
pub(super) struct IntakeForm {
    pub name: String,
    pub concern: String,
    pub session_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum SessionType {
    Individual,
    Couple,
    Consult30,
}

impl SessionType {
    /// Values match the form's radio buttons.
    pub(super) fn parse(raw: &str) -> Option<Self> {
        match raw {
            "individual" => Some(Self::Individual),
            "couple" => Some(Self::Couple),
            "30min" => Some(Self::Consult30),
            _ => None,
        }
    }
}

fn intake_rejection(message: Cow<'_, str>) -> axum::response::Response {
    let body = serde_json::json!({ "error": message });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
}

/// POST /api/intake — local acknowledgment only. Nothing is stored or
/// forwarded anywhere; the reference id exists so a visitor can quote it.
pub(super) async fn handle_intake(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    body: Result<Json<IntakeForm>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    let lang = page_locale(&state, &query);

    let Json(form) = match body {
        Ok(body) => body,
        Err(e) => {
            let err = serde_json::json!({ "error": format!("Invalid JSON: {e}") });
            return (StatusCode::BAD_REQUEST, Json(err)).into_response();
        }
    };

    if form.name.trim().is_empty() {
        return intake_rejection(t!("intake.missing_name", locale = &lang));
    }
    if form.concern.trim().is_empty() {
        return intake_rejection(t!("intake.missing_concern", locale = &lang));
    }
    let Some(session_type) = SessionType::parse(&form.session_type) else {
        return intake_rejection(t!("intake.unknown_type", locale = &lang));
    };

    let reference = Uuid::new_v4();
    tracing::info!(%reference, ?session_type, "intake survey received (echo only, nothing stored)");

    Json(serde_json::json!({
        "received": true,
        "reference": reference,
        "title": t!("contact.sent", locale = &lang),
        "message": t!("contact.thank_you", locale = &lang),
    }))
    .into_response()
}

/// GET /api/analysis — best-effort digest of whatever reviews are currently
/// displayed. `analysis` is null on any failure.
pub(super) async fn handle_analysis(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.board.snapshot();
    let analysis = state.service.analyze_reviews(snapshot.reviews()).await;
    Json(serde_json::json!({ "analysis": analysis }))
}

/// GET /health — always public (no secrets leaked)
pub(super) async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "reviews": state.board.snapshot().phase,
    }))
}
