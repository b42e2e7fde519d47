//! HTTP routes: liveness, home page, and the daily-winner form.

use std::sync::Arc;

use axum::extract::{Form, State};
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum::{Json, Router};
use lum_common::error::ApiError;
use lum_common::types::{HealthResponse, Winner};
use serde::Deserialize;

use crate::config::WebConfig;
use crate::db::Database;
use crate::{stats, time, view};

pub struct AppState {
    pub config: WebConfig,
    pub db: Database,
}

pub type SharedState = Arc<AppState>;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/today", post(record_today))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn home(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    let today = time::today_in(state.config.timezone);
    let recorded = state.db.day(&today).await?;
    let tallies = state.db.statistics().await?;
    let history = state.db.history().await?;
    let duration = stats::relationship_stats(state.config.relationship_start, state.config.timezone);

    let page = view::IndexPage {
        title: "LuvUMore".to_string(),
        today,
        winner: recorded.map(|r| r.winner),
        partner_a_name: state.config.partner_a_name.clone(),
        partner_b_name: state.config.partner_b_name.clone(),
        tallies,
        history,
        duration,
    };
    Ok(Html(view::render_index(&page)))
}

#[derive(Debug, Deserialize)]
struct TodayForm {
    winner: String,
    note: Option<String>,
}

async fn record_today(
    State(state): State<SharedState>,
    Form(form): Form<TodayForm>,
) -> Result<Redirect, ApiError> {
    let token = form.winner.trim().to_lowercase();
    let Some(winner) = Winner::from_token(&token) else {
        return Err(ApiError::bad_request("invalid winner"));
    };

    let date = time::today_in(state.config.timezone);
    let note = form.note.as_deref().map(str::trim).filter(|n| !n.is_empty());
    state
        .db
        .upsert_day(&date, winner, time::now_millis(), "ui", note)
        .await?;

    tracing::info!(%date, winner = winner.token(), "daily winner recorded");
    Ok(Redirect::to("/"))
}
