use std::net::SocketAddr;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use shared::{
    error::{ApiError, ErrorCode},
    protocol::EventRecord,
};
use tracing::{info, warn};

mod app_state;
mod config;
mod event_log;

use app_state::AppState;
use config::load_settings;
use event_log::EventLog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let state = AppState {
        events: EventLog::new(settings.max_retained_events),
    };
    let app = build_router(state);

    let addr: SocketAddr = settings.bind_addr.parse()?;
    info!(%addr, "collector listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/ping.txt", get(ping))
        .route("/event", post(record_event))
        .route("/event/*rest", post(record_event))
        .route("/events", get(list_events))
        .with_state(state)
}

async fn ping() -> &'static str {
    "pong"
}

async fn record_event(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<&'static str, (StatusCode, Json<ApiError>)> {
    let record = parse_record(&body).map_err(|message| {
        warn!(%message, "rejected event");
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::new(ErrorCode::Validation, message)),
        )
    })?;

    info!(
        app = record.app().unwrap_or("-"),
        name = record.name().unwrap_or("-"),
        dur = record.dur().unwrap_or("-"),
        "event received"
    );
    state.events.push(record).await;
    Ok("ok")
}

async fn list_events(State(state): State<AppState>) -> Json<Vec<EventRecord>> {
    Json(state.events.snapshot().await)
}

fn parse_record(body: &[u8]) -> Result<EventRecord, String> {
    let record: EventRecord =
        serde_json::from_slice(body).map_err(|e| format!("event body must be a JSON object: {e}"))?;
    record.validate().map_err(|e| e.to_string())?;
    Ok(record)
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
