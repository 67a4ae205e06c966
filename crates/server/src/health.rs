use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use printfarm_core::{RosterProvider, StaticRoster};
use serde::Serialize;

#[derive(Clone)]
pub struct HealthState {
    roster: StaticRoster,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub roster: HealthCheck,
    pub checked_at: String,
}

pub fn router(roster: StaticRoster) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { roster })
}

pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let roster = roster_check(&state.roster);
    let ready = roster.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "printfarm-server webhook runtime initialized".to_string(),
        },
        roster,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

fn roster_check(roster: &impl RosterProvider) -> HealthCheck {
    match roster.printers().len() {
        0 => HealthCheck { status: "degraded", detail: "roster has no printers".to_string() },
        count => HealthCheck { status: "ready", detail: format!("{count} printers in roster") },
    }
}
