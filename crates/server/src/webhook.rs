//! Slack webhook endpoints.
//!
//! - `POST /api/print`   - `/print` slash command, answers with the farm dashboard
//! - `POST /api/actions` - block-action clicks, answers via the interaction router
//! - `GET  /api/print`, `GET /api/actions` - plain-text liveness probes

use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Form, Json, Router,
};
use printfarm_core::config::AppConfig;
use printfarm_core::StaticRoster;
use printfarm_slack::{
    parse_interaction_payload, InteractionRouter, PayloadError, PrintCommandHandler,
    PrintCommandOutcome, SlackResponse, SlashCommandPayload, StreamUrlTemplate,
};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

pub const PRINT_LIVENESS: &str = "Slack 3D Printer Bot is running!";
pub const ACTIONS_LIVENESS: &str = "Slack Actions Handler is running!";

#[derive(Clone)]
pub struct WebhookState {
    print: Arc<PrintCommandHandler<StaticRoster>>,
    actions: Arc<InteractionRouter<StaticRoster>>,
}

impl WebhookState {
    pub fn new(roster: StaticRoster, allowed_channel: &str, stream: StreamUrlTemplate) -> Self {
        Self {
            print: Arc::new(PrintCommandHandler::new(roster.clone(), allowed_channel)),
            actions: Arc::new(InteractionRouter::new(roster, stream)),
        }
    }

    pub fn from_config(config: &AppConfig, roster: StaticRoster) -> Self {
        Self::new(
            roster,
            &config.slack.allowed_channel,
            StreamUrlTemplate::new(config.stream.url_template.clone()),
        )
    }
}

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("{0}")]
    Form(#[from] FormRejection),
    #[error("{0}")]
    Payload(#[from] PayloadError),
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let body = json!({ "text": format!("❌ Error: {self}") });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct InteractionForm {
    #[serde(default)]
    pub payload: String,
}

pub fn router(state: WebhookState) -> Router {
    Router::new()
        .route("/api/print", get(print_liveness).post(print_command))
        .route("/api/actions", get(actions_liveness).post(block_action))
        .with_state(state)
}

async fn print_liveness() -> &'static str {
    PRINT_LIVENESS
}

async fn actions_liveness() -> &'static str {
    ACTIONS_LIVENESS
}

async fn print_command(
    State(state): State<WebhookState>,
    form: Result<Form<SlashCommandPayload>, FormRejection>,
) -> Result<Json<SlackResponse>, WebhookError> {
    let correlation_id = Uuid::new_v4();
    let Form(payload) = form.map_err(|rejection| failed("print", correlation_id, rejection.into()))?;

    let outcome = state.print.handle(&payload);
    match &outcome {
        PrintCommandOutcome::Dashboard(_) => info!(
            event_name = "printfarm.webhook.print_rendered",
            correlation_id = %correlation_id,
            channel_name = %payload.channel_name,
            user_name = %payload.user_name,
            "farm dashboard rendered"
        ),
        PrintCommandOutcome::Rejected(_) => info!(
            event_name = "printfarm.webhook.print_rejected",
            correlation_id = %correlation_id,
            channel_name = %payload.channel_name,
            allowed_channel = %state.print.allowed_channel(),
            user_name = %payload.user_name,
            "print command used outside the allowed channel"
        ),
    }

    Ok(Json(outcome.into_response()))
}

async fn block_action(
    State(state): State<WebhookState>,
    form: Result<Form<InteractionForm>, FormRejection>,
) -> Result<Json<SlackResponse>, WebhookError> {
    let correlation_id = Uuid::new_v4();
    let Form(form) = form.map_err(|rejection| failed("actions", correlation_id, rejection.into()))?;
    let event = parse_interaction_payload(&form.payload)
        .map_err(|error| failed("actions", correlation_id, error.into()))?;

    let response = state.actions.route(&event);
    info!(
        event_name = "printfarm.webhook.action_routed",
        correlation_id = %correlation_id,
        action_id = %event.action_id,
        actor_name = %event.actor_name,
        summary = %response.summary(),
        "block action routed"
    );

    Ok(Json(response))
}

fn failed(endpoint: &'static str, correlation_id: Uuid, error: WebhookError) -> WebhookError {
    error!(
        event_name = "printfarm.webhook.failed",
        correlation_id = %correlation_id,
        endpoint,
        error = %error,
        "webhook request could not be handled"
    );
    error
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use printfarm_core::StaticRoster;
    use printfarm_slack::StreamUrlTemplate;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::{router, WebhookState, ACTIONS_LIVENESS, PRINT_LIVENESS};

    const FORM: &str = "application/x-www-form-urlencoded";

    fn app() -> Router {
        router(WebhookState::new(
            StaticRoster::demo(),
            "3d-printer-automation-test",
            StreamUrlTemplate::default(),
        ))
    }

    fn form_encode(value: &str) -> String {
        value
            .bytes()
            .map(|byte| {
                if byte.is_ascii_alphanumeric() || b"-_.~".contains(&byte) {
                    char::from(byte).to_string()
                } else {
                    format!("%{byte:02X}")
                }
            })
            .collect()
    }

    fn post_form(uri: &str, body: String) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, FORM)
            .body(Body::from(body))
            .expect("request")
    }

    fn action_request(action_id: &str) -> Request<Body> {
        let payload = format!(
            r#"{{"type":"block_actions","user":{{"name":"maker"}},"actions":[{{"action_id":"{action_id}"}}]}}"#
        );
        post_form("/api/actions", format!("payload={}", form_encode(&payload)))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        (status, bytes.to_vec())
    }

    async fn send_json(request: Request<Body>) -> (StatusCode, Value) {
        let (status, bytes) = send(request).await;
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn liveness_probes_answer_with_plain_text() {
        let (status, body) = send(Request::get("/api/print").body(Body::empty()).expect("request")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, PRINT_LIVENESS.as_bytes());

        let (status, body) = send(Request::get("/api/actions").body(Body::empty()).expect("request")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, ACTIONS_LIVENESS.as_bytes());
    }

    #[tokio::test]
    async fn print_in_the_allowed_channel_returns_the_dashboard() {
        let (status, body) = send_json(post_form(
            "/api/print",
            "command=%2Fprint&channel_name=3d-printer-automation-test&user_name=maker".to_owned(),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["response_type"], "ephemeral");
        assert_eq!(body["blocks"].as_array().map(Vec::len), Some(12));
        assert_eq!(body["blocks"][0]["text"]["text"], "🏭 3D Printer Farm Status");
    }

    #[tokio::test]
    async fn print_elsewhere_is_rejected_with_text() {
        let (status, body) =
            send_json(post_form("/api/print", "channel_name=other&user_name=maker".to_owned())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["text"], "❌ This command only works in #3d-printer-automation-test channel");
        assert!(body.get("blocks").is_none());
    }

    #[tokio::test]
    async fn print_without_form_content_type_is_an_error() {
        let request = Request::post("/api/print").body(Body::from("channel_name=x")).expect("request");
        let (status, body) = send_json(request).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["text"].as_str().is_some_and(|text| text.starts_with("❌ Error: ")));
    }

    #[tokio::test]
    async fn actions_route_printer_clicks_by_status() {
        let (status, body) = send_json(action_request("printer_action_printer_2")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["blocks"][0]["text"]["text"], "🖨️ Bambu X1 #2 - Live Status");
        assert_eq!(body["blocks"][4]["elements"][2]["url"], "http://192.168.1.102:8080/stream");

        let (_, body) = send_json(action_request("printer_action_printer_4")).await;
        assert_eq!(body["text"], "ℹ️ Bambu X1 #4 is currently offline. Check network connection.");
    }

    #[tokio::test]
    async fn actions_echo_unknown_identifiers() {
        let (status, body) = send_json(action_request("select_file")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["text"], "👍 Action 'select_file' received");
    }

    #[tokio::test]
    async fn malformed_action_payload_is_a_server_error() {
        let (status, body) =
            send_json(post_form("/api/actions", "payload=not-json".to_owned())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["text"]
            .as_str()
            .is_some_and(|text| text.starts_with("❌ Error: invalid interaction payload")));
    }

    #[tokio::test]
    async fn missing_payload_field_is_a_server_error() {
        let (status, body) = send_json(post_form("/api/actions", String::new())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["text"].as_str().is_some_and(|text| text.starts_with("❌ Error: ")));
    }

    #[tokio::test]
    async fn payload_without_user_is_a_server_error() {
        let payload = form_encode(r#"{"actions":[{"action_id":"view_queue"}]}"#);
        let (status, body) = send_json(post_form("/api/actions", format!("payload={payload}"))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["text"], "❌ Error: interaction payload has no user name");
    }
}
