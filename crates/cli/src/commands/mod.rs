pub mod action;
pub mod config;
pub mod dashboard;

use printfarm_core::config::{AppConfig, LoadOptions};
use printfarm_slack::SlackResponse;
use serde::Serialize;

pub const CONFIG_FAILURE_EXIT: u8 = 2;
pub const SERIALIZATION_FAILURE_EXIT: u8 = 3;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
}

impl CommandResult {
    pub fn success(output: impl Into<String>) -> Self {
        Self { exit_code: 0, output: output.into() }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    /// Pretty JSON of a response document, as Slack would receive it.
    pub fn document(command: &str, response: &SlackResponse) -> Self {
        match serde_json::to_string_pretty(response) {
            Ok(output) => Self::success(output),
            Err(error) => Self::failure(
                command,
                "serialization",
                format!("could not encode response: {error}"),
                SERIALIZATION_FAILURE_EXIT,
            ),
        }
    }
}

pub(crate) fn load_config(command: &str) -> Result<AppConfig, CommandResult> {
    AppConfig::load(LoadOptions::default()).map_err(|error| {
        CommandResult::failure(
            command,
            "config_validation",
            format!("configuration issue: {error}"),
            CONFIG_FAILURE_EXIT,
        )
    })
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}
