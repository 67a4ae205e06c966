use serde::Deserialize;
use thiserror::Error;

/// A block-action click, reduced to what the router needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionEvent {
    pub action_id: String,
    pub actor_name: String,
    pub value: Option<String>,
    pub selected_value: Option<String>,
}

impl ActionEvent {
    pub fn new(action_id: impl Into<String>, actor_name: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            actor_name: actor_name.into(),
            value: None,
            selected_value: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("invalid interaction payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("interaction payload has no actions")]
    MissingAction,
    #[error("interaction payload has no user name")]
    MissingUser,
}

#[derive(Deserialize)]
struct InteractionPayload {
    #[serde(default)]
    actions: Vec<RawAction>,
    user: Option<RawUser>,
}

#[derive(Deserialize)]
struct RawAction {
    action_id: String,
    value: Option<String>,
    selected_option: Option<RawOption>,
}

#[derive(Deserialize)]
struct RawOption {
    value: String,
}

#[derive(Deserialize)]
struct RawUser {
    name: Option<String>,
    username: Option<String>,
}

/// Parses the JSON carried in the `payload` form field of an interaction request.
/// Only the first action is considered.
pub fn parse_interaction_payload(raw: &str) -> Result<ActionEvent, PayloadError> {
    let payload: InteractionPayload = serde_json::from_str(raw)?;

    let action = payload.actions.into_iter().next().ok_or(PayloadError::MissingAction)?;
    let actor_name = payload
        .user
        .and_then(|user| user.name.or(user.username))
        .ok_or(PayloadError::MissingUser)?;

    Ok(ActionEvent {
        action_id: action.action_id,
        actor_name,
        value: action.value,
        selected_value: action.selected_option.map(|option| option.value),
    })
}
