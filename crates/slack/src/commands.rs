use chrono::{Local, NaiveTime};
use printfarm_core::config::DEFAULT_ALLOWED_CHANNEL;
use printfarm_core::RosterProvider;
use serde::Deserialize;

use crate::blocks::SlackResponse;
use crate::dashboard;

/// Form fields Slack posts for a slash command. Missing fields read as empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SlashCommandPayload {
    #[serde(default)]
    pub command: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub channel_name: String,
    #[serde(default)]
    pub user_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrintCommandOutcome {
    Dashboard(SlackResponse),
    Rejected(SlackResponse),
}

impl PrintCommandOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    pub fn into_response(self) -> SlackResponse {
        match self {
            Self::Dashboard(response) | Self::Rejected(response) => response,
        }
    }
}

pub struct PrintCommandHandler<R> {
    roster: R,
    allowed_channel: String,
}

impl<R> PrintCommandHandler<R>
where
    R: RosterProvider,
{
    pub fn new(roster: R, allowed_channel: impl Into<String>) -> Self {
        Self { roster, allowed_channel: allowed_channel.into() }
    }

    pub fn with_default_channel(roster: R) -> Self {
        Self::new(roster, DEFAULT_ALLOWED_CHANNEL)
    }

    pub fn allowed_channel(&self) -> &str {
        &self.allowed_channel
    }

    pub fn is_allowed_channel(&self, channel_name: &str) -> bool {
        channel_name == self.allowed_channel
    }

    pub fn handle(&self, payload: &SlashCommandPayload) -> PrintCommandOutcome {
        self.handle_at(payload, Local::now().time())
    }

    pub fn handle_at(
        &self,
        payload: &SlashCommandPayload,
        rendered_at: NaiveTime,
    ) -> PrintCommandOutcome {
        if !self.is_allowed_channel(&payload.channel_name) {
            return PrintCommandOutcome::Rejected(SlackResponse::text(format!(
                "❌ This command only works in #{} channel",
                self.allowed_channel
            )));
        }

        let printers = self.roster.printers();
        PrintCommandOutcome::Dashboard(dashboard::render_at(&printers, rendered_at).into())
    }
}
