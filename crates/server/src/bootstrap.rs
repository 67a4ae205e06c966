use axum::Router;
use printfarm_core::config::{AppConfig, ConfigError};
use printfarm_core::{RosterProvider, StaticRoster};
use thiserror::Error;
use tracing::info;

use crate::{health, webhook};

pub struct Application {
    pub config: AppConfig,
    pub router: Router,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    config.validate()?;

    let roster = StaticRoster::demo();
    info!(
        event_name = "system.bootstrap.roster_loaded",
        correlation_id = "bootstrap",
        printers = roster.printers().len(),
        allowed_channel = %config.slack.allowed_channel,
        stream_url_template = %config.stream.url_template,
        "printer roster loaded"
    );

    let router = webhook::router(webhook::WebhookState::from_config(&config, roster.clone()))
        .merge(health::router(roster));

    Ok(Application { config, router })
}
