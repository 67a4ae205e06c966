use printfarm_core::{RosterProvider, StaticRoster};
use printfarm_slack::{dashboard, SlackResponse};

use crate::commands::{load_config, CommandResult};

pub fn run() -> CommandResult {
    if let Err(failure) = load_config("dashboard") {
        return failure;
    }

    let printers = StaticRoster::demo().printers();
    CommandResult::document("dashboard", &SlackResponse::from(dashboard::render(&printers)))
}
