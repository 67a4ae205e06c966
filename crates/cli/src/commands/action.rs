use printfarm_core::StaticRoster;
use printfarm_slack::{ActionEvent, InteractionRouter, StreamUrlTemplate};

use crate::commands::{load_config, CommandResult};

/// Replays a click locally: same router and roster the webhook uses.
pub fn run(action_id: &str, user: &str) -> CommandResult {
    let config = match load_config("action") {
        Ok(config) => config,
        Err(failure) => return failure,
    };

    let router = InteractionRouter::new(
        StaticRoster::demo(),
        StreamUrlTemplate::new(config.stream.url_template),
    );
    let response = router.route(&ActionEvent::new(action_id, user));
    CommandResult::document("action", &response)
}
