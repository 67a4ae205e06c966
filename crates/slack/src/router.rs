//! Routes block-action clicks to a response document.
//!
//! Routing is total: identifiers nobody recognises are acknowledged by echoing
//! them back, never treated as an error.

use chrono::{Local, NaiveTime};
use printfarm_core::{PrinterId, PrinterState, PrinterStatus, RosterProvider};

use crate::blocks::{MessageTemplate, SlackResponse};
use crate::dashboard;
use crate::dialogs::{live_status_panel, start_print_dialog};
use crate::events::ActionEvent;
use crate::links::StreamUrlTemplate;
use crate::tokens::{ActionKind, ActionToken};

pub const QUEUE_EMPTY_TEXT: &str =
    "📋 Print queue is currently empty. All jobs are processed immediately.";
pub const PRINT_CANCELLED_TEXT: &str = "❌ Print job cancelled.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InteractionCommand {
    RefreshStatus,
    ViewQueue,
    CancelPrint,
    OpenPrinter { printer_id: PrinterId },
    ConfirmPrint { printer_id: PrinterId },
    Acknowledge { action_id: String },
}

pub fn classify_action(action_id: &str) -> InteractionCommand {
    let Some(token) = ActionToken::parse(action_id) else {
        return InteractionCommand::Acknowledge { action_id: action_id.to_owned() };
    };

    match (token.kind, token.target_id) {
        (ActionKind::RefreshStatus, _) => InteractionCommand::RefreshStatus,
        (ActionKind::ViewQueue, _) => InteractionCommand::ViewQueue,
        (ActionKind::CancelPrint, _) => InteractionCommand::CancelPrint,
        (ActionKind::PrinterAction, Some(printer_id)) => {
            InteractionCommand::OpenPrinter { printer_id }
        }
        (ActionKind::ConfirmPrint, Some(printer_id)) => {
            InteractionCommand::ConfirmPrint { printer_id }
        }
        // Pause, job cancel and live-feed clicks have no server-side effect.
        _ => InteractionCommand::Acknowledge { action_id: action_id.to_owned() },
    }
}

pub fn acknowledgement_text(action_id: &str) -> String {
    format!("👍 Action '{action_id}' received")
}

pub struct InteractionRouter<R> {
    roster: R,
    stream: StreamUrlTemplate,
}

impl<R> InteractionRouter<R>
where
    R: RosterProvider,
{
    pub fn new(roster: R, stream: StreamUrlTemplate) -> Self {
        Self { roster, stream }
    }

    pub fn dashboard_at(&self, rendered_at: NaiveTime) -> MessageTemplate {
        dashboard::render_at(&self.roster.printers(), rendered_at)
    }

    pub fn route(&self, event: &ActionEvent) -> SlackResponse {
        self.route_at(event, Local::now().time())
    }

    pub fn route_at(&self, event: &ActionEvent, rendered_at: NaiveTime) -> SlackResponse {
        match classify_action(&event.action_id) {
            InteractionCommand::RefreshStatus => self.dashboard_at(rendered_at).into(),
            InteractionCommand::ViewQueue => SlackResponse::text(QUEUE_EMPTY_TEXT),
            InteractionCommand::CancelPrint => SlackResponse::text(PRINT_CANCELLED_TEXT),
            InteractionCommand::OpenPrinter { printer_id } => self.open_printer(&printer_id),
            InteractionCommand::ConfirmPrint { printer_id } => {
                let name = self.display_name(&printer_id);
                SlackResponse::text(format!(
                    "🚀 Print job started on {name}! Check status with `/print`"
                ))
            }
            InteractionCommand::Acknowledge { action_id } => {
                SlackResponse::text(acknowledgement_text(&action_id))
            }
        }
    }

    fn open_printer(&self, printer_id: &PrinterId) -> SlackResponse {
        let Some(printer) = self.roster.find(printer_id) else {
            return SlackResponse::text(unavailable_text(printer_id.as_str(), PrinterStatus::Offline));
        };

        match &printer.state {
            PrinterState::Available { .. } => start_print_dialog(&printer).into(),
            PrinterState::Printing(job) => live_status_panel(&printer, job, &self.stream).into(),
            other => SlackResponse::text(unavailable_text(&printer.name, other.status())),
        }
    }

    fn display_name(&self, printer_id: &PrinterId) -> String {
        self.roster
            .find(printer_id)
            .map(|printer| printer.name)
            .unwrap_or_else(|| printer_id.to_string())
    }
}

fn unavailable_text(name: &str, status: PrinterStatus) -> String {
    let condition = match status {
        PrinterStatus::Maintenance => "in maintenance",
        PrinterStatus::Error => "in an error state",
        other => other.as_str(),
    };
    format!("ℹ️ {name} is currently {condition}. Check network connection.")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use printfarm_core::{
        demo_roster, ActiveJob, PrinterId, PrinterRecord, PrinterState, StaticRoster,
    };

    use super::{classify_action, InteractionCommand, InteractionRouter};
    use crate::blocks::{Block, SlackResponse};
    use crate::dashboard;
    use crate::events::ActionEvent;
    use crate::links::StreamUrlTemplate;

    fn router() -> InteractionRouter<StaticRoster> {
        InteractionRouter::new(StaticRoster::demo(), StreamUrlTemplate::default())
    }

    fn at() -> NaiveTime {
        NaiveTime::from_hms_opt(16, 45, 0).expect("valid time")
    }

    fn click(action_id: &str) -> ActionEvent {
        ActionEvent::new(action_id, "maker")
    }

    fn header_text(response: &SlackResponse) -> Option<&str> {
        match response.as_message()?.blocks.first()? {
            Block::Header { text, .. } => Some(text.text()),
            _ => None,
        }
    }

    #[test]
    fn classify_maps_wire_identifiers_to_commands() {
        assert_eq!(classify_action("refresh_status"), InteractionCommand::RefreshStatus);
        assert_eq!(classify_action("view_queue"), InteractionCommand::ViewQueue);
        assert_eq!(classify_action("cancel_print"), InteractionCommand::CancelPrint);
        assert_eq!(
            classify_action("printer_action_printer_3"),
            InteractionCommand::OpenPrinter { printer_id: PrinterId::new("printer_3") }
        );
        assert_eq!(
            classify_action("confirm_print_printer_1"),
            InteractionCommand::ConfirmPrint { printer_id: PrinterId::new("printer_1") }
        );
        for raw in ["pause_print_printer_2", "cancel_print_printer_2", "live_feed_printer_2", "select_file"] {
            assert_eq!(
                classify_action(raw),
                InteractionCommand::Acknowledge { action_id: raw.to_owned() },
                "{raw}"
            );
        }
    }

    #[test]
    fn refresh_status_matches_a_fresh_dashboard() {
        let response = router().route_at(&click("refresh_status"), at());
        assert_eq!(response.as_message(), Some(&dashboard::render_at(&demo_roster(), at())));
    }

    #[test]
    fn available_printer_opens_the_start_print_dialog() {
        let response = router().route_at(&click("printer_action_printer_1"), at());
        assert_eq!(header_text(&response), Some("🖨️ Start Print Job - Bambu X1 #1"));

        let response = router().route_at(&click("printer_action_printer_3"), at());
        assert_eq!(header_text(&response), Some("🖨️ Start Print Job - Bambu X1 #3"));
    }

    #[test]
    fn printing_printer_opens_the_live_status_panel() {
        let response = router().route_at(&click("printer_action_printer_2"), at());
        assert_eq!(header_text(&response), Some("🖨️ Bambu X1 #2 - Live Status"));
    }

    #[test]
    fn offline_printer_gets_the_offline_notice() {
        let response = router().route_at(&click("printer_action_printer_4"), at());
        assert_eq!(
            response.as_text(),
            Some("ℹ️ Bambu X1 #4 is currently offline. Check network connection.")
        );
    }

    #[test]
    fn unknown_printer_is_reported_offline_by_id() {
        let response = router().route_at(&click("printer_action_printer_9"), at());
        assert_eq!(
            response.as_text(),
            Some("ℹ️ printer_9 is currently offline. Check network connection.")
        );
    }

    #[test]
    fn dispatch_follows_status_not_position() {
        let roster = StaticRoster::with_printers(vec![
            PrinterRecord {
                id: PrinterId::new("printer_1"),
                name: "Bench Printer".to_owned(),
                model: "MK4".to_owned(),
                network_address: Some("10.0.0.5".to_owned()),
                state: PrinterState::Printing(ActiveJob {
                    name: "bracket.3mf".to_owned(),
                    progress: 10,
                    time_remaining_minutes: 50,
                    started_by: None,
                    estimated_cost_cents: None,
                }),
            },
            PrinterRecord {
                id: PrinterId::new("printer_2"),
                name: "Shelf Printer".to_owned(),
                model: "MK4".to_owned(),
                network_address: None,
                state: PrinterState::Maintenance,
            },
        ]);
        let router = InteractionRouter::new(roster, StreamUrlTemplate::default());

        let response = router.route_at(&click("printer_action_printer_1"), at());
        assert_eq!(header_text(&response), Some("🖨️ Bench Printer - Live Status"));

        let response = router.route_at(&click("printer_action_printer_2"), at());
        assert_eq!(
            response.as_text(),
            Some("ℹ️ Shelf Printer is currently in maintenance. Check network connection.")
        );
    }

    #[test]
    fn confirm_print_names_the_printer() {
        let response = router().route_at(&click("confirm_print_printer_1"), at());
        let text = response.as_text().expect("text reply");
        assert!(text.contains("Bambu X1 #1"));
        assert_eq!(text, "🚀 Print job started on Bambu X1 #1! Check status with `/print`");
    }

    #[test]
    fn queue_and_cancel_have_fixed_replies() {
        assert_eq!(
            router().route_at(&click("view_queue"), at()).as_text(),
            Some("📋 Print queue is currently empty. All jobs are processed immediately.")
        );
        assert_eq!(
            router().route_at(&click("cancel_print"), at()).as_text(),
            Some("❌ Print job cancelled.")
        );
    }

    #[test]
    fn printer_prefixes_without_an_id_are_echoed() {
        for raw in ["printer_action_", "confirm_print_", "cancel_print_"] {
            assert_eq!(
                classify_action(raw),
                InteractionCommand::Acknowledge { action_id: raw.to_owned() },
                "{raw}"
            );
            let response = router().route_at(&click(raw), at());
            assert_eq!(response.as_text(), Some(format!("👍 Action '{raw}' received").as_str()));
        }
    }

    #[test]
    fn unknown_identifiers_are_echoed_verbatim() {
        for raw in ["select_file", "client_type", "pause_print_printer_2", "printer_action_", "", "weird id"] {
            let response = router().route_at(&click(raw), at());
            assert_eq!(response.as_text(), Some(format!("👍 Action '{raw}' received").as_str()));
        }
    }
}
