//! The printer roster shown by the dashboard and consulted by the interaction router.
//!
//! The roster is static demo data. Providers hand out a fresh copy on every call so
//! nothing a request does can leak into the next one.

use crate::domain::printer::{ActiveJob, PrinterId, PrinterRecord, PrinterState};

pub const DEMO_MODEL: &str = "X1 Carbon";

pub trait RosterProvider: Send + Sync {
    /// Every printer, in display order.
    fn printers(&self) -> Vec<PrinterRecord>;

    fn find(&self, id: &PrinterId) -> Option<PrinterRecord> {
        self.printers().into_iter().find(|printer| &printer.id == id)
    }
}

#[derive(Clone, Debug, Default)]
pub struct StaticRoster {
    printers: Option<Vec<PrinterRecord>>,
}

impl StaticRoster {
    /// The canonical four-printer demo farm.
    pub fn demo() -> Self {
        Self::default()
    }

    pub fn with_printers(printers: Vec<PrinterRecord>) -> Self {
        Self { printers: Some(printers) }
    }
}

impl RosterProvider for StaticRoster {
    fn printers(&self) -> Vec<PrinterRecord> {
        match &self.printers {
            Some(printers) => printers.clone(),
            None => demo_roster(),
        }
    }
}

pub fn demo_roster() -> Vec<PrinterRecord> {
    vec![
        demo_printer(
            1,
            PrinterState::Available { last_job: Some("phone_case.3mf".to_owned()) },
        ),
        demo_printer(
            2,
            PrinterState::Printing(ActiveJob {
                name: "testslide1f".to_owned(),
                progress: 45,
                time_remaining_minutes: 135,
                started_by: Some("@shobhit".to_owned()),
                estimated_cost_cents: Some(1250),
            }),
        ),
        demo_printer(
            3,
            PrinterState::Available { last_job: Some("benchy_test.3mf".to_owned()) },
        ),
        demo_printer(
            4,
            PrinterState::Offline { error_message: Some("Network connection lost".to_owned()) },
        ),
    ]
}

fn demo_printer(slot: u8, state: PrinterState) -> PrinterRecord {
    PrinterRecord {
        id: PrinterId(format!("printer_{slot}")),
        name: format!("Bambu X1 #{slot}"),
        model: DEMO_MODEL.to_owned(),
        network_address: Some(format!("192.168.1.{}", 100 + u16::from(slot))),
        state,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{demo_roster, RosterProvider, StaticRoster};
    use crate::domain::printer::{PrinterId, PrinterStatus};

    #[test]
    fn demo_roster_has_four_printers_with_unique_ids() {
        let roster = demo_roster();
        assert_eq!(roster.len(), 4);

        let ids: HashSet<_> = roster.iter().map(|printer| printer.id.clone()).collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn demo_roster_statuses_match_the_farm_layout() {
        let statuses: Vec<_> = demo_roster().iter().map(|printer| printer.status()).collect();
        assert_eq!(
            statuses,
            vec![
                PrinterStatus::Available,
                PrinterStatus::Printing,
                PrinterStatus::Available,
                PrinterStatus::Offline,
            ]
        );
    }

    #[test]
    fn find_looks_up_by_id_and_misses_unknown_printers() {
        let roster = StaticRoster::demo();

        let printer = roster.find(&PrinterId::new("printer_4")).expect("printer_4 on roster");
        assert_eq!(printer.name, "Bambu X1 #4");
        assert_eq!(printer.network_address.as_deref(), Some("192.168.1.104"));

        assert!(roster.find(&PrinterId::new("printer_9")).is_none());
    }

    #[test]
    fn custom_roster_replaces_demo_data() {
        let roster = StaticRoster::with_printers(Vec::new());
        assert!(roster.printers().is_empty());
    }
}
