//! The `/print` farm dashboard: one status card per printer plus global controls.

use chrono::{Local, NaiveTime};
use printfarm_core::presentation::{format_duration, status_symbol, title_case};
use printfarm_core::{PrinterRecord, PrinterState};

use crate::blocks::{ButtonElement, ButtonStyle, MessageBuilder, MessageTemplate};
use crate::tokens::{ActionKind, ActionToken};

pub const DASHBOARD_TITLE: &str = "🏭 3D Printer Farm Status";
pub const TIMESTAMP_FORMAT: &str = "%I:%M %p";

/// Blocks produced for a roster of `printer_count` printers.
pub fn dashboard_block_count(printer_count: usize) -> usize {
    2 + 2 * printer_count + 2
}

pub fn render(printers: &[PrinterRecord]) -> MessageTemplate {
    render_at(printers, Local::now().time())
}

pub fn render_at(printers: &[PrinterRecord], rendered_at: NaiveTime) -> MessageTemplate {
    let mut builder = MessageBuilder::new(format!("3D printer farm status ({} printers)", printers.len()))
        .header("printfarm.dashboard.header.v1", DASHBOARD_TITLE)
        .divider("printfarm.dashboard.header.divider.v1");

    for printer in printers {
        let card = PrinterCard::for_printer(printer);
        builder = builder
            .section(format!("printfarm.dashboard.printer.{}.v1", printer.id), |section| {
                section.mrkdwn(card.text).accessory(card.control);
            })
            .divider(format!("printfarm.dashboard.printer.{}.divider.v1", printer.id));
    }

    builder
        .actions("printfarm.dashboard.actions.v1", |actions| {
            actions
                .button(
                    ButtonElement::new(
                        ActionToken::new(ActionKind::RefreshStatus).encode(),
                        "🔄 Refresh Status",
                    )
                    .style(ButtonStyle::Primary),
                )
                .button(ButtonElement::new(
                    ActionToken::new(ActionKind::ViewQueue).encode(),
                    "📋 View Queue",
                ));
        })
        .context("printfarm.dashboard.updated.v1", |context| {
            context.mrkdwn(format!("Last updated: {}", rendered_at.format(TIMESTAMP_FORMAT)));
        })
        .build()
}

struct PrinterCard {
    text: String,
    control: ButtonElement,
}

impl PrinterCard {
    fn for_printer(printer: &PrinterRecord) -> Self {
        let symbol = status_symbol(printer.status());
        let name = &printer.name;

        let (text, label, style) = match &printer.state {
            PrinterState::Printing(job) => (
                format!(
                    "*{name}* {symbol} Printing\n📄 Job: {}\n📊 Progress: {}%\n⏱️ Remaining: {}\n👤 Started by: {}",
                    job.name,
                    job.progress,
                    format_duration(job.time_remaining_minutes),
                    job.started_by.as_deref().unwrap_or("Unknown"),
                ),
                "View Progress",
                Some(ButtonStyle::Primary),
            ),
            PrinterState::Available { last_job } => (
                format!(
                    "*{name}* {symbol} Available\n🔧 Model: {}\n📁 Last job: {}",
                    printer.model,
                    last_job.as_deref().unwrap_or("None"),
                ),
                "Start Print",
                Some(ButtonStyle::Primary),
            ),
            PrinterState::Offline { error_message } => {
                let mut text = format!(
                    "*{name}* {symbol} Offline\n❌ Error: {}",
                    error_message.as_deref().unwrap_or("Unknown error"),
                );
                if let Some(address) = &printer.network_address {
                    text.push_str(&format!("\n🌐 IP: {address}"));
                }
                (text, "Check Status", Some(ButtonStyle::Danger))
            }
            other => (
                format!("*{name}* {symbol} {}", title_case(other.status().as_str())),
                "View Details",
                None,
            ),
        };

        let mut control = ButtonElement::new(
            ActionToken::targeted(ActionKind::PrinterAction, printer.id.clone()).encode(),
            label,
        )
        .value(printer.id.as_str());
        control.style = style;

        Self { text, control }
    }
}
