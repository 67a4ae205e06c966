//! Follow-up documents opened from a dashboard card.

use printfarm_core::presentation::{format_cents, format_duration, progress_bar, PROGRESS_BAR_WIDTH};
use printfarm_core::{ActiveJob, PrinterRecord};

use crate::blocks::{
    ButtonElement, ButtonStyle, MessageBuilder, MessageTemplate, PlainTextInputElement,
    StaticSelectElement,
};
use crate::links::StreamUrlTemplate;
use crate::tokens::{ActionKind, ActionToken};

pub const SELECT_FILE_ACTION: &str = "select_file";
pub const CLIENT_TYPE_ACTION: &str = "client_type";
pub const PROJECT_NAME_ACTION: &str = "project_name";

pub const PRINTABLE_FILES: [&str; 3] = ["benchy_test.3mf", "phone_case.3mf", "custom_part.3mf"];

pub fn start_print_dialog(printer: &PrinterRecord) -> MessageTemplate {
    let id = &printer.id;

    let file_select = PRINTABLE_FILES
        .iter()
        .fold(StaticSelectElement::new(SELECT_FILE_ACTION, "Choose a file..."), |select, file| {
            select.option(*file, *file)
        });
    let client_select = StaticSelectElement::new(CLIENT_TYPE_ACTION, "Select client type...")
        .option("Internal", "internal")
        .option("External", "external");

    MessageBuilder::new(format!("Start a print job on {}", printer.name))
        .header(format!("printfarm.dialog.{id}.header.v1"), format!("🖨️ Start Print Job - {}", printer.name))
        .section(format!("printfarm.dialog.{id}.file.v1"), |section| {
            section.mrkdwn("*📁 Select File to Print:*");
        })
        .actions(format!("printfarm.dialog.{id}.file_select.v1"), |actions| {
            actions.select(file_select);
        })
        .divider(format!("printfarm.dialog.{id}.divider.v1"))
        .section(format!("printfarm.dialog.{id}.details.v1"), |section| {
            section.mrkdwn("*📋 Job Details:*");
        })
        .section(format!("printfarm.dialog.{id}.client_type.v1"), |section| {
            section.mrkdwn("Client Type:").accessory(client_select);
        })
        .input(
            format!("printfarm.dialog.{id}.project_name.v1"),
            "Project Name",
            PlainTextInputElement::new(PROJECT_NAME_ACTION).placeholder("Enter project name..."),
        )
        .divider(format!("printfarm.dialog.{id}.actions.divider.v1"))
        .actions(format!("printfarm.dialog.{id}.actions.v1"), |actions| {
            actions
                .button(
                    ButtonElement::new(
                        ActionToken::targeted(ActionKind::ConfirmPrint, id.clone()).encode(),
                        "🚀 Start Print",
                    )
                    .style(ButtonStyle::Primary)
                    .value(id.as_str()),
                )
                .button(ButtonElement::new(
                    ActionToken::new(ActionKind::CancelPrint).encode(),
                    "❌ Cancel",
                ));
        })
        .build()
}

/// Figures come from the roster record and are not refreshed from the printer.
pub fn live_status_panel(
    printer: &PrinterRecord,
    job: &ActiveJob,
    stream: &StreamUrlTemplate,
) -> MessageTemplate {
    let id = &printer.id;
    let figures = format!(
        "*📊 Progress:* {}% complete\n*⏱️ Time Remaining:* {}\n*📄 Current Job:* {}\n*👤 Started by:* {}\n*💰 Estimated Cost:* {}",
        job.progress,
        format_duration(job.time_remaining_minutes),
        job.name,
        job.started_by.as_deref().unwrap_or("Unknown"),
        job.estimated_cost_cents.map(format_cents).unwrap_or_else(|| "n/a".to_owned()),
    );
    let bar = format!(
        "*Progress Bar:*\n{} {}%",
        progress_bar(job.progress, PROGRESS_BAR_WIDTH),
        job.progress.min(100)
    );

    let mut live_feed = ButtonElement::new(
        ActionToken::targeted(ActionKind::LiveFeed, id.clone()).encode(),
        "📹 Live Feed",
    );
    if let Some(url) = stream.url_for(printer) {
        live_feed = live_feed.url(url);
    }

    MessageBuilder::new(format!("{} is {}% through {}", printer.name, job.progress, job.name))
        .header(format!("printfarm.panel.{id}.header.v1"), format!("🖨️ {} - Live Status", printer.name))
        .section(format!("printfarm.panel.{id}.figures.v1"), |section| {
            section.mrkdwn(figures);
        })
        .section(format!("printfarm.panel.{id}.progress.v1"), |section| {
            section.mrkdwn(bar);
        })
        .divider(format!("printfarm.panel.{id}.divider.v1"))
        .actions(format!("printfarm.panel.{id}.actions.v1"), |actions| {
            actions
                .button(
                    ButtonElement::new(
                        ActionToken::targeted(ActionKind::PausePrint, id.clone()).encode(),
                        "⏸️ Pause",
                    )
                    .style(ButtonStyle::Danger),
                )
                .button(
                    ButtonElement::new(
                        ActionToken::targeted(ActionKind::CancelJob, id.clone()).encode(),
                        "🛑 Cancel Print",
                    )
                    .style(ButtonStyle::Danger),
                )
                .button(live_feed);
        })
        .build()
}
