pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "printfarm",
    about = "Print farm Slack responder operator CLI",
    long_about = "Preview the Slack documents the webhook would return, without a Slack workspace.",
    after_help = "Examples:\n  printfarm dashboard\n  printfarm action printer_action_printer_2\n  printfarm config"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Print the `/print` dashboard document as JSON")]
    Dashboard,
    #[command(about = "Route a block-action identifier and print the response document as JSON")]
    Action {
        #[arg(help = "Action identifier as Slack would send it, e.g. confirm_print_printer_1")]
        action_id: String,
        #[arg(long, default_value = "operator", help = "User name reported as the clicker")]
        user: String,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Dashboard => commands::dashboard::run(),
        Command::Action { action_id, user } => commands::action::run(&action_id, &user),
        Command::Config => commands::config::run(),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
