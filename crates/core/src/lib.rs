pub mod config;
pub mod domain;
pub mod presentation;
pub mod roster;

pub use domain::printer::{
    ActiveJob, PrinterId, PrinterRecord, PrinterState, PrinterStatus, UnknownPrinterStatus,
};
pub use presentation::{format_duration, status_symbol, status_symbol_for};
pub use roster::{demo_roster, RosterProvider, StaticRoster};
