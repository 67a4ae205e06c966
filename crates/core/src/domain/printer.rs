use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrinterId(pub String);

impl PrinterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PrinterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrinterStatus {
    Available,
    Printing,
    Paused,
    Offline,
    Maintenance,
    Error,
}

impl PrinterStatus {
    pub const ALL: [PrinterStatus; 6] = [
        Self::Available,
        Self::Printing,
        Self::Paused,
        Self::Offline,
        Self::Maintenance,
        Self::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Printing => "printing",
            Self::Paused => "paused",
            Self::Offline => "offline",
            Self::Maintenance => "maintenance",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for PrinterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownPrinterStatus(pub String);

impl fmt::Display for UnknownPrinterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown printer status `{}`", self.0)
    }
}

impl std::error::Error for UnknownPrinterStatus {}

impl FromStr for PrinterStatus {
    type Err = UnknownPrinterStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| UnknownPrinterStatus(value.to_owned()))
    }
}

/// A job occupying a printer. Figures are illustrative and never refreshed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveJob {
    pub name: String,
    pub progress: u8,
    pub time_remaining_minutes: i64,
    pub started_by: Option<String>,
    pub estimated_cost_cents: Option<u64>,
}

/// Status together with the fields that are only meaningful for that status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PrinterState {
    Available { last_job: Option<String> },
    Printing(ActiveJob),
    Paused(ActiveJob),
    Offline { error_message: Option<String> },
    Maintenance,
    Error { error_message: Option<String> },
}

impl PrinterState {
    pub fn status(&self) -> PrinterStatus {
        match self {
            Self::Available { .. } => PrinterStatus::Available,
            Self::Printing(_) => PrinterStatus::Printing,
            Self::Paused(_) => PrinterStatus::Paused,
            Self::Offline { .. } => PrinterStatus::Offline,
            Self::Maintenance => PrinterStatus::Maintenance,
            Self::Error { .. } => PrinterStatus::Error,
        }
    }

    pub fn active_job(&self) -> Option<&ActiveJob> {
        match self {
            Self::Printing(job) | Self::Paused(job) => Some(job),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterRecord {
    pub id: PrinterId,
    pub name: String,
    pub model: String,
    pub network_address: Option<String>,
    #[serde(flatten)]
    pub state: PrinterState,
}

impl PrinterRecord {
    pub fn status(&self) -> PrinterStatus {
        self.state.status()
    }
}

#[cfg(test)]
mod tests {
    use super::{ActiveJob, PrinterState, PrinterStatus};

    #[test]
    fn status_parses_only_exact_wire_names() {
        assert_eq!("printing".parse::<PrinterStatus>(), Ok(PrinterStatus::Printing));
        assert_eq!("maintenance".parse::<PrinterStatus>(), Ok(PrinterStatus::Maintenance));
        for raw in [" printing ", "MAINTENANCE", "Available", "exploded"] {
            assert!(raw.parse::<PrinterStatus>().is_err(), "{raw:?}");
        }
    }

    #[test]
    fn state_exposes_job_only_while_occupied() {
        let job = ActiveJob {
            name: "bracket.3mf".to_owned(),
            progress: 10,
            time_remaining_minutes: 30,
            started_by: None,
            estimated_cost_cents: None,
        };

        assert!(PrinterState::Paused(job.clone()).active_job().is_some());
        assert_eq!(PrinterState::Printing(job).status(), PrinterStatus::Printing);
        assert!(PrinterState::Maintenance.active_job().is_none());
        assert!(PrinterState::Available { last_job: None }.active_job().is_none());
    }
}
