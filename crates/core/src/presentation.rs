use crate::domain::printer::PrinterStatus;

pub const UNKNOWN_STATUS_SYMBOL: &str = "❓";
pub const PROGRESS_BAR_WIDTH: usize = 20;

pub fn status_symbol(status: PrinterStatus) -> &'static str {
    match status {
        PrinterStatus::Available => "✅",
        PrinterStatus::Printing => "🔒",
        PrinterStatus::Paused => "⏸️",
        PrinterStatus::Offline => "⚠️",
        PrinterStatus::Maintenance => "🔧",
        PrinterStatus::Error => "❌",
    }
}

/// Symbol for a raw status string; anything outside the known set gets the fallback.
pub fn status_symbol_for(raw_status: &str) -> &'static str {
    raw_status.parse::<PrinterStatus>().map(status_symbol).unwrap_or(UNKNOWN_STATUS_SYMBOL)
}

pub fn format_duration(minutes: i64) -> String {
    if minutes <= 0 {
        return String::new();
    }

    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{hours}h {mins}m")
    } else {
        format!("{mins}m")
    }
}

pub fn title_case(value: &str) -> String {
    value
        .split(|ch: char| ch == '_' || ch.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn progress_bar(percent: u8, width: usize) -> String {
    let percent = usize::from(percent.min(100));
    let filled = percent * width / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::{
        format_cents, format_duration, progress_bar, status_symbol, status_symbol_for,
        title_case, PROGRESS_BAR_WIDTH, UNKNOWN_STATUS_SYMBOL,
    };
    use crate::domain::printer::PrinterStatus;

    #[test]
    fn format_duration_handles_zero_negative_minutes_and_hours() {
        assert_eq!(format_duration(0), "");
        assert_eq!(format_duration(-5), "");
        assert_eq!(format_duration(45), "45m");
        assert_eq!(format_duration(60), "1h 0m");
        assert_eq!(format_duration(135), "2h 15m");
    }

    #[test]
    fn known_statuses_have_distinct_symbols() {
        let available = status_symbol_for("available");
        let printing = status_symbol_for("printing");
        let offline = status_symbol_for("offline");

        assert_eq!(available, "✅");
        assert_eq!(printing, "🔒");
        assert_eq!(offline, "⚠️");
        assert_ne!(available, printing);
        assert_ne!(printing, offline);
        assert_ne!(available, offline);
    }

    #[test]
    fn every_enum_status_avoids_the_fallback_symbol() {
        for status in PrinterStatus::ALL {
            assert_ne!(status_symbol(status), UNKNOWN_STATUS_SYMBOL, "{status}");
        }
    }

    #[test]
    fn unknown_statuses_share_one_fallback_symbol() {
        let unknown =
            ["", "on_fire", "queued", "AVAILABLE!", "Available", "AVAILABLE", " printing ", "Offline"];
        for raw in unknown {
            assert_eq!(status_symbol_for(raw), UNKNOWN_STATUS_SYMBOL, "{raw:?}");
        }
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("maintenance"), "Maintenance");
        assert_eq!(title_case("needs_attention"), "Needs Attention");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn progress_bar_is_proportional_and_fixed_width() {
        let bar = progress_bar(45, PROGRESS_BAR_WIDTH);
        assert_eq!(bar, format!("{}{}", "█".repeat(9), "░".repeat(11)));
        assert_eq!(progress_bar(0, 4), "░░░░");
        assert_eq!(progress_bar(250, 4), "████");
    }

    #[test]
    fn cents_render_as_dollars() {
        assert_eq!(format_cents(1250), "$12.50");
        assert_eq!(format_cents(7), "$0.07");
    }
}
