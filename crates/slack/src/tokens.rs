//! Correlation tokens carried in Block Kit `action_id`s.
//!
//! A token is a kind plus an optional target printer. On the wire it keeps the
//! `{kind}` / `{kind}_{printer_id}` shape Slack echoes back on a click, but nothing
//! outside this module builds or slices those strings by hand.

use printfarm_core::PrinterId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    RefreshStatus,
    ViewQueue,
    CancelPrint,
    PrinterAction,
    ConfirmPrint,
    PausePrint,
    CancelJob,
    LiveFeed,
}

impl ActionKind {
    const UNTARGETED: [ActionKind; 3] = [Self::RefreshStatus, Self::ViewQueue, Self::CancelPrint];
    const TARGETED: [ActionKind; 5] =
        [Self::PrinterAction, Self::ConfirmPrint, Self::PausePrint, Self::CancelJob, Self::LiveFeed];

    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::RefreshStatus => "refresh_status",
            Self::ViewQueue => "view_queue",
            Self::CancelPrint => "cancel_print",
            Self::PrinterAction => "printer_action",
            Self::ConfirmPrint => "confirm_print",
            Self::PausePrint => "pause_print",
            Self::CancelJob => "cancel_print",
            Self::LiveFeed => "live_feed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ActionToken {
    pub kind: ActionKind,
    pub target_id: Option<PrinterId>,
}

impl ActionToken {
    pub fn new(kind: ActionKind) -> Self {
        Self { kind, target_id: None }
    }

    pub fn targeted(kind: ActionKind, target_id: PrinterId) -> Self {
        Self { kind, target_id: Some(target_id) }
    }

    pub fn encode(&self) -> String {
        match &self.target_id {
            Some(target_id) => format!("{}_{}", self.kind.wire_name(), target_id),
            None => self.kind.wire_name().to_owned(),
        }
    }

    /// Parses an `action_id`. Exact names win over prefixes, so `cancel_print` and
    /// `cancel_print_printer_2` resolve to different kinds.
    pub fn parse(raw: &str) -> Option<Self> {
        if let Some(kind) = ActionKind::UNTARGETED.into_iter().find(|kind| kind.wire_name() == raw)
        {
            return Some(Self::new(kind));
        }

        ActionKind::TARGETED.into_iter().find_map(|kind| {
            let target = raw.strip_prefix(kind.wire_name())?.strip_prefix('_')?;
            if target.is_empty() {
                return None;
            }
            Some(Self::targeted(kind, PrinterId::new(target)))
        })
    }
}

#[cfg(test)]
mod tests {
    use printfarm_core::PrinterId;

    use super::{ActionKind, ActionToken};

    #[test]
    fn untargeted_tokens_encode_to_their_wire_name() {
        assert_eq!(ActionToken::new(ActionKind::RefreshStatus).encode(), "refresh_status");
        assert_eq!(ActionToken::new(ActionKind::ViewQueue).encode(), "view_queue");
        assert_eq!(ActionToken::new(ActionKind::CancelPrint).encode(), "cancel_print");
    }

    #[test]
    fn targeted_tokens_append_the_printer_id() {
        let token = ActionToken::targeted(ActionKind::ConfirmPrint, PrinterId::new("printer_3"));
        assert_eq!(token.encode(), "confirm_print_printer_3");
        assert_eq!(ActionToken::parse("confirm_print_printer_3"), Some(token));
    }

    #[test]
    fn parse_keeps_underscored_printer_ids_intact() {
        let token = ActionToken::parse("printer_action_printer_2").expect("printer action token");
        assert_eq!(token.kind, ActionKind::PrinterAction);
        assert_eq!(token.target_id, Some(PrinterId::new("printer_2")));
    }

    #[test]
    fn exact_cancel_print_is_distinct_from_cancel_job_prefix() {
        assert_eq!(
            ActionToken::parse("cancel_print"),
            Some(ActionToken::new(ActionKind::CancelPrint))
        );

        let job = ActionToken::parse("cancel_print_printer_2").expect("cancel job token");
        assert_eq!(job.kind, ActionKind::CancelJob);
        assert_eq!(job.target_id, Some(PrinterId::new("printer_2")));
    }

    #[test]
    fn parse_rejects_unknown_and_targetless_identifiers() {
        for raw in ["", "select_file", "printer_action_", "printer_action", "refresh_statusx"] {
            assert_eq!(ActionToken::parse(raw), None, "{raw:?}");
        }
    }
}
