//! Slack surface of the print farm responder.
//!
//! Everything here is a pure function of the request and the roster:
//! - **Block Kit** (`blocks`) - typed message builder and the two response shapes
//! - **Dashboard** (`dashboard`) - the `/print` farm overview
//! - **Dialogs** (`dialogs`) - start-print form and live status panel
//! - **Slash commands** (`commands`) - channel gate for `/print`
//! - **Interactions** (`events`, `router`, `tokens`) - button clicks back to documents
//!
//! ```text
//! /print ─→ PrintCommandHandler ─→ dashboard
//! click  ─→ parse_interaction_payload ─→ InteractionRouter ─→ dashboard | dialog | panel | text
//! ```

pub mod blocks;
pub mod commands;
pub mod dashboard;
pub mod dialogs;
pub mod events;
pub mod links;
pub mod router;
pub mod tokens;

pub use blocks::{MessageTemplate, SlackResponse};
pub use commands::{PrintCommandHandler, PrintCommandOutcome, SlashCommandPayload};
pub use events::{parse_interaction_payload, ActionEvent, PayloadError};
pub use links::StreamUrlTemplate;
pub use router::InteractionRouter;
pub use tokens::{ActionKind, ActionToken};
