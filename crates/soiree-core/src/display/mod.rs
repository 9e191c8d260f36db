//! Markdown formatting for drafts, sessions and server results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! newtype wrappers format collections and operation outcomes.
//!
//! ```text
//! ┌──────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │  Domain Models   │    │ Newtype Wrappers │    │    Markdown     │
//! │ (Draft, Session) │───▶│ & Result Types   │───▶│  (Terminal)     │
//! └──────────────────┘    └──────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: collection wrappers ([`Artists`])
//! - [`results`]: operation results ([`CreateResult`])
//! - [`status`]: confirmation messages ([`OperationStatus`])
//! - [`datetime`]: event date and time formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use soiree_core::{display::OperationStatus, models::WizardDraft};
//!
//! let draft = WizardDraft {
//!     name: "Rooftop Party".to_string(),
//!     ..Default::default()
//! };
//! assert!(draft.to_string().starts_with("# Rooftop Party"));
//!
//! let done = OperationStatus::success("Logged out");
//! assert_eq!(done.to_string(), "Success: Logged out\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Artists;
pub use datetime::EventSchedule;
pub use results::CreateResult;
pub use status::OperationStatus;
