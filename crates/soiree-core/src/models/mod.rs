//! Data models shared by the wizard, the session and the services.
//!
//! Display implementations for these models live in
//! [`crate::display::models`].
//!
//! ```rust
//! use soiree_core::models::{DraftUpdate, Location, WizardDraft};
//!
//! let mut draft = WizardDraft::default();
//! DraftUpdate::new()
//!     .with_name("Launch party")
//!     .with_location(Some(Location { lat: 52.52, lng: 13.40 }))
//!     .apply_to(&mut draft);
//!
//! assert_eq!(draft.name, "Launch party");
//! assert!(draft.is_private);
//! ```

pub mod artist;
pub mod draft;
pub mod update;
pub mod user;

#[cfg(test)]
mod tests;

pub use artist::{Artist, ArtistImage};
pub use draft::{DrinkRef, EnabledSteps, Location, WizardDraft};
pub use update::DraftUpdate;
pub use user::{AuthResponse, LoginRequest, RegisterRequest, User};
