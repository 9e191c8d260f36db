//! Core library for the Soiree event planning client.
//!
//! This crate holds the client-side state of the event creation flow: the
//! multi-step wizard draft, the authenticated session with its persisted
//! bearer credential, and the HTTP services that submit events and search
//! the music catalogue.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Collection and result wrappers
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use soiree_core::{models::DraftUpdate, MemoryCredentialStore, SoireeBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let soiree = SoireeBuilder::new()
//!     .with_base_url("http://localhost:3000")
//!     .with_credential_store(Arc::new(MemoryCredentialStore::new()))
//!     .build()
//!     .await?;
//!
//! soiree.session().login("ada", "hunter2").await?;
//!
//! soiree
//!     .wizard()
//!     .update_form_data(DraftUpdate::new().with_name("Rooftop Party"));
//! let created = soiree.submit_draft().await?;
//! println!("Created: {created}");
//!
//! let found = soiree.music().search_artists("Daft Punk").await?;
//! for artist in &found {
//!     println!("{}", artist.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod credentials;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod transport;
pub mod wizard;

// Re-export commonly used types
pub use app::{Soiree, SoireeBuilder};
pub use config::ClientConfig;
pub use credentials::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
pub use display::{Artists, CreateResult, EventSchedule, OperationStatus};
pub use error::{Result, SoireeError};
pub use models::{
    Artist, ArtistImage, AuthResponse, DraftUpdate, DrinkRef, EnabledSteps, Location, User,
    WizardDraft,
};
pub use services::{ArtistSearchResponse, EventService, MusicService};
pub use session::{Session, SessionManager, SessionState};
pub use transport::{
    ApiClient, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, UnauthorizedHandler,
};
pub use wizard::WizardStore;
