//! Application context wiring the stores and services together.
//!
//! A [`Soiree`] is built once per application context by [`SoireeBuilder`]
//! and passed by reference to whatever needs it. Nothing in the crate is a
//! global; tests build a fresh context each.
//!
//! ```text
//! ┌──────────────┐   ┌────────────────┐   ┌──────────────┐
//! │ WizardStore  │   │ SessionManager │   │   Services   │
//! │   (draft)    │   │ (token, user)  │   │ events/music │
//! └──────┬───────┘   └───────┬────────┘   └──────┬───────┘
//!        │ submit            │ login/hydrate     │
//!        └──────────────────▶├◀──────────────────┘
//!                    ┌───────┴────────┐   ┌─────────────────┐
//!                    │   ApiClient    │──▶│ CredentialStore │
//!                    └────────────────┘   └─────────────────┘
//! ```

pub mod builder;


pub use builder::SoireeBuilder;

use crate::{
    config::ClientConfig,
    services::{EventService, MusicService},
    session::SessionManager,
    transport::ApiClient,
    wizard::WizardStore,
};

/// One instance of every store and service, sharing a single client.
pub struct Soiree {
    pub(crate) config: ClientConfig,
    pub(crate) api: ApiClient,
    pub(crate) session: SessionManager,
    pub(crate) wizard: WizardStore,
    pub(crate) events: EventService,
    pub(crate) music: MusicService,
}

impl Soiree {
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn wizard(&self) -> &WizardStore {
        &self.wizard
    }

    pub fn events(&self) -> &EventService {
        &self.events
    }

    pub fn music(&self) -> &MusicService {
        &self.music
    }

    /// Submits the wizard's draft through the event service.
    pub async fn submit_draft(&self) -> crate::Result<serde_json::Value> {
        self.wizard.submit(&self.events).await
    }
}
