//! Form state for the event creation wizard.
//!
//! Each wizard step contributes a few top-level fields through
//! [`WizardStore::update_form_data`]. The store never validates input and
//! never fails; it only merges, resets and notifies.
//!
//! ```rust
//! use soiree_core::{models::{DraftUpdate, Location}, WizardStore};
//!
//! let wizard = WizardStore::new();
//! wizard.update_form_data(DraftUpdate::new().with_name("Dinner"));
//! wizard.update_form_data(
//!     DraftUpdate::new().with_location(Some(Location { lat: 48.85, lng: 2.35 })),
//! );
//!
//! let draft = wizard.form_data();
//! assert_eq!(draft.name, "Dinner");
//! assert_eq!(draft.location.map(|l| l.lat), Some(48.85));
//!
//! wizard.reset_form();
//! assert_eq!(wizard.form_data(), Default::default());
//! ```

use log::{debug, info};
use tokio::sync::watch;

use crate::{
    error::Result,
    models::{DraftUpdate, WizardDraft},
    services::EventService,
};

/// Holds the in-progress [`WizardDraft`].
///
/// The draft is always complete. Observers obtained from
/// [`WizardStore::subscribe`] see every update and reset.
#[derive(Debug)]
pub struct WizardStore {
    draft: watch::Sender<WizardDraft>,
}

impl WizardStore {
    /// A store holding `WizardDraft::default()`.
    pub fn new() -> Self {
        let (draft, _) = watch::channel(WizardDraft::default());
        Self { draft }
    }

    /// Snapshot of the current draft.
    pub fn form_data(&self) -> WizardDraft {
        self.draft.borrow().clone()
    }

    /// Reads the current draft without cloning it.
    pub fn with_draft<R>(&self, f: impl FnOnce(&WizardDraft) -> R) -> R {
        f(&self.draft.borrow())
    }

    /// Shallow-merges `update` into the draft.
    ///
    /// Every field present in `update` replaces the stored value; nested
    /// objects are not merged, so a new `location` must carry both
    /// coordinates.
    pub fn update_form_data(&self, update: DraftUpdate) {
        if update.is_empty() {
            return;
        }
        self.draft.send_modify(|draft| update.apply_to(draft));
    }

    /// Puts back the default draft with freshly allocated collections.
    pub fn reset_form(&self) {
        self.draft.send_replace(WizardDraft::default());
        debug!("Wizard draft reset");
    }

    /// Receiver that is notified whenever the draft changes.
    pub fn subscribe(&self) -> watch::Receiver<WizardDraft> {
        self.draft.subscribe()
    }

    /// Sends the current draft to the events endpoint.
    ///
    /// The draft is reset once the server accepts it; after a failure it is
    /// kept so the user can retry.
    ///
    /// # Errors
    ///
    /// Returns whatever [`EventService::create_event`] returned.
    pub async fn submit(&self, events: &EventService) -> Result<serde_json::Value> {
        let draft = self.form_data();
        let created = events.create_event(&draft).await?;
        info!("Submitted event '{}'", draft.name);
        self.reset_form();
        Ok(created)
    }
}

impl Default for WizardStore {
    fn default() -> Self {
        Self::new()
    }
}
