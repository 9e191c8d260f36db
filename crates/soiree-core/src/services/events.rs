//! Event creation.

use log::debug;
use serde_json::Value;

use crate::{error::Result, models::WizardDraft, transport::ApiClient};

pub const EVENTS_PATH: &str = "/events";

#[derive(Clone)]
pub struct EventService {
    api: ApiClient,
}

impl EventService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Posts `draft` as-is and returns the server's event object verbatim.
    pub async fn create_event(&self, draft: &WizardDraft) -> Result<Value> {
        debug!("Creating event '{}'", draft.name);
        self.api.post_json(EVENTS_PATH, draft).await
    }
}
