//! The event draft assembled by the wizard.

use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

use super::Artist;

/// Geographic point picked in the location step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// Reference to a drink from the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrinkRef {
    pub id: String,
    pub name: String,
}

/// Which optional wizard steps the user switched on.
///
/// The store keeps this as plain data; nothing in the core refuses updates
/// to fields of a disabled step.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnabledSteps {
    pub music: bool,
    pub drinks_and_food: bool,
}

/// The in-progress event.
///
/// Every field is always present. Absent values are `None` or an empty
/// collection and serialize as `null` / `[]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WizardDraft {
    /// Event title
    pub name: String,

    /// Calendar day of the event
    pub date: Option<Date>,

    /// Start time of the event
    pub time: Option<Time>,

    /// Venue coordinates
    pub location: Option<Location>,

    /// Free-form directions or venue name
    pub location_description: Option<String>,

    /// Lineup, in the order the user picked it
    pub artists: Vec<Artist>,

    /// Drinks on offer
    pub drinks: Vec<DrinkRef>,

    /// Food on offer
    pub food: Vec<String>,

    /// Invite-only when true
    pub is_private: bool,

    /// Optional step toggles
    pub enabled_steps: EnabledSteps,
}

impl Default for WizardDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            date: None,
            time: None,
            location: None,
            location_description: None,
            artists: Vec::new(),
            drinks: Vec::new(),
            food: Vec::new(),
            is_private: true,
            enabled_steps: EnabledSteps::default(),
        }
    }
}
