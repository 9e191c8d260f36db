//! Partial draft updates.

use jiff::civil::{Date, Time};
use serde::{Deserialize, Deserializer};

use super::{Artist, DrinkRef, EnabledSteps, Location, WizardDraft};

/// A subset of top-level draft fields to overwrite.
///
/// `None` means "leave the field alone". For nullable fields the inner
/// option carries the new value, so `Some(None)` clears the field.
///
/// When deserialized from JSON a missing key maps to `None` and an explicit
/// `null` maps to `Some(None)`:
///
/// ```rust
/// use soiree_core::models::DraftUpdate;
///
/// let update: DraftUpdate =
///     serde_json::from_str(r#"{"name": "Rooftop", "location": null}"#)?;
/// assert_eq!(update.name.as_deref(), Some("Rooftop"));
/// assert_eq!(update.location, Some(None));
/// assert_eq!(update.date, None);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftUpdate {
    pub name: Option<String>,
    #[serde(deserialize_with = "present")]
    pub date: Option<Option<Date>>,
    #[serde(deserialize_with = "present")]
    pub time: Option<Option<Time>>,
    #[serde(deserialize_with = "present")]
    pub location: Option<Option<Location>>,
    #[serde(deserialize_with = "present")]
    pub location_description: Option<Option<String>>,
    pub artists: Option<Vec<Artist>>,
    pub drinks: Option<Vec<DrinkRef>>,
    pub food: Option<Vec<String>>,
    pub is_private: Option<bool>,
    pub enabled_steps: Option<EnabledSteps>,
}

/// Marks a key as present, keeping an explicit `null` as `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl DraftUpdate {
    /// An update that touches nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_date(mut self, date: Option<Date>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_time(mut self, time: Option<Time>) -> Self {
        self.time = Some(time);
        self
    }

    /// Replaces the whole location; there is no per-coordinate update.
    pub fn with_location(mut self, location: Option<Location>) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_location_description(mut self, description: Option<String>) -> Self {
        self.location_description = Some(description);
        self
    }

    pub fn with_artists(mut self, artists: Vec<Artist>) -> Self {
        self.artists = Some(artists);
        self
    }

    pub fn with_drinks(mut self, drinks: Vec<DrinkRef>) -> Self {
        self.drinks = Some(drinks);
        self
    }

    pub fn with_food(mut self, food: Vec<String>) -> Self {
        self.food = Some(food);
        self
    }

    pub fn with_private(mut self, is_private: bool) -> Self {
        self.is_private = Some(is_private);
        self
    }

    pub fn with_enabled_steps(mut self, enabled_steps: EnabledSteps) -> Self {
        self.enabled_steps = Some(enabled_steps);
        self
    }

    /// True when applying this update would not change any field.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrites each field of `draft` that this update specifies.
    ///
    /// Values are moved in as-is. Nested structs such as `location` are
    /// replaced wholesale.
    pub fn apply_to(self, draft: &mut WizardDraft) {
        let Self {
            name,
            date,
            time,
            location,
            location_description,
            artists,
            drinks,
            food,
            is_private,
            enabled_steps,
        } = self;

        if let Some(name) = name {
            draft.name = name;
        }
        if let Some(date) = date {
            draft.date = date;
        }
        if let Some(time) = time {
            draft.time = time;
        }
        if let Some(location) = location {
            draft.location = location;
        }
        if let Some(location_description) = location_description {
            draft.location_description = location_description;
        }
        if let Some(artists) = artists {
            draft.artists = artists;
        }
        if let Some(drinks) = drinks {
            draft.drinks = drinks;
        }
        if let Some(food) = food {
            draft.food = food;
        }
        if let Some(is_private) = is_private {
            draft.is_private = is_private;
        }
        if let Some(enabled_steps) = enabled_steps {
            draft.enabled_steps = enabled_steps;
        }
    }
}
