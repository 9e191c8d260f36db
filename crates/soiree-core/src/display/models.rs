//! Display implementations for domain models.
//!
//! All output is markdown so the CLI renderer can style it.

use std::fmt;

use super::datetime::EventSchedule;
use crate::{
    models::{Artist, User, WizardDraft},
    session::{Session, SessionState},
};

impl fmt::Display for Artist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        if !self.genres.is_empty() {
            writeln!(f, "- **Genres**: {}", self.genres.join(", "))?;
        }
        if let Some(followers) = self.followers {
            writeln!(f, "- **Followers**: {followers}")?;
        }
        if let Some(popularity) = self.popularity {
            writeln!(f, "- **Popularity**: {popularity}/100")?;
        }
        if let Some(url) = &self.spotify_url {
            writeln!(f, "- **Spotify**: {url}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for WizardDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = if self.name.is_empty() {
            "Untitled event"
        } else {
            self.name.as_str()
        };
        writeln!(f, "# {title}")?;
        writeln!(f)?;

        writeln!(
            f,
            "- When: {}",
            EventSchedule::new(self.date.as_ref(), self.time.as_ref())
        )?;
        match (&self.location, &self.location_description) {
            (Some(location), Some(description)) => writeln!(
                f,
                "- Where: {description} ({:.5}, {:.5})",
                location.lat, location.lng
            )?,
            (Some(location), None) => {
                writeln!(f, "- Where: {:.5}, {:.5}", location.lat, location.lng)?;
            }
            (None, Some(description)) => writeln!(f, "- Where: {description}")?,
            (None, None) => writeln!(f, "- Where: Not set")?,
        }
        writeln!(
            f,
            "- Visibility: {}",
            if self.is_private { "Private" } else { "Public" }
        )?;

        if self.enabled_steps.music || !self.artists.is_empty() {
            writeln!(f, "\n## Lineup")?;
            writeln!(f)?;
            if self.artists.is_empty() {
                writeln!(f, "No artists picked.")?;
            }
            for artist in &self.artists {
                writeln!(f, "- {}", artist.name)?;
            }
        }

        if self.enabled_steps.drinks_and_food || !self.drinks.is_empty() || !self.food.is_empty()
        {
            writeln!(f, "\n## Drinks and food")?;
            writeln!(f)?;
            if self.drinks.is_empty() && self.food.is_empty() {
                writeln!(f, "Nothing on the menu yet.")?;
            }
            for drink in &self.drinks {
                writeln!(f, "- {} (drink)", drink.name)?;
            }
            for dish in &self.food {
                writeln!(f, "- {dish}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.display_name())?;
        writeln!(f)?;
        if let Some(email) = &self.email {
            writeln!(f, "- **Email**: {email}")?;
        }
        if !self.id.is_null() {
            writeln!(f, "- **ID**: {}", self.id)?;
        }
        Ok(())
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.token, &self.user) {
            (None, _) => writeln!(f, "Not logged in."),
            (Some(_), None) => writeln!(f, "Logged in; user details not loaded yet."),
            (Some(_), Some(user)) => {
                writeln!(f, "Logged in as {}", user.display_name())?;
                writeln!(f)?;
                write!(f, "{user}")
            }
        }
    }
}
