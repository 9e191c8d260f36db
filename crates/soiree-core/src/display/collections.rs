//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::Artist;

/// Newtype wrapper for displaying artist search results.
///
/// Each artist is formatted with its own Display implementation; an empty
/// collection prints a single "No artists found." line.
///
/// # Examples
///
/// ```rust
/// use soiree_core::{display::Artists, models::Artist};
///
/// let artist = Artist {
///     id: "4tZwfgrHOc3mvqYlEYSvVi".to_string(),
///     name: "Daft Punk".to_string(),
///     genres: vec!["french house".to_string()],
///     followers: Some(9_000_000),
///     popularity: Some(80),
///     spotify_url: Some("https://open.spotify.com/artist/4tZwfgrHOc3mvqYlEYSvVi".to_string()),
///     ..Artist::default()
/// };
///
/// let output = Artists(vec![artist]).to_string();
/// assert!(output.contains("Daft Punk"));
/// ```
pub struct Artists(pub Vec<Artist>);

impl Artists {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Artists {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            writeln!(f, "No artists found.")
        } else {
            for artist in &self.0 {
                write!(f, "{artist}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_artist(id: &str, name: &str) -> Artist {
        Artist {
            id: id.to_string(),
            name: name.to_string(),
            genres: vec!["electro".to_string(), "french house".to_string()],
            followers: Some(1200),
            popularity: Some(77),
            spotify_url: Some(format!("https://open.spotify.com/artist/{id}")),
            ..Artist::default()
        }
    }

    #[test]
    fn test_artists_display_empty() {
        assert_eq!(Artists(vec![]).to_string(), "No artists found.\n");
    }

    #[test]
    fn test_artists_display_multiple() {
        let artists = Artists(vec![
            create_test_artist("a1", "Daft Punk"),
            create_test_artist("a2", "Justice"),
        ]);
        let output = artists.to_string();

        assert!(output.contains("## Daft Punk"));
        assert!(output.contains("## Justice"));
        assert!(output.contains("electro, french house"));
        assert!(!output.starts_with("# "));
        assert!(output.find("## Daft Punk") < output.find("## Justice"));
    }
}
