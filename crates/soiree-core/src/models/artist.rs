//! Artist model returned by the music search endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single artwork rendition attached to an artist.
///
/// The catalogue reports `null` dimensions for artwork it has not measured.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtistImage {
    #[serde(default)]
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

/// An artist as fetched from the music catalogue.
///
/// Artists are never edited locally; the draft stores them by value and
/// serializes them back exactly as the server described them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    /// Catalogue identifier
    #[serde(default)]
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Artwork, largest first as delivered by the catalogue
    #[serde(default)]
    pub images: Vec<ArtistImage>,

    /// Genre tags
    #[serde(default)]
    pub genres: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers: Option<u64>,

    /// Popularity score (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u32>,

    /// Link to the artist's catalogue page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spotify_url: Option<String>,

    /// Any further fields the catalogue sends, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
