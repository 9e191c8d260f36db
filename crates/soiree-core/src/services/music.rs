//! Artist search.

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{error::Result, models::Artist, transport::ApiClient};

pub const ARTISTS_PATH: &str = "/music/artists";

/// Body of `GET /music/artists`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ArtistSearchResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub artists: Vec<Artist>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Artist>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Artist>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Clone)]
pub struct MusicService {
    api: ApiClient,
}

impl MusicService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Looks artists up by name.
    ///
    /// Returns the response's `artists` array in server order; a missing
    /// array reads as no matches.
    pub async fn search_artists(&self, name: &str) -> Result<Vec<Artist>> {
        let response: ArtistSearchResponse =
            self.api.get_json(ARTISTS_PATH, &[("name", name)]).await?;
        debug!("Artist search '{name}' returned {}", response.artists.len());
        Ok(response.artists)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::{credentials::MemoryCredentialStore, transport::fake::FakeTransport};

    fn create_test_service() -> (Arc<FakeTransport>, MusicService) {
        let transport = Arc::new(FakeTransport::new());
        let api = ApiClient::new(
            "http://localhost/api",
            transport.clone(),
            Arc::new(MemoryCredentialStore::new()),
        );
        (transport, MusicService::new(api))
    }

    #[tokio::test]
    async fn test_search_sends_name_and_returns_artists() {
        let (transport, music) = create_test_service();
        let artists = json!([
            {
                "id": "1",
                "name": "Daft Punk",
                "images": [],
                "genres": ["french house"],
                "followers": 100,
                "popularity": 80,
                "spotifyUrl": "https://open.spotify.com/artist/1"
            },
            {
                "id": "2",
                "name": "Daft Punk Tribute",
                "images": [{"url": "https://img/2", "height": 64, "width": 64}],
                "genres": [],
                "followers": 3,
                "popularity": 1,
                "spotifyUrl": "https://open.spotify.com/artist/2"
            }
        ]);
        transport.reply(Method::GET, ARTISTS_PATH, 200, json!({"artists": artists}));

        let found = music.search_artists("Daft Punk").await.unwrap();

        assert_eq!(serde_json::to_value(&found).unwrap(), artists);
        let sent = &transport.requests_to(ARTISTS_PATH)[0];
        assert_eq!(sent.method, Method::GET);
        assert_eq!(sent.query_param("name"), Some("Daft Punk"));
        assert_eq!(sent.body, None);
    }

    #[tokio::test]
    async fn test_search_keeps_artists_as_sent() {
        let (transport, music) = create_test_service();
        let artists = json!([{
            "id": "1",
            "name": "Daft Punk",
            "images": [{"url": "https://img/1", "height": null, "width": null}],
            "genres": [],
            "uri": "spotify:artist:1",
            "external": {"mbid": "056e4f3e"}
        }]);
        transport.reply(Method::GET, ARTISTS_PATH, 200, json!({"artists": artists}));

        let found = music.search_artists("Daft Punk").await.unwrap();

        assert_eq!(found[0].images[0].height, None);
        assert_eq!(found[0].extra["uri"], "spotify:artist:1");
        assert_eq!(serde_json::to_value(&found).unwrap(), artists);
    }

    #[tokio::test]
    async fn test_search_with_no_matches() {
        let (transport, music) = create_test_service();
        transport.reply(Method::GET, ARTISTS_PATH, 200, json!({"artists": []}));
        assert!(music.search_artists("zzz").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_with_missing_field() {
        let (transport, music) = create_test_service();
        transport.reply(Method::GET, ARTISTS_PATH, 200, json!({}));
        assert!(music.search_artists("zzz").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_with_null_field() {
        let (transport, music) = create_test_service();
        transport.reply(Method::GET, ARTISTS_PATH, 200, json!({"artists": null}));
        assert!(music.search_artists("zzz").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_propagates_server_error() {
        let (transport, music) = create_test_service();
        transport.reply(Method::GET, ARTISTS_PATH, 502, json!({"message": "upstream"}));
        let err = music.search_artists("Daft Punk").await.unwrap_err();
        assert_eq!(err.status(), Some(502));
    }
}
