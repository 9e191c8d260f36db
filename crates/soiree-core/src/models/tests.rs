#[cfg(test)]
mod model_tests {
    use jiff::civil::{date, time};
    use serde_json::json;

    use crate::models::{
        Artist, AuthResponse, DraftUpdate, DrinkRef, EnabledSteps, Location, User, WizardDraft,
    };

    fn create_test_artist() -> Artist {
        serde_json::from_value(json!({
            "id": "4tZwfgrHOc3mvqYlEYSvVi",
            "name": "Daft Punk",
            "images": [{"url": "https://i.scdn.co/image/a", "height": 640, "width": 640}],
            "genres": ["french house", "electro"],
            "followers": 9000000,
            "popularity": 78,
            "spotifyUrl": "https://open.spotify.com/artist/4tZwfgrHOc3mvqYlEYSvVi"
        }))
        .expect("Failed to parse artist")
    }

    #[test]
    fn test_default_draft_shape() {
        let draft = WizardDraft::default();

        assert_eq!(draft.name, "");
        assert_eq!(draft.date, None);
        assert_eq!(draft.time, None);
        assert_eq!(draft.location, None);
        assert_eq!(draft.location_description, None);
        assert!(draft.artists.is_empty());
        assert!(draft.drinks.is_empty());
        assert!(draft.food.is_empty());
        assert!(draft.is_private);
        assert_eq!(
            draft.enabled_steps,
            EnabledSteps {
                music: false,
                drinks_and_food: false
            }
        );
    }

    #[test]
    fn test_draft_serializes_every_key() {
        let value = serde_json::to_value(WizardDraft::default()).unwrap();

        assert_eq!(
            value,
            json!({
                "name": "",
                "date": null,
                "time": null,
                "location": null,
                "locationDescription": null,
                "artists": [],
                "drinks": [],
                "food": [],
                "isPrivate": true,
                "enabledSteps": {"music": false, "drinksAndFood": false}
            })
        );
    }

    #[test]
    fn test_draft_serializes_schedule_fields() {
        let mut draft = WizardDraft::default();
        DraftUpdate::new()
            .with_date(Some(date(2026, 10, 31)))
            .with_time(Some(time(20, 30, 0, 0)))
            .apply_to(&mut draft);

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["date"], "2026-10-31");
        assert_eq!(value["time"], "20:30:00");

        let back: WizardDraft = serde_json::from_value(value).unwrap();
        assert_eq!(back, draft);
    }

    #[test]
    fn test_artist_uses_camel_case_url() {
        let artist = create_test_artist();
        assert_eq!(artist.name, "Daft Punk");
        assert_eq!(artist.images[0].height, Some(640));
        assert_eq!(artist.genres, vec!["french house", "electro"]);

        let value = serde_json::to_value(&artist).unwrap();
        assert!(value.get("spotifyUrl").is_some());
        assert!(value.get("spotify_url").is_none());
    }

    #[test]
    fn test_update_distinguishes_missing_and_null() {
        let update: DraftUpdate = serde_json::from_value(json!({
            "date": null,
            "locationDescription": "Back entrance",
            "isPrivate": false
        }))
        .unwrap();

        assert_eq!(update.date, Some(None));
        assert_eq!(update.time, None);
        assert_eq!(update.location, None);
        assert_eq!(
            update.location_description,
            Some(Some("Back entrance".to_string()))
        );
        assert_eq!(update.is_private, Some(false));
        assert!(!update.is_empty());
    }

    #[test]
    fn test_empty_update_leaves_draft_alone() {
        let update: DraftUpdate = serde_json::from_str("{}").unwrap();
        assert!(update.is_empty());

        let mut draft = WizardDraft::default();
        draft.name = "Keep me".to_string();
        update.apply_to(&mut draft);
        assert_eq!(draft.name, "Keep me");
    }

    #[test]
    fn test_apply_replaces_collections_and_nested_objects() {
        let mut draft = WizardDraft::default();
        DraftUpdate::new()
            .with_location(Some(Location { lat: 1.0, lng: 2.0 }))
            .with_drinks(vec![DrinkRef {
                id: "d1".to_string(),
                name: "Mate".to_string(),
            }])
            .with_artists(vec![create_test_artist()])
            .apply_to(&mut draft);

        DraftUpdate::new()
            .with_location(Some(Location { lat: 3.0, lng: 0.0 }))
            .with_drinks(Vec::new())
            .apply_to(&mut draft);

        assert_eq!(draft.location, Some(Location { lat: 3.0, lng: 0.0 }));
        assert!(draft.drinks.is_empty());
        assert_eq!(draft.artists.len(), 1);
    }

    #[test]
    fn test_auth_response_without_token() {
        let response: AuthResponse =
            serde_json::from_value(json!({"user": {"id": 7, "email": "a@b.c"}})).unwrap();
        assert_eq!(response.token, None);
        let user = response.user.expect("user should be present");
        assert_eq!(user.id, json!(7));
        assert_eq!(user.display_name(), "a@b.c");
    }

    #[test]
    fn test_user_keeps_unknown_fields() {
        let raw = json!({"id": "u1", "name": "Ada", "avatar": "https://x/y.png"});
        let user: User = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(user.display_name(), "Ada");
        assert_eq!(user.extra.get("avatar"), Some(&json!("https://x/y.png")));
        assert_eq!(serde_json::to_value(&user).unwrap(), raw);
    }
}
