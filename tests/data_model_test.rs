//! Tests for the API data model, the catalog file loader, and the small
//! presentation helpers the views share.

mod common;

use std::io::Write;

use roomscout::config::const_funcs::{
    difficulty_color, format_difficulty, format_distance, format_player_range, format_price,
    is_usable_coordinate,
};
use roomscout::config::constants::{EXPERT_COLOR, HARD_COLOR, MEDIUM_COLOR};
use roomscout::data::api_client::MapQuery;
use roomscout::data::geo::{GeoBounds, GeoPoint, Plottable};
use roomscout::data::rooms_loader::{load_rooms, RoomsLoadError};
use roomscout::data::session::{FixedSession, GeneratedSession, SessionProvider};
use roomscout::models::room::{RoomDetail, RoomSummary};

fn write_temp_catalog(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("roomscout_test_{}_{}", std::process::id(), name));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn room_summary_parses_a_sparse_api_record() {
    let json = r#"{"id": 7, "name": "The Vault", "theme": null, "difficulty": 4}"#;
    let room: RoomSummary = serde_json::from_str(json).unwrap();

    assert_eq!(room.id, 7);
    assert_eq!(room.name, "The Vault");
    assert_eq!(room.theme, None);
    assert_eq!(room.difficulty, Some(4));
    assert_eq!(room.duration_minutes, None);
    assert_eq!(room.latitude, None);
}

#[test]
fn room_detail_parses_nested_venue() {
    let json = r#"{
        "id": 3,
        "name": "Chamber of Echoes",
        "difficulty": 5,
        "duration_minutes": 75,
        "price_min": 25.0,
        "price_max": 35.0,
        "currency": "GBP",
        "image_urls": ["a.jpg", "b.jpg"],
        "venue": {"name": "Dark Door", "city": "London", "address": null}
    }"#;
    let detail: RoomDetail = serde_json::from_str(json).unwrap();

    assert_eq!(detail.image_urls.len(), 2);
    let venue = detail.venue.unwrap();
    assert_eq!(venue.name.as_deref(), Some("Dark Door"));
    assert_eq!(venue.city.as_deref(), Some("London"));
    assert_eq!(venue.address, None);
}

#[test]
fn loader_accepts_wrapped_and_bare_catalog_shapes() {
    let wrapped = write_temp_catalog(
        "wrapped.json",
        r#"{"rooms": [{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]}"#,
    );
    let rooms = load_rooms(wrapped.to_str().unwrap()).unwrap();
    assert_eq!(rooms.len(), 2);

    let bare = write_temp_catalog("bare.json", r#"[{"id": 3, "name": "C"}]"#);
    let rooms = load_rooms(bare.to_str().unwrap()).unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, 3);

    std::fs::remove_file(wrapped).ok();
    std::fs::remove_file(bare).ok();
}

#[test]
fn loader_skips_malformed_records_and_rejects_wrong_shapes() {
    let mixed = write_temp_catalog(
        "mixed.json",
        r#"{"rooms": [{"id": 1, "name": "Good"}, "not a room", {"id": "bad id", "name": "X"}]}"#,
    );
    let rooms = load_rooms(mixed.to_str().unwrap()).unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].name, "Good");

    let scalar = write_temp_catalog("scalar.json", r#""just a string""#);
    match load_rooms(scalar.to_str().unwrap()) {
        Err(RoomsLoadError::UnexpectedShape(_)) => {}
        other => panic!("expected UnexpectedShape, got {:?}", other.map(|r| r.len())),
    }

    match load_rooms("/nonexistent/roomscout_catalog.json") {
        Err(RoomsLoadError::IoError(_)) => {}
        other => panic!("expected IoError, got {:?}", other.map(|r| r.len())),
    }

    std::fs::remove_file(mixed).ok();
    std::fs::remove_file(scalar).ok();
}

#[test]
fn plot_position_applies_the_falsy_coordinate_policy() {
    assert!(is_usable_coordinate(51.5));
    assert!(is_usable_coordinate(-0.1));
    assert!(!is_usable_coordinate(0.0));
    assert!(!is_usable_coordinate(f64::NAN));

    let mut room = common::plotted(1, 51.5, -0.1, None);
    assert_eq!(room.plot_position(), Some(GeoPoint::new(51.5, -0.1)));

    room.longitude = Some(0.0);
    assert_eq!(room.plot_position(), None);

    room.longitude = None;
    assert_eq!(room.plot_position(), None);
}

#[test]
fn map_query_omits_inactive_filters() {
    let query = MapQuery::default();
    let pairs = query.to_query_pairs();
    let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec!["lat", "lng", "radius", "page", "page_size"]);

    let query = MapQuery {
        theme: Some("Horror".to_string()),
        min_difficulty: Some(3),
        ..MapQuery::default()
    };
    let pairs = query.to_query_pairs();
    assert!(pairs.contains(&("theme", "Horror".to_string())));
    assert!(pairs.contains(&("min_difficulty", "3".to_string())));
    assert!(!pairs.iter().any(|(k, _)| *k == "max_price"));
}

#[test]
fn price_formatting_covers_every_pricing_shape() {
    let mut room = common::room(1, "Priced");

    assert_eq!(format_price(&room), "Price on request");

    room.price = Some(28.0);
    assert_eq!(format_price(&room), "\u{a3}28");

    room.price_min = Some(20.0);
    assert_eq!(format_price(&room), "From \u{a3}20");

    room.price_max = Some(30.0);
    assert_eq!(format_price(&room), "\u{a3}20\u{2013}\u{a3}30");

    room.price_min = Some(30.0);
    assert_eq!(format_price(&room), "\u{a3}30");

    room.price_min = None;
    assert_eq!(format_price(&room), "Up to \u{a3}30");
}

#[test]
fn difficulty_and_distance_helpers() {
    assert_eq!(format_difficulty(None), "Unknown");
    assert_eq!(format_difficulty(Some(1)), "Easy");
    assert_eq!(format_difficulty(Some(5)), "Expert");
    assert_eq!(format_difficulty(Some(9)), "9/5");

    assert_eq!(difficulty_color(Some(4)), HARD_COLOR);
    assert_eq!(difficulty_color(Some(5)), EXPERT_COLOR);
    assert_eq!(difficulty_color(None), MEDIUM_COLOR);

    assert_eq!(format_distance(None), "");
    assert_eq!(format_distance(Some(0.4)), "400m away");
    assert_eq!(format_distance(Some(2.5)), "2.5km away");

    assert_eq!(format_player_range(Some(2), Some(6)), "2-6 players");
    assert_eq!(format_player_range(Some(4), Some(4)), "4 players");
    assert_eq!(format_player_range(None, None), "Any group size");
}

#[test]
fn geo_bounds_frame_a_pin_set() {
    let points = vec![
        GeoPoint::new(51.50, -0.10),
        GeoPoint::new(51.54, -0.20),
        GeoPoint::new(51.52, -0.05),
    ];

    let bounds = GeoBounds::from_points(points).unwrap();
    assert_eq!(bounds.min_latitude, 51.50);
    assert_eq!(bounds.max_latitude, 51.54);
    assert_eq!(bounds.min_longitude, -0.20);
    assert_eq!(bounds.max_longitude, -0.05);

    let center = bounds.center();
    assert!((center.latitude - 51.52).abs() < 1e-12);
    assert!((center.longitude - (-0.125)).abs() < 1e-12);

    assert!(GeoBounds::from_points(Vec::new()).is_none());
}

#[test]
fn session_providers_supply_stable_tokens() {
    let generated = GeneratedSession::new();
    let token = generated.session_id();
    assert!(token.starts_with("session_"));
    // stable across calls within one session
    assert_eq!(token, generated.session_id());

    let fixed = FixedSession::new("session_123_abcdef");
    assert_eq!(fixed.session_id(), "session_123_abcdef");
}
