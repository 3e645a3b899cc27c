//! Tests for the map pin layout resolver: unplottable entities are dropped,
//! exact coordinate collisions are spread on a fixed-radius circle, and
//! already-distinct positions pass through untouched.

mod common;

use common::plotted;
use roomscout::config::constants::PIN_OFFSET_RADIUS;
use roomscout::core::pin_layout::resolve_pins;
use roomscout::data::geo::GeoPoint;
use roomscout::models::room::RoomSummary;

const EPS: f64 = 1e-12;

#[test]
fn drops_exactly_the_unplottable_entities() {
    let rooms = vec![
        plotted(1, 51.5, -0.1, None),
        // zero latitude reads as missing under the usability policy
        plotted(2, 0.0, -0.1, None),
        plotted(3, 51.6, 0.0, None),
        plotted(4, f64::NAN, -0.1, None),
        plotted(5, 51.52, -0.12, None),
        RoomSummary {
            latitude: None,
            ..plotted(6, 51.53, -0.13, None)
        },
    ];

    let pins = resolve_pins(&rooms);
    let ids: Vec<i64> = pins.iter().map(|p| p.id()).collect();
    assert_eq!(ids, vec![1, 5]);
}

#[test]
fn two_way_collision_spreads_at_angles_zero_and_pi() {
    let rooms = vec![
        plotted(1, 51.5, -0.1, Some(3)),
        plotted(2, 51.5, -0.1, Some(4)),
    ];

    let pins = resolve_pins(&rooms);
    assert_eq!(pins.len(), 2);
    assert_eq!(pins[0].id(), 1);
    assert_eq!(pins[1].id(), 2);

    // angle 0: cos=1, sin=0 -> latitude pushed north, longitude unchanged
    assert!((pins[0].position.latitude - (51.5 + PIN_OFFSET_RADIUS)).abs() < EPS);
    assert!((pins[0].position.longitude - (-0.1)).abs() < EPS);

    // angle pi: cos=-1 -> latitude pushed south by the same radius
    assert!((pins[1].position.latitude - (51.5 - PIN_OFFSET_RADIUS)).abs() < EPS);
    assert!((pins[1].position.longitude - (-0.1)).abs() < EPS);

    assert!(pins[0].position.distance_to(&pins[1].position) > 0.0);
}

#[test]
fn collision_group_positions_are_pairwise_distinct_and_centered() {
    let n: i64 = 5;
    let rooms: Vec<RoomSummary> = (0..n).map(|i| plotted(i, 51.5074, -0.1276, None)).collect();

    let pins = resolve_pins(&rooms);
    assert_eq!(pins.len(), n as usize);

    for a in 0..pins.len() {
        for b in (a + 1)..pins.len() {
            assert!(
                pins[a].position.distance_to(&pins[b].position) > 0.0,
                "pins {} and {} share a position",
                a,
                b
            );
        }
    }

    // symmetric angles mean the centroid stays on the original point
    let mean_lat: f64 = pins.iter().map(|p| p.position.latitude).sum::<f64>() / n as f64;
    let mean_lon: f64 = pins.iter().map(|p| p.position.longitude).sum::<f64>() / n as f64;
    assert!((mean_lat - 51.5074).abs() < 1e-9);
    assert!((mean_lon - (-0.1276)).abs() < 1e-9);

    // every spread point sits exactly one radius from the shared coordinate
    let origin = GeoPoint::new(51.5074, -0.1276);
    for pin in &pins {
        assert!((pin.position.distance_to(&origin) - PIN_OFFSET_RADIUS).abs() < EPS);
    }
}

#[test]
fn distinct_coordinates_pass_through_unchanged_and_idempotently() {
    let rooms = vec![
        plotted(1, 51.50, -0.10, None),
        plotted(2, 51.51, -0.11, None),
        plotted(3, 51.52, -0.12, None),
    ];

    let first = resolve_pins(&rooms);
    assert_eq!(first.len(), 3);
    for (pin, room) in first.iter().zip(&rooms) {
        assert_eq!(pin.position.latitude, room.latitude.unwrap());
        assert_eq!(pin.position.longitude, room.longitude.unwrap());
    }

    let second = resolve_pins(&rooms);
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.position, b.position);
        assert_eq!(a.id(), b.id());
    }
}

#[test]
fn output_follows_group_first_encounter_order() {
    let rooms = vec![
        plotted(1, 51.5, -0.1, None),
        plotted(2, 51.6, -0.2, None),
        plotted(3, 51.5, -0.1, None),
    ];

    let pins = resolve_pins(&rooms);
    // the shared-coordinate group is emitted first, then the singleton
    let ids: Vec<i64> = pins.iter().map(|p| p.id()).collect();
    assert_eq!(ids, vec![1, 3, 2]);
}

#[test]
fn sub_epsilon_coordinate_differences_are_separate_groups() {
    let lat: f64 = 51.5;
    let nudged = f64::from_bits(lat.to_bits() + 1);
    let rooms = vec![plotted(1, lat, -0.1, None), plotted(2, nudged, -0.1, None)];

    let pins = resolve_pins(&rooms);
    assert_eq!(pins.len(), 2);
    // neither is offset, even though they are visually indistinguishable
    assert_eq!(pins[0].position.latitude, lat);
    assert_eq!(pins[1].position.latitude, nudged);
}
