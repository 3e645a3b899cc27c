//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use roomscout::models::room::RoomSummary;

pub fn room(id: i64, name: &str) -> RoomSummary {
    RoomSummary {
        id,
        name: name.to_string(),
        ..RoomSummary::default()
    }
}

pub fn plotted(id: i64, latitude: f64, longitude: f64, difficulty: Option<u8>) -> RoomSummary {
    RoomSummary {
        latitude: Some(latitude),
        longitude: Some(longitude),
        difficulty,
        ..room(id, &format!("Room {}", id))
    }
}

pub fn themed(id: i64, theme: Option<&str>, difficulty: Option<u8>) -> RoomSummary {
    RoomSummary {
        theme: theme.map(str::to_string),
        difficulty,
        ..room(id, &format!("Room {}", id))
    }
}

pub fn timed(id: i64, duration_minutes: Option<u32>) -> RoomSummary {
    RoomSummary {
        duration_minutes,
        ..room(id, &format!("Room {}", id))
    }
}
