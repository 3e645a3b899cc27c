use crate::config::constants::*;
use crate::models::room::RoomSummary;

/// Coordinate usability policy shared by the pin layout and the map views.
///
/// A coordinate of exactly 0.0 is treated as missing, the same as NaN. This
/// mirrors the upstream listing data, where 0.0 marks venues the scraper could
/// not geocode. Equatorial/prime-meridian venues would be dropped too; kept
/// until product says otherwise.
pub fn is_usable_coordinate(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

pub fn currency_symbol(currency: Option<&str>) -> &'static str {
    match currency {
        Some("GBP") | None => "\u{a3}",
        // The catalog is London-only today; everything renders as sterling.
        Some(_) => "\u{a3}",
    }
}

/// Price line for a room card or map pin popup, from whichever pricing
/// fields the listing carries.
pub fn format_price(room: &RoomSummary) -> String {
    let symbol = currency_symbol(room.currency.as_deref());

    match (room.price_min, room.price_max) {
        (Some(min), Some(max)) if min == max => format!("{}{:.0}", symbol, min),
        (Some(min), Some(max)) => format!("{}{:.0}\u{2013}{}{:.0}", symbol, min, symbol, max),
        (Some(min), None) => format!("From {}{:.0}", symbol, min),
        (None, Some(max)) => format!("Up to {}{:.0}", symbol, max),
        (None, None) => match room.price {
            Some(price) => format!("{}{:.0}", symbol, price),
            None => "Price on request".to_string(),
        },
    }
}

pub fn format_difficulty(difficulty: Option<u8>) -> String {
    const LEVELS: [&str; 5] = ["Easy", "Moderate", "Challenging", "Hard", "Expert"];

    match difficulty {
        None => "Unknown".to_string(),
        Some(d) if (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&d) => {
            LEVELS[(d - 1) as usize].to_string()
        }
        Some(d) => format!("{}/5", d),
    }
}

/// Palette token for a difficulty rating. Missing ratings render in the
/// medium tone rather than a separate "unknown" color.
pub fn difficulty_color(difficulty: Option<u8>) -> &'static str {
    match difficulty {
        Some(d) if d >= 1 && d <= 2 => EASY_COLOR,
        Some(4) => HARD_COLOR,
        Some(d) if d >= 5 => EXPERT_COLOR,
        _ => MEDIUM_COLOR,
    }
}

pub fn format_player_range(min: Option<u32>, max: Option<u32>) -> String {
    match (min, max) {
        (Some(a), Some(b)) if a == b => format!("{} players", a),
        (Some(a), Some(b)) => format!("{}-{} players", a, b),
        (Some(a), None) => format!("{}+ players", a),
        (None, Some(b)) => format!("Up to {} players", b),
        (None, None) => "Any group size".to_string(),
    }
}

pub fn format_distance(km: Option<f64>) -> String {
    match km {
        None => String::new(),
        Some(km) if km < 1.0 => format!("{}m away", (km * 1000.0).round() as i64),
        Some(km) => format!("{:.1}km away", km),
    }
}
