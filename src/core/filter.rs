use std::fmt;
use std::str::FromStr;

use crate::config::constants::{SHORT_SESSION_MAX_MINUTES, STANDARD_SESSION_MAX_MINUTES};
use crate::models::room::RoomSummary;

/// Coarse difficulty tier over the raw 1-5 rating. The browse page filters
/// on these; "All" is the absence of a predicate rather than a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyBucket {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl DifficultyBucket {
    /// Bucket for a filter index as the browse UI numbers them (1-4).
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(DifficultyBucket::Easy),
            2 => Some(DifficultyBucket::Medium),
            3 => Some(DifficultyBucket::Hard),
            4 => Some(DifficultyBucket::Expert),
            _ => None,
        }
    }

    pub fn matches_rating(&self, rating: u8) -> bool {
        match self {
            DifficultyBucket::Easy => rating == 1 || rating == 2,
            DifficultyBucket::Medium => rating == 3,
            DifficultyBucket::Hard => rating == 4,
            DifficultyBucket::Expert => rating == 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DifficultyBucket::Easy => "Easy",
            DifficultyBucket::Medium => "Medium",
            DifficultyBucket::Hard => "Hard",
            DifficultyBucket::Expert => "Expert",
        }
    }
}

impl FromStr for DifficultyBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(DifficultyBucket::Easy),
            "medium" => Ok(DifficultyBucket::Medium),
            "hard" => Ok(DifficultyBucket::Hard),
            "expert" => Ok(DifficultyBucket::Expert),
            other => Err(format!("unknown difficulty bucket: {}", other)),
        }
    }
}

impl fmt::Display for DifficultyBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse session-length tier. Rooms with no recorded duration compare as 0
/// minutes and therefore never land in any bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationBucket {
    Under60,
    Between60And90,
    Over90,
}

impl DurationBucket {
    pub fn matches_minutes(&self, minutes: u32) -> bool {
        match self {
            DurationBucket::Under60 => minutes > 0 && minutes < SHORT_SESSION_MAX_MINUTES,
            DurationBucket::Between60And90 => {
                minutes >= SHORT_SESSION_MAX_MINUTES && minutes <= STANDARD_SESSION_MAX_MINUTES
            }
            DurationBucket::Over90 => minutes > STANDARD_SESSION_MAX_MINUTES,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DurationBucket::Under60 => "Under 60 min",
            DurationBucket::Between60And90 => "60-90 min",
            DurationBucket::Over90 => "90+ min",
        }
    }
}

impl FromStr for DurationBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "under60" => Ok(DurationBucket::Under60),
            "60-90" => Ok(DurationBucket::Between60And90),
            "90plus" => Ok(DurationBucket::Over90),
            other => Err(format!("unknown duration bucket: {}", other)),
        }
    }
}

impl fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One independent filter criterion. The browse page composes bucketed
/// predicates, the map sidebar composes exact-match ones; both dialects are
/// just different predicate lists over the same engine.
///
/// Every predicate fails closed: a room missing the field under test does
/// not match, and nothing here ever errors.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomPredicate {
    DifficultyBucket(DifficultyBucket),
    DifficultyExact(u8),
    ThemeContains(String),
    ThemeExact(String),
    DurationBucket(DurationBucket),
}

impl RoomPredicate {
    pub fn matches(&self, room: &RoomSummary) -> bool {
        match self {
            RoomPredicate::DifficultyBucket(bucket) => room
                .difficulty_rating()
                .map(|rating| bucket.matches_rating(rating))
                .unwrap_or(false),
            RoomPredicate::DifficultyExact(rating) => {
                room.difficulty_rating() == Some(*rating)
            }
            RoomPredicate::ThemeContains(needle) => room
                .theme
                .as_deref()
                .map(|theme| theme.to_lowercase().contains(&needle.to_lowercase()))
                .unwrap_or(false),
            // Exact match, no normalization: the sidebar chips are built from
            // the catalog's own theme strings.
            RoomPredicate::ThemeExact(name) => room.theme.as_deref() == Some(name.as_str()),
            RoomPredicate::DurationBucket(bucket) => {
                bucket.matches_minutes(room.duration_or_zero())
            }
        }
    }
}

/// AND-composition of predicates. An empty filter is the identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomFilter {
    predicates: Vec<RoomPredicate>,
}

impl RoomFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, predicate: RoomPredicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Browse-page filter state: difficulty bucket index (0 = all), theme
    /// substring (empty = all), duration bucket (None = all).
    pub fn browse(
        difficulty_index: u8,
        theme_substring: &str,
        duration: Option<DurationBucket>,
    ) -> Self {
        let mut filter = Self::new();
        if let Some(bucket) = DifficultyBucket::from_index(difficulty_index) {
            filter.predicates.push(RoomPredicate::DifficultyBucket(bucket));
        }
        if !theme_substring.is_empty() {
            filter
                .predicates
                .push(RoomPredicate::ThemeContains(theme_substring.to_string()));
        }
        if let Some(bucket) = duration {
            filter.predicates.push(RoomPredicate::DurationBucket(bucket));
        }
        filter
    }

    /// Map-sidebar filter state: exact theme chip and exact difficulty
    /// rating, each optional.
    pub fn map_sidebar(theme: Option<&str>, difficulty: Option<u8>) -> Self {
        let mut filter = Self::new();
        if let Some(theme) = theme {
            if !theme.is_empty() {
                filter.predicates.push(RoomPredicate::ThemeExact(theme.to_string()));
            }
        }
        if let Some(rating) = difficulty {
            filter.predicates.push(RoomPredicate::DifficultyExact(rating));
        }
        filter
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn predicates(&self) -> &[RoomPredicate] {
        &self.predicates
    }

    pub fn matches(&self, room: &RoomSummary) -> bool {
        self.predicates.iter().all(|p| p.matches(room))
    }

    /// The visible subset for this filter state. Pure: input order is
    /// preserved and a fresh vector is returned.
    pub fn apply(&self, rooms: &[RoomSummary]) -> Vec<RoomSummary> {
        rooms
            .iter()
            .filter(|room| self.matches(room))
            .cloned()
            .collect()
    }
}

/// Distinct non-empty theme values in first-appearance order, for populating
/// a theme picker. Callers sort if they want sorted chips.
pub fn distinct_themes(rooms: &[RoomSummary]) -> Vec<String> {
    let mut themes: Vec<String> = Vec::new();
    for room in rooms {
        if let Some(theme) = room.theme.as_deref() {
            if !theme.is_empty() && !themes.iter().any(|t| t == theme) {
                themes.push(theme.to_string());
            }
        }
    }
    themes
}
