use clap::Parser;

use crate::core::filter::{DifficultyBucket, DurationBucket};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(short, long, help = "Path to a room catalog JSON file")]
    input: Option<String>,

    #[arg(long, help = "Fetch the catalog from this API base URL instead of a file")]
    api_url: Option<String>,

    #[arg(short, long, help = "Difficulty bucket: easy, medium, hard or expert")]
    difficulty: Option<DifficultyBucket>,

    #[arg(long, help = "Exact difficulty rating 1-5 (map-sidebar dialect)")]
    difficulty_exact: Option<u8>,

    #[arg(short, long, help = "Case-insensitive theme substring")]
    theme: Option<String>,

    #[arg(long, help = "Exact theme name (map-sidebar dialect)")]
    theme_exact: Option<String>,

    #[arg(long, help = "Duration bucket: under60, 60-90 or 90plus")]
    duration: Option<DurationBucket>,

    #[arg(long, default_value_t = false, help = "Resolve map pin positions for the filtered set")]
    pins: bool,

    #[arg(long, default_value_t = false, help = "List the distinct themes in the catalog")]
    themes: bool,

    #[arg(short, long, help = "Export filtered rooms (and pins) as CSV into this directory")]
    export_dir: Option<String>,

    #[arg(long, default_value_t = false)]
    enable_timing: bool,
}

// Getter methods for all fields
impl Args {
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    pub fn difficulty(&self) -> Option<DifficultyBucket> {
        self.difficulty
    }

    pub fn difficulty_exact(&self) -> Option<u8> {
        self.difficulty_exact
    }

    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    pub fn theme_exact(&self) -> Option<&str> {
        self.theme_exact.as_deref()
    }

    pub fn duration(&self) -> Option<DurationBucket> {
        self.duration
    }

    pub fn pins(&self) -> bool {
        self.pins
    }

    pub fn themes(&self) -> bool {
        self.themes
    }

    pub fn export_dir(&self) -> Option<&str> {
        self.export_dir.as_deref()
    }

    pub fn enable_timing(&self) -> bool {
        self.enable_timing
    }
}
