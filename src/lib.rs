// Module declarations for the roomscout catalog core

// Configuration modules
pub mod config {
    pub mod constants;
    pub mod const_funcs;
}

// Model definitions
pub mod models {
    pub mod room;
}

// Data loaders and collaborator clients
pub mod data {
    pub mod geo;
    pub mod rooms_loader;
    pub mod api_client;
    pub mod session;
}

// Core catalog logic
pub mod core {
    pub mod pin_layout;
    pub mod filter;
}

// Utility functions
pub mod utils {
    pub mod logging;
    pub mod csv_export;
}

// CLI interface
pub mod cli {
    pub mod cli;
}

// Re-export commonly used items
pub use crate::core::filter::{RoomFilter, RoomPredicate, DifficultyBucket, DurationBucket};
pub use crate::core::pin_layout::{resolve_pins, ResolvedPin};
pub use crate::data::geo::{GeoPoint, GeoBounds, Plottable};
pub use crate::models::room::RoomSummary;
