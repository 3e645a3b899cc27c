use std::error::Error;
use std::path::{Path, PathBuf};

use chrono::Local;
use csv::Writer;
use tracing::info;

use crate::core::pin_layout::ResolvedPin;
use crate::models::room::RoomSummary;
use crate::utils::logging::{self, OperationCategory};

/// Writes room catalogs and resolved pin sets to timestamped CSV files,
/// one run per directory.
pub struct CsvExporter {
    output_dir: PathBuf,
    timestamp: String,
}

impl CsvExporter {
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let full_path = Path::new(output_dir.as_ref()).join(&timestamp);
        std::fs::create_dir_all(&full_path)?;

        Ok(Self {
            output_dir: full_path,
            timestamp,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write the (typically filtered) room list to `rooms_<timestamp>.csv`.
    pub fn export_rooms(&self, rooms: &[RoomSummary]) -> Result<PathBuf, Box<dyn Error>> {
        let _timing = logging::start_timing("export_rooms", OperationCategory::Export);

        let path = self
            .output_dir
            .join(format!("rooms_{}.csv", self.timestamp));
        let mut writer = Writer::from_path(&path)?;

        writer.write_record([
            "id",
            "name",
            "theme",
            "difficulty",
            "duration_minutes",
            "price_min",
            "price_max",
            "price",
            "currency",
            "venue_name",
            "city",
            "latitude",
            "longitude",
        ])?;

        for room in rooms {
            writer.write_record([
                room.id.to_string(),
                room.name.clone(),
                room.theme.clone().unwrap_or_default(),
                optional_field(room.difficulty),
                optional_field(room.duration_minutes),
                optional_field(room.price_min),
                optional_field(room.price_max),
                optional_field(room.price),
                room.currency.clone().unwrap_or_default(),
                room.venue_name.clone().unwrap_or_default(),
                room.city.clone().unwrap_or_default(),
                optional_field(room.latitude),
                optional_field(room.longitude),
            ])?;
        }

        writer.flush()?;
        info!("Exported {} rooms to {}", rooms.len(), path.display());
        Ok(path)
    }

    /// Write resolved pin positions to `pins_<timestamp>.csv`, original
    /// coordinates alongside the render position so offsets are auditable.
    pub fn export_pins(
        &self,
        pins: &[ResolvedPin<'_, RoomSummary>],
    ) -> Result<PathBuf, Box<dyn Error>> {
        let _timing = logging::start_timing("export_pins", OperationCategory::Export);

        let path = self.output_dir.join(format!("pins_{}.csv", self.timestamp));
        let mut writer = Writer::from_path(&path)?;

        writer.write_record([
            "id",
            "name",
            "source_latitude",
            "source_longitude",
            "pin_latitude",
            "pin_longitude",
        ])?;

        for pin in pins {
            writer.write_record([
                pin.entity.id.to_string(),
                pin.entity.name.clone(),
                optional_field(pin.entity.latitude),
                optional_field(pin.entity.longitude),
                pin.position.latitude.to_string(),
                pin.position.longitude.to_string(),
            ])?;
        }

        writer.flush()?;
        info!("Exported {} pins to {}", pins.len(), path.display());
        Ok(path)
    }
}

fn optional_field<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
