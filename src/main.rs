use anyhow::Result;
use clap::Parser;

use roomscout::cli::cli::Args;
use roomscout::config::const_funcs::{difficulty_color, format_difficulty, format_price};
use roomscout::config::constants::DEFAULT_API_BASE_URL;
use roomscout::core::filter::{distinct_themes, RoomFilter, RoomPredicate};
use roomscout::core::pin_layout::resolve_pins;
use roomscout::data::api_client::ApiClient;
use roomscout::data::geo::{GeoBounds, Plottable};
use roomscout::data::rooms_loader;
use roomscout::models::room::RoomSummary;
use roomscout::utils::csv_export::CsvExporter;
use roomscout::utils::logging::{self, DataLoadType, OperationCategory};

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_logging(args.enable_timing());

    let rooms = load_catalog(&args);
    let filter = build_filter(&args);

    let visible = {
        let _timing = logging::start_timing("apply_filter", OperationCategory::FilterEval);
        filter.apply(&rooms)
    };

    println!(
        "{} of {} rooms match{}",
        visible.len(),
        rooms.len(),
        if filter.is_empty() { " (no filters)" } else { "" }
    );

    for room in &visible {
        let venue = room.venue_name.as_deref().unwrap_or("Unknown venue");
        let city = room.city.as_deref().unwrap_or("");
        println!(
            "  [{}] {} - {} {} | {} | {} ({})",
            room.id,
            room.name,
            venue,
            if city.is_empty() {
                String::new()
            } else {
                format!("({})", city)
            },
            format_price(room),
            format_difficulty(room.difficulty_rating()),
            difficulty_color(room.difficulty_rating()),
        );
    }

    if args.themes() {
        let mut themes = distinct_themes(&rooms);
        themes.sort();
        println!("Themes: {}", themes.join(", "));
    }

    let pins = if args.pins() {
        let _timing = logging::start_timing("resolve_pins", OperationCategory::PinLayout);
        let pins = resolve_pins(&visible);
        let moved = pins
            .iter()
            .filter(|pin| pin.entity.plot_position() != Some(pin.position))
            .count();
        println!(
            "{} pins plotted ({} unplottable, {} spread from shared coordinates)",
            pins.len(),
            visible.len() - pins.len(),
            moved
        );
        if let Some(bounds) = GeoBounds::from_points(pins.iter().map(|p| p.position)) {
            let center = bounds.center();
            println!(
                "Viewport center: {:.4}, {:.4}",
                center.latitude, center.longitude
            );
        }
        Some(pins)
    } else {
        None
    };

    if let Some(dir) = args.export_dir() {
        let exporter = CsvExporter::new(dir).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        exporter
            .export_rooms(&visible)
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;
        if let Some(pins) = &pins {
            exporter
                .export_pins(pins)
                .map_err(|e| anyhow::anyhow!(e.to_string()))?;
        }
        println!("Exported CSV to {}", exporter.output_dir().display());
    }

    logging::print_timing_report();

    Ok(())
}

/// Load the catalog from a file or the API, degrading to an empty catalog
/// with a printed error rather than aborting; a discovery session with no
/// data still renders.
fn load_catalog(args: &Args) -> Vec<RoomSummary> {
    if let Some(path) = args.input() {
        let _timing = logging::start_timing(
            "load_catalog_file",
            OperationCategory::DataLoad {
                subcategory: DataLoadType::CatalogFile,
            },
        );
        match rooms_loader::load_rooms(path) {
            Ok(rooms) => {
                println!("Loaded {} rooms from {}", rooms.len(), path);
                rooms
            }
            Err(e) => {
                eprintln!("Failed to load catalog from {}: {}", path, e);
                Vec::new()
            }
        }
    } else {
        let base_url = args.api_url().unwrap_or(DEFAULT_API_BASE_URL);
        let _timing = logging::start_timing(
            "fetch_catalog",
            OperationCategory::DataLoad {
                subcategory: DataLoadType::ApiFetch,
            },
        );
        let client = ApiClient::new(base_url);
        match client.fetch_rooms() {
            Ok(rooms) => {
                println!("Fetched {} rooms from {}", rooms.len(), base_url);
                rooms
            }
            Err(e) => {
                eprintln!("Failed to fetch rooms from {}: {}", base_url, e);
                Vec::new()
            }
        }
    }
}

fn build_filter(args: &Args) -> RoomFilter {
    let mut filter = RoomFilter::new();
    if let Some(bucket) = args.difficulty() {
        filter = filter.with(RoomPredicate::DifficultyBucket(bucket));
    }
    if let Some(rating) = args.difficulty_exact() {
        filter = filter.with(RoomPredicate::DifficultyExact(rating));
    }
    if let Some(theme) = args.theme() {
        filter = filter.with(RoomPredicate::ThemeContains(theme.to_string()));
    }
    if let Some(theme) = args.theme_exact() {
        filter = filter.with(RoomPredicate::ThemeExact(theme.to_string()));
    }
    if let Some(bucket) = args.duration() {
        filter = filter.with(RoomPredicate::DurationBucket(bucket));
    }
    filter
}
