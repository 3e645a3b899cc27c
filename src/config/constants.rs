// Pin Layout Constants
// Radius of the collision-spread circle in decimal degrees (~90m at London's
// latitude). A visual tuning value, not a geodesic distance.
pub const PIN_OFFSET_RADIUS: f64 = 0.0008;

// Geographic Bounds
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

// Default map viewport (central London)
pub const LONDON_CENTER_LAT: f64 = 51.5074;
pub const LONDON_CENTER_LON: f64 = -0.1276;
pub const DEFAULT_MAP_ZOOM: f64 = 11.0;

// Difficulty Scale
pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;

// Duration Bucket Cutoffs (minutes)
pub const SHORT_SESSION_MAX_MINUTES: u32 = 60;
pub const STANDARD_SESSION_MAX_MINUTES: u32 = 90;

// Map search defaults
pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 10.0;
pub const DEFAULT_PAGE_SIZE: u32 = 20;

// API Defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_CURRENCY: &str = "GBP";

// Difficulty palette tokens (shared with the map pins and filter chips)
pub const EASY_COLOR: &str = "#84a98c";
pub const MEDIUM_COLOR: &str = "#d4a373";
pub const HARD_COLOR: &str = "#c1666b";
pub const EXPERT_COLOR: &str = "#6b4e71";

// Session token prefix for view tracking
pub const SESSION_TOKEN_PREFIX: &str = "session";
pub const SESSION_TOKEN_SUFFIX_LEN: usize = 9;
