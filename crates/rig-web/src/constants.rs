// DOM hooks and Canvas2D styling for the journey page

// Element ids expected in index.html
pub const CANVAS_ID: &str = "journey-canvas";
pub const OVERLAY_ID: &str = "journey-overlay";
pub const PROGRESS_FILL_ID: &str = "journey-progress-fill";
pub const SECTION_LIST_ID: &str = "journey-sections";

// Class toggled on the highlighted section
pub const ACTIVE_CLASS: &str = "active";

// Background gradient, top to bottom
pub const BACKGROUND_TOP: &str = "#0b1020";
pub const BACKGROUND_BOTTOM: &str = "#1a0f2e";

// Chamber markers (world units / pixels)
pub const CHAMBER_RADIUS: f32 = 1.1;
pub const CHAMBER_RING_WIDTH_PX: f64 = 3.0;
pub const CHAMBER_MIN_RADIUS_PX: f64 = 2.0;
pub const CHAMBER_INACTIVE_ALPHA: f64 = 0.45;
pub const CHAMBER_COLORS: [&str; 5] = [
    "#5ec8ff", // home
    "#ffd35e", // features
    "#8c7bff", // dashboard
    "#ff7bb0", // shop
    "#7bffb5", // contact
];

// Glow disc
pub const GLOW_RADIUS: f32 = 2.4;
pub const GLOW_COLOR: &str = "#9f7bff";
