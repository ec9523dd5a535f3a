// Scene (design resolution the whole wheel is laid out in)
pub const SCENE_WIDTH: f64 = 1920.0;
pub const SCENE_HEIGHT: f64 = 1080.0;
pub const WHEEL_CENTER_X: f64 = 960.0;
pub const WHEEL_CENTER_Y: f64 = 420.0;

// Backdrop behind the wheel
pub const BACKDROP_GRID_SIZE: f64 = 100.0;
pub const BACKDROP_GRID_ALPHA: f64 = 0.05;
pub const BACKDROP_GRID_LINE_WIDTH: f64 = 1.0;
pub const BACKDROP_SHADOW_RADIUS: f64 = 420.0;
pub const BACKDROP_SHADOW_ALPHA: f64 = 0.5;

// Sectors
pub const SECTOR_OUTER_RADIUS: f64 = 360.0;
pub const SECTOR_TEXT_RADIUS: f64 = 250.0;
pub const SECTOR_START_ANGLE_DEG: f64 = -90.0;
pub const SECTOR_STROKE_WIDTH: f64 = 3.0;
pub const SECTOR_STROKE_ALPHA: f64 = 0.8;

// Rim
pub const RIM_RADIUS: f64 = 365.0;
pub const RIM_THICKNESS: f64 = 40.0;
pub const RIM_BLOCKS_COUNT: u32 = 64;
pub const RIM_BLOCK_WIDTH: f64 = 10.0;
pub const RIM_BLOCK_HEIGHT: f64 = 20.0;

pub const CENTER_CAP_RADIUS: f64 = 40.0;
pub const CENTER_CAP_BORDER_WIDTH: f64 = 2.0;

// Pointer sprite sits above the wheel and is flipped to point down into it
pub const POINTER_WIDTH: f64 = 80.0;
pub const POINTER_HEIGHT: f64 = 95.0;
pub const POINTER_OFFSET_Y: f64 = 25.0;
pub const POINTER_ANGLE_DEG: f64 = -90.0;

pub const BUTTON_WIDTH: f64 = 240.0;
pub const BUTTON_HEIGHT: f64 = 100.0;
pub const BUTTON_OFFSET_Y: f64 = 180.0;
pub const BUTTON_DISABLED_ALPHA: f64 = 0.5;

pub const TEXT_FONT_SIZE: f64 = 36.0;

// Spin animation
pub const SPIN_DURATION_MS: f64 = 20_000.0;
pub const SPIN_TURNS: u32 = 15;
pub const SPIN_JITTER: f64 = 0.4; // fraction of half a sector

// Pointer kick on every sector boundary
pub const TICK_ANGLE_DEG: f64 = 15.0;
pub const TICK_BASE_DURATION_MS: f64 = 100.0;
pub const TICK_MIN_DURATION_MS: f64 = 40.0;
pub const TICK_KICK_SHARE: f64 = 0.3;
pub const TICK_INTENSITY_SCALE: f64 = 8.0;
pub const TICK_MIN_INTENSITY: f64 = 0.1;
pub const TICK_MAX_INTENSITY: f64 = 1.0;

// Procedural click
pub const CLICK_BASE_FREQ: f64 = 100.0;
pub const CLICK_FREQ_RANGE: f64 = 500.0;
pub const CLICK_MAX_GAIN: f64 = 0.8;
pub const CLICK_ATTACK_MS: f64 = 5.0;
pub const CLICK_DURATION_MS: f64 = 100.0;
pub const CLICK_FLOOR_GAIN: f64 = 0.001;

pub const EMPTY_PRIZES_ERROR: &str = "The wheel needs at least one prize";
pub const INVALID_WEIGHT_ERROR: &str = "Prize weights must be finite and greater than zero";
pub const DUPLICATE_PRIZE_ERROR: &str = "Prize ids must be unique";
pub const INTENSITY_RANGE_ERROR: &str = "Ticker min_intensity must not exceed max_intensity";
