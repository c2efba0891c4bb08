pub const APP_NAME: &str = "pixcast";

pub const CONFIG_FILE: &str = "pixcast.config";
pub const ERROR_LOG_FILE: &str = "error.log";
pub const DEBUG_LOG_FILE: &str = "debug.log";

/// Size of the LED matrix the firmware drives.
pub const DEFAULT_CANVAS_WIDTH: u32 = 64;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 64;

/// Matches the firmware's fallback when the command document has no config.
pub const DEFAULT_ANIMATION_DELAY_MS: u64 = 1000;

pub const FONT_ASCII_MIN: u8 = 32;
pub const FONT_ASCII_MAX: u8 = 126;
/// `?`, drawn in place of anything the fonts do not cover.
pub const FONT_FALLBACK_ASCII: u8 = 63;

/// Bitmaps buffered between the render thread and the terminal.
pub const PREVIEW_QUEUE_CAPACITY: usize = 4;
