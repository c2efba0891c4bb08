pub mod cell;
pub mod display;
pub mod processor;

pub use cell::CellData;
pub use display::{DisplayManager, DisplayMode, FrameEncoder};
pub use processor::FrameProcessor;
