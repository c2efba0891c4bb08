pub mod core;
pub mod gfx;
pub mod graph;
pub mod renderer;
pub mod shared;
pub mod sync;
pub mod ui;
pub mod utils;
