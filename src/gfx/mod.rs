pub mod bitmap;
pub mod color;
pub mod font;
pub mod line;

pub use bitmap::{Bitmap, Channels, PackedBitmap, Point, Size};
pub use color::Color;
pub use font::{FontSize, FontSizeDetails};
pub use line::draw_line;
