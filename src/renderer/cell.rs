use crate::gfx::Color;

/// Upper half block: the foreground paints the top pixel, the background the
/// bottom one.
pub const HALF_BLOCK: char = '▀';

/// One terminal cell covering two vertically stacked canvas pixels.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CellData {
    pub char: char,
    pub fg: Color,
    pub bg: Color,
}

impl CellData {
    pub const fn half_block(top: Color, bottom: Color) -> Self {
        Self {
            char: HALF_BLOCK,
            fg: top,
            bg: bottom,
        }
    }

    /// Rec. 601 luma of both halves, 0..=255.
    pub fn brightness(&self) -> u8 {
        let luma = |c: Color| (c.red as u32 * 299 + c.green as u32 * 587 + c.blue as u32 * 114) / 1000;
        ((luma(self.fg) + luma(self.bg)) / 2) as u8
    }
}

impl Default for CellData {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Color::BLACK,
            bg: Color::BLACK,
        }
    }
}
