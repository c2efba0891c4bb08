use rayon::prelude::*;

use super::cell::CellData;
use crate::gfx::{Bitmap, Color, Size};

/// Folds canvas pixel rows in pairs into half-block terminal cells.
pub struct FrameProcessor {
    pub width: usize,
    pub height: usize,
}

impl FrameProcessor {
    pub fn new(size: Size) -> Self {
        Self {
            width: size.width as usize,
            height: size.height as usize,
        }
    }

    /// Terminal rows needed; an odd last pixel row gets a black bottom half.
    pub fn term_height(&self) -> usize {
        (self.height + 1) / 2
    }

    pub fn process_bitmap(&self, bitmap: &Bitmap) -> Vec<CellData> {
        let mut cells = vec![CellData::default(); self.width * self.term_height()];
        self.process_bitmap_into(bitmap, &mut cells);
        cells
    }

    /// Fill `cells` in place. Does nothing if `cells` or `bitmap` do not match
    /// this processor's geometry.
    pub fn process_bitmap_into(&self, bitmap: &Bitmap, cells: &mut [CellData]) {
        let w = self.width;
        let term_height = self.term_height();

        if cells.len() != w * term_height
            || bitmap.width() as usize != w
            || bitmap.height() as usize != self.height
        {
            return;
        }
        if cells.is_empty() {
            return;
        }

        let chunk_size = if w * term_height > 10000 {
            2000
        } else {
            (w * term_height / rayon::current_num_threads().max(1)).max(1)
        };

        cells
            .par_chunks_mut(chunk_size)
            .enumerate()
            .for_each(|(chunk_idx, chunk)| {
                let start_idx = chunk_idx * chunk_size;

                for (i, cell) in chunk.iter_mut().enumerate() {
                    let idx = start_idx + i;
                    let cx = (idx % w) as i32;
                    let cy = (idx / w) as i32;

                    let top = bitmap.pixel(cx, cy * 2).unwrap_or(Color::BLACK);
                    let bottom = bitmap.pixel(cx, cy * 2 + 1).unwrap_or(Color::BLACK);

                    *cell = CellData::half_block(top, bottom);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_bitmap_half_block() {
        let mut bitmap = Bitmap::new(2, 4);
        for x in 0..2 {
            bitmap.set_pixel(x, 0, Color::RED);
            bitmap.set_pixel(x, 1, Color::GREEN);
            bitmap.set_pixel(x, 2, Color::BLUE);
            bitmap.set_pixel(x, 3, Color::new(255, 255, 0));
        }

        let proc = FrameProcessor::new(bitmap.size());
        let cells = proc.process_bitmap(&bitmap);
        assert_eq!(cells.len(), 2 * 2);

        assert_eq!(cells[0], CellData::half_block(Color::RED, Color::GREEN));
        assert_eq!(cells[1], CellData::half_block(Color::RED, Color::GREEN));
        assert_eq!(cells[2].fg, Color::BLUE);
        assert_eq!(cells[3].bg, Color::new(255, 255, 0));
    }

    #[test]
    fn test_odd_height_pads_last_row() {
        let bitmap = Bitmap::filled(Size::new(3, 3), Color::WHITE);
        let proc = FrameProcessor::new(bitmap.size());
        let cells = proc.process_bitmap(&bitmap);
        assert_eq!(cells.len(), 3 * 2);
        assert_eq!(cells[5], CellData::half_block(Color::WHITE, Color::BLACK));
    }

    #[test]
    fn test_mismatched_bitmap_is_ignored() {
        let proc = FrameProcessor::new(Size::new(2, 2));
        let mut cells = vec![CellData::default(); 2];
        proc.process_bitmap_into(&Bitmap::filled(Size::new(4, 4), Color::RED), &mut cells);
        assert!(cells.iter().all(|c| *c == CellData::default()));
    }
}
