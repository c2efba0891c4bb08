use anyhow::Result;
use crossterm::{
    cursor,
    style::Print,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use std::io::{BufWriter, Stdout, Write};

use super::cell::CellData;
use crate::utils::logger;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum DisplayMode {
    /// Grayscale character ramp, no escape colors.
    Ascii,
    /// Truecolor half blocks.
    Rgb,
}

const ASCII_RAMP: &[u8] = b" .:-=+*#%@";

/// Turns cell grids into escape sequences, emitting only cells that changed
/// since the previous frame.
pub struct FrameEncoder {
    mode: DisplayMode,
    last_cells: Option<Vec<CellData>>,
}

impl FrameEncoder {
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            mode,
            last_cells: None,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Forget the previous frame so the next one is drawn in full.
    pub fn invalidate(&mut self) {
        self.last_cells = None;
    }

    /// Append the escapes for `cells`, a `width`-wide grid centred in a
    /// terminal of `term_size` (columns, rows). Cells falling outside the
    /// terminal are skipped. Returns how many cells were written.
    pub fn encode(&mut self, buffer: &mut Vec<u8>, cells: &[CellData], width: usize, term_size: (u16, u16)) -> usize {
        if width == 0 {
            return 0;
        }
        let (term_cols, term_rows) = term_size;

        // synchronized update begin
        buffer.extend_from_slice(b"\x1b[?2026h");

        let force_redraw = self.last_cells.as_ref().map_or(true, |v| v.len() != cells.len());
        if force_redraw {
            buffer.extend_from_slice(b"\x1b[2J");
        }
        let last_cells = self
            .last_cells
            .get_or_insert_with(Vec::new);
        if force_redraw {
            *last_cells = vec![CellData::default(); cells.len()];
        }

        let content_width = width as u16;
        let content_height = (cells.len() / width) as u16;
        let offset_x = term_cols.saturating_sub(content_width) / 2;
        let offset_y = term_rows.saturating_sub(content_height) / 2;

        let mut last_fg = None;
        let mut last_bg = None;
        let mut cursor_x: i32 = -1;
        let mut cursor_y: i32 = -1;
        let mut written = 0;

        for (i, cell) in cells.iter().enumerate() {
            if !force_redraw && *cell == last_cells[i] {
                cursor_x = -1;
                continue;
            }

            let target_x = (i % width) as u16 + offset_x;
            let target_y = (i / width) as u16 + offset_y;
            if target_x >= term_cols || target_y >= term_rows {
                cursor_x = -1;
                continue;
            }

            if cursor_x != target_x as i32 || cursor_y != target_y as i32 {
                buffer.extend_from_slice(b"\x1b[");
                write_decimal(buffer, target_y as u32 + 1);
                buffer.push(b';');
                write_decimal(buffer, target_x as u32 + 1);
                buffer.push(b'H');
                cursor_x = target_x as i32;
                cursor_y = target_y as i32;
            }

            match self.mode {
                DisplayMode::Rgb => {
                    if Some(cell.fg) != last_fg {
                        buffer.extend_from_slice(b"\x1b[38;2;");
                        write_rgb(buffer, cell.fg);
                        last_fg = Some(cell.fg);
                    }
                    if Some(cell.bg) != last_bg {
                        buffer.extend_from_slice(b"\x1b[48;2;");
                        write_rgb(buffer, cell.bg);
                        last_bg = Some(cell.bg);
                    }
                    let mut b_dst = [0u8; 4];
                    buffer.extend_from_slice(cell.char.encode_utf8(&mut b_dst).as_bytes());
                }
                DisplayMode::Ascii => {
                    let idx = cell.brightness() as usize * (ASCII_RAMP.len() - 1) / 255;
                    buffer.push(ASCII_RAMP[idx]);
                }
            }

            last_cells[i] = *cell;
            cursor_x += 1;
            written += 1;
        }

        buffer.extend_from_slice(b"\x1b[0m");
        buffer.extend_from_slice(b"\x1b[?2026l");
        written
    }
}

fn write_decimal(buffer: &mut Vec<u8>, n: u32) {
    let mut digits = [0u8; 10];
    let mut len = 0;
    let mut n = n;
    loop {
        digits[len] = b'0' + (n % 10) as u8;
        len += 1;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    buffer.extend(digits[..len].iter().rev());
}

fn write_rgb(buffer: &mut Vec<u8>, color: crate::gfx::Color) {
    write_decimal(buffer, color.red as u32);
    buffer.push(b';');
    write_decimal(buffer, color.green as u32);
    buffer.push(b';');
    write_decimal(buffer, color.blue as u32);
    buffer.push(b'm');
}

/// Owns the terminal for the duration of a preview: raw mode, alternate
/// screen and hidden cursor, all restored on drop.
pub struct DisplayManager {
    stdout: BufWriter<Stdout>,
    encoder: FrameEncoder,
    render_buffer: Vec<u8>,
}

impl DisplayManager {
    pub fn new(mode: DisplayMode) -> Result<Self> {
        let stdout = BufWriter::with_capacity(256 * 1024, std::io::stdout());
        let mut dm = Self {
            stdout,
            encoder: FrameEncoder::new(mode),
            render_buffer: Vec::with_capacity(256 * 1024),
        };

        dm.initialize_terminal()?;

        Ok(dm)
    }

    fn initialize_terminal(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.execute(EnterAlternateScreen)?;
        self.stdout.execute(cursor::Hide)?;

        // Disable line wrapping (DECRAWM) to prevent scrolling at edges
        self.stdout.execute(Print("\x1b[?7l"))?;

        Ok(())
    }

    /// Redraw whatever changed since the last call.
    pub fn render_diff(&mut self, cells: &[CellData], width: usize) -> Result<()> {
        let start = std::time::Instant::now();
        let term_size = terminal::size().unwrap_or((80, 24));

        self.render_buffer.clear();
        let written = self.encoder.encode(&mut self.render_buffer, cells, width, term_size);

        self.stdout.write_all(&self.render_buffer)?;
        self.stdout.flush()?;

        let elapsed = start.elapsed();
        if elapsed.as_millis() > 10 {
            logger::debug(&format!(
                "Slow frame: {}us for {} of {} cells",
                elapsed.as_micros(),
                written,
                cells.len()
            ));
        }

        Ok(())
    }

    /// Force a full redraw, e.g. after the terminal was resized.
    pub fn invalidate(&mut self) {
        self.encoder.invalidate();
    }
}

impl Drop for DisplayManager {
    fn drop(&mut self) {
        let _ = self.stdout.execute(Print("\x1b[?7h"));
        let _ = self.stdout.execute(cursor::Show);
        let _ = self.stdout.execute(LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::Color;

    fn text(buffer: &[u8]) -> String {
        String::from_utf8_lossy(buffer).into_owned()
    }

    #[test]
    fn test_first_frame_clears_and_draws_everything() {
        let mut encoder = FrameEncoder::new(DisplayMode::Rgb);
        let cells = vec![CellData::half_block(Color::RED, Color::BLUE); 4];
        let mut buffer = Vec::new();

        let written = encoder.encode(&mut buffer, &cells, 2, (2, 2));
        assert_eq!(written, 4);

        let out = text(&buffer);
        assert!(out.contains("\x1b[2J"));
        assert!(out.contains("\x1b[1;1H"));
        assert!(out.contains("\x1b[38;2;255;0;0m"));
        assert!(out.contains("\x1b[48;2;0;0;255m"));
        // colors are only emitted once while unchanged
        assert_eq!(out.matches("38;2;").count(), 1);
    }

    #[test]
    fn test_second_frame_only_sends_changes() {
        let mut encoder = FrameEncoder::new(DisplayMode::Rgb);
        let mut cells = vec![CellData::default(); 4];
        encoder.encode(&mut Vec::new(), &cells, 2, (2, 2));

        cells[3] = CellData::half_block(Color::WHITE, Color::WHITE);
        let mut buffer = Vec::new();
        assert_eq!(encoder.encode(&mut buffer, &cells, 2, (2, 2)), 1);

        let out = text(&buffer);
        assert!(!out.contains("\x1b[2J"));
        assert!(out.contains("\x1b[2;2H"));

        let mut buffer = Vec::new();
        assert_eq!(encoder.encode(&mut buffer, &cells, 2, (2, 2)), 0);
    }

    #[test]
    fn test_content_is_centred_and_clipped() {
        let mut encoder = FrameEncoder::new(DisplayMode::Rgb);
        let cells = vec![CellData::half_block(Color::GREEN, Color::GREEN); 2];
        let mut buffer = Vec::new();
        encoder.encode(&mut buffer, &cells, 2, (6, 5));
        assert!(text(&buffer).contains("\x1b[3;3H"));

        let mut encoder = FrameEncoder::new(DisplayMode::Rgb);
        let mut buffer = Vec::new();
        assert_eq!(encoder.encode(&mut buffer, &cells, 2, (1, 1)), 1);
    }

    #[test]
    fn test_ascii_mode_uses_ramp() {
        let mut encoder = FrameEncoder::new(DisplayMode::Ascii);
        let cells = vec![
            CellData::half_block(Color::WHITE, Color::WHITE),
            CellData::half_block(Color::BLACK, Color::BLACK),
        ];
        let mut buffer = Vec::new();
        encoder.encode(&mut buffer, &cells, 2, (2, 1));

        let out = text(&buffer);
        assert!(out.contains("H@ "));
        assert!(!out.contains("38;2;"));
    }

    #[test]
    fn test_write_decimal() {
        let mut buffer = Vec::new();
        for n in [0, 7, 42, 255, 10000] {
            buffer.clear();
            write_decimal(&mut buffer, n);
            assert_eq!(text(&buffer), n.to_string());
        }
    }
}
