use super::animation::{apply_animation, AnimationState};
use super::commands::{Command, GraphCommand, StateUpdate};
use super::error::RenderError;
use crate::gfx::font::{self, FontSizeDetails};
use crate::gfx::line::fill_column;
use crate::gfx::{draw_line, Bitmap, Color, Point, Size};
use crate::graph::GraphError;
use crate::sync::clock::{format_date, format_time, WallClock};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawingState {
    pub cursor: Point,
    pub color: Color,
    pub font: FontSizeDetails,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self {
            cursor: Point::ORIGIN,
            color: Color::WHITE,
            font: font::MD,
        }
    }
}

impl DrawingState {
    /// Position replaces the cursor outright; font swaps the whole preset.
    pub fn apply(&mut self, update: &StateUpdate) {
        if let Some(position) = update.position {
            self.cursor = position;
        }
        if let Some(color) = update.color {
            self.color = color;
        }
        if let Some(font_size) = update.font_size {
            self.font = font_size.details();
        }
    }

    pub fn line_feed(&mut self) {
        self.cursor.x = 0;
        self.cursor.y = self.cursor.y.saturating_add(self.font.height as i32);
    }
}

/// Render `commands` onto a fresh canvas of `size`.
pub fn render(
    size: Size,
    commands: &[Command],
    animation_states: &mut [AnimationState],
    clock: &dyn WallClock,
) -> Result<Bitmap, RenderError> {
    let mut bitmap = Bitmap::with_size(size);
    draw_commands(&mut bitmap, commands, animation_states, clock)?;
    Ok(bitmap)
}

/// Draw `commands` onto `bitmap`, returning the final drawing state.
///
/// `animation_states` must hold one entry per `animation` command, in order;
/// a missing entry aborts the pass. Graph validation failures abort it too.
/// Unknown commands are skipped.
pub fn draw_commands(
    bitmap: &mut Bitmap,
    commands: &[Command],
    animation_states: &mut [AnimationState],
    clock: &dyn WallClock,
) -> Result<DrawingState, RenderError> {
    let mut state = DrawingState::default();
    let mut animation_idx = 0;

    for command in commands {
        if let Some(update) = command.state() {
            state.apply(update);
        }

        match command {
            Command::SetState(_) => {}
            Command::Bitmap(cmd) => bitmap.merge(&cmd.bitmap, state.cursor.x, state.cursor.y),
            Command::Line(cmd) => draw_line(bitmap, state.cursor, cmd.to, state.color),
            Command::LineFeed => state.line_feed(),
            Command::String(cmd) => draw_string(bitmap, &mut state, &cmd.value),
            Command::Time(_) => draw_string(bitmap, &mut state, &format_time(&clock.now())),
            Command::Date(_) => draw_string(bitmap, &mut state, &format_date(&clock.now())),
            Command::Graph(cmd) => draw_graph(bitmap, &state, cmd)?,
            Command::Animation(animation) => {
                let available = animation_states.len();
                let animation_state = animation_states.get_mut(animation_idx).ok_or(
                    RenderError::MissingAnimationState {
                        index: animation_idx,
                        available,
                    },
                )?;
                apply_animation(bitmap, animation, animation_state);
                animation_idx += 1;
            }
            Command::Unknown => {
                crate::utils::logger::warn("skipping unknown command");
            }
        }
    }

    Ok(state)
}

/// Draw `value` glyph by glyph from the cursor.
///
/// After each glyph the cursor moves right if another glyph still fits on the
/// row, otherwise it line-feeds. Text starting below the canvas is dropped.
pub fn draw_string(bitmap: &mut Bitmap, state: &mut DrawingState, value: &str) {
    let canvas_width = bitmap.width() as i64;
    let canvas_height = bitmap.height() as i64;

    for ch in value.chars() {
        if state.cursor.y as i64 >= canvas_height {
            return;
        }

        let ascii = font::glyph_code(ch);
        font::draw_glyph(bitmap, &state.font, ascii, state.cursor, state.color);

        let width = state.font.width as i64;
        let spacing = state.font.spacing as i64;
        if state.cursor.x as i64 + width * 2 + spacing <= canvas_width {
            state.cursor.x = state.cursor.x.saturating_add((width + spacing) as i32);
        } else {
            state.line_feed();
        }
    }
}

/// Draw one vertical bar per column, rising from the bottom row of the graph
/// box at the cursor.
pub fn draw_graph(bitmap: &mut Bitmap, state: &DrawingState, graph: &GraphCommand) -> Result<(), GraphError> {
    let width = graph.size.width;
    let height = graph.size.height;

    if graph.values.len() < width as usize {
        return Err(GraphError::InsufficientSamples {
            width,
            samples: graph.values.len(),
        });
    }
    if let Some((index, &value)) = graph
        .values
        .iter()
        .enumerate()
        .find(|&(_, &v)| v < 0 || v as i64 > height as i64)
    {
        return Err(GraphError::ValueOutOfRange { index, value, height });
    }
    if height == 0 {
        return Ok(());
    }

    let top = state.cursor.y as i64;
    let baseline = top + height as i64 - 1;

    for (column, &value) in graph.values.iter().take(width as usize).enumerate() {
        let x = state.cursor.x as i64 + column as i64;
        if let Some(background) = graph.background_color {
            fill_column(bitmap, x, baseline, top, background);
        }
        fill_column(bitmap, x, baseline, baseline - value as i64, state.color);
    }

    Ok(())
}
