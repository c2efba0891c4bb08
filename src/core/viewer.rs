use std::sync::Arc;

use super::animation::{animation_states_for, AnimationState};
use super::commands::Command;
use super::interpreter;
use crate::gfx::{Bitmap, Size};
use crate::sync::{SystemClock, WallClock};
use crate::utils::logger;

/// One display's view of a shared command list.
///
/// Each viewer owns its animation states and its output bitmap, so any number
/// of viewers can replay the same list. A pass that fails leaves the last
/// good bitmap in place.
pub struct Viewer<C: WallClock = SystemClock> {
    size: Size,
    commands: Arc<Vec<Command>>,
    states: Vec<AnimationState>,
    current: Bitmap,
    clock: C,
    failed_passes: u64,
}

impl Viewer<SystemClock> {
    pub fn new(size: Size, commands: Arc<Vec<Command>>) -> Self {
        Self::with_clock(size, commands, SystemClock)
    }
}

impl<C: WallClock> Viewer<C> {
    pub fn with_clock(size: Size, commands: Arc<Vec<Command>>, clock: C) -> Self {
        let states = animation_states_for(&commands);
        Self {
            size,
            commands,
            states,
            current: Bitmap::with_size(size),
            clock,
            failed_passes: 0,
        }
    }

    /// Run one pass and return whatever is now on display.
    pub fn render(&mut self) -> &Bitmap {
        match interpreter::render(self.size, &self.commands, &mut self.states, &self.clock) {
            Ok(bitmap) => self.current = bitmap,
            Err(e) => {
                self.failed_passes += 1;
                logger::error(&format!("Render pass failed, keeping previous frame: {}", e));
            }
        }
        &self.current
    }

    pub fn current(&self) -> &Bitmap {
        &self.current
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn animation_states(&self) -> &[AnimationState] {
        &self.states
    }

    pub fn failed_passes(&self) -> u64 {
        self.failed_passes
    }

    /// Swap in a new command list. Animation progress restarts; the bitmap on
    /// display stays until the next pass.
    pub fn replace_commands(&mut self, commands: Arc<Vec<Command>>) {
        self.states = animation_states_for(&commands);
        self.commands = commands;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{Color, Point};
    use crate::sync::FixedClock;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2026, 1, 2)
                .and_then(|d| d.and_hms_opt(13, 30, 0))
                .unwrap(),
        )
    }

    fn blinking() -> Arc<Vec<Command>> {
        let frame = |color| Bitmap::filled(Size::new(1, 1), color).into_channels();
        Arc::new(vec![Command::animation(
            Point::ORIGIN,
            Size::new(1, 1),
            100,
            vec![frame(Color::RED), frame(Color::GREEN)],
        )])
    }

    #[test]
    fn test_viewers_share_commands_but_not_progress() {
        let commands = blinking();
        let mut a = Viewer::with_clock(Size::new(1, 1), commands.clone(), clock());
        let mut b = Viewer::with_clock(Size::new(1, 1), commands, clock());

        assert_eq!(a.render().pixel(0, 0), Some(Color::RED));
        assert_eq!(a.render().pixel(0, 0), Some(Color::GREEN));
        assert_eq!(b.render().pixel(0, 0), Some(Color::RED));
        assert_eq!(a.animation_states()[0].last_shown_frame, 1);
        assert_eq!(b.animation_states()[0].last_shown_frame, 0);
    }

    #[test]
    fn test_failed_pass_keeps_previous_bitmap() {
        let good = Arc::new(vec![Command::line(Point::new(1, 0)).color(Color::BLUE)]);
        let mut viewer = Viewer::with_clock(Size::new(2, 2), good, clock());
        let before = viewer.render().clone();

        viewer.replace_commands(Arc::new(vec![Command::graph(Size::new(3, 2), vec![1])]));
        let after = viewer.render().clone();

        assert_eq!(before, after);
        assert_eq!(viewer.failed_passes(), 1);
        assert_eq!(viewer.current().pixel(1, 0), Some(Color::BLUE));
    }

    #[test]
    fn test_replace_commands_restarts_animations() {
        let mut viewer = Viewer::with_clock(Size::new(1, 1), blinking(), clock());
        viewer.render();
        viewer.replace_commands(blinking());
        assert_eq!(viewer.render().pixel(0, 0), Some(Color::RED));
    }

    #[test]
    fn test_blank_before_first_pass() {
        let viewer = Viewer::new(Size::new(3, 2), blinking());
        assert_eq!(viewer.current().len(), 6);
        assert!(viewer.current().pixels().all(|c| c.is_transparent()));
        assert_eq!(viewer.size(), Size::new(3, 2));
    }
}
