use serde::{Deserialize, Serialize};

use super::commands::{AnimationCommand, Command};
use super::error::RenderError;
use super::interpreter;
use crate::gfx::{Bitmap, Point, Size};
use crate::sync::WallClock;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationState {
    pub frame_count: usize,
    pub last_shown_frame: usize,
}

impl AnimationState {
    /// A state whose next advance shows frame 0.
    pub fn new(frame_count: usize) -> Self {
        Self {
            frame_count,
            last_shown_frame: frame_count.saturating_sub(1),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.frame_count);
    }

    /// Move to the next frame and return its index, or `None` if there are
    /// no frames.
    pub fn advance(&mut self) -> Option<usize> {
        if self.frame_count == 0 {
            return None;
        }
        self.last_shown_frame = (self.last_shown_frame + 1) % self.frame_count;
        Some(self.last_shown_frame)
    }
}

/// Fresh states for every `animation` command in `commands`, in order.
pub fn animation_states_for(commands: &[Command]) -> Vec<AnimationState> {
    commands
        .iter()
        .filter_map(|command| match command {
            Command::Animation(animation) => Some(AnimationState::new(animation.frame_count())),
            _ => None,
        })
        .collect()
}

/// Advance `state` and composite the frame it lands on.
///
/// A state whose frame count disagrees with the command is reset to match
/// before advancing.
pub fn apply_animation(bitmap: &mut Bitmap, animation: &AnimationCommand, state: &mut AnimationState) {
    if state.frame_count != animation.frame_count() {
        crate::utils::logger::warn(&format!(
            "animation state expects {} frames but the command has {}; restarting it",
            state.frame_count,
            animation.frame_count()
        ));
        *state = AnimationState::new(animation.frame_count());
    }

    match state.advance() {
        Some(frame) => bitmap.merge(
            &animation.frames[frame],
            animation.position.x,
            animation.position.y,
        ),
        None => crate::utils::logger::warn("animation has no frames; nothing to draw"),
    }
}

/// Render each command list onto its own `size` canvas and pack the results
/// as the frames of an `animation` command.
///
/// This lets text, lines and graphs animate, at the cost of shipping full
/// frames to the display.
pub fn create_animation(
    position: Point,
    size: Size,
    delay: u64,
    frames: &[Vec<Command>],
    clock: &dyn WallClock,
) -> Result<AnimationCommand, RenderError> {
    let rendered = frames
        .iter()
        .map(|commands| {
            let mut states = animation_states_for(commands);
            interpreter::render(size, commands, &mut states, clock).map(Bitmap::into_channels)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AnimationCommand::new(position, size, delay, rendered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{Channels, Color};
    use crate::sync::SystemClock;

    fn solid(color: Color) -> Channels {
        Bitmap::filled(Size::new(1, 1), color).into_channels()
    }

    #[test]
    fn test_first_advance_shows_frame_zero_and_wraps() {
        let mut state = AnimationState::new(3);
        let shown: Vec<_> = (0..7).filter_map(|_| state.advance()).collect();
        assert_eq!(shown, vec![0, 1, 2, 0, 1, 2, 0]);

        state.reset();
        assert_eq!(state.advance(), Some(0));
    }

    #[test]
    fn test_single_and_empty_animations() {
        let mut single = AnimationState::new(1);
        assert_eq!(single.advance(), Some(0));
        assert_eq!(single.advance(), Some(0));

        let mut empty = AnimationState::new(0);
        assert_eq!(empty.advance(), None);
    }

    #[test]
    fn test_out_of_range_state_stays_in_range() {
        let mut state = AnimationState {
            frame_count: 2,
            last_shown_frame: 9,
        };
        assert!(state.advance().unwrap() < 2);
    }

    #[test]
    fn test_states_follow_command_order() {
        let commands = vec![
            Command::animation(Point::ORIGIN, Size::new(1, 1), 100, vec![Channels::zeroed(1); 2]),
            Command::string("x"),
            Command::animation(Point::ORIGIN, Size::new(1, 1), 100, vec![Channels::zeroed(1); 5]),
        ];
        let states = animation_states_for(&commands);
        assert_eq!(states, vec![AnimationState::new(2), AnimationState::new(5)]);
    }

    #[test]
    fn test_apply_animation_resyncs_mismatched_state() {
        let animation = AnimationCommand::new(
            Point::new(1, 0),
            Size::new(1, 1),
            100,
            vec![solid(Color::RED), solid(Color::GREEN)],
        );
        let mut state = AnimationState::new(7);
        let mut bitmap = Bitmap::new(2, 1);

        apply_animation(&mut bitmap, &animation, &mut state);
        assert_eq!(state, AnimationState { frame_count: 2, last_shown_frame: 0 });
        assert_eq!(bitmap.pixel(1, 0), Some(Color::RED));

        apply_animation(&mut bitmap, &animation, &mut state);
        assert_eq!(bitmap.pixel(1, 0), Some(Color::GREEN));
    }

    #[test]
    fn test_create_animation_renders_frames() {
        let frames = vec![
            vec![Command::line(Point::new(1, 0)).color(Color::RED)],
            vec![Command::line(Point::new(0, 1)).color(Color::BLUE)],
        ];
        let animation =
            create_animation(Point::new(4, 4), Size::new(2, 2), 250, &frames, &SystemClock).unwrap();

        assert_eq!(animation.frame_count(), 2);
        assert_eq!(animation.position, Point::new(4, 4));
        assert_eq!(animation.frames[0].pixel(1, 0), Some(Color::RED));
        assert_eq!(animation.frames[0].pixel(0, 1), Some(Color::BLACK));
        assert_eq!(animation.frames[1].pixel(0, 1), Some(Color::BLUE));
    }
}
