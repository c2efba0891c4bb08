pub mod animation;
pub mod commands;
pub mod dashboard;
pub mod error;
pub mod interpreter;
pub mod viewer;

pub use animation::{animation_states_for, apply_animation, create_animation, AnimationState};
pub use commands::{Command, CommandDocument, CommandsConfig, StateUpdate};
pub use error::RenderError;
pub use interpreter::{draw_commands, render, DrawingState};
pub use viewer::Viewer;
