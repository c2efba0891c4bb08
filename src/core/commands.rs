use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::gfx::color::deserialize_optional_color;
use crate::gfx::{Bitmap, Channels, Color, FontSize, Point, Size};
use crate::shared::constants::DEFAULT_ANIMATION_DELAY_MS;

/// Optional ambient updates a command applies before it runs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSize>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StringCommand {
    #[serde(flatten)]
    pub state: StateUpdate,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineCommand {
    #[serde(flatten)]
    pub state: StateUpdate,
    pub to: Point,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "BitmapCommandWire", into = "BitmapCommandWire")]
pub struct BitmapCommand {
    pub state: StateUpdate,
    pub bitmap: Bitmap,
}

#[derive(Clone, Serialize, Deserialize)]
struct BitmapCommandWire {
    #[serde(flatten)]
    state: StateUpdate,
    size: Size,
    #[serde(default)]
    data: Channels,
}

impl From<BitmapCommandWire> for BitmapCommand {
    fn from(wire: BitmapCommandWire) -> Self {
        Self {
            state: wire.state,
            bitmap: Bitmap::from_channels(wire.size, wire.data),
        }
    }
}

impl From<BitmapCommand> for BitmapCommandWire {
    fn from(command: BitmapCommand) -> Self {
        let size = command.bitmap.size();
        Self {
            state: command.state,
            size,
            data: command.bitmap.into_channels(),
        }
    }
}

/// A looping sequence of same-sized frames composited at a fixed position.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "AnimationCommandWire")]
pub struct AnimationCommand {
    pub position: Point,
    pub size: Size,
    /// Milliseconds between frames.
    pub delay: u64,
    pub frames: Vec<Bitmap>,
}

fn default_delay() -> u64 {
    DEFAULT_ANIMATION_DELAY_MS
}

/// Frames arrive channel-major: `red[frame][pixel]`.
#[derive(Default, Deserialize)]
struct FramesWire {
    #[serde(default)]
    red: Vec<Vec<f64>>,
    #[serde(default)]
    green: Vec<Vec<f64>>,
    #[serde(default)]
    blue: Vec<Vec<f64>>,
}

#[derive(Deserialize)]
struct AnimationCommandWire {
    position: Point,
    size: Size,
    #[serde(default = "default_delay")]
    delay: u64,
    #[serde(default)]
    frames: FramesWire,
}

impl From<AnimationCommandWire> for AnimationCommand {
    fn from(wire: AnimationCommandWire) -> Self {
        let FramesWire {
            mut red,
            mut green,
            mut blue,
        } = wire.frames;
        let count = red.len().max(green.len()).max(blue.len());
        for channel in [&mut red, &mut green, &mut blue] {
            channel.resize_with(count, Vec::new);
        }

        let frames = red
            .into_iter()
            .zip(green)
            .zip(blue)
            .map(|((red, green), blue)| Channels::clamped(red, green, blue))
            .collect();

        AnimationCommand::new(wire.position, wire.size, wire.delay, frames)
    }
}

impl AnimationCommand {
    /// Build an animation, checking every frame against `size`.
    pub fn new(position: Point, size: Size, delay: u64, frames: Vec<Channels>) -> Self {
        Self {
            position,
            size,
            delay,
            frames: frames
                .into_iter()
                .map(|data| Bitmap::from_channels(size, data))
                .collect(),
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

impl Serialize for AnimationCommand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Frames<'a> {
            red: Vec<&'a [u8]>,
            green: Vec<&'a [u8]>,
            blue: Vec<&'a [u8]>,
        }

        #[derive(Serialize)]
        struct Wire<'a> {
            position: Point,
            size: Size,
            delay: u64,
            frames: Frames<'a>,
        }

        let channels = || self.frames.iter().map(|frame| frame.channels());
        Wire {
            position: self.position,
            size: self.size,
            delay: self.delay,
            frames: Frames {
                red: channels().map(|c| c.red.as_slice()).collect(),
                green: channels().map(|c| c.green.as_slice()).collect(),
                blue: channels().map(|c| c.blue.as_slice()).collect(),
            },
        }
        .serialize(serializer)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphCommand {
    #[serde(flatten)]
    pub state: StateUpdate,
    pub size: Size,
    /// Bar heights in pixels, one per column.
    pub values: Vec<i32>,
    /// Fills each column's full height before its bar is drawn.
    #[serde(
        default,
        deserialize_with = "deserialize_optional_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub background_color: Option<Color>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Command {
    SetState(StateUpdate),
    String(StringCommand),
    Line(LineCommand),
    Bitmap(BitmapCommand),
    LineFeed,
    Animation(AnimationCommand),
    Time(StateUpdate),
    Date(StateUpdate),
    Graph(GraphCommand),
    /// Any `type` this build does not know. Skipped when drawing.
    #[serde(other)]
    Unknown,
}

impl Command {
    pub fn set_state() -> Self {
        Command::SetState(StateUpdate::default())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Command::String(StringCommand {
            state: StateUpdate::default(),
            value: value.into(),
        })
    }

    pub fn line(to: Point) -> Self {
        Command::Line(LineCommand {
            state: StateUpdate::default(),
            to,
        })
    }

    /// A bitmap command. Data of the wrong length is replaced with a blank
    /// bitmap of `size`.
    pub fn bitmap(size: Size, data: Channels) -> Self {
        Command::Bitmap(BitmapCommand {
            state: StateUpdate::default(),
            bitmap: Bitmap::from_channels(size, data),
        })
    }

    pub fn line_feed() -> Self {
        Command::LineFeed
    }

    pub fn animation(position: Point, size: Size, delay: u64, frames: Vec<Channels>) -> Self {
        Command::Animation(AnimationCommand::new(position, size, delay, frames))
    }

    pub fn time() -> Self {
        Command::Time(StateUpdate::default())
    }

    pub fn date() -> Self {
        Command::Date(StateUpdate::default())
    }

    pub fn graph(size: Size, values: Vec<i32>) -> Self {
        Command::Graph(GraphCommand {
            state: StateUpdate::default(),
            size,
            values,
            background_color: None,
        })
    }

    /// Name of the `type` tag, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Command::SetState(_) => "set-state",
            Command::String(_) => "string",
            Command::Line(_) => "line",
            Command::Bitmap(_) => "bitmap",
            Command::LineFeed => "line-feed",
            Command::Animation(_) => "animation",
            Command::Time(_) => "time",
            Command::Date(_) => "date",
            Command::Graph(_) => "graph",
            Command::Unknown => "unknown",
        }
    }

    pub fn state(&self) -> Option<&StateUpdate> {
        match self {
            Command::SetState(state) | Command::Time(state) | Command::Date(state) => Some(state),
            Command::String(cmd) => Some(&cmd.state),
            Command::Line(cmd) => Some(&cmd.state),
            Command::Bitmap(cmd) => Some(&cmd.state),
            Command::Graph(cmd) => Some(&cmd.state),
            Command::LineFeed | Command::Animation(_) | Command::Unknown => None,
        }
    }

    fn state_mut(&mut self) -> Option<&mut StateUpdate> {
        match self {
            Command::SetState(state) | Command::Time(state) | Command::Date(state) => Some(state),
            Command::String(cmd) => Some(&mut cmd.state),
            Command::Line(cmd) => Some(&mut cmd.state),
            Command::Bitmap(cmd) => Some(&mut cmd.state),
            Command::Graph(cmd) => Some(&mut cmd.state),
            Command::LineFeed | Command::Animation(_) | Command::Unknown => None,
        }
    }

    fn update_state(mut self, apply: impl FnOnce(&mut StateUpdate)) -> Self {
        match self.state_mut() {
            Some(state) => apply(state),
            None => crate::utils::logger::debug(&format!(
                "`{}` commands carry no ambient state; update ignored",
                self.kind()
            )),
        }
        self
    }

    /// Move the cursor to `position` before this command runs.
    pub fn at(self, position: Point) -> Self {
        self.update_state(|state| state.position = Some(position))
    }

    pub fn color(self, color: Color) -> Self {
        self.update_state(|state| state.color = Some(color))
    }

    pub fn font(self, font_size: FontSize) -> Self {
        self.update_state(|state| state.font_size = Some(font_size))
    }

    pub fn background(mut self, color: Color) -> Self {
        if let Command::Graph(graph) = &mut self {
            graph.background_color = Some(color);
        }
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandsConfig {
    /// Interval between render passes, in milliseconds.
    #[serde(default = "default_delay")]
    pub animation_delay: u64,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            animation_delay: DEFAULT_ANIMATION_DELAY_MS,
        }
    }
}

/// What a command endpoint serves: render settings and the command list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandDocument {
    #[serde(default)]
    pub config: CommandsConfig,
    pub commands: Vec<Command>,
}

impl CommandDocument {
    pub fn new(commands: Vec<Command>) -> Self {
        Self {
            config: CommandsConfig::default(),
            commands,
        }
    }

    /// Parse a full document, or a bare array of commands.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if value.is_array() {
            Ok(Self::new(serde_json::from_value(value)?))
        } else {
            serde_json::from_value(value)
        }
    }
}
