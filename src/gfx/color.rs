use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(from = "RawColor")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Incoming channels may be any number; they are clamped into `0..=255`.
#[derive(Deserialize)]
struct RawColor {
    red: f64,
    green: f64,
    blue: f64,
}

impl From<RawColor> for Color {
    fn from(raw: RawColor) -> Self {
        Color::new(
            clamp_channel(raw.red),
            clamp_channel(raw.green),
            clamp_channel(raw.blue),
        )
    }
}

pub fn clamp_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

impl Color {
    /// The transparency sentinel for overlay content.
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// True for the all-zero pixel, which overlays treat as "do not paint".
    pub const fn is_transparent(&self) -> bool {
        self.red == 0 && self.green == 0 && self.blue == 0
    }

    // Lossy: drops the low bits of each channel.
    pub const fn to_565(&self) -> u16 {
        (((self.red & 0b1111_1000) as u16) << 8)
            | (((self.green & 0b1111_1100) as u16) << 3)
            | (((self.blue & 0b1111_1000) as u16) >> 3)
    }

    pub const fn from_565(color: u16) -> Self {
        Self {
            red: ((color & 0b1111_1000_0000_0000) >> 8) as u8,
            green: ((color & 0b0000_0111_1110_0000) >> 3) as u8,
            blue: ((color & 0b0000_0000_0001_1111) << 3) as u8,
        }
    }
}

/// A color as legacy producers may send it: an RGB object or a packed 565
/// number.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorInput {
    Rgb(Color),
    Packed(f64),
}

/// Deserialize an optional ambient color.
///
/// A packed `0` is falsy upstream and means "leave the ambient color alone",
/// so it comes back as `None`.
pub fn deserialize_optional_color<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: Deserializer<'de>,
{
    let input: Option<ColorInput> = Option::deserialize(deserializer)?;
    Ok(match input {
        None => None,
        Some(ColorInput::Rgb(color)) => Some(color),
        Some(ColorInput::Packed(packed)) => {
            let packed = packed.round().clamp(0.0, u16::MAX as f64) as u16;
            if packed == 0 {
                None
            } else {
                Some(Color::from_565(packed))
            }
        }
    })
}
