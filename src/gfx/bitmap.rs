use serde::{Deserialize, Serialize};

use super::color::{clamp_channel, Color};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Three parallel 8-bit channel arrays, row-major.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(from = "RawChannels")]
pub struct Channels {
    pub red: Vec<u8>,
    pub green: Vec<u8>,
    pub blue: Vec<u8>,
}

#[derive(Deserialize)]
struct RawChannels {
    #[serde(default)]
    red: Vec<f64>,
    #[serde(default)]
    green: Vec<f64>,
    #[serde(default)]
    blue: Vec<f64>,
}

impl From<RawChannels> for Channels {
    fn from(raw: RawChannels) -> Self {
        Channels::clamped(raw.red, raw.green, raw.blue)
    }
}

impl Channels {
    /// Channels from untrusted numbers, clamped into `0..=255`.
    pub fn clamped(red: Vec<f64>, green: Vec<f64>, blue: Vec<f64>) -> Self {
        let clamp = |values: Vec<f64>| values.into_iter().map(clamp_channel).collect();
        Self {
            red: clamp(red),
            green: clamp(green),
            blue: clamp(blue),
        }
    }

    pub fn zeroed(len: usize) -> Self {
        Self {
            red: vec![0; len],
            green: vec![0; len],
            blue: vec![0; len],
        }
    }

    /// The shared channel length, or `None` when the channels disagree.
    pub fn len(&self) -> Option<usize> {
        let len = self.red.len();
        (self.green.len() == len && self.blue.len() == len).then_some(len)
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(from = "RawBitmap")]
pub struct Bitmap {
    size: Size,
    data: Channels,
}

#[derive(Deserialize)]
struct RawBitmap {
    size: Size,
    #[serde(default)]
    data: Channels,
}

impl From<RawBitmap> for Bitmap {
    fn from(raw: RawBitmap) -> Self {
        Bitmap::from_channels(raw.size, raw.data)
    }
}

impl Bitmap {
    /// A blank canvas; every pixel is the zero sentinel.
    pub fn new(width: u32, height: u32) -> Self {
        let size = Size::new(width, height);
        Self {
            size,
            data: Channels::zeroed(size.area()),
        }
    }

    pub fn with_size(size: Size) -> Self {
        Self::new(size.width, size.height)
    }

    pub fn filled(size: Size, color: Color) -> Self {
        let area = size.area();
        Self {
            size,
            data: Channels {
                red: vec![color.red; area],
                green: vec![color.green; area],
                blue: vec![color.blue; area],
            },
        }
    }

    // Wrong-length data is logged and replaced with a blank bitmap.
    pub fn from_channels(size: Size, data: Channels) -> Self {
        let expected = size.area();
        match data.len() {
            Some(len) if len == expected => Self { size, data },
            actual => {
                crate::utils::logger::warn(&format!(
                    "bitmap data length {:?} does not match {}x{} ({} pixels); using a blank bitmap",
                    actual, size.width, size.height, expected
                ));
                Self::with_size(size)
            }
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Number of pixels, always `width * height`.
    pub fn len(&self) -> usize {
        self.data.red.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn channels(&self) -> &Channels {
        &self.data
    }

    pub fn into_channels(self) -> Channels {
        self.data
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.size.width as i64 || y >= self.size.height as i64 {
            return None;
        }
        Some(y as usize * self.size.width as usize + x as usize)
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x as i64, y as i64).map(|idx| self.color_at(idx))
    }

    fn color_at(&self, idx: usize) -> Color {
        Color::new(self.data.red[idx], self.data.green[idx], self.data.blue[idx])
    }

    /// Write one pixel. Writes outside the canvas are dropped.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.plot(x as i64, y as i64, color);
    }

    /// [`Bitmap::set_pixel`] for coordinates already widened past `i32`.
    pub(crate) fn plot(&mut self, x: i64, y: i64, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.data.red[idx] = color.red;
            self.data.green[idx] = color.green;
            self.data.blue[idx] = color.blue;
        }
    }

    pub fn pixels(&self) -> impl Iterator<Item = Color> + '_ {
        (0..self.len()).map(move |idx| self.color_at(idx))
    }

    /// Composite `overlay` with its top-left corner at the offset. Zero pixels
    /// are transparent, so opaque black cannot be drawn through an overlay.
    pub fn merge(&mut self, overlay: &Bitmap, offset_x: i32, offset_y: i32) {
        let width = overlay.size.width as usize;
        for (idx, color) in overlay.pixels().enumerate() {
            if color.is_transparent() {
                continue;
            }
            let x = offset_x as i64 + (idx % width) as i64;
            let y = offset_y as i64 + (idx / width) as i64;
            self.plot(x, y, color);
        }
    }

    /// Fold `overlays` onto this canvas in order, all at the same offset.
    pub fn merge_overlays<'a, I>(&mut self, overlays: I, offset_x: i32, offset_y: i32)
    where
        I: IntoIterator<Item = &'a Bitmap>,
    {
        for overlay in overlays {
            self.merge(overlay, offset_x, offset_y);
        }
    }

    pub fn to_packed_565(&self) -> PackedBitmap {
        PackedBitmap {
            size: self.size,
            data: self.pixels().map(|color| color.to_565()).collect(),
        }
    }

    pub fn from_packed_565(packed: &PackedBitmap) -> Self {
        let mut data = Channels::zeroed(packed.data.len());
        for (idx, &value) in packed.data.iter().enumerate() {
            let color = Color::from_565(value);
            data.red[idx] = color.red;
            data.green[idx] = color.green;
            data.blue[idx] = color.blue;
        }
        Self::from_channels(packed.size, data)
    }
}

/// A bitmap in the legacy one-array-of-565 layout.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PackedBitmap {
    pub size: Size,
    pub data: Vec<u16>,
}
