// Core types shared by every drawing module.

/// Owned raster buffer; the unit of all drawing.
/// Visual: this *is* the icon while it is being built.
#[derive(Clone, PartialEq, Debug)]
pub struct Canvas {
    pub width: usize,     // pixels per row
    pub height: usize,    // rows
    pub pixels: Vec<u32>, // each entry is 0x00RRGGBB, row-major from top-left
}

impl Canvas {
    /// Allocate a canvas with every pixel set to `fill`.
    pub fn new(width: usize, height: usize, fill: Rgb8) -> Self {
        Self { width, height, pixels: vec![fill.packed(); width * height] }
    }
}

/// One RGB color, 8 bits per channel. All math on it clamps back into
/// 0..=255; interpolation is expected to overshoot occasionally and must
/// self-correct silently instead of erroring.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack as 0x00RRGGBB for the canvas pixel buffer.
    #[inline]
    pub fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Unpack from a canvas pixel.
    #[inline]
    pub fn unpack(px: u32) -> Self {
        Self {
            r: ((px >> 16) & 0xFF) as u8,
            g: ((px >> 8) & 0xFF) as u8,
            b: (px & 0xFF) as u8,
        }
    }

    /// Linear interpolation toward `other`; `t` is clamped to [0,1] first,
    /// each channel result is clamped to 0..=255.
    pub fn lerp(self, other: Rgb8, t: f32) -> Rgb8 {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| -> u8 {
            (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8
        };
        Rgb8::new(ch(self.r, other.r), ch(self.g, other.g), ch(self.b, other.b))
    }

    /// Scale all channels by `factor` (clamped per channel).
    /// Visual: dims toward black for factor < 1, brightens for factor > 1.
    pub fn scaled(self, factor: f32) -> Rgb8 {
        let ch = |a: u8| -> u8 { (a as f32 * factor).round().clamp(0.0, 255.0) as u8 };
        Rgb8::new(ch(self.r), ch(self.g), ch(self.b))
    }
}

/// A coordinate during shape construction. Stays floating-point until the
/// rasterizer rounds it onto the pixel grid.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
