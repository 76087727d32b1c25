// FX layers: the soft glow halo behind a shape, sparkle highlights, and
// the faint floor reflection. All deterministic — same inputs, same pixels.

use crate::error::Error;
use crate::filter::{blend, gaussian_blur};
use crate::raster::{fill_disc, fill_ellipse, fill_polygon};
use crate::types::{Canvas, Point, Rgb8};

/// Tunables for the glow halo.
pub struct GlowSettings {
    pub passes: usize,    // number of concentric outline passes
    pub size_step: f32,   // extra shape size per pass, in pixels
    pub blur_radius: usize, // Gaussian radius applied to the halo layer
    pub mix: f32,         // blend ratio of the halo into the base canvas
    pub falloff_damp: f32, // peak intensity of the innermost pass
}

impl Default for GlowSettings {
    fn default() -> Self {
        Self { passes: 30, size_step: 4.0, blur_radius: 20, mix: 0.5, falloff_damp: 0.3 }
    }
}

/// Composite a soft halo behind a shape.
/// `outline_at(extra)` must return the shape outline grown by `extra`
/// pixels. The halo is built on a secondary canvas filled with
/// `background`: concentric passes from the largest offset inward, each
/// pass brighter than the one outside it (linear falloff away from the
/// shape), then blurred and blended into `base` at a fixed ratio.
/// Visual: a fuzzy wash of `glow` hugging the shape, fading outward.
pub fn composite_glow<F>(
    base: &mut Canvas,
    background: Rgb8,
    glow: Rgb8,
    settings: &GlowSettings,
    outline_at: F,
) -> Result<(), Error>
where
    F: Fn(f32) -> Vec<Point>,
{
    let mut halo = Canvas::new(base.width, base.height, background);

    // Largest offset first so every smaller, brighter pass paints on top.
    for i in (1..=settings.passes).rev() {
        let extra = i as f32 * settings.size_step;
        let falloff = (settings.passes + 1 - i) as f32 / settings.passes as f32;
        let color = glow.scaled(falloff * settings.falloff_damp);
        fill_polygon(&mut halo, &outline_at(extra), color);
    }

    gaussian_blur(&mut halo, settings.blur_radius);
    blend(base, &halo, settings.mix)
}

/// A small sparkle highlight: concentric discs, blue channel ramping up
/// with the disc radius so the rim reads white and the core warm.
/// Visual: a tiny star-like glint.
pub fn sparkle(canvas: &mut Canvas, cx: i32, cy: i32, radius: i32) {
    for i in (1..=radius).rev() {
        let ramp = (255.0 * i as f32 / radius as f32) as u32;
        let blue = (102 + ramp).min(255) as u8;
        fill_disc(canvas, cx, cy, i, Rgb8::new(255, 255, blue));
    }
}

/// A faint reflection pooled under the artwork: stacked thin ellipses that
/// narrow and fade as they descend.
pub fn floor_reflection(canvas: &mut Canvas, cx: i32, top_y: i32, half_width: i32, color: Rgb8) {
    for i in 0..20 {
        let fade = 0.03 * (1.0 - i as f32 / 20.0);
        let rw = half_width - i * 3;
        if rw <= 0 {
            break;
        }
        fill_ellipse(canvas, cx, top_y + i, rw, 3, color.scaled(fade));
    }
}
