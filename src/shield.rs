// Parametric shield outline and the layered gold border built from it.
//
// The outline is three piecewise segments: a sine-bulge top edge, a side
// curve that accelerates inward as it descends (t^1.5 keeps it near the
// outer edge at first, then sweeps toward the bottom point), and the
// mirrored side back up. Traversal order is top edge left-to-right, right
// side down, bottom vertex, left side up — a properly closed boundary.

use crate::raster::fill_polygon;
use crate::types::{Canvas, Point, Rgb8};

/// Tunable shape parameters. The defaults reproduce the badge artwork;
/// they are shape styling, not structural requirements.
pub struct ShieldParams {
    pub segments: usize,    // samples per curved segment
    pub side_exponent: f32, // curvature bias of the side sweep
    pub top_bulge: f32,     // top-edge bulge as a fraction of the height
}

impl Default for ShieldParams {
    fn default() -> Self {
        Self { segments: 100, side_exponent: 1.5, top_bulge: 0.02 }
    }
}

/// Build the closed shield outline centered at (cx,cy).
/// Returns a boundary whose first and last points join without a gap for
/// any positive width/height.
pub fn shield_outline(cx: f32, cy: f32, width: f32, height: f32, params: &ShieldParams) -> Vec<Point> {
    let steps = params.segments.max(1);
    let top = cy - height / 2.0;
    let bottom = cy + height / 2.0;
    let left = cx - width / 2.0;
    let right = cx + width / 2.0;

    let mut outline = Vec::with_capacity(3 * steps + 2);

    // Top edge, left to right, with a shallow sine bulge.
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = left + (right - left) * t;
        let y = top + (t * std::f32::consts::PI).sin() * (height * params.top_bulge);
        outline.push(Point::new(x, y));
    }

    // Right side, sweeping inward on the way down.
    for i in 1..=steps {
        let t = i as f32 / steps as f32;
        let x = right - (right - cx) * t.powf(params.side_exponent);
        let y = top + (bottom - top) * t;
        outline.push(Point::new(x, y));
    }

    // Bottom vertex.
    outline.push(Point::new(cx, bottom));

    // Left side, mirrored, back up toward the start of the top edge.
    for i in 1..steps {
        let t = 1.0 - i as f32 / steps as f32;
        let x = left + (cx - left) * t.powf(params.side_exponent);
        let y = top + (bottom - top) * t;
        outline.push(Point::new(x, y));
    }

    outline
}

/// Paint the shield with a gradient border: one fill per border pixel,
/// outermost/brightest first so each smaller layer draws on top, then the
/// dark inner face.
/// Visual: a gold rim that shades from bright at the edge to dark inward,
/// around a near-black interior.
pub fn draw_layered_shield(
    canvas: &mut Canvas,
    cx: f32,
    cy: f32,
    width: f32,
    height: f32,
    border_width: i32,
    bright: Rgb8,
    dark: Rgb8,
    inner: Rgb8,
    params: &ShieldParams,
) {
    for i in (1..=border_width).rev() {
        let t = i as f32 / border_width as f32;
        let color = dark.lerp(bright, t);
        let shrink = (border_width - i) as f32 * 2.0;
        let layer = shield_outline(cx, cy, width - shrink, height - shrink, params);
        fill_polygon(canvas, &layer, color);
    }

    // Inner face sits 2.5 border-widths inside the rim.
    let inner_w = width - border_width as f32 * 2.5;
    let inner_h = height - border_width as f32 * 2.5;
    let face = shield_outline(cx, cy, inner_w, inner_h, params);
    fill_polygon(canvas, &face, inner);
}
