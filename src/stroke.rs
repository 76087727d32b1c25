// Thick-stroke rendering: each segment is a capsule — a perpendicular-
// offset quad through the polygon rasterizer plus a filled disc at each
// endpoint. The cap radius is exactly width/2, which is what guarantees a
// seamless join between the straight edges and the round caps.

use crate::raster::{fill_disc, fill_polygon};
use crate::types::{Canvas, Point, Rgb8};

/// Draw one thick segment from `a` to `b` with round caps at both ends.
/// Visual: a pill-shaped bar of `color`; zero-length segments collapse to
/// a single dot of radius width/2.
pub fn stroke_segment(canvas: &mut Canvas, a: Point, b: Point, width: f32, color: Rgb8) {
    let half = (width / 2.0).max(0.0);
    let cap_r = half.round() as i32;

    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len > f32::EPSILON {
        // Unit normal scaled to half the stroke width.
        let nx = -dy / len * half;
        let ny = dx / len * half;
        let quad = [
            Point::new(a.x + nx, a.y + ny),
            Point::new(b.x + nx, b.y + ny),
            Point::new(b.x - nx, b.y - ny),
            Point::new(a.x - nx, a.y - ny),
        ];
        fill_polygon(canvas, &quad, color);
    }

    fill_disc(canvas, a.x.round() as i32, a.y.round() as i32, cap_r, color);
    fill_disc(canvas, b.x.round() as i32, b.y.round() as i32, cap_r, color);
}

/// Stroke a connected polyline; every joint gets its own cap disc.
/// Overlapping fills at the joints are fine — same color twice is invisible.
pub fn stroke_polyline(canvas: &mut Canvas, points: &[Point], width: f32, color: Rgb8) {
    for pair in points.windows(2) {
        stroke_segment(canvas, pair[0], pair[1], width, color);
    }
}

/// Stroke a polyline with a beveled, 3D look: a darker copy shifted by
/// `shadow_shift` underneath, the main stroke on top, then a thin lighter
/// copy of the *leading segment only*, shifted by `highlight_shift` at
/// 0.4x width — a single glint, not a rim light along the whole mark.
/// Visual: the stroke appears raised, catching light on its first arm.
pub fn beveled_polyline(
    canvas: &mut Canvas,
    points: &[Point],
    width: f32,
    main: Rgb8,
    shadow: Rgb8,
    highlight: Rgb8,
    shadow_shift: f32,
    highlight_shift: f32,
) {
    let shifted = |pts: &[Point], d: f32| -> Vec<Point> {
        pts.iter().map(|p| Point::new(p.x + d, p.y + d)).collect()
    };

    stroke_polyline(canvas, &shifted(points, shadow_shift), width, shadow);
    stroke_polyline(canvas, points, width, main);
    if points.len() >= 2 {
        stroke_polyline(canvas, &shifted(&points[..2], highlight_shift), width * 0.4, highlight);
    }
}

/// Stroke an elliptical arc inside the box centered at (cx,cy) with radii
/// (rx,ry), from `start_deg` to `end_deg` (degrees, 3 o'clock = 0, y-down
/// clockwise). Sampled every few degrees and stroked as a polyline.
pub fn stroke_arc(
    canvas: &mut Canvas,
    cx: f32,
    cy: f32,
    rx: f32,
    ry: f32,
    start_deg: f32,
    end_deg: f32,
    width: f32,
    color: Rgb8,
) {
    let sweep = end_deg - start_deg;
    let steps = ((sweep.abs() / 4.0).ceil() as usize).max(1);
    let mut pts = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let deg = start_deg + sweep * (i as f32 / steps as f32);
        let rad = deg.to_radians();
        pts.push(Point::new(cx + rx * rad.cos(), cy + ry * rad.sin()));
    }
    stroke_polyline(canvas, &pts, width, color);
}
