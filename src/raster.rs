// Software rasterization primitives: pixels, filled polygons, discs,
// ellipses, rings, rectangles. Everything writes straight into the Canvas
// and silently drops writes that fall outside it, so callers can hand in
// hostile coordinates without crashing the run.

use crate::types::{Canvas, Point, Rgb8};

/// Put a pixel on the canvas if (x,y) is inside bounds.
/// Visual: the exact pixel at (x,y) changes color; out-of-range is a no-op.
#[inline]
pub fn put_pixel(canvas: &mut Canvas, x: i32, y: i32, color: Rgb8) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= canvas.width || y >= canvas.height {
        return;
    }
    canvas.pixels[y * canvas.width + x] = color.packed();
}

/// Fill a horizontal run [x0..=x1] on row y, clamped to the canvas.
#[inline]
fn fill_span(canvas: &mut Canvas, x0: i32, x1: i32, y: i32, color: Rgb8) {
    if y < 0 || y >= canvas.height as i32 || x1 < x0 {
        return;
    }
    let xa = x0.max(0) as usize;
    let xb = x1.min(canvas.width as i32 - 1);
    if xb < 0 {
        return;
    }
    let row = y as usize * canvas.width;
    let px = color.packed();
    for x in xa..=(xb as usize) {
        canvas.pixels[row + x] = px;
    }
}

/// Fill a closed polygon outline with `color` using even-odd scanline fill.
/// Scanlines sample pixel centers (y + 0.5); edges use a half-open rule so
/// a vertex shared by two edges is counted exactly once. Outlines with
/// fewer than 3 points are degenerate and fill nothing.
pub fn fill_polygon(canvas: &mut Canvas, outline: &[Point], color: Rgb8) {
    if outline.len() < 3 {
        return; // degenerate shape: skip the fill, no crash
    }

    // Vertical extent of the outline, clamped to the canvas rows.
    let mut min_y = f32::MAX;
    let mut max_y = f32::MIN;
    for p in outline {
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    let y0 = (min_y.floor() as i64).max(0) as i32;
    let y1 = (max_y.ceil() as i64).min(canvas.height as i64 - 1) as i32;

    let mut crossings: Vec<f32> = Vec::with_capacity(8);
    for y in y0..=y1 {
        let sample_y = y as f32 + 0.5;

        // Collect x positions where the boundary crosses this scanline.
        crossings.clear();
        for i in 0..outline.len() {
            let a = outline[i];
            let b = outline[(i + 1) % outline.len()];
            let crosses = (a.y <= sample_y && b.y > sample_y)
                || (b.y <= sample_y && a.y > sample_y);
            if crosses {
                let t = (sample_y - a.y) / (b.y - a.y);
                crossings.push(a.x + (b.x - a.x) * t);
            }
        }

        // Even-odd rule: fill between successive crossing pairs.
        crossings.sort_by(f32::total_cmp);
        for pair in crossings.chunks_exact(2) {
            fill_span(canvas, pair[0].round() as i32, pair[1].round() as i32, y, color);
        }
    }
}

/// Fill an axis-aligned ellipse centered at (cx,cy) with radii (rx,ry).
/// Visual: a solid oval; degenerates to nothing for non-positive radii.
pub fn fill_ellipse(canvas: &mut Canvas, cx: i32, cy: i32, rx: i32, ry: i32, color: Rgb8) {
    if rx <= 0 || ry <= 0 {
        return;
    }
    // Row-by-row half-width from the ellipse equation; one span per row.
    for dy in -ry..=ry {
        let fy = dy as f32 / ry as f32;
        let half = (1.0 - fy * fy).max(0.0).sqrt() * rx as f32;
        let hw = half.round() as i32;
        fill_span(canvas, cx - hw, cx + hw, cy + dy, color);
    }
}

/// Fill a circle of radius `r` centered at (cx,cy).
pub fn fill_disc(canvas: &mut Canvas, cx: i32, cy: i32, r: i32, color: Rgb8) {
    fill_ellipse(canvas, cx, cy, r, r, color);
}

/// Fill an annulus: pixels whose distance from (cx,cy) lies in
/// [r_outer - thickness, r_outer]. Used for the badge's ring outlines,
/// which must not overwrite whatever the ring encloses.
pub fn fill_ring(canvas: &mut Canvas, cx: i32, cy: i32, r_outer: i32, thickness: i32, color: Rgb8) {
    if r_outer <= 0 || thickness <= 0 {
        return;
    }
    let r_inner = (r_outer - thickness).max(0);
    let ro2 = (r_outer * r_outer) as i64;
    let ri2 = (r_inner * r_inner) as i64;
    for dy in -r_outer..=r_outer {
        for dx in -r_outer..=r_outer {
            let d2 = (dx * dx + dy * dy) as i64;
            if d2 <= ro2 && d2 > ri2 {
                put_pixel(canvas, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Fill the axis-aligned rectangle [x0..=x1] × [y0..=y1].
pub fn fill_rect(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb8) {
    for y in y0..=y1 {
        fill_span(canvas, x0, x1, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Rgb8 = Rgb8::new(250, 250, 250);
    const BG: Rgb8 = Rgb8::new(0, 0, 0);

    fn pixel(canvas: &Canvas, x: usize, y: usize) -> Rgb8 {
        Rgb8::unpack(canvas.pixels[y * canvas.width + x])
    }

    #[test]
    fn degenerate_outline_is_a_no_op() {
        let mut canvas = Canvas::new(16, 16, BG);
        let before = canvas.clone();
        fill_polygon(&mut canvas, &[], INK);
        fill_polygon(&mut canvas, &[Point::new(2.0, 2.0), Point::new(9.0, 9.0)], INK);
        assert!(canvas == before);
    }

    #[test]
    fn square_fill_covers_interior_only() {
        let mut canvas = Canvas::new(20, 20, BG);
        let square = [
            Point::new(5.0, 5.0),
            Point::new(15.0, 5.0),
            Point::new(15.0, 15.0),
            Point::new(5.0, 15.0),
        ];
        fill_polygon(&mut canvas, &square, INK);
        assert_eq!(pixel(&canvas, 10, 10), INK);
        assert_eq!(pixel(&canvas, 2, 10), BG);
        assert_eq!(pixel(&canvas, 10, 2), BG);
    }

    #[test]
    fn oversized_polygon_never_writes_out_of_bounds() {
        // A triangle far bigger than the canvas must clamp, not panic.
        let mut canvas = Canvas::new(8, 8, BG);
        let huge = [
            Point::new(-500.0, -900.0),
            Point::new(900.0, -200.0),
            Point::new(100.0, 800.0),
        ];
        fill_polygon(&mut canvas, &huge, INK);
        assert_eq!(canvas.pixels.len(), 64);
        assert_eq!(pixel(&canvas, 4, 4), INK);
    }

    #[test]
    fn disc_respects_radius() {
        let mut canvas = Canvas::new(32, 32, BG);
        fill_disc(&mut canvas, 16, 16, 6, INK);
        assert_eq!(pixel(&canvas, 16, 16), INK);
        assert_eq!(pixel(&canvas, 16, 10), INK); // top of the disc
        assert_eq!(pixel(&canvas, 16, 8), BG); // two rows above it
    }

    #[test]
    fn ring_leaves_interior_untouched() {
        let mut canvas = Canvas::new(40, 40, BG);
        fill_ring(&mut canvas, 20, 20, 12, 3, INK);
        assert_eq!(pixel(&canvas, 20, 20), BG); // center untouched
        assert_eq!(pixel(&canvas, 20 + 11, 20), INK); // inside the band
        assert_eq!(pixel(&canvas, 20 + 5, 20), BG); // well inside the hole
    }
}
