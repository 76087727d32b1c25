// Diagonal gradient background fill.
// The projection t = (x+y)/(w+h) only depends on the diagonal index x+y,
// so the color is computed once per diagonal into a lookup table and then
// broadcast across every row — same output as per-pixel interpolation
// without doing the interpolation a million times.

use crate::types::{Canvas, Rgb8};

/// Overwrite every pixel with the diagonal gradient from `c0` (top-left)
/// toward `c1` (bottom-right). `damp` scales the blend factor; 1.0 gives
/// the full-strength gradient, smaller values keep the whole canvas close
/// to `c0` for a subtle wash.
/// Visual: the canvas shades smoothly from corner to corner.
pub fn diagonal_gradient(canvas: &mut Canvas, c0: Rgb8, c1: Rgb8, damp: f32) {
    let (w, h) = (canvas.width, canvas.height);
    if w == 0 || h == 0 {
        return;
    }

    // One packed color per diagonal index d = x + y.
    let span = (w + h) as f32;
    let mut diagonal: Vec<u32> = Vec::with_capacity(w + h - 1);
    for d in 0..(w + h - 1) {
        let t = (d as f32 / span).clamp(0.0, 1.0);
        diagonal.push(c0.lerp(c1, t * damp).packed());
    }

    for y in 0..h {
        let row = y * w;
        for x in 0..w {
            canvas.pixels[row + x] = diagonal[x + y];
        }
    }
}
