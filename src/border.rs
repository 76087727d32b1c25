// Border correction: remove a baked-in frame from a previously generated
// icon by cropping it off, rescaling the remaining content, and repainting
// the edges with the background color.
//
// The margins below encode guesses about one specific prior artifact's
// pixel geometry (a frame roughly 50-60 px in from each edge of a 1024
// icon). They are named constants so that is obvious; they do not
// generalize to arbitrary inputs.

use crate::raster::{fill_rect, put_pixel};
use crate::types::{Canvas, Rgb8};
use image::imageops::{self, FilterType};

/// Where to sample the background color (safely clear of the frame).
pub const CORNER_PROBE: (usize, usize) = (10, 10);
/// Pixels cropped off every edge to drop the frame.
pub const CROP_MARGIN: usize = 55;
/// How much the cropped content is scaled back up.
pub const SCALE_FACTOR: f32 = 1.12;
/// Width of the edge band repainted with the background color.
pub const EDGE_BAND: i32 = 8;

/// Sample the background color at the corner probe.
pub fn probe_background(canvas: &Canvas) -> Rgb8 {
    let (px, py) = CORNER_PROBE;
    let x = px.min(canvas.width.saturating_sub(1));
    let y = py.min(canvas.height.saturating_sub(1));
    Rgb8::unpack(canvas.pixels[y * canvas.width + x])
}

/// Copy out the interior after dropping `margin` pixels from every edge.
pub fn crop(canvas: &Canvas, margin: usize) -> Canvas {
    let m = margin.min(canvas.width.saturating_sub(1) / 2).min(canvas.height.saturating_sub(1) / 2);
    let w = canvas.width - 2 * m;
    let h = canvas.height - 2 * m;
    let mut pixels = Vec::with_capacity(w * h);
    for y in 0..h {
        let row = (y + m) * canvas.width + m;
        pixels.extend_from_slice(&canvas.pixels[row..row + w]);
    }
    Canvas { width: w, height: h, pixels }
}

/// Rescale with Lanczos3 resampling (via the `image` crate).
pub fn resize(canvas: &Canvas, new_width: usize, new_height: usize) -> Canvas {
    let img = crate::io::canvas_to_image(canvas);
    let scaled = imageops::resize(&img, new_width as u32, new_height as u32, FilterType::Lanczos3);
    crate::io::image_to_canvas(&scaled)
}

/// Paste `src` onto `dst` with its top-left at (ox, oy); anything that
/// falls outside `dst` is dropped.
pub fn paste(dst: &mut Canvas, src: &Canvas, ox: i32, oy: i32) {
    for y in 0..src.height {
        for x in 0..src.width {
            let c = Rgb8::unpack(src.pixels[y * src.width + x]);
            put_pixel(dst, ox + x as i32, oy + y as i32, c);
        }
    }
}

/// Repaint a solid band along all four edges.
/// Visual: any residual frame artifact at the rim disappears into the
/// background.
pub fn repaint_edges(canvas: &mut Canvas, band: i32, color: Rgb8) {
    let w = canvas.width as i32;
    let h = canvas.height as i32;
    fill_rect(canvas, 0, 0, w - 1, band - 1, color); // top
    fill_rect(canvas, 0, h - band, w - 1, h - 1, color); // bottom
    fill_rect(canvas, 0, 0, band - 1, h - 1, color); // left
    fill_rect(canvas, w - band, 0, w - 1, h - 1, color); // right
}

/// The whole correction pass: probe, crop, rescale, center-paste onto a
/// fresh background, clean the edges. Output dimensions always match the
/// input's.
pub fn remove_border_frame(input: &Canvas) -> Canvas {
    let bg = probe_background(input);

    let cropped = crop(input, CROP_MARGIN);
    let new_w = (cropped.width as f32 * SCALE_FACTOR) as usize;
    let new_h = (cropped.height as f32 * SCALE_FACTOR) as usize;
    let scaled = resize(&cropped, new_w.max(1), new_h.max(1));

    let mut out = Canvas::new(input.width, input.height, bg);
    let ox = (input.width as i32 - scaled.width as i32) / 2;
    let oy = (input.height as i32 - scaled.height as i32) / 2;
    paste(&mut out, &scaled, ox, oy);

    repaint_edges(&mut out, EDGE_BAND, bg);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgb8 = Rgb8::new(10, 14, 26);

    /// A stand-in for the flawed icon: background, a bright frame some way
    /// in from the edge, content in the middle.
    fn framed_input(size: usize) -> Canvas {
        let mut canvas = Canvas::new(size, size, BG);
        let s = size as i32;
        let frame = Rgb8::new(255, 255, 255);
        repaint_band(&mut canvas, s / 8, 2, frame);
        crate::raster::fill_disc(&mut canvas, s / 2, s / 2, s / 6, Rgb8::new(212, 175, 55));
        canvas
    }

    fn repaint_band(canvas: &mut Canvas, inset: i32, thickness: i32, color: Rgb8) {
        let w = canvas.width as i32;
        let h = canvas.height as i32;
        fill_rect(canvas, inset, inset, w - inset, inset + thickness, color);
        fill_rect(canvas, inset, h - inset - thickness, w - inset, h - inset, color);
        fill_rect(canvas, inset, inset, inset + thickness, h - inset, color);
        fill_rect(canvas, w - inset - thickness, inset, w - inset, h - inset, color);
    }

    #[test]
    fn output_keeps_input_dimensions() {
        let input = framed_input(256);
        let out = remove_border_frame(&input);
        assert_eq!(out.width, 256);
        assert_eq!(out.height, 256);
    }

    #[test]
    fn edge_bands_match_the_probed_background() {
        let input = framed_input(512);
        let out = remove_border_frame(&input);
        for &(x, y) in &[(0usize, 0usize), (511, 0), (0, 511), (511, 511), (255, 3), (3, 255)] {
            assert_eq!(Rgb8::unpack(out.pixels[y * 512 + x]), BG, "edge pixel ({x},{y})");
        }
    }

    #[test]
    fn crop_drops_the_margin_symmetrically() {
        let input = framed_input(200);
        let cropped = crop(&input, 40);
        assert_eq!(cropped.width, 120);
        assert_eq!(cropped.height, 120);
        // Former center is still the center.
        let center = Rgb8::unpack(cropped.pixels[60 * 120 + 60]);
        assert_eq!(center, Rgb8::new(212, 175, 55));
    }
}
