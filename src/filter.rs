// Whole-canvas filters: separable box blur (sliding window, edges
// extended), a Gaussian approximation built from three box passes, and a
// fixed-ratio blend of one canvas into another.

use crate::error::Error;
use crate::types::{Canvas, Rgb8};

/// Horizontal box pass: every output pixel is the average of the 2r+1
/// pixels around it in its row, with the row's edge pixels extended.
fn box_pass_horizontal(src: &Canvas, dst: &mut Canvas, r: i32) {
    let w = src.width as i32;
    let win = (2 * r + 1) as u32;
    for y in 0..src.height {
        let row = y * src.width;
        let at = |x: i32| Rgb8::unpack(src.pixels[row + x.clamp(0, w - 1) as usize]);

        // Prime the window centered on x = 0.
        let (mut sr, mut sg, mut sb) = (0u32, 0u32, 0u32);
        for x in -r..=r {
            let c = at(x);
            sr += c.r as u32;
            sg += c.g as u32;
            sb += c.b as u32;
        }

        // Slide: emit the average, then add the entering pixel and drop
        // the leaving one.
        for x in 0..w {
            dst.pixels[row + x as usize] =
                Rgb8::new((sr / win) as u8, (sg / win) as u8, (sb / win) as u8).packed();
            let add = at(x + r + 1);
            let sub = at(x - r);
            sr = sr + add.r as u32 - sub.r as u32;
            sg = sg + add.g as u32 - sub.g as u32;
            sb = sb + add.b as u32 - sub.b as u32;
        }
    }
}

/// Vertical box pass; same sliding window down each column.
fn box_pass_vertical(src: &Canvas, dst: &mut Canvas, r: i32) {
    let w = src.width;
    let h = src.height as i32;
    let win = (2 * r + 1) as u32;
    for x in 0..w {
        let at = |y: i32| Rgb8::unpack(src.pixels[(y.clamp(0, h - 1) as usize) * w + x]);

        let (mut sr, mut sg, mut sb) = (0u32, 0u32, 0u32);
        for y in -r..=r {
            let c = at(y);
            sr += c.r as u32;
            sg += c.g as u32;
            sb += c.b as u32;
        }

        for y in 0..h {
            dst.pixels[y as usize * w + x] =
                Rgb8::new((sr / win) as u8, (sg / win) as u8, (sb / win) as u8).packed();
            let add = at(y + r + 1);
            let sub = at(y - r);
            sr = sr + add.r as u32 - sub.r as u32;
            sg = sg + add.g as u32 - sub.g as u32;
            sb = sb + add.b as u32 - sub.b as u32;
        }
    }
}

/// One box blur of the given radius, in place. Radius 0 is a no-op.
pub fn box_blur(canvas: &mut Canvas, radius: usize) {
    if radius == 0 || canvas.width == 0 || canvas.height == 0 {
        return;
    }
    let mut scratch = canvas.clone();
    box_pass_horizontal(canvas, &mut scratch, radius as i32);
    box_pass_vertical(&scratch, canvas, radius as i32);
}

/// Gaussian-looking blur: three successive box blurs converge on a
/// Gaussian profile closely enough for a glow halo. Radius 0 degenerates
/// to no smoothing, which is acceptable rather than an error.
pub fn gaussian_blur(canvas: &mut Canvas, radius: usize) {
    for _ in 0..3 {
        box_blur(canvas, radius);
    }
}

/// Blend `overlay` into `base` at a fixed ratio: 0.0 keeps base, 1.0
/// replaces it. `mix` is clamped to [0,1]; sizes must match.
pub fn blend(base: &mut Canvas, overlay: &Canvas, mix: f32) -> Result<(), Error> {
    if base.width != overlay.width || base.height != overlay.height {
        return Err(Error::SizeMismatch(format!(
            "blend: {}x{} vs {}x{}",
            base.width, base.height, overlay.width, overlay.height
        )));
    }
    let mix = mix.clamp(0.0, 1.0);
    if mix <= 0.0 {
        return Ok(());
    }
    for (dst, &src) in base.pixels.iter_mut().zip(overlay.pixels.iter()) {
        let a = Rgb8::unpack(*dst);
        let b = Rgb8::unpack(src);
        *dst = a.lerp(b, mix).packed();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgb8 = Rgb8::new(10, 14, 26);

    #[test]
    fn zero_radius_leaves_canvas_untouched() {
        let mut canvas = Canvas::new(24, 24, BG);
        crate::raster::fill_disc(&mut canvas, 12, 12, 5, Rgb8::new(255, 215, 0));
        let before = canvas.clone();
        gaussian_blur(&mut canvas, 0);
        assert!(canvas == before);
    }

    #[test]
    fn blurring_a_uniform_canvas_keeps_it_uniform() {
        let mut canvas = Canvas::new(31, 19, BG);
        gaussian_blur(&mut canvas, 4);
        assert!(canvas.pixels.iter().all(|&p| Rgb8::unpack(p) == BG));
    }

    #[test]
    fn blur_spreads_a_bright_spot() {
        let mut canvas = Canvas::new(21, 21, Rgb8::new(0, 0, 0));
        crate::raster::fill_disc(&mut canvas, 10, 10, 2, Rgb8::new(255, 255, 255));
        gaussian_blur(&mut canvas, 3);
        // A neighbor outside the original disc picked up some light.
        let near = Rgb8::unpack(canvas.pixels[10 * 21 + 15]);
        assert!(near.r > 0);
        // And the peak dimmed.
        let center = Rgb8::unpack(canvas.pixels[10 * 21 + 10]);
        assert!(center.r < 255);
    }

    #[test]
    fn blend_mixes_and_reports_size_mismatch() {
        let mut base = Canvas::new(8, 8, Rgb8::new(0, 0, 0));
        let overlay = Canvas::new(8, 8, Rgb8::new(200, 100, 50));
        blend(&mut base, &overlay, 0.5).unwrap();
        assert_eq!(Rgb8::unpack(base.pixels[0]), Rgb8::new(100, 50, 25));

        let wrong = Canvas::new(9, 8, Rgb8::new(0, 0, 0));
        assert!(blend(&mut base, &wrong, 0.5).is_err());
    }

    #[test]
    fn blend_clamps_the_mix_ratio() {
        let mut base = Canvas::new(4, 4, Rgb8::new(40, 40, 40));
        let overlay = Canvas::new(4, 4, Rgb8::new(200, 200, 200));
        blend(&mut base, &overlay, 9.0).unwrap();
        assert_eq!(Rgb8::unpack(base.pixels[0]), Rgb8::new(200, 200, 200));
    }
}
