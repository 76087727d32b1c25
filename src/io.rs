// Sink and source: the only module that touches the filesystem. Converts
// between the packed Canvas and the `image` crate's RGB buffers, which
// handle the actual PNG encode/decode.

use crate::error::Error;
use crate::types::{Canvas, Rgb8};
use image::{ImageBuffer, Rgb, RgbImage};
use std::path::Path;

/// Unpack the canvas into an `image` RGB buffer ready to encode.
pub fn canvas_to_image(canvas: &Canvas) -> RgbImage {
    let mut img = ImageBuffer::new(canvas.width as u32, canvas.height as u32);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let c = Rgb8::unpack(canvas.pixels[y as usize * canvas.width + x as usize]);
        *pixel = Rgb([c.r, c.g, c.b]);
    }
    img
}

/// Pack an `image` RGB buffer into a canvas.
pub fn image_to_canvas(img: &RgbImage) -> Canvas {
    let (w, h) = img.dimensions();
    let mut pixels = Vec::with_capacity((w as usize) * (h as usize));
    for (_x, _y, pixel) in img.enumerate_pixels() {
        pixels.push(Rgb8::new(pixel[0], pixel[1], pixel[2]).packed());
    }
    Canvas { width: w as usize, height: h as usize, pixels }
}

/// Write the canvas to `path` as PNG. The one durable artifact of a run.
pub fn save_png(canvas: &Canvas, path: &Path) -> Result<(), Error> {
    canvas_to_image(canvas)
        .save(path)
        .map_err(|e| Error::ImageSave(format!("{}: {e}", path.display())))
}

/// Load a PNG into a canvas. A missing file is reported as MissingInput
/// *before* any decode work, so nothing downstream ever runs on it.
pub fn load_png(path: &Path) -> Result<Canvas, Error> {
    if !path.exists() {
        return Err(Error::MissingInput(path.display().to_string()));
    }
    let img = image::open(path)
        .map_err(|e| Error::ImageLoad(format!("{}: {e}", path.display())))?
        .to_rgb8();
    Ok(image_to_canvas(&img))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_image_round_trip_preserves_pixels() {
        let mut canvas = Canvas::new(9, 7, Rgb8::new(10, 14, 26));
        crate::raster::fill_rect(&mut canvas, 2, 2, 5, 4, Rgb8::new(255, 215, 0));
        let back = image_to_canvas(&canvas_to_image(&canvas));
        assert!(back == canvas);
    }

    #[test]
    fn missing_input_is_reported_before_decoding() {
        let err = load_png(Path::new("/nonexistent/icon-input.png")).unwrap_err();
        assert!(matches!(err, Error::MissingInput(_)));
    }
}
