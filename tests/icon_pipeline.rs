// End-to-end pipeline checks: the scenarios exercised here mirror how the
// icon binaries compose the primitives, at sizes the CI machine is happy
// with, plus the PNG sink/source round trip.

use icon_forge::error::Error;
use icon_forge::fx::{composite_glow, GlowSettings};
use icon_forge::gradient::diagonal_gradient;
use icon_forge::io::{load_png, save_png};
use icon_forge::shield::{draw_layered_shield, shield_outline, ShieldParams};
use icon_forge::stroke::stroke_polyline;
use icon_forge::types::{Canvas, Point, Rgb8};
use std::path::{Path, PathBuf};

const BG_DARK: Rgb8 = Rgb8::new(10, 14, 26);
const BG_WASH: Rgb8 = Rgb8::new(18, 24, 41);
const GOLD_BRIGHT: Rgb8 = Rgb8::new(255, 215, 0);
const GOLD_MID: Rgb8 = Rgb8::new(218, 165, 32);

fn render_badge(size: usize) -> Canvas {
    let s = size as f32;
    let params = ShieldParams::default();
    let (cx, cy) = (s / 2.0, s * 0.47);
    let (w, h) = (s * 0.62, s * 0.72);

    let mut canvas = Canvas::new(size, size, BG_DARK);
    diagonal_gradient(&mut canvas, BG_DARK, BG_WASH, 0.3);
    let glow = GlowSettings { passes: 12, size_step: 2.0, blur_radius: 5, ..Default::default() };
    composite_glow(&mut canvas, BG_DARK, GOLD_MID, &glow, |extra| {
        shield_outline(cx, cy, w + extra, h + extra, &params)
    })
    .unwrap();
    draw_layered_shield(
        &mut canvas,
        cx,
        cy,
        w,
        h,
        (s * 0.04) as i32,
        GOLD_BRIGHT,
        Rgb8::new(184, 134, 11),
        Rgb8::new(13, 17, 23),
        &params,
    );
    let check = [
        Point::new(cx - s * 0.12, cy + s * 0.02),
        Point::new(cx - s * 0.02, cy + s * 0.12),
        Point::new(cx + s * 0.17, cy - s * 0.10),
    ];
    stroke_polyline(&mut canvas, &check, s * 0.055, GOLD_BRIGHT);
    canvas
}

#[test]
fn full_badge_render_is_deterministic() {
    let a = render_badge(256);
    let b = render_badge(256);
    assert_eq!(a.pixels, b.pixels);
    assert_eq!(a.width, 256);
    assert_eq!(a.height, 256);
}

#[test]
fn badge_render_marks_the_canvas_sensibly() {
    let canvas = render_badge(256);
    // The checkmark midpoint area is bright gold.
    let cy = (256.0 * 0.47) as usize;
    let mid = Rgb8::unpack(canvas.pixels[(cy + 256 / 8) * 256 + 128 - 5]);
    assert_eq!(mid, GOLD_BRIGHT);
    // The very top-left still reads as (glow-tinted) background, far
    // darker than any gold.
    let corner = Rgb8::unpack(canvas.pixels[0]);
    assert!(corner.r < 60 && corner.g < 60);
}

#[test]
fn png_round_trip_preserves_the_canvas() {
    let canvas = render_badge(64);
    let path: PathBuf = std::env::temp_dir().join("icon_forge_roundtrip_test.png");
    save_png(&canvas, &path).unwrap();
    let back = load_png(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(back.width, canvas.width);
    assert_eq!(back.height, canvas.height);
    assert_eq!(back.pixels, canvas.pixels);
}

#[test]
fn missing_input_aborts_without_output() {
    let missing = Path::new("/definitely/not/here/icon-input.png");
    let err = load_png(missing).err().expect("load of a missing file must fail");
    match err {
        Error::MissingInput(p) => assert!(p.contains("icon-input.png")),
        other => panic!("expected MissingInput, got {other:?}"),
    }
}
