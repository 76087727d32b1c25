// Icon generator: renders both app icons and saves them as PNG.
// • A gold shield-and-checkmark badge on a dark navy gradient.
// • A sneaker-and-badge variant with the same gold checkmark.
// All configuration lives in the constants below; there are no flags.

use icon_forge::error::Error;
use icon_forge::fx::{composite_glow, floor_reflection, sparkle, GlowSettings};
use icon_forge::gradient::diagonal_gradient;
use icon_forge::io::save_png;
use icon_forge::shield::{draw_layered_shield, shield_outline, ShieldParams};
use icon_forge::sneaker::{draw_checkmark_badge, draw_sneaker, CHARCOAL, DARK_NAVY};
use icon_forge::stroke::stroke_polyline;
use icon_forge::types::{Canvas, Point, Rgb8};
use std::path::Path;

/// Output edge length in pixels (icons are square).
const ICON_SIZE: usize = 1024;
const SHIELD_ICON_PATH: &str = "app-icon-1024.png";
const SNEAKER_ICON_PATH: &str = "sneaker-icon-1024.png";

// Shield icon palette.
const BG_DARK: Rgb8 = Rgb8::new(10, 14, 26);
const BG_WASH: Rgb8 = Rgb8::new(18, 24, 41);
const GOLD_BRIGHT: Rgb8 = Rgb8::new(255, 215, 0);
const GOLD_MID: Rgb8 = Rgb8::new(218, 165, 32);
const GOLD_DARK: Rgb8 = Rgb8::new(184, 134, 11);
const SHIELD_INNER: Rgb8 = Rgb8::new(13, 17, 23);

fn main() -> Result<(), Error> {
    println!("Rendering shield icon ({ICON_SIZE}x{ICON_SIZE})...");
    let shield = render_shield_icon(ICON_SIZE)?;
    save_png(&shield, Path::new(SHIELD_ICON_PATH))?;
    println!("Saved: {SHIELD_ICON_PATH} ({}x{})", shield.width, shield.height);

    println!("Rendering sneaker icon ({ICON_SIZE}x{ICON_SIZE})...");
    let sneaker = render_sneaker_icon(ICON_SIZE);
    save_png(&sneaker, Path::new(SNEAKER_ICON_PATH))?;
    println!("Saved: {SNEAKER_ICON_PATH} ({}x{})", sneaker.width, sneaker.height);

    Ok(())
}

/// Full-bleed shield badge: gradient wash, glow halo, layered gold rim,
/// dark face, thick gold checkmark, sparkles, floor reflection.
fn render_shield_icon(size: usize) -> Result<Canvas, Error> {
    let s = size as f32;
    let params = ShieldParams::default();

    /* --- 1) Background: subtle diagonal wash over deep navy --- */
    let mut canvas = Canvas::new(size, size, BG_DARK);
    diagonal_gradient(&mut canvas, BG_DARK, BG_WASH, 0.3);

    /* --- 2) Shield geometry (slightly above center, most of the frame) --- */
    let cx = s / 2.0;
    let cy = s * 0.47;
    let shield_w = s * 0.62;
    let shield_h = s * 0.72;
    let border_w = (s * 0.04) as i32;

    /* --- 3) Gold glow halo behind the shield --- */
    composite_glow(&mut canvas, BG_DARK, GOLD_MID, &GlowSettings::default(), |extra| {
        shield_outline(cx, cy, shield_w + extra, shield_h + extra, &params)
    })?;

    /* --- 4) The shield itself: bright-to-dark rim, near-black face --- */
    draw_layered_shield(
        &mut canvas,
        cx,
        cy,
        shield_w,
        shield_h,
        border_w,
        GOLD_BRIGHT,
        GOLD_DARK,
        SHIELD_INNER,
        &params,
    );

    /* --- 5) Checkmark: two thick gold arms with round caps --- */
    let check = [
        Point::new(cx - s * 0.12, cy + s * 0.02),
        Point::new(cx - s * 0.02, cy + s * 0.12),
        Point::new(cx + s * 0.17, cy - s * 0.10),
    ];
    stroke_polyline(&mut canvas, &check, s * 0.055, GOLD_BRIGHT);

    /* --- 6) Sparkle highlights around the badge --- */
    let sparkles = [
        (cx - s * 0.22, cy - s * 0.20, 4),
        (cx + s * 0.20, cy - s * 0.08, 3),
        (cx + s * 0.14, cy + s * 0.16, 2),
    ];
    for &(sx, sy, sr) in &sparkles {
        sparkle(&mut canvas, sx as i32, sy as i32, sr);
    }

    /* --- 7) Faint gold pool under everything --- */
    floor_reflection(&mut canvas, cx as i32, (s * 0.88) as i32, (s * 0.2) as i32, GOLD_MID);

    Ok(canvas)
}

/// Sneaker variant: full-strength navy gradient, the sneaker silhouette in
/// the upper portion, badge overlapping at the lower right.
fn render_sneaker_icon(size: usize) -> Canvas {
    let s = size as f32;
    let scale = s / 1024.0;

    /* --- 1) Background gradient, full strength --- */
    let mut canvas = Canvas::new(size, size, DARK_NAVY);
    diagonal_gradient(&mut canvas, DARK_NAVY, CHARCOAL, 1.0);

    /* --- 2) Sneaker in the upper portion --- */
    draw_sneaker(&mut canvas, 60.0 * scale, 230.0 * scale, 0.88 * scale);

    /* --- 3) Badge overlapping at the lower right --- */
    draw_checkmark_badge(
        &mut canvas,
        (710.0 * scale) as i32,
        (660.0 * scale) as i32,
        (150.0 * scale) as i32,
    );

    canvas
}
