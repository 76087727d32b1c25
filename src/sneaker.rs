// Sneaker-and-badge artwork: a side-profile sneaker silhouette built from
// literal coordinate tables, plus the gold verification badge. The tables
// are the artwork itself — tuned by eye, in a 800x440-ish local space that
// gets offset and scaled onto the canvas.

use crate::raster::{fill_disc, fill_polygon, fill_ring};
use crate::stroke::{beveled_polyline, stroke_arc, stroke_polyline, stroke_segment};
use crate::types::{Canvas, Point, Rgb8};

// Sneaker palette (slate ramp over the navy background).
pub const SHOE_WHITE: Rgb8 = Rgb8::new(248, 250, 252);
pub const SHOE_LIGHT: Rgb8 = Rgb8::new(241, 245, 249);
pub const SHOE_GRAY: Rgb8 = Rgb8::new(226, 232, 240);
pub const SOLE_GRAY: Rgb8 = Rgb8::new(203, 213, 225);
pub const SOLE_DARK: Rgb8 = Rgb8::new(148, 163, 184);
pub const DARK_NAVY: Rgb8 = Rgb8::new(15, 23, 42);
pub const CHARCOAL: Rgb8 = Rgb8::new(30, 41, 59);

// Badge palette.
pub const GOLD_LIGHT: Rgb8 = Rgb8::new(229, 197, 71);
pub const GOLD_MAIN: Rgb8 = Rgb8::new(212, 175, 55);
pub const GOLD_DARK: Rgb8 = Rgb8::new(184, 150, 46);

/// Draw the sneaker silhouette with its top-left at (offset_x, offset_y),
/// scaled by `scale`.
/// Visual: a light sneaker in side profile — sole, upper, toe box, tongue,
/// laced panel, heel, and a triple accent curve along the side.
pub fn draw_sneaker(canvas: &mut Canvas, offset_x: f32, offset_y: f32, scale: f32) {
    let s = scale;
    let at = |x: f32, y: f32| Point::new(offset_x + x * s, offset_y + y * s);
    let poly = |canvas: &mut Canvas, table: &[(f32, f32)], color: Rgb8| {
        let pts: Vec<Point> = table.iter().map(|&(x, y)| at(x, y)).collect();
        fill_polygon(canvas, &pts, color);
    };

    // Sole slab with chamfered toe and heel.
    poly(
        canvas,
        &[
            (40.0, 340.0),
            (750.0, 340.0),
            (770.0, 360.0),
            (770.0, 390.0),
            (750.0, 420.0),
            (70.0, 420.0),
            (30.0, 390.0),
            (30.0, 360.0),
        ],
        SOLE_GRAY,
    );

    // Tread line and midsole highlight across the sole.
    stroke_segment(canvas, at(80.0, 385.0), at(720.0, 385.0), 4.0 * s, SOLE_DARK);
    stroke_segment(canvas, at(50.0, 355.0), at(760.0, 355.0), 6.0 * s, SHOE_LIGHT);

    // Heel wedge behind the upper.
    poly(
        canvas,
        &[
            (60.0, 340.0),
            (60.0, 200.0),
            (100.0, 160.0),
            (200.0, 140.0),
            (200.0, 340.0),
        ],
        SHOE_GRAY,
    );

    // Main upper body.
    poly(
        canvas,
        &[
            (60.0, 200.0),
            (100.0, 160.0),
            (200.0, 140.0),
            (350.0, 110.0),
            (500.0, 100.0),
            (620.0, 110.0),
            (700.0, 150.0),
            (740.0, 220.0),
            (750.0, 300.0),
            (750.0, 340.0),
            (60.0, 340.0),
        ],
        SHOE_WHITE,
    );

    // Toe box and toe cap layered over the front.
    poly(
        canvas,
        &[
            (620.0, 120.0),
            (700.0, 150.0),
            (740.0, 220.0),
            (750.0, 300.0),
            (750.0, 340.0),
            (580.0, 340.0),
            (580.0, 200.0),
        ],
        SHOE_LIGHT,
    );
    poly(
        canvas,
        &[
            (680.0, 180.0),
            (740.0, 220.0),
            (750.0, 300.0),
            (750.0, 340.0),
            (650.0, 340.0),
            (650.0, 260.0),
        ],
        SHOE_GRAY,
    );

    // Tongue with a padded top edge.
    poly(
        canvas,
        &[
            (350.0, 110.0),
            (400.0, 50.0),
            (460.0, 30.0),
            (520.0, 35.0),
            (560.0, 60.0),
            (580.0, 100.0),
            (500.0, 100.0),
        ],
        SHOE_WHITE,
    );
    let padding = [at(400.0, 50.0), at(460.0, 30.0), at(520.0, 35.0), at(560.0, 60.0)];
    stroke_polyline(canvas, &padding, 12.0 * s, SHOE_LIGHT);

    // Lace panel, holes, and cross laces.
    poly(
        canvas,
        &[(280.0, 130.0), (560.0, 100.0), (560.0, 180.0), (280.0, 200.0)],
        SHOE_LIGHT,
    );
    const LACE_HOLES: [(f32, f32); 5] =
        [(320.0, 150.0), (380.0, 140.0), (440.0, 135.0), (500.0, 140.0), (550.0, 150.0)];
    for &(lx, ly) in &LACE_HOLES {
        let p = at(lx, ly);
        let (cx, cy) = (p.x.round() as i32, p.y.round() as i32);
        fill_disc(canvas, cx, cy, (12.0 * s).round() as i32, DARK_NAVY);
        // Inner highlight sits one pixel low, like a countersunk eyelet.
        fill_disc(canvas, cx, cy + 1, (8.0 * s).round() as i32, CHARCOAL);
    }
    let lace_w = 4.0 * s;
    stroke_segment(canvas, at(330.0, 165.0), at(390.0, 155.0), lace_w, SHOE_WHITE);
    stroke_segment(canvas, at(390.0, 165.0), at(450.0, 150.0), lace_w, SHOE_WHITE);
    stroke_segment(canvas, at(450.0, 160.0), at(510.0, 155.0), lace_w, SHOE_WHITE);

    // Heel counter and heel tab.
    poly(
        canvas,
        &[
            (60.0, 200.0),
            (60.0, 340.0),
            (150.0, 340.0),
            (150.0, 180.0),
            (100.0, 160.0),
        ],
        SHOE_GRAY,
    );
    poly(
        canvas,
        &[
            (80.0, 150.0),
            (140.0, 130.0),
            (180.0, 140.0),
            (150.0, 170.0),
            (100.0, 160.0),
        ],
        SHOE_LIGHT,
    );

    // Decorative triple accent curve along the midfoot (not a swoosh).
    for i in 0..3 {
        let inset = (i * 2) as f32;
        let x0 = offset_x + 200.0 * s + inset;
        let y0 = offset_y + 200.0 * s + inset;
        let x1 = offset_x + 600.0 * s - inset;
        let y1 = offset_y + 320.0 * s - inset;
        stroke_arc(
            canvas,
            (x0 + x1) / 2.0,
            (y0 + y1) / 2.0,
            (x1 - x0) / 2.0,
            (y1 - y0) / 2.0,
            180.0,
            280.0,
            3.0 * s,
            SOLE_DARK,
        );
    }
}

/// Draw the gold verification badge: faint glow rings, a navy disc, the
/// gold ring, and a beveled checkmark with round caps.
pub fn draw_checkmark_badge(canvas: &mut Canvas, cx: i32, cy: i32, radius: i32) {
    // Outer glow: thin gold rings stepping outward.
    let mut i = 10;
    while i > 0 {
        fill_ring(canvas, cx, cy, radius + i * 2, 2, GOLD_MAIN);
        i -= 2;
    }

    // Badge face and its gold rim.
    fill_disc(canvas, cx, cy, radius, DARK_NAVY);
    let ring_w = ((radius as f32) * 0.08).round() as i32;
    fill_ring(canvas, cx, cy, radius - ring_w, ring_w, GOLD_MAIN);

    // Subtle inner ring.
    let inner_r = ((radius as f32) * 0.75).round() as i32;
    fill_ring(canvas, cx, cy, inner_r, 2, GOLD_MAIN);

    // Checkmark, beveled for a raised look.
    let cs = radius as f32 / 110.0;
    let check = [
        Point::new(cx as f32 - 50.0 * cs, cy as f32 + 5.0 * cs),
        Point::new(cx as f32 - 10.0 * cs, cy as f32 + 45.0 * cs),
        Point::new(cx as f32 + 55.0 * cs, cy as f32 - 40.0 * cs),
    ];
    beveled_polyline(
        canvas,
        &check,
        24.0 * cs,
        GOLD_MAIN,
        GOLD_DARK,
        GOLD_LIGHT,
        3.0 * cs,
        -2.0 * cs,
    );
}
