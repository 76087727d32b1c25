// Border correction: load a previously generated icon, strip its baked-in
// frame (crop / rescale / edge repaint), and save the full-bleed result.
// A missing input aborts before any output file is touched.

use icon_forge::border::remove_border_frame;
use icon_forge::error::Error;
use icon_forge::io::{load_png, save_png};
use std::path::Path;

const INPUT_PATH: &str = "icon-input.png";
const OUTPUT_PATH: &str = "app-icon-fullbleed.png";

fn main() -> Result<(), Error> {
    println!("Loading: {INPUT_PATH}");
    let input = load_png(Path::new(INPUT_PATH))?;
    println!("Original size: {}x{}", input.width, input.height);

    let fixed = remove_border_frame(&input);

    save_png(&fixed, Path::new(OUTPUT_PATH))?;
    println!("Saved: {OUTPUT_PATH} ({}x{})", fixed.width, fixed.height);
    println!("Done! Full-bleed icon created.");
    Ok(())
}
