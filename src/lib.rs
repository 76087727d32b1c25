// Software-raster icon rendering pipeline.
// Everything draws into an owned Canvas of packed 0x00RRGGBB pixels;
// the `image` crate is only touched at the edges (load/save/resample).

pub mod border;
pub mod error;
pub mod filter;
pub mod fx;
pub mod gradient;
pub mod io;
pub mod raster;
pub mod shield;
pub mod sneaker;
pub mod stroke;
pub mod types;
