// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    MissingInput(String), // The expected input image file does not exist
    ImageLoad(String),    // Decoding an input PNG failed
    ImageSave(String),    // Encoding/writing the output PNG failed
    SizeMismatch(String), // A filter/blend got differently sized canvases
}

impl Display for Error {
    // This decides how the error is printed to the operator's console.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingInput(p) => write!(f, "Input file not found: {p}"),
            Error::ImageLoad(s) => write!(f, "Image load error: {s}"),
            Error::ImageSave(s) => write!(f, "Image save error: {s}"),
            Error::SizeMismatch(s) => write!(f, "Size mismatch: {s}"),
        }
    }
}

// We don't implement std::error::Error for now to keep things minimal.
// Both binaries return Result<(), Error> and Debug-print on failure.
