#![forbid(unsafe_code)]

//! A self-contained PNG codec: decode PNG bytes into an in-memory RGBA8
//! raster plus metadata, and encode one back.
//!
//! ```no_run
//! use pngrs::image::Image;
//! # fn or_png_error(bytes: &[u8]) -> Result<(), pngrs::error::PngError> {
//! let mut image = Image::decode(bytes)?;
//! image.set_matrix()[(0, 0)] = pngrs::pixel_formats::RGBA8::new(255, 0, 0, 255);
//! let out = image.encode(Default::default())?;
//! # let _ = out;
//! # Ok(())
//! # }
//! ```
//!
//! Interlacing, bit depths other than 8, and ancillary chunks beyond the
//! handful this codec parses are out of scope; unrecognized chunks
//! round-trip as opaque bytes rather than causing a decode failure.

/// Prints a trace line with the call site, when the `trace` feature is
/// enabled. A no-op otherwise.
#[macro_export]
macro_rules! trace {
  ($($arg:tt)*) => {
    #[cfg(feature = "trace")] {
      ::std::eprint!("{file}:{line}> ", file = file!(), line = line!());
      ::std::eprintln!($($arg)*);
    }
  }
}

pub mod error;
pub mod image;
pub mod pixel_formats;
pub mod png;
pub mod raster;

pub use error::{PngError, PngResult};
pub use image::Image;
