//! `PLTE`: the palette used by indexed-color images.

use crate::error::{PngError, PngResult};
use crate::pixel_formats::RGBA8;

/// Parses a `PLTE` chunk's data into palette entries, alpha defaulted to 255
/// (overridden later by `tRNS` if present).
pub(crate) fn parse(data: &[u8]) -> PngResult<Vec<RGBA8>> {
  if data.len() % 3 != 0 || data.len() > 768 {
    return Err(PngError::InvalidHeader);
  }
  Ok(data.chunks_exact(3).map(|rgb| RGBA8::new(rgb[0], rgb[1], rgb[2], 255)).collect())
}

/// Serializes palette entries back into `PLTE`'s RGB-triplet payload. Alpha
/// is dropped here; a separate `tRNS` chunk carries it when needed.
pub(crate) fn write(palette: &[RGBA8]) -> Vec<u8> {
  let mut out = Vec::with_capacity(palette.len() * 3);
  for entry in palette {
    out.extend_from_slice(&[entry.r, entry.g, entry.b]);
  }
  out
}
