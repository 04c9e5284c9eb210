//! `tRNS`: transparency, interpreted differently per color type.

use crate::error::PngResult;
use crate::pixel_formats::RGBA8;
use crate::png::ihdr::PngColorType;

/// A parsed `tRNS` chunk. For color type 3 the alpha bytes are written
/// straight back into the palette by the decode pipeline and this value
/// isn't retained; for types 0/2 the single key color is recorded as
/// metadata only (this core does not apply chroma-keying to the raster).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transparency {
  /// Color type 0: a single gray value that should be treated as
  /// transparent, recorded verbatim from the 2-byte big-endian key.
  GrayKey(u16),
  /// Color type 2: a single RGB value that should be treated as
  /// transparent, recorded verbatim from the three 2-byte big-endian keys.
  RgbKey(u16, u16, u16),
}

/// Applies a `tRNS` chunk to an indexed-color palette: indices within
/// `data`'s length take their alpha from it, indices beyond keep alpha 255.
pub(crate) fn apply_to_palette(palette: &mut [RGBA8], data: &[u8]) {
  for (entry, &alpha) in palette.iter_mut().zip(data.iter()) {
    entry.a = alpha;
  }
}

/// Parses a `tRNS` chunk for a non-indexed color type into metadata.
pub(crate) fn parse_key(color_type: PngColorType, data: &[u8]) -> PngResult<Transparency> {
  match color_type {
    PngColorType::Grayscale if data.len() >= 2 => {
      Ok(Transparency::GrayKey(u16::from_be_bytes([data[0], data[1]])))
    }
    PngColorType::Truecolor if data.len() >= 6 => Ok(Transparency::RgbKey(
      u16::from_be_bytes([data[0], data[1]]),
      u16::from_be_bytes([data[2], data[3]]),
      u16::from_be_bytes([data[4], data[5]]),
    )),
    _ => Err(crate::error::PngError::InvalidHeader),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn applies_alpha_and_leaves_the_rest_opaque() {
    let mut palette = vec![RGBA8::new(0, 0, 0, 255); 3];
    apply_to_palette(&mut palette, &[0, 128]);
    assert_eq!(palette[0].a, 0);
    assert_eq!(palette[1].a, 128);
    assert_eq!(palette[2].a, 255);
  }

  #[test]
  fn parses_gray_key() {
    assert_eq!(parse_key(PngColorType::Grayscale, &[0, 42]).unwrap(), Transparency::GrayKey(42));
  }
}
