//! `IHDR`: the image header, always the first chunk.

use crate::error::{PngError, PngResult};

/// The five color models this codec understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PngColorType {
  /// Greyscale, 1 channel.
  Grayscale = 0,
  /// Red, Green, Blue, 3 channels.
  Truecolor = 2,
  /// Index into a `PLTE` palette, 1 channel.
  Indexed = 3,
  /// Greyscale + Alpha, 2 channels.
  GrayscaleAlpha = 4,
  /// Red, Green, Blue, Alpha, 4 channels.
  TruecolorAlpha = 6,
}
impl PngColorType {
  /// The number of channels a pixel of this color type carries.
  #[inline]
  #[must_use]
  pub const fn channel_count(self) -> usize {
    match self {
      Self::Grayscale => 1,
      Self::Truecolor => 3,
      Self::Indexed => 1,
      Self::GrayscaleAlpha => 2,
      Self::TruecolorAlpha => 4,
    }
  }
}
impl Default for PngColorType {
  /// Truecolor+alpha, the canonical PNG color type this codec prefers when
  /// the caller hasn't said otherwise.
  #[inline]
  fn default() -> Self {
    Self::TruecolorAlpha
  }
}
impl TryFrom<u8> for PngColorType {
  type Error = ();
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      0 => Self::Grayscale,
      2 => Self::Truecolor,
      3 => Self::Indexed,
      4 => Self::GrayscaleAlpha,
      6 => Self::TruecolorAlpha,
      _ => return Err(()),
    })
  }
}

/// The parsed `IHDR` chunk.
///
/// This codec's supported profile pins `bit_depth` to 8, `compression` and
/// `filter` method to 0, and `interlace` method to 0 (no Adam7); anything
/// else is rejected with [`PngError::InvalidHeader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IHDR {
  pub width: u32,
  pub height: u32,
  pub color_type: PngColorType,
}
impl IHDR {
  pub(crate) const BIT_DEPTH: u8 = 8;

  /// Number of bytes occupied by one scanline's pixel data, not counting the
  /// leading filter-type byte.
  #[inline]
  #[must_use]
  pub(crate) const fn bytes_per_row(&self) -> usize {
    self.color_type.channel_count() * self.width as usize
  }

  /// Number of bytes occupied by one scanline including its filter-type
  /// byte.
  #[inline]
  #[must_use]
  pub(crate) const fn bytes_per_filterline(&self) -> usize {
    1 + self.bytes_per_row()
  }

  /// Bytes-per-pixel stride used by the filter engine (`s` in spec terms).
  #[inline]
  #[must_use]
  pub(crate) const fn bytes_per_pixel(&self) -> usize {
    self.color_type.channel_count()
  }

  pub(crate) fn parse(data: &[u8]) -> PngResult<Self> {
    let [w0, w1, w2, w3, h0, h1, h2, h3, bit_depth, color_type, compression, filter, interlace] =
      data
    else {
      return Err(PngError::InvalidHeader);
    };
    let width = u32::from_be_bytes([*w0, *w1, *w2, *w3]);
    let height = u32::from_be_bytes([*h0, *h1, *h2, *h3]);
    let color_type = PngColorType::try_from(*color_type).map_err(|_| PngError::InvalidHeader)?;
    if width == 0
      || height == 0
      || *bit_depth != Self::BIT_DEPTH
      || *compression != 0
      || *filter != 0
      || *interlace != 0
    {
      return Err(PngError::InvalidHeader);
    }
    Ok(Self { width, height, color_type })
  }

  pub(crate) fn write(&self) -> [u8; 13] {
    let mut out = [0u8; 13];
    out[0..4].copy_from_slice(&self.width.to_be_bytes());
    out[4..8].copy_from_slice(&self.height.to_be_bytes());
    out[8] = Self::BIT_DEPTH;
    out[9] = self.color_type as u8;
    out[10] = 0; // compression method
    out[11] = 0; // filter method
    out[12] = 0; // interlace method
    out
  }
}
