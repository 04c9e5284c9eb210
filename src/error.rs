use core::fmt;

/// An error produced while decoding or encoding a PNG.
///
/// Decode errors are fatal for the call that produced them: no partial
/// [`Image`](crate::image::Image) is ever handed back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PngError {
  /// The input doesn't start with the 8-byte PNG signature.
  BadMagic,
  /// The byte stream ran out mid-chunk (short length, type, data, or CRC).
  TruncatedStream,
  /// A chunk's stored CRC didn't match the CRC computed over `type‖data`.
  CrcMismatch,
  /// A chunk's type field wasn't four ASCII letters.
  BadChunkType,
  /// `IHDR`'s fields fall outside the profile this codec supports.
  InvalidHeader,
  /// Color type 3 (indexed) was used without a preceding `PLTE` chunk.
  MissingPalette,
  /// A scanline's filter-type byte was not in `0..=4`, or the inflated
  /// payload's length didn't match the dimensions declared by `IHDR`.
  MalformedRow,
  /// The zlib inflate or deflate step failed.
  CompressionError,
  /// The image value passed to `encode` is internally inconsistent (zero
  /// dimensions, a raster that doesn't match `width * height`, a palette of
  /// more than 256 colors, etc).
  InvalidImage,
}

impl fmt::Display for PngError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::BadMagic => "input does not start with the PNG signature",
      Self::TruncatedStream => "byte stream ended in the middle of a chunk",
      Self::CrcMismatch => "chunk CRC did not match the computed CRC",
      Self::BadChunkType => "chunk type is not four ASCII letters",
      Self::InvalidHeader => "IHDR fields are outside the supported profile",
      Self::MissingPalette => "indexed color type used without a PLTE chunk",
      Self::MalformedRow => "scanline filter byte or length is invalid",
      Self::CompressionError => "zlib inflate or deflate failed",
      Self::InvalidImage => "image value is inconsistent for encoding",
    })
  }
}

impl std::error::Error for PngError {}

/// Shorthand for `Result<T, PngError>`.
pub type PngResult<T> = Result<T, PngError>;
