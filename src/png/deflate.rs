//! Wraps the external DEFLATE implementation. The rest of the codec only
//! ever sees `compress(bytes) -> bytes` / `decompress(bytes) -> bytes`.

use crate::error::{PngError, PngResult};

/// Inflates a zlib-wrapped stream (the concatenation of every `IDAT`
/// chunk's payload, or a `zTXt` value).
pub(crate) fn inflate(compressed: &[u8]) -> PngResult<Vec<u8>> {
  miniz_oxide::inflate::decompress_to_vec_zlib(compressed).map_err(|_| PngError::CompressionError)
}

/// Deflates raw bytes into a zlib-wrapped stream, at the default
/// compression level.
pub(crate) fn deflate(raw: &[u8]) -> Vec<u8> {
  miniz_oxide::deflate::compress_to_vec_zlib(raw, 6)
}
