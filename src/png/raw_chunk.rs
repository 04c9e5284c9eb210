//! The chunk framer: splits a byte stream into `(length, type, data, crc)`
//! records, and the symmetric writer that re-emits them.

use super::crc32::chunk_crc;
use crate::error::{PngError, PngResult};

/// An unparsed chunk straight off the wire: a 4-byte type tag, the data
/// slice it covers, and its CRC (already verified against `type‖data` by the
/// time you see one from [`RawChunkIter`]).
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawChunk<'b> {
  pub ty: [u8; 4],
  pub data: &'b [u8],
  pub crc: u32,
}

fn is_chunk_type_byte(b: u8) -> bool {
  b.is_ascii_alphabetic()
}

/// Iterates the chunk records of a PNG byte stream positioned just after the
/// 8-byte signature.
///
/// Yields `Err` and then stops (the iterator is fused on error) as soon as a
/// record is short, has a non-alphabetic type byte, or fails its CRC check.
pub(crate) struct RawChunkIter<'b> {
  rest: &'b [u8],
  done: bool,
}
impl<'b> RawChunkIter<'b> {
  #[inline]
  pub fn new(bytes_after_signature: &'b [u8]) -> Self {
    Self { rest: bytes_after_signature, done: false }
  }
}
impl<'b> Iterator for RawChunkIter<'b> {
  type Item = PngResult<RawChunk<'b>>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.done || self.rest.is_empty() {
      return None;
    }
    let mut fail = |e: PngError| -> Option<Self::Item> {
      self.done = true;
      Some(Err(e))
    };

    let (len_bytes, rest) = match try_split(self.rest, 4) {
      Some(pair) => pair,
      None => return fail(PngError::TruncatedStream),
    };
    let length = u32::from_be_bytes(len_bytes.try_into().unwrap()) as usize;

    let (ty_bytes, rest) = match try_split(rest, 4) {
      Some(pair) => pair,
      None => return fail(PngError::TruncatedStream),
    };
    let ty: [u8; 4] = ty_bytes.try_into().unwrap();
    if !ty.iter().copied().all(is_chunk_type_byte) {
      return fail(PngError::BadChunkType);
    }

    let (data, rest) = match try_split(rest, length) {
      Some(pair) => pair,
      None => return fail(PngError::TruncatedStream),
    };

    let (crc_bytes, rest) = match try_split(rest, 4) {
      Some(pair) => pair,
      None => return fail(PngError::TruncatedStream),
    };
    let crc = u32::from_be_bytes(crc_bytes.try_into().unwrap());

    if chunk_crc(ty, data) != crc {
      return fail(PngError::CrcMismatch);
    }

    self.rest = rest;
    Some(Ok(RawChunk { ty, data, crc }))
  }
}

fn try_split(bytes: &[u8], n: usize) -> Option<(&[u8], &[u8])> {
  if bytes.len() >= n {
    Some(bytes.split_at(n))
  } else {
    None
  }
}

/// Appends one complete chunk record (`length ‖ type ‖ data ‖ crc`) to `out`.
pub(crate) fn write_chunk(out: &mut Vec<u8>, ty: [u8; 4], data: &[u8]) {
  out.extend_from_slice(&(data.len() as u32).to_be_bytes());
  out.extend_from_slice(&ty);
  out.extend_from_slice(data);
  out.extend_from_slice(&chunk_crc(ty, data).to_be_bytes());
}
