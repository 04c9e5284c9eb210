//! `IDAT`: compressed image data. Multiple occurrences concatenate into one
//! zlib stream before inflate — this is required, never optional.

/// Concatenates every `IDAT` chunk's payload, in stream order, into a
/// single buffer ready for [`crate::png::deflate::inflate`].
pub(crate) fn concat_payloads<'b>(chunks: impl Iterator<Item = &'b [u8]>) -> Vec<u8> {
  let mut out = Vec::new();
  for data in chunks {
    out.extend_from_slice(data);
  }
  out
}
