//! The five PNG scanline filters: reconstruction (decode) and application
//! (encode). Filters operate on bytes, not pixels — the `stride` parameter
//! (bytes-per-pixel) is what gives `Sub`/`Average`/`Paeth` their notion of
//! "the pixel to the left".

use crate::error::{PngError, PngResult};

/// The Paeth predictor: whichever of `a`, `b`, `c` is closest to
/// `a + b - c`, ties broken in the order `a`, then `b`, then `c`.
fn paeth_predictor(a: u8, b: u8, c: u8) -> u8 {
  let a_ = a as i32;
  let b_ = b as i32;
  let c_ = c as i32;
  let p = a_ + b_ - c_;
  let pa = (p - a_).abs();
  let pb = (p - b_).abs();
  let pc = (p - c_).abs();
  // The PNG spec is explicit that this tie-break order must not change.
  if pa <= pb && pa <= pc {
    a
  } else if pb <= pc {
    b
  } else {
    c
  }
}

fn average(a: u8, b: u8) -> u8 {
  ((a as u16 + b as u16) >> 1) as u8
}

/// Reconstructs one scanline in place.
///
/// * `cur` is the row's filtered bytes on entry, its unfiltered bytes on
///   exit (the leading filter-type byte is not part of this slice).
/// * `prev` is the previous row's already-reconstructed bytes, or `None` for
///   the first row of the image.
/// * `stride` is the number of bytes per pixel.
pub(crate) fn reconstruct_row(
  cur: &mut [u8], prev: Option<&[u8]>, stride: usize, filter_type: u8,
) -> PngResult<()> {
  for i in 0..cur.len() {
    let a = if i >= stride { cur[i - stride] } else { 0 };
    let b = prev.map_or(0, |p| p[i]);
    let c = if i >= stride { prev.map_or(0, |p| p[i - stride]) } else { 0 };
    let x = cur[i];
    cur[i] = match filter_type {
      0 => x,
      1 => x.wrapping_add(a),
      2 => x.wrapping_add(b),
      3 => x.wrapping_add(average(a, b)),
      4 => x.wrapping_add(paeth_predictor(a, b, c)),
      _ => return Err(PngError::MalformedRow),
    };
  }
  Ok(())
}

/// Applies a filter to one scanline of already-unfiltered (original) bytes,
/// producing the filtered bytes that would appear on the wire.
///
/// `cur` and `prev` hold ORIGINAL (unfiltered) pixel bytes; this is the
/// exact inverse of [`reconstruct_row`].
pub(crate) fn apply_row(cur: &[u8], prev: Option<&[u8]>, stride: usize, filter_type: u8) -> Vec<u8> {
  let mut out = vec![0u8; cur.len()];
  for i in 0..cur.len() {
    let a = if i >= stride { cur[i - stride] } else { 0 };
    let b = prev.map_or(0, |p| p[i]);
    let c = if i >= stride { prev.map_or(0, |p| p[i - stride]) } else { 0 };
    let x = cur[i];
    out[i] = match filter_type {
      0 => x,
      1 => x.wrapping_sub(a),
      2 => x.wrapping_sub(b),
      3 => x.wrapping_sub(average(a, b)),
      4 => x.wrapping_sub(paeth_predictor(a, b, c)),
      _ => unreachable!("filter_type is always produced in-crate as 0..=4"),
    };
  }
  out
}
