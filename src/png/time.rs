//! `tIME`: the last-modification timestamp.

use crate::error::{PngError, PngResult};

/// A parsed `tIME` chunk: fixed 7 bytes, year as big-endian `u16`, then five
/// `u8` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngTime {
  pub year: u16,
  pub month: u8,
  pub day: u8,
  pub hour: u8,
  pub minute: u8,
  pub second: u8,
}

pub(crate) fn parse(data: &[u8]) -> PngResult<PngTime> {
  let &[y0, y1, month, day, hour, minute, second] = data else {
    return Err(PngError::InvalidHeader);
  };
  Ok(PngTime { year: u16::from_be_bytes([y0, y1]), month, day, hour, minute, second })
}

pub(crate) fn write(time: &PngTime) -> [u8; 7] {
  let [y0, y1] = time.year.to_be_bytes();
  [y0, y1, time.month, time.day, time.hour, time.minute, time.second]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn round_trips() {
    let time = PngTime { year: 2024, month: 3, day: 14, hour: 9, minute: 26, second: 53 };
    assert_eq!(parse(&write(&time)).unwrap(), time);
  }
}
