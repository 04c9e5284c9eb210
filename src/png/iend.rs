//! `IEND`: the end-of-stream marker. Always empty, always last.

use crate::error::{PngError, PngResult};

pub(crate) fn parse(data: &[u8]) -> PngResult<()> {
  if data.is_empty() {
    Ok(())
  } else {
    Err(PngError::InvalidHeader)
  }
}
