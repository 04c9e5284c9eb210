//! The tagged, owned representation of one PNG chunk: [`RawChunk`] after its
//! type-specific payload has been parsed.

use super::idat;
use super::iend;
use super::ihdr::IHDR;
use super::plte;
use super::raw_chunk::RawChunk;
use super::text::{self, TextEntry};
use super::time::{self, PngTime};
use super::ztxt;
use crate::error::PngResult;
use crate::pixel_formats::RGBA8;

/// One chunk, parsed into its typed payload where this codec recognizes the
/// type, or kept as opaque bytes otherwise.
///
/// `tRNS` is kept as raw bytes rather than parsed here: interpreting it
/// depends on the color type declared by `IHDR`, which this enum has no
/// access to in isolation — the decode pipeline resolves it once the color
/// type is known.
pub(crate) enum PngChunk {
  Ihdr(IHDR),
  Plte(Vec<RGBA8>),
  Trns(Vec<u8>),
  Idat(Vec<u8>),
  Text(TextEntry),
  ZText(TextEntry),
  Time(PngTime),
  Iend,
  Unknown([u8; 4], Vec<u8>),
}

impl PngChunk {
  pub(crate) fn parse(raw: RawChunk<'_>) -> PngResult<Self> {
    Ok(match &raw.ty {
      b"IHDR" => Self::Ihdr(IHDR::parse(raw.data)?),
      b"PLTE" => Self::Plte(plte::parse(raw.data)?),
      b"tRNS" => Self::Trns(raw.data.to_vec()),
      b"IDAT" => Self::Idat(raw.data.to_vec()),
      b"tEXt" => Self::Text(text::parse(raw.data)?),
      b"zTXt" => Self::ZText(ztxt::parse(raw.data)?),
      b"tIME" => Self::Time(time::parse(raw.data)?),
      b"IEND" => {
        iend::parse(raw.data)?;
        Self::Iend
      }
      _ => Self::Unknown(raw.ty, raw.data.to_vec()),
    })
  }
}
