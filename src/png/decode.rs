//! The decode pipeline: signature check, chunk framing, `IDAT` inflate,
//! scanline reconstruction, and color-model conversion into a canonical
//! RGBA8 raster.

use super::chunk::PngChunk;
use super::deflate;
use super::filter;
use super::idat;
use super::ihdr::{PngColorType, IHDR};
use super::raw_chunk::RawChunkIter;
use super::text::TextEntry;
use super::time::PngTime;
use super::trns::{self, Transparency};
use super::PNG_SIGNATURE;
use crate::error::{PngError, PngResult};
use crate::pixel_formats::{RGB8, RGBA8, YA8, Y8};
use crate::raster::Bitmap;

/// Everything decoded from a PNG's ancillary chunks, separate from the
/// pixel raster itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
  pub color_type: PngColorType,
  pub text: Vec<TextEntry>,
  pub time: Option<PngTime>,
  /// Only populated for color types 0 and 2 — indexed-color transparency is
  /// folded into the palette's alpha channel instead, by [`decode`].
  pub transparency_key: Option<Transparency>,
}

/// Decodes a complete PNG byte stream into a canonical RGBA8 raster plus its
/// metadata.
pub fn decode(bytes: &[u8]) -> PngResult<(Bitmap<RGBA8>, Metadata)> {
  let after_sig = bytes.strip_prefix(&PNG_SIGNATURE).ok_or(PngError::BadMagic)?;

  let mut chunks = RawChunkIter::new(after_sig).map(|raw| raw.and_then(PngChunk::parse));
  let ihdr = match chunks.next() {
    Some(Ok(PngChunk::Ihdr(header))) => header,
    Some(Ok(_)) => return Err(PngError::InvalidHeader),
    Some(Err(e)) => return Err(e),
    None => return Err(PngError::TruncatedStream),
  };
  let ihdr = Some(ihdr);
  let mut palette: Vec<RGBA8> = Vec::new();
  let mut trns_bytes: Option<Vec<u8>> = None;
  let mut idat_payloads: Vec<Vec<u8>> = Vec::new();
  let mut text = Vec::new();
  let mut time = None;
  let mut seen_iend = false;

  for parsed in chunks {
    crate::trace!("decode: next chunk -> ok={}", parsed.is_ok());
    if seen_iend {
      // IEND must be the last chunk; anything after it is a malformed stream.
      return Err(PngError::TruncatedStream);
    }
    match parsed? {
      PngChunk::Ihdr(_) => return Err(PngError::InvalidHeader),
      PngChunk::Plte(entries) => {
        if ihdr.is_none() {
          return Err(PngError::InvalidHeader);
        }
        palette = entries;
      }
      PngChunk::Trns(data) => trns_bytes = Some(data),
      PngChunk::Idat(data) => idat_payloads.push(data),
      PngChunk::Text(entry) => text.push(entry),
      PngChunk::ZText(entry) => text.push(entry),
      PngChunk::Time(t) => time = Some(t),
      PngChunk::Iend => seen_iend = true,
      // Ancillary chunks this codec doesn't know about are ignored, per
      // the PNG standard's forward-compatibility rule.
      PngChunk::Unknown(..) => {}
    }
  }
  if !seen_iend {
    return Err(PngError::TruncatedStream);
  }
  let ihdr = ihdr.ok_or(PngError::InvalidHeader)?;

  if ihdr.color_type == PngColorType::Indexed && palette.is_empty() {
    return Err(PngError::MissingPalette);
  }

  let mut transparency_key = None;
  if let Some(data) = trns_bytes {
    match ihdr.color_type {
      PngColorType::Indexed => trns::apply_to_palette(&mut palette, &data),
      PngColorType::Grayscale | PngColorType::Truecolor => {
        transparency_key = Some(trns::parse_key(ihdr.color_type, &data)?);
      }
      _ => return Err(PngError::InvalidHeader),
    }
  }

  if idat_payloads.is_empty() {
    return Err(PngError::TruncatedStream);
  }
  let compressed = idat::concat_payloads(idat_payloads.iter().map(Vec::as_slice));
  let decompressed = deflate::inflate(&compressed)?;

  let pixels = unfilter_and_unpack(&ihdr, &decompressed, &palette)?;

  let bitmap = Bitmap { width: ihdr.width, height: ihdr.height, pixels };
  let metadata = Metadata { color_type: ihdr.color_type, text, time, transparency_key };
  Ok((bitmap, metadata))
}

fn unfilter_and_unpack(ihdr: &IHDR, decompressed: &[u8], palette: &[RGBA8]) -> PngResult<Vec<RGBA8>> {
  let stride = ihdr.bytes_per_pixel();
  let row_len = ihdr.bytes_per_row();
  let filterline_len = ihdr.bytes_per_filterline();
  let height = ihdr.height as usize;

  if decompressed.len() != filterline_len * height {
    return Err(PngError::MalformedRow);
  }

  let mut pixels = Vec::with_capacity(ihdr.width as usize * height);
  let mut prev_row: Option<Vec<u8>> = None;
  for row_bytes in decompressed.chunks_exact(filterline_len) {
    let (&filter_type, row) = row_bytes.split_first().expect("filterline is never empty");
    let mut row = row.to_vec();
    filter::reconstruct_row(&mut row, prev_row.as_deref(), stride, filter_type)?;
    unpack_row(ihdr.color_type, &row, palette, &mut pixels)?;
    debug_assert_eq!(row.len(), row_len);
    prev_row = Some(row);
  }
  Ok(pixels)
}

fn unpack_row(
  color_type: PngColorType, row: &[u8], palette: &[RGBA8], out: &mut Vec<RGBA8>,
) -> PngResult<()> {
  match color_type {
    PngColorType::Grayscale => {
      out.extend(row.iter().map(|&y| RGBA8::from(Y8 { y })));
    }
    PngColorType::GrayscaleAlpha => {
      out.extend(row.chunks_exact(2).map(|c| RGBA8::from(YA8 { y: c[0], a: c[1] })));
    }
    PngColorType::Truecolor => {
      out.extend(row.chunks_exact(3).map(|c| RGBA8::from(RGB8 { r: c[0], g: c[1], b: c[2] })));
    }
    PngColorType::TruecolorAlpha => {
      out.extend(row.chunks_exact(4).map(|c| RGBA8::new(c[0], c[1], c[2], c[3])));
    }
    PngColorType::Indexed => {
      for &index in row {
        out.push(*palette.get(index as usize).ok_or(PngError::InvalidImage)?);
      }
    }
  }
  Ok(())
}
