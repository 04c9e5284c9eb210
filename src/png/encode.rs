//! The encode pipeline: color-model packing, scanline filtering, deflate,
//! and chunk assembly.

use super::decode::Metadata;
use super::deflate;
use super::filter;
use super::ihdr::{PngColorType, IHDR};
use super::raw_chunk::write_chunk;
use super::text;
use super::time;
use super::PNG_SIGNATURE;
use crate::error::{PngError, PngResult};
use crate::pixel_formats::RGBA8;
use crate::raster::Bitmap;

/// Knobs for [`encode`] that don't change the decoded meaning of the image,
/// only how it's packed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
  /// Emit an indexed-color (`PLTE`) image instead of truecolor+alpha, if the
  /// raster uses 256 or fewer distinct colors.
  pub use_palette: bool,
  /// The scanline filter type (`0..=4`) applied to every row.
  pub filter_type: u8,
}
impl Default for EncodeOptions {
  #[inline]
  fn default() -> Self {
    Self { use_palette: false, filter_type: 0 }
  }
}

/// Encodes a raster and its metadata back into PNG bytes.
pub fn encode(bitmap: &Bitmap<RGBA8>, metadata: &Metadata, options: EncodeOptions) -> PngResult<Vec<u8>> {
  if bitmap.width == 0 || bitmap.height == 0 {
    return Err(PngError::InvalidImage);
  }
  if bitmap.pixels.len() != (bitmap.width as usize) * (bitmap.height as usize) {
    return Err(PngError::InvalidImage);
  }
  if !(0..=4).contains(&options.filter_type) {
    return Err(PngError::InvalidImage);
  }

  let packed = if options.use_palette {
    pack_indexed(bitmap)?
  } else {
    PackedRaster {
      color_type: PngColorType::TruecolorAlpha,
      bytes_per_pixel: 4,
      row_bytes: bitmap
        .pixels
        .chunks_exact(bitmap.width as usize)
        .map(|row| bytemuck::cast_slice::<RGBA8, u8>(row).to_vec())
        .collect(),
      palette: None,
      trns: None,
    }
  };

  let ihdr = IHDR { width: bitmap.width, height: bitmap.height, color_type: packed.color_type };

  let mut out = Vec::new();
  out.extend_from_slice(&PNG_SIGNATURE);
  write_chunk(&mut out, *b"IHDR", &ihdr.write());
  if let Some(palette) = &packed.palette {
    write_chunk(&mut out, *b"PLTE", &super::plte::write(palette));
  }
  if let Some(trns) = &packed.trns {
    write_chunk(&mut out, *b"tRNS", trns);
  }
  for entry in &metadata.text {
    write_chunk(&mut out, *b"tEXt", &text::write(entry));
  }
  if let Some(t) = &metadata.time {
    write_chunk(&mut out, *b"tIME", &time::write(t));
  }

  let idat_payload = deflate::deflate(&filter_and_concat(&packed.row_bytes, packed.bytes_per_pixel, options.filter_type));
  write_chunk(&mut out, *b"IDAT", &idat_payload);
  write_chunk(&mut out, *b"IEND", &[]);
  Ok(out)
}

struct PackedRaster {
  color_type: PngColorType,
  bytes_per_pixel: usize,
  row_bytes: Vec<Vec<u8>>,
  palette: Option<Vec<RGBA8>>,
  trns: Option<Vec<u8>>,
}

fn pack_indexed(bitmap: &Bitmap<RGBA8>) -> PngResult<PackedRaster> {
  let mut palette: Vec<RGBA8> = Vec::new();
  let mut indices = Vec::with_capacity(bitmap.pixels.len());
  for &pixel in &bitmap.pixels {
    let index = match palette.iter().position(|&entry| entry == pixel) {
      Some(i) => i,
      None => {
        if palette.len() >= 256 {
          return Err(PngError::InvalidImage);
        }
        palette.push(pixel);
        palette.len() - 1
      }
    };
    indices.push(index as u8);
  }

  let trns = if palette.iter().any(|entry| entry.a != 255) {
    Some(palette.iter().map(|entry| entry.a).collect())
  } else {
    None
  };

  let row_bytes =
    indices.chunks_exact(bitmap.width as usize).map(<[u8]>::to_vec).collect();

  Ok(PackedRaster {
    color_type: PngColorType::Indexed,
    bytes_per_pixel: 1,
    row_bytes,
    palette: Some(palette),
    trns,
  })
}

fn filter_and_concat(rows: &[Vec<u8>], stride: usize, filter_type: u8) -> Vec<u8> {
  let mut out = Vec::with_capacity(rows.len() * (rows.first().map_or(0, Vec::len) + 1));
  let mut prev: Option<&[u8]> = None;
  for row in rows {
    out.push(filter_type);
    out.extend(filter::apply_row(row, prev, stride, filter_type));
    prev = Some(row);
  }
  out
}
