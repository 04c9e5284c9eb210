//! The top-level image facade: decode PNG bytes into a raster you can edit,
//! and re-encode it back, without having to touch the `png` module's
//! chunk-level machinery directly.

use crate::error::PngResult;
use crate::pixel_formats::RGBA8;
use crate::png::{self, EncodeOptions, Metadata};
use crate::raster::Bitmap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CacheState {
  /// The last encoded bytes (if any) still reflect the current raster.
  Clean,
  /// The raster has been mutated since the last encode; cached bytes, if
  /// any, are stale and must be discarded.
  Dirty,
}

/// A decoded PNG: its pixels, its metadata, and (until you mutate it) the
/// bytes it came from.
#[derive(Debug, Clone)]
pub struct Image {
  raster: Bitmap<RGBA8>,
  metadata: Metadata,
  cache_state: CacheState,
  cached_bytes: Option<Vec<u8>>,
  /// The options `cached_bytes` was produced under. `None` right after
  /// `decode`, since the cached bytes are the original input, not output of
  /// this crate's encoder under any particular options; `encode` only trusts
  /// the cache when this still matches the options it was asked for.
  cached_options: Option<EncodeOptions>,
}

impl Image {
  /// Decodes a PNG byte stream into an [`Image`].
  pub fn decode(bytes: &[u8]) -> PngResult<Self> {
    let (raster, metadata) = png::decode(bytes)?;
    Ok(Self {
      raster,
      metadata,
      cache_state: CacheState::Clean,
      cached_bytes: Some(bytes.to_vec()),
      cached_options: None,
    })
  }

  /// Builds an [`Image`] from a raster and metadata you already have, with
  /// no cached encoding.
  pub fn from_parts(raster: Bitmap<RGBA8>, metadata: Metadata) -> Self {
    Self { raster, metadata, cache_state: CacheState::Dirty, cached_bytes: None, cached_options: None }
  }

  /// This image's metadata (color type, text entries, timestamp, ...).
  #[must_use]
  pub fn metadata(&self) -> &Metadata {
    &self.metadata
  }

  /// A shared view of the RGBA8 raster.
  #[must_use]
  pub fn get_matrix(&self) -> &Bitmap<RGBA8> {
    &self.raster
  }

  /// A unique view of the RGBA8 raster. Any reachable mutation invalidates
  /// the cached encoding, since the borrow checker can't tell us whether the
  /// caller actually changed anything.
  pub fn set_matrix(&mut self) -> &mut Bitmap<RGBA8> {
    self.invalidate_cache();
    &mut self.raster
  }

  /// Overwrites every pixel of the raster with `color`, invalidating the
  /// cached encoding the same way `set_matrix` does.
  pub fn fill(&mut self, color: RGBA8) {
    self.invalidate_cache();
    self.raster.pixels.fill(color);
  }

  fn invalidate_cache(&mut self) {
    self.cache_state = CacheState::Dirty;
    self.cached_bytes = None;
    self.cached_options = None;
  }

  /// Re-encodes the raster into PNG bytes.
  ///
  /// If the raster hasn't been mutated since the last `encode` call with
  /// these same `options`, the cached bytes from that call are returned
  /// without doing any work.
  pub fn encode(&mut self, options: EncodeOptions) -> PngResult<Vec<u8>> {
    if self.cache_state == CacheState::Clean && self.cached_options == Some(options) {
      if let Some(bytes) = &self.cached_bytes {
        return Ok(bytes.clone());
      }
    }
    let bytes = png::encode(&self.raster, &self.metadata, options)?;
    self.cache_state = CacheState::Clean;
    self.cached_bytes = Some(bytes.clone());
    self.cached_options = Some(options);
    Ok(bytes)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::png::PngColorType;

  fn tiny_png() -> Vec<u8> {
    let raster = Bitmap { width: 1, height: 1, pixels: vec![RGBA8::new(1, 2, 3, 4)] };
    png::encode(&raster, &Metadata::default(), EncodeOptions::default()).unwrap()
  }

  #[test]
  fn decode_then_encode_without_mutation_reuses_the_cache() {
    let bytes = tiny_png();
    let mut image = Image::decode(&bytes).unwrap();
    let reencoded = image.encode(EncodeOptions::default()).unwrap();
    assert_eq!(reencoded, bytes);
  }

  #[test]
  fn mutating_the_matrix_invalidates_the_cache() {
    let bytes = tiny_png();
    let mut image = Image::decode(&bytes).unwrap();
    image.set_matrix()[(0, 0)] = RGBA8::new(9, 9, 9, 9);
    let reencoded = image.encode(EncodeOptions::default()).unwrap();
    let (decoded, _) = png::decode(&reencoded).unwrap();
    assert_eq!(decoded[(0, 0)], RGBA8::new(9, 9, 9, 9));
    assert_eq!(image.metadata().color_type, PngColorType::TruecolorAlpha);
  }

  #[test]
  fn changing_encode_options_bypasses_the_stale_cache() {
    let bytes = tiny_png();
    let mut image = Image::decode(&bytes).unwrap();
    let default_encoded = image.encode(EncodeOptions::default()).unwrap();
    let palette_opts = EncodeOptions { use_palette: true, ..EncodeOptions::default() };
    let palette_encoded = image.encode(palette_opts).unwrap();
    assert_ne!(default_encoded, palette_encoded);
    let (_, metadata) = png::decode(&palette_encoded).unwrap();
    assert_eq!(metadata.color_type, PngColorType::Indexed);
  }

  #[test]
  fn fill_overwrites_every_pixel_and_invalidates_the_cache() {
    let raster = Bitmap { width: 2, height: 2, pixels: vec![RGBA8::new(1, 2, 3, 4); 4] };
    let mut image = Image::from_parts(raster, Metadata::default());
    let _ = image.encode(EncodeOptions::default()).unwrap();
    image.fill(RGBA8::new(9, 9, 9, 9));
    let bytes = image.encode(EncodeOptions::default()).unwrap();
    let (decoded, _) = png::decode(&bytes).unwrap();
    assert!(decoded.pixels.iter().all(|&p| p == RGBA8::new(9, 9, 9, 9)));
  }
}
