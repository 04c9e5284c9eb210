//! `zTXt`: zlib-compressed Latin-1 key/value text.

use super::deflate;
use super::text::{validate_keyword, TextEntry};
use crate::error::PngError;
use crate::error::PngResult;

fn latin1_to_string(bytes: &[u8]) -> String {
  bytes.iter().map(|&b| b as char).collect()
}

fn string_to_latin1(s: &str) -> Vec<u8> {
  s.chars().map(|c| c as u8).collect()
}

/// Parses a `zTXt` chunk: `keyword ‖ NUL ‖ compression_method ‖ deflated
/// value`. Only `compression_method == 0` is legal.
pub(crate) fn parse(data: &[u8]) -> PngResult<TextEntry> {
  let nul_pos = data.iter().position(|&b| b == 0).ok_or(PngError::InvalidHeader)?;
  let (keyword_bytes, rest) = data.split_at(nul_pos);
  let &[compression_method, ref compressed @ ..] = &rest[1..] else {
    return Err(PngError::InvalidHeader);
  };
  if compression_method != 0 {
    return Err(PngError::InvalidHeader);
  }
  let value_bytes = deflate::inflate(compressed)?;
  let keyword = latin1_to_string(keyword_bytes);
  validate_keyword(&keyword)?;
  Ok(TextEntry { keyword, value: latin1_to_string(&value_bytes) })
}

/// Serializes a [`TextEntry`] back into `zTXt`'s payload shape.
pub(crate) fn write(entry: &TextEntry) -> PngResult<Vec<u8>> {
  let mut out = string_to_latin1(&entry.keyword);
  out.push(0);
  out.push(0); // compression method
  out.extend(deflate::deflate(&string_to_latin1(&entry.value)));
  Ok(out)
}
