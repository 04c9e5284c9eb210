//! `tEXt`: uncompressed Latin-1 key/value text.

use crate::error::{PngError, PngResult};

/// One decoded key/value text entry, from either `tEXt` or `zTXt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEntry {
  pub keyword: String,
  pub value: String,
}

fn latin1_to_string(bytes: &[u8]) -> String {
  bytes.iter().map(|&b| b as char).collect()
}

fn string_to_latin1(s: &str) -> Vec<u8> {
  s.chars().map(|c| c as u8).collect()
}

pub(crate) fn validate_keyword(keyword: &str) -> PngResult<()> {
  let len = keyword.len();
  if !(1..=79).contains(&len) {
    return Err(PngError::InvalidHeader);
  }
  if keyword.starts_with(' ') || keyword.ends_with(' ') || keyword.contains('\0') {
    return Err(PngError::InvalidHeader);
  }
  Ok(())
}

/// Parses a `tEXt` chunk: `keyword ‖ NUL ‖ value`, both Latin-1.
pub(crate) fn parse(data: &[u8]) -> PngResult<TextEntry> {
  let nul_pos = data.iter().position(|&b| b == 0).ok_or(PngError::InvalidHeader)?;
  let (keyword_bytes, rest) = data.split_at(nul_pos);
  let value_bytes = &rest[1..];
  let keyword = latin1_to_string(keyword_bytes);
  validate_keyword(&keyword)?;
  Ok(TextEntry { keyword, value: latin1_to_string(value_bytes) })
}

/// Serializes a [`TextEntry`] back into `tEXt`'s payload shape.
pub(crate) fn write(entry: &TextEntry) -> Vec<u8> {
  let mut out = string_to_latin1(&entry.keyword);
  out.push(0);
  out.extend(string_to_latin1(&entry.value));
  out
}
