//! PNG support: decode a byte stream into an [`crate::image::Image`], and
//! encode one back.
//!
//! The format is a chunk stream. Three modules make up the wire-level
//! framing ([`crc32`], [`raw_chunk`], [`chunk`]); the rest parse individual
//! chunk payloads ([`ihdr`], [`plte`], [`trns`], [`idat`], [`text`],
//! [`ztxt`], [`time`], [`iend`]), and [`filter`]/[`deflate`] undo the two
//! transforms applied to the pixel data before it's ever split into chunks.
//! [`decode`] and [`encode`] wire all of it together into the two directions
//! callers actually use.

pub(crate) mod chunk;
pub(crate) mod crc32;
pub(crate) mod decode;
pub(crate) mod deflate;
pub(crate) mod encode;
pub(crate) mod idat;
pub(crate) mod iend;
pub mod ihdr;
pub(crate) mod plte;
pub(crate) mod raw_chunk;
pub mod text;
pub mod time;
pub mod trns;
pub(crate) mod filter;
pub(crate) mod ztxt;

pub use decode::{decode, Metadata};
pub use encode::{encode, EncodeOptions};
pub use ihdr::PngColorType;
pub use text::TextEntry;
pub use time::PngTime;
pub use trns::Transparency;

/// The first eight bytes of every PNG byte stream.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];
