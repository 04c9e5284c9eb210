use pngrs::error::PngError;
use pngrs::image::Image;
use pngrs::pixel_formats::RGBA8;
use pngrs::png::{self, EncodeOptions, Metadata, TextEntry};
use pngrs::raster::Bitmap;

const SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// A from-scratch CRC-32 used only to build test fixtures by hand; it is
/// deliberately independent of the crate's own implementation.
fn fixture_crc32(bytes: &[u8]) -> u32 {
  let mut crc: u32 = 0xFFFF_FFFF;
  for &byte in bytes {
    crc ^= byte as u32;
    for _ in 0..8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ 0xEDB8_8320 } else { crc >> 1 };
    }
  }
  crc ^ 0xFFFF_FFFF
}

fn push_chunk(out: &mut Vec<u8>, ty: &[u8; 4], data: &[u8]) {
  out.extend_from_slice(&(data.len() as u32).to_be_bytes());
  out.extend_from_slice(ty);
  out.extend_from_slice(data);
  let mut covered = ty.to_vec();
  covered.extend_from_slice(data);
  out.extend_from_slice(&fixture_crc32(&covered).to_be_bytes());
}

fn zlib_compress(raw: &[u8]) -> Vec<u8> {
  miniz_oxide::deflate::compress_to_vec_zlib(raw, 6)
}

#[test]
fn s1_five_by_five_red_truecolor_alpha_encode() {
  let bitmap = Bitmap { width: 5, height: 5, pixels: vec![RGBA8::new(255, 0, 0, 255); 25] };
  let bytes = png::encode(&bitmap, &Metadata::default(), EncodeOptions::default()).unwrap();

  assert_eq!(&bytes[0..8], &SIGNATURE);
  // IHDR: length(4) + "IHDR" + 13 bytes of fields, right after the signature.
  assert_eq!(&bytes[12..16], b"IHDR");
  assert_eq!(u32::from_be_bytes(bytes[16..20].try_into().unwrap()), 5); // width
  assert_eq!(u32::from_be_bytes(bytes[20..24].try_into().unwrap()), 5); // height
  assert_eq!(bytes[24], 8); // bit depth
  assert_eq!(bytes[25], 6); // color type: truecolor+alpha

  let idat_count = bytes.windows(4).filter(|w| *w == b"IDAT").count();
  assert_eq!(idat_count, 1);
  assert!(bytes.ends_with(b"IEND\xae\x42\x60\x82"));

  let (decoded, _) = png::decode(&bytes).unwrap();
  assert_eq!(decoded, bitmap);
}

#[test]
fn s2_two_by_two_palette_decode() {
  let mut bytes = SIGNATURE.to_vec();
  let mut ihdr = Vec::new();
  ihdr.extend_from_slice(&2u32.to_be_bytes());
  ihdr.extend_from_slice(&2u32.to_be_bytes());
  ihdr.extend_from_slice(&[8, 3, 0, 0, 0]);
  push_chunk(&mut bytes, b"IHDR", &ihdr);
  push_chunk(&mut bytes, b"PLTE", &[0, 0, 0, 255, 255, 255]);
  push_chunk(&mut bytes, b"tRNS", &[0x00, 0xFF]);
  let raw = [0x00, 0x00, 0x01, 0x00, 0x01, 0x00];
  push_chunk(&mut bytes, b"IDAT", &zlib_compress(&raw));
  push_chunk(&mut bytes, b"IEND", &[]);

  let (decoded, _) = png::decode(&bytes).unwrap();
  assert_eq!(decoded.width, 2);
  assert_eq!(decoded.height, 2);
  assert_eq!(
    decoded.pixels,
    vec![
      RGBA8::new(0, 0, 0, 0),
      RGBA8::new(255, 255, 255, 255),
      RGBA8::new(255, 255, 255, 255),
      RGBA8::new(0, 0, 0, 0),
    ]
  );
}

#[test]
fn s5_crc_mismatch_is_rejected() {
  let bitmap = Bitmap { width: 1, height: 1, pixels: vec![RGBA8::new(1, 2, 3, 4)] };
  let mut bytes = png::encode(&bitmap, &Metadata::default(), EncodeOptions::default()).unwrap();
  // Flip a data byte inside the IHDR chunk's payload without touching its CRC.
  let ihdr_width_byte = 19; // last byte of the big-endian width field
  bytes[ihdr_width_byte] ^= 0xFF;
  assert_eq!(png::decode(&bytes), Err(PngError::CrcMismatch));
}

#[test]
fn s6_text_chunk_round_trips_through_decode_and_encode() {
  let bitmap = Bitmap { width: 1, height: 1, pixels: vec![RGBA8::new(0, 0, 0, 0)] };
  let metadata = Metadata {
    text: vec![TextEntry { keyword: "Comment".into(), value: "hello".into() }],
    ..Metadata::default()
  };
  let bytes = png::encode(&bitmap, &metadata, EncodeOptions::default()).unwrap();
  let (_, decoded_metadata) = png::decode(&bytes).unwrap();
  assert_eq!(decoded_metadata.text, metadata.text);

  let bytes_again = png::encode(&bitmap, &decoded_metadata, EncodeOptions::default()).unwrap();
  let (_, decoded_again) = png::decode(&bytes_again).unwrap();
  assert_eq!(decoded_again.text, metadata.text);
}

#[test]
fn unknown_ancillary_chunk_does_not_change_the_decoded_raster() {
  let bitmap = Bitmap { width: 1, height: 1, pixels: vec![RGBA8::new(9, 8, 7, 6)] };
  let bytes = png::encode(&bitmap, &Metadata::default(), EncodeOptions::default()).unwrap();

  // Splice a well-formed, unknown ancillary chunk ("prVt") in right after IHDR.
  let ihdr_end = 8 + 4 + 4 + 13 + 4; // signature + length + type + IHDR payload + crc
  let mut spliced = bytes[..ihdr_end].to_vec();
  push_chunk(&mut spliced, b"prVt", b"does not matter");
  spliced.extend_from_slice(&bytes[ihdr_end..]);

  let (decoded, _) = png::decode(&spliced).unwrap();
  let (original, _) = png::decode(&bytes).unwrap();
  assert_eq!(decoded, original);
}

#[test]
fn palette_round_trip_for_a_raster_with_few_distinct_colors() {
  let palette =
    [RGBA8::new(0, 0, 0, 255), RGBA8::new(255, 0, 0, 255), RGBA8::new(0, 255, 0, 255)];
  let pixels: Vec<RGBA8> = (0..16).map(|i| palette[i % palette.len()]).collect();
  let bitmap = Bitmap { width: 4, height: 4, pixels };
  let opts = EncodeOptions { use_palette: true, ..EncodeOptions::default() };
  let bytes = png::encode(&bitmap, &Metadata::default(), opts).unwrap();
  let (decoded, metadata) = png::decode(&bytes).unwrap();
  assert_eq!(decoded, bitmap);
  assert_eq!(metadata.color_type, png::PngColorType::Indexed);
}

#[test]
fn image_facade_decode_mutate_encode_round_trip() {
  let bitmap = Bitmap { width: 3, height: 1, pixels: vec![RGBA8::new(1, 1, 1, 255); 3] };
  let bytes = png::encode(&bitmap, &Metadata::default(), EncodeOptions::default()).unwrap();
  let mut image = Image::decode(&bytes).unwrap();
  image.set_matrix()[(1, 0)] = RGBA8::new(200, 0, 0, 255);
  let out = image.encode(EncodeOptions::default()).unwrap();
  let (decoded, _) = png::decode(&out).unwrap();
  assert_eq!(decoded[(1, 0)], RGBA8::new(200, 0, 0, 255));
  assert_eq!(decoded[(0, 0)], RGBA8::new(1, 1, 1, 255));
}

#[test]
fn decoder_never_panics_on_random_bytes() {
  for _ in 0..50 {
    let bytes = super::rand_bytes(256);
    let _ = png::decode(&bytes);
  }
}
