use super::*;
use alloc::{vec, vec::Vec};

fn ihdr_data(width: u32, height: u32) -> Vec<u8> {
  ihdr_data_with(width, height, 8, 6)
}

fn ihdr_data_with(width: u32, height: u32, bit_depth: u8, color_type: u8) -> Vec<u8> {
  let mut data = Vec::new();
  data.extend_from_slice(&width.to_be_bytes());
  data.extend_from_slice(&height.to_be_bytes());
  data.extend_from_slice(&[bit_depth, color_type, 0, 0, 0]);
  data
}

fn png_bytes(chunks: &[PngChunk<'_>]) -> Vec<u8> {
  let mut out = PNG_SIGNATURE.to_vec();
  out.extend(write_png_chunks(chunks));
  out
}

fn still_png(width: u32, height: u32, idats: &[&[u8]]) -> Vec<u8> {
  let mut chunks = vec![PngChunk::new(PngChunkKind::IHDR, ihdr_data(width, height))];
  for idat in idats {
    chunks.push(PngChunk::new(PngChunkKind::IDAT, *idat));
  }
  chunks.push(PngChunk::new(PngChunkKind::IEND, Vec::new()));
  png_bytes(&chunks)
}

#[test]
fn test_chunk_framing_round_trip() {
  let chunks = vec![
    PngChunk::new(PngChunkKind::IHDR, ihdr_data(3, 4)),
    PngChunk::new(PngChunkKind::Other(AsciiArray(*b"tEXt")), &b"Title\0hi"[..]),
    PngChunk::new(PngChunkKind::IDAT, &[1_u8, 2, 3][..]),
    PngChunk::new(PngChunkKind::IEND, Vec::new()),
  ];
  let bytes = png_bytes(&chunks);
  assert!(is_png(&bytes));
  let read = read_png_chunks(&bytes).unwrap();
  assert_eq!(read, chunks);
  // and writing what was read gives back the same bytes
  assert_eq!(png_bytes(&read), bytes);
}

#[test]
fn test_empty_iend_has_well_known_bytes() {
  let bytes = write_png_chunks(&[PngChunk::new(PngChunkKind::IEND, Vec::new())]);
  assert_eq!(bytes, [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]);
}

#[test]
fn test_reading_stops_at_iend() {
  let mut bytes = still_png(1, 1, &[&[9]]);
  bytes.extend_from_slice(b"trailing junk that is not a chunk");
  let read = read_png_chunks(&bytes).unwrap();
  assert_eq!(read.last().unwrap().kind(), PngChunkKind::IEND);
  assert_eq!(read.len(), 3);
}

#[test]
fn test_bad_crc_is_reported() {
  let mut bytes = still_png(1, 1, &[&[9, 9, 9]]);
  // signature(8) + IHDR(12+13) + IDAT length and tag(8) puts us on the data
  let data_at = 8 + 25 + 8;
  bytes[data_at] ^= 0xFF;
  match read_png_chunks(&bytes) {
    Err(AnimError::CorruptChunk { chunk, declared, actual }) => {
      assert_eq!(chunk, *b"IDAT");
      assert_ne!(declared, actual);
    }
    other => panic!("expected a CRC error, got {other:?}"),
  }
}

#[test]
fn test_truncated_chunk_is_corrupt() {
  let bytes = still_png(1, 1, &[&[1, 2, 3, 4, 5, 6, 7, 8]]);
  let cut = &bytes[..bytes.len() - 20];
  assert!(matches!(read_png_chunks(cut), Err(AnimError::CorruptChunk { .. })));
}

#[test]
fn test_kind_tags_round_trip() {
  for kind in [
    PngChunkKind::IHDR,
    PngChunkKind::PLTE,
    PngChunkKind::IDAT,
    PngChunkKind::IEND,
    PngChunkKind::acTL,
    PngChunkKind::fcTL,
    PngChunkKind::fdAT,
    PngChunkKind::Other(AsciiArray(*b"gAMA")),
  ] {
    assert_eq!(PngChunkKind::from(kind.tag()), kind);
  }
}

#[test]
fn test_fctl_layout() {
  let fctl = fcTL::new(7, 640, 480, 100, 1000);
  let chunk = fctl.to_chunk();
  assert_eq!(chunk.ty, *b"fcTL");
  assert_eq!(
    &chunk.data[..],
    &[
      0, 0, 0, 7, // sequence
      0, 0, 2, 128, // width
      0, 0, 1, 224, // height
      0, 0, 0, 0, // x
      0, 0, 0, 0, // y
      0, 100, // delay num
      3, 232, // delay den
      0, // dispose
      0, // blend
    ][..]
  );
  let parsed = fcTL::try_from(&chunk.data[..]).unwrap();
  assert_eq!(parsed, fctl);
  assert_eq!(parsed.dispose_op(), Some(DisposeOp::None));
  assert_eq!(parsed.blend_op(), Some(BlendOp::Source));
  assert_eq!(chunk.sequence_number(), Some(7));
}

#[test]
fn test_actl_and_fdat_layout() {
  let actl = acTL::new(3, 0).to_chunk();
  assert_eq!(&actl.data[..], &[0, 0, 0, 3, 0, 0, 0, 0][..]);
  let fdat = fdat_chunk(0x0102_0304, &[0xAA, 0xBB]);
  assert_eq!(fdat.ty, *b"fdAT");
  assert_eq!(&fdat.data[..], &[1, 2, 3, 4, 0xAA, 0xBB][..]);
  assert_eq!(fdat.sequence_number(), Some(0x0102_0304));
}

#[test]
fn test_ihdr_parse() {
  let ihdr = IHDR::try_from(&ihdr_data(17, 9)[..]).unwrap();
  assert_eq!((ihdr.width(), ihdr.height()), (17, 9));
  assert_eq!(ihdr.bit_depth(), 8);
  assert_eq!(ihdr.color_type(), 6);
  assert!(!ihdr.is_interlaced());
  assert_eq!(IHDR::try_from(&ihdr_data(0, 9)[..]), Err(AnimError::InvalidDimensions));
  assert_eq!(IHDR::try_from(&[0_u8; 12][..]), Err(AnimError::MissingChunk("IHDR")));
}

#[test]
fn test_encoder_passes_first_frame_ancillary_chunks() {
  let first = png_bytes(&[
    PngChunk::new(PngChunkKind::IHDR, ihdr_data(2, 2)),
    PngChunk::new(PngChunkKind::PLTE, &[0_u8, 0, 0, 255, 255, 255][..]),
    PngChunk::new(PngChunkKind::IDAT, &[1_u8][..]),
    PngChunk::new(PngChunkKind::IEND, Vec::new()),
  ]);
  let second = png_bytes(&[
    PngChunk::new(PngChunkKind::IHDR, ihdr_data(2, 2)),
    PngChunk::new(PngChunkKind::PLTE, &[9_u8, 9, 9][..]),
    PngChunk::new(PngChunkKind::IDAT, &[2_u8][..]),
    PngChunk::new(PngChunkKind::IEND, Vec::new()),
  ]);
  let mut apng = ApngEncoder::new();
  apng.add_frame(first, 10);
  apng.add_frame(second, 10);
  let out = apng.render(1).unwrap();
  let kinds: Vec<PngChunkKind> = read_png_chunks(&out).unwrap().iter().map(PngChunk::kind).collect();
  assert_eq!(
    kinds,
    [
      PngChunkKind::IHDR,
      PngChunkKind::acTL,
      PngChunkKind::PLTE,
      PngChunkKind::fcTL,
      PngChunkKind::IDAT,
      PngChunkKind::fcTL,
      PngChunkKind::fdAT,
      PngChunkKind::IEND,
    ]
  );
}

#[test]
fn test_encoder_splits_multiple_idats() {
  let mut apng = ApngEncoder::new();
  apng.add_frame(still_png(4, 4, &[&[1], &[2]]), 50);
  apng.add_frame(still_png(4, 4, &[&[3], &[4], &[5]]), 50);
  let out = apng.render(0).unwrap();
  let chunks = read_png_chunks(&out).unwrap();
  let seqs: Vec<u32> = chunks.iter().filter_map(PngChunk::sequence_number).collect();
  assert_eq!(seqs, [0, 1, 2, 3, 4]);
  let fdats: Vec<&[u8]> =
    chunks.iter().filter(|c| c.kind() == PngChunkKind::fdAT).map(|c| &c.data[4..]).collect();
  assert_eq!(fdats, [&[3_u8][..], &[4], &[5]]);
}

#[test]
fn test_encoder_errors() {
  assert_eq!(ApngEncoder::new().render(0), Err(AnimError::NoFrames));

  let mut apng = ApngEncoder::new();
  apng.add_frame(still_png(2, 2, &[&[1]]), 70_000);
  assert_eq!(apng.render(0), Err(AnimError::DurationOutOfRange(70_000)));

  let mut apng = ApngEncoder::new();
  apng.add_frame(still_png(2, 2, &[&[1]]), 10);
  apng.add_frame(still_png(3, 2, &[&[1]]), 10);
  assert!(matches!(
    apng.render(0),
    Err(AnimError::FrameOutsideCanvas { index: 1, width: 3, height: 2, .. })
  ));

  let mut apng = ApngEncoder::new();
  apng.add_frame(still_png(2, 2, &[]), 10);
  assert_eq!(apng.render(0), Err(AnimError::MissingChunk("IDAT")));

  let mut apng = ApngEncoder::new();
  apng.add_frame(png_bytes(&[PngChunk::new(PngChunkKind::IDAT, &[1_u8][..])]), 10);
  assert_eq!(apng.render(0), Err(AnimError::MissingChunk("IHDR")));
}

#[test]
fn test_smaller_later_frames_are_fine() {
  let mut apng = ApngEncoder::new();
  apng.add_frame(still_png(8, 8, &[&[1]]), 10);
  apng.add_frame(still_png(4, 2, &[&[2]]), 10);
  let out = apng.render(0).unwrap();
  let fctls: Vec<fcTL> = read_png_chunks(&out)
    .unwrap()
    .iter()
    .filter(|c| c.kind() == PngChunkKind::fcTL)
    .map(|c| fcTL::try_from(&c.data[..]).unwrap())
    .collect();
  assert_eq!((fctls[0].width(), fctls[0].height()), (8, 8));
  assert_eq!((fctls[1].width(), fctls[1].height()), (4, 2));
}

#[test]
fn test_encoder_rejects_other_pixel_formats() {
  let rgba8 = png_bytes(&[
    PngChunk::new(PngChunkKind::IHDR, ihdr_data_with(4, 1, 8, 6)),
    PngChunk::new(PngChunkKind::IDAT, &[1_u8][..]),
    PngChunk::new(PngChunkKind::IEND, Vec::new()),
  ]);
  let rgb16 = png_bytes(&[
    PngChunk::new(PngChunkKind::IHDR, ihdr_data_with(4, 1, 16, 2)),
    PngChunk::new(PngChunkKind::IDAT, &[2_u8][..]),
    PngChunk::new(PngChunkKind::IEND, Vec::new()),
  ]);
  let mut apng = ApngEncoder::new();
  apng.add_frame(rgba8.clone(), 10);
  apng.add_frame(rgb16, 10);
  assert_eq!(apng.render(0), Err(AnimError::FrameFormatMismatch { index: 1 }));

  let mut interlaced = ihdr_data_with(4, 1, 8, 6);
  interlaced[12] = 1;
  let mut apng = ApngEncoder::new();
  apng.add_frame(rgba8, 10);
  apng.add_frame(
    png_bytes(&[
      PngChunk::new(PngChunkKind::IHDR, interlaced),
      PngChunk::new(PngChunkKind::IDAT, &[2_u8][..]),
      PngChunk::new(PngChunkKind::IEND, Vec::new()),
    ]),
    10,
  );
  assert_eq!(apng.render(0), Err(AnimError::FrameFormatMismatch { index: 1 }));
}

#[test]
fn test_encoder_checks_indexed_palettes() {
  let indexed = |plte: &[u8], idat: u8| {
    png_bytes(&[
      PngChunk::new(PngChunkKind::IHDR, ihdr_data_with(2, 2, 8, 3)),
      PngChunk::new(PngChunkKind::PLTE, plte.to_vec()),
      PngChunk::new(PngChunkKind::IDAT, vec![idat]),
      PngChunk::new(PngChunkKind::IEND, Vec::new()),
    ])
  };
  let black_white = [0_u8, 0, 0, 255, 255, 255];
  let red_blue = [255_u8, 0, 0, 0, 0, 255];

  let mut apng = ApngEncoder::new();
  apng.add_frame(indexed(&black_white, 1), 10);
  apng.add_frame(indexed(&black_white, 2), 10);
  let out = apng.render(0).unwrap();
  let chunks = read_png_chunks(&out).unwrap();
  let plte: Vec<&PngChunk<'_>> = chunks.iter().filter(|c| c.kind() == PngChunkKind::PLTE).collect();
  assert_eq!(plte.len(), 1);
  assert_eq!(&plte[0].data[..], &black_white[..]);

  let mut apng = ApngEncoder::new();
  apng.add_frame(indexed(&black_white, 1), 10);
  apng.add_frame(indexed(&red_blue, 2), 10);
  assert_eq!(apng.render(0), Err(AnimError::FrameFormatMismatch { index: 1 }));
}

#[test]
fn test_encoder_rejects_second_ihdr_in_a_frame() {
  let doubled = png_bytes(&[
    PngChunk::new(PngChunkKind::IHDR, ihdr_data(2, 2)),
    PngChunk::new(PngChunkKind::IDAT, &[1_u8][..]),
    PngChunk::new(PngChunkKind::IHDR, ihdr_data(2, 2)),
    PngChunk::new(PngChunkKind::IDAT, &[2_u8][..]),
    PngChunk::new(PngChunkKind::IEND, Vec::new()),
  ]);
  let mut apng = ApngEncoder::new();
  apng.add_frame(doubled, 10);
  assert_eq!(apng.render(0), Err(AnimError::DuplicateChunk("IHDR")));
}
