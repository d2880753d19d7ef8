use animux::{png::*, AnimError};

/// A real 1x1 RGBA PNG of one color, with a zlib `IDAT`.
pub fn solid_png(rgba: [u8; 4]) -> Vec<u8> {
  let mut ihdr = Vec::new();
  ihdr.extend_from_slice(&1_u32.to_be_bytes());
  ihdr.extend_from_slice(&1_u32.to_be_bytes());
  ihdr.extend_from_slice(&[8, 6, 0, 0, 0]);
  let scanline = [0, rgba[0], rgba[1], rgba[2], rgba[3]];
  let idat = miniz_oxide::deflate::compress_to_vec_zlib(&scanline, 6);
  let mut out = PNG_SIGNATURE.to_vec();
  out.extend(write_png_chunks(&[
    PngChunk::new(PngChunkKind::IHDR, ihdr),
    PngChunk::new(PngChunkKind::IDAT, idat),
    PngChunk::new(PngChunkKind::IEND, Vec::new()),
  ]));
  out
}

fn count(chunks: &[PngChunk<'_>], kind: PngChunkKind) -> usize {
  chunks.iter().filter(|c| c.kind() == kind).count()
}

#[test]
fn test_two_frame_apng() {
  let mut apng = ApngEncoder::new();
  apng.add_frame(solid_png([255, 0, 0, 255]), 100);
  apng.add_frame(solid_png([0, 0, 255, 255]), 200);
  let out = apng.render(0).unwrap();
  assert!(is_png(&out));

  let chunks = read_png_chunks(&out).unwrap();
  assert_eq!(count(&chunks, PngChunkKind::acTL), 1);
  assert_eq!(count(&chunks, PngChunkKind::IDAT), 1);
  assert_eq!(count(&chunks, PngChunkKind::fdAT), 1);
  assert_eq!(chunks.last().unwrap().kind(), PngChunkKind::IEND);

  let actl = chunks.iter().find(|c| c.kind() == PngChunkKind::acTL).unwrap();
  let actl = acTL::try_from(&actl.data[..]).unwrap();
  assert_eq!((actl.num_frames(), actl.num_plays()), (2, 0));

  let delays: Vec<(u16, u16)> = chunks
    .iter()
    .filter(|c| c.kind() == PngChunkKind::fcTL)
    .map(|c| fcTL::try_from(&c.data[..]).unwrap())
    .map(|f| (f.delay_num(), f.delay_den()))
    .collect();
  assert_eq!(delays, [(100, 1000), (200, 1000)]);

  // the compressed data is carried over untouched
  let idat = chunks.iter().find(|c| c.kind() == PngChunkKind::IDAT).unwrap();
  let fdat = chunks.iter().find(|c| c.kind() == PngChunkKind::fdAT).unwrap();
  let first = miniz_oxide::inflate::decompress_to_vec_zlib(&idat.data).unwrap();
  let second = miniz_oxide::inflate::decompress_to_vec_zlib(&fdat.data[4..]).unwrap();
  assert_eq!(first, [0, 255, 0, 0, 255]);
  assert_eq!(second, [0, 0, 0, 255, 255]);
}

#[test]
fn test_single_frame_apng() {
  let mut apng = ApngEncoder::new();
  apng.add_frame(solid_png([1, 2, 3, 4]), 500);
  let out = apng.render(7).unwrap();
  let chunks = read_png_chunks(&out).unwrap();
  let kinds: Vec<PngChunkKind> = chunks.iter().map(PngChunk::kind).collect();
  assert_eq!(
    kinds,
    [PngChunkKind::IHDR, PngChunkKind::acTL, PngChunkKind::fcTL, PngChunkKind::IDAT, PngChunkKind::IEND]
  );
  let actl = acTL::try_from(&chunks[1].data[..]).unwrap();
  assert_eq!((actl.num_frames(), actl.num_plays()), (1, 7));
}

#[test]
fn test_sequence_numbers_are_contiguous() {
  let mut apng = ApngEncoder::new();
  for i in 0..5 {
    apng.add_frame(solid_png([i, i, i, 255]), 40);
  }
  let out = apng.render(0).unwrap();
  let seqs: Vec<u32> =
    read_png_chunks(&out).unwrap().iter().filter_map(PngChunk::sequence_number).collect();
  // 5 fcTL and 4 fdAT
  assert_eq!(seqs, (0..9).collect::<Vec<u32>>());
}

#[test]
fn test_render_is_repeatable() {
  let mut apng = ApngEncoder::new();
  apng.add_frame(solid_png([9, 9, 9, 9]), 10);
  apng.add_frame(solid_png([8, 8, 8, 8]), 20);
  assert_eq!(apng.render(0).unwrap(), apng.render(0).unwrap());
  assert_eq!(apng.len(), 2);
}

#[test]
fn test_corrupt_frame_is_rejected() {
  let good = solid_png([10, 20, 30, 255]);
  let mut bad = good.clone();
  // signature(8) + IHDR(25) + IDAT length and tag(8)
  bad[8 + 25 + 8] ^= 0x55;
  let mut apng = ApngEncoder::new();
  apng.add_frame(good, 100);
  apng.add_frame(bad, 100);
  assert!(matches!(
    apng.render(0),
    Err(AnimError::CorruptChunk { chunk, .. }) if chunk == *b"IDAT"
  ));
}

#[test]
fn test_PngChunkIter_no_panics() {
  // even totally random data should never panic the iterator!
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    for _ in PngChunkIter::new(&v) {
      //
    }
    let mut apng = ApngEncoder::new();
    apng.add_frame(v, 10);
    assert!(apng.render(0).is_err());
  }
}
