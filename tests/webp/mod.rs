use animux::{
  bitstream::{BitWriter, Lsb0},
  webp::*,
  AnimError, AsciiArray,
};

/// A still lossless WebP. Only the `VP8L` header is real, the image data
/// after it is filler.
pub fn lossless_webp(width: u32, height: u32) -> Vec<u8> {
  let mut vp8l = vec![0_u8; 9];
  let mut writer = BitWriter::<Lsb0>::new(&mut vp8l);
  writer.write_bits(8, 0x2F);
  writer.write_bits(14, width - 1);
  writer.write_bits(14, height - 1);
  writer.write_bits(1, 0);
  writer.write_bits(3, 0);
  writer.write_bits(32, 0x1234_5678);
  still_webp(&[WebpChunk::new(WebpChunkKind::VP8L, vp8l)])
}

fn still_webp(chunks: &[WebpChunk<'_>]) -> Vec<u8> {
  write_riff_chunks(&[riff_chunk(AsciiArray(*b"WEBP"), &write_riff_chunks(chunks))])
}

#[test]
fn test_two_frame_webp() {
  let mut webp = WebpAnimEncoder::new();
  webp.add_frame(lossless_webp(2, 2), 100);
  webp.add_frame(lossless_webp(2, 2), 200);
  let out = webp.render(4).unwrap();
  assert!(is_webp(&out));
  assert_eq!(out.len() % 2, 0);
  assert_eq!(u32::from_le_bytes(out[4..8].try_into().unwrap()) as usize, out.len() - 8);

  let chunks = read_webp_chunks(&out).unwrap();
  let kinds: Vec<WebpChunkKind> = chunks.iter().map(WebpChunk::kind).collect();
  assert_eq!(
    kinds,
    [WebpChunkKind::VP8X, WebpChunkKind::ANIM, WebpChunkKind::ANMF, WebpChunkKind::ANMF]
  );

  let vp8x = VP8X::try_from(&chunks[0].data[..]).unwrap();
  assert!(vp8x.flags().animation);
  assert!(!vp8x.flags().alpha);
  assert_eq!((vp8x.canvas_width_minus_one(), vp8x.canvas_height_minus_one()), (1, 1));
  assert_eq!(ANIM::try_from(&chunks[1].data[..]).unwrap().loop_count(), 4);

  let durations: Vec<u32> =
    chunks[2..].iter().map(|c| parse_anmf(&c.data).unwrap().0.duration()).collect();
  assert_eq!(durations, [100, 200]);
}

#[test]
fn test_odd_frame_data_stays_aligned() {
  // a 9 byte VP8L chunk is padded inside its ANMF
  let mut webp = WebpAnimEncoder::new();
  webp.add_frame(lossless_webp(3, 1), 10);
  let out = webp.render(0).unwrap();
  let chunks = read_webp_chunks(&out).unwrap();
  let anmf = &chunks[2];
  assert_eq!(anmf.data.len(), AnmfHeader::SIZE + 8 + 9 + 1);
  let (header, inner) = parse_anmf(&anmf.data).unwrap();
  assert_eq!((header.width_minus_one(), header.height_minus_one()), (2, 0));
  assert_eq!(inner.len(), 1);
  assert_eq!(inner[0].data.len(), 9);
  // and reading then writing gives the same bytes back
  assert_eq!(
    write_riff_chunks(&[riff_chunk(AsciiArray(*b"WEBP"), &write_riff_chunks(&chunks))]),
    out
  );
}

#[test]
fn test_bad_frames_are_rejected() {
  let mut webp = WebpAnimEncoder::new();
  webp.add_frame(lossless_webp(2, 2), 10);
  webp.add_frame(b"RIFF\x04\x00\x00\x00WAVE".to_vec(), 10);
  assert_eq!(webp.render(0), Err(AnimError::NotWebp));

  let mut webp = WebpAnimEncoder::new();
  webp.add_frame(super::rand_bytes(64), 10);
  assert_eq!(webp.render(0), Err(AnimError::NotRiff));

  let mut webp = WebpAnimEncoder::new();
  webp.add_frame(still_webp(&[WebpChunk::new(WebpChunkKind::EXIF, &b"only metadata"[..])]), 10);
  assert_eq!(webp.render(0), Err(AnimError::MissingChunk("VP8 /VP8L")));

  let mut webp = WebpAnimEncoder::new();
  webp.add_frame(lossless_webp(2, 2), 10);
  webp.add_frame(lossless_webp(4, 4), 10);
  assert!(matches!(webp.render(0), Err(AnimError::FrameOutsideCanvas { index: 1, .. })));
}

#[test]
fn test_read_riff_chunks_no_panics() {
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    let _ = read_riff_chunks(&v);
    let _ = read_webp_chunks(&v);
  }
}
