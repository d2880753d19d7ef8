use super::*;

/// If the bytes start like a RIFF file with the `WEBP` form type.
#[inline]
#[must_use]
pub fn is_webp(bytes: &[u8]) -> bool {
  matches!(bytes, [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..])
}

/// The chunk types the muxer cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(nonstandard_style)]
pub enum WebpChunkKind {
  /// The outer container.
  RIFF,
  /// Lossy bitstream. The tag is `VP8 ` (with a trailing space).
  VP8,
  /// Lossless bitstream.
  VP8L,
  /// Extended format header.
  VP8X,
  /// Alpha for a lossy bitstream.
  ALPH,
  /// Animation parameters.
  ANIM,
  /// Animation frame.
  ANMF,
  /// ICC color profile.
  ICCP,
  /// EXIF metadata.
  EXIF,
  /// XMP metadata. The tag is `XMP ` (with a trailing space).
  XMP,
  /// Some other chunk.
  Other(AsciiArray<4>),
}
impl WebpChunkKind {
  /// The four byte tag for this kind.
  #[inline]
  #[must_use]
  pub const fn tag(self) -> AsciiArray<4> {
    AsciiArray(match self {
      Self::RIFF => *b"RIFF",
      Self::VP8 => *b"VP8 ",
      Self::VP8L => *b"VP8L",
      Self::VP8X => *b"VP8X",
      Self::ALPH => *b"ALPH",
      Self::ANIM => *b"ANIM",
      Self::ANMF => *b"ANMF",
      Self::ICCP => *b"ICCP",
      Self::EXIF => *b"EXIF",
      Self::XMP => *b"XMP ",
      Self::Other(tag) => tag.0,
    })
  }
}
impl From<AsciiArray<4>> for WebpChunkKind {
  #[inline]
  #[must_use]
  fn from(tag: AsciiArray<4>) -> Self {
    match &tag.0 {
      b"RIFF" => Self::RIFF,
      b"VP8 " => Self::VP8,
      b"VP8L" => Self::VP8L,
      b"VP8X" => Self::VP8X,
      b"ALPH" => Self::ALPH,
      b"ANIM" => Self::ANIM,
      b"ANMF" => Self::ANMF,
      b"ICCP" => Self::ICCP,
      b"EXIF" => Self::EXIF,
      b"XMP " => Self::XMP,
      _ => Self::Other(tag),
    }
  }
}

/// A RIFF chunk: a tag and its data.
///
/// The length and padding are computed when the chunk is written.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct WebpChunk<'b> {
  /// The chunk's tag.
  pub fourcc: AsciiArray<4>,
  /// The chunk's data, without padding.
  pub data: Cow<'b, [u8]>,
}
impl Debug for WebpChunk<'_> {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("WebpChunk")
      .field("fourcc", &self.fourcc)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .finish()
  }
}
impl<'b> WebpChunk<'b> {
  /// Makes a chunk of the given kind.
  #[inline]
  #[must_use]
  pub fn new(kind: WebpChunkKind, data: impl Into<Cow<'b, [u8]>>) -> Self {
    Self { fourcc: kind.tag(), data: data.into() }
  }

  /// What kind of chunk this is.
  #[inline]
  #[must_use]
  pub fn kind(&self) -> WebpChunkKind {
    WebpChunkKind::from(self.fourcc)
  }

  /// Bytes this chunk takes up once written: tag, length, data, and padding.
  #[inline]
  #[must_use]
  pub fn encoded_len(&self) -> usize {
    4 + 4 + self.data.len() + (self.data.len() & 1)
  }
}

/// Reads a flat list of RIFF chunks.
///
/// This never fails. Truncated data reads as zeros and just gives odd
/// looking chunks, which the muxer then ignores or rejects.
#[must_use]
pub fn read_riff_chunks(bytes: &[u8]) -> Vec<WebpChunk<'_>> {
  let mut chunks = Vec::new();
  let mut reader = BitReader::<Lsb0>::new(bytes);
  while !reader.is_empty() {
    let fourcc: AsciiArray<4> = reader.read_ascii();
    let length = reader.read_bits(32) as usize;
    let data = reader.read_bytes(length);
    if length % 2 == 1 {
      reader.next(8);
    }
    chunks.push(WebpChunk { fourcc, data: Cow::Borrowed(data) });
  }
  chunks
}

/// Writes RIFF chunks out, padding odd lengths with a zero byte.
#[must_use]
pub fn write_riff_chunks(chunks: &[WebpChunk<'_>]) -> Vec<u8> {
  let mut buffer = vec![0_u8; chunks.iter().map(WebpChunk::encoded_len).sum()];
  let mut writer = BitWriter::<Lsb0>::new(&mut buffer);
  for chunk in chunks {
    debug_assert!(chunk.data.len() <= u32::MAX as usize);
    writer.write_ascii(chunk.fourcc);
    writer.write_bits(32, chunk.data.len() as u32);
    writer.write_bytes(&chunk.data);
    if chunk.data.len() % 2 == 1 {
      writer.next(8);
    }
  }
  buffer
}

/// Wraps an already-written chunk list in a `RIFF` chunk of the given form
/// type.
#[must_use]
pub fn riff_chunk(form_type: AsciiArray<4>, body: &[u8]) -> WebpChunk<'static> {
  let mut buffer = vec![0_u8; 4 + body.len()];
  let mut writer = BitWriter::<Lsb0>::new(&mut buffer);
  writer.write_ascii(form_type);
  writer.write_bytes(body);
  WebpChunk::new(WebpChunkKind::RIFF, buffer)
}

/// Splits a complete WebP file into its sub-chunks.
///
/// ## Failure
/// * [`NotRiff`](AnimError::NotRiff) unless the bytes are exactly one `RIFF`
///   chunk, or if the `RIFF` length runs past the end of the bytes.
/// * [`NotWebp`](AnimError::NotWebp) if the form type isn't `WEBP`.
pub fn read_webp_chunks(bytes: &[u8]) -> AnimResult<Vec<WebpChunk<'_>>> {
  let mut header = BitReader::<Lsb0>::new(bytes);
  header.next(32);
  let declared = header.read_bits(32) as usize;
  if bytes.len() < 8 || declared > bytes.len() - 8 {
    return Err(AnimError::NotRiff);
  }
  let chunks = read_riff_chunks(bytes);
  let riff: &[u8] = match chunks.as_slice() {
    [WebpChunk { fourcc, data: Cow::Borrowed(data) }] if *fourcc == *b"RIFF" => *data,
    _ => return Err(AnimError::NotRiff),
  };
  match riff {
    [b'W', b'E', b'B', b'P', rest @ ..] => Ok(read_riff_chunks(rest)),
    _ => Err(AnimError::NotWebp),
  }
}
