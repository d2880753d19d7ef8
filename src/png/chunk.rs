use super::*;

/// The first eight bytes of a PNG datastream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// If the bytes start with the PNG signature.
#[inline]
#[must_use]
pub fn is_png(bytes: &[u8]) -> bool {
  bytes.starts_with(&PNG_SIGNATURE)
}

/// The chunk types the muxer cares about.
///
/// Anything else is carried as [`Other`](PngChunkKind::Other) and either
/// passed through or dropped, depending on where it shows up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(nonstandard_style)]
pub enum PngChunkKind {
  /// Image Header
  IHDR,
  /// Palette
  PLTE,
  /// Image Data
  IDAT,
  /// Image End
  IEND,
  /// Animation Control
  acTL,
  /// Frame Control
  fcTL,
  /// Frame Data
  fdAT,
  /// Some other chunk.
  Other(AsciiArray<4>),
}
impl PngChunkKind {
  /// The four byte tag for this kind.
  #[inline]
  #[must_use]
  pub const fn tag(self) -> AsciiArray<4> {
    AsciiArray(match self {
      Self::IHDR => *b"IHDR",
      Self::PLTE => *b"PLTE",
      Self::IDAT => *b"IDAT",
      Self::IEND => *b"IEND",
      Self::acTL => *b"acTL",
      Self::fcTL => *b"fcTL",
      Self::fdAT => *b"fdAT",
      Self::Other(tag) => tag.0,
    })
  }
}
impl From<AsciiArray<4>> for PngChunkKind {
  #[inline]
  #[must_use]
  fn from(tag: AsciiArray<4>) -> Self {
    match &tag.0 {
      b"IHDR" => Self::IHDR,
      b"PLTE" => Self::PLTE,
      b"IDAT" => Self::IDAT,
      b"IEND" => Self::IEND,
      b"acTL" => Self::acTL,
      b"fcTL" => Self::fcTL,
      b"fdAT" => Self::fdAT,
      _ => Self::Other(tag),
    }
  }
}

/// A PNG chunk: a tag and its data.
///
/// The length and CRC that surround the data on the wire are computed when
/// the chunk is written, so they aren't stored here. Chunks read out of a
/// frame borrow their data; chunks the muxer builds own it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PngChunk<'b> {
  /// The chunk's tag.
  pub ty: AsciiArray<4>,
  /// The chunk's data.
  pub data: Cow<'b, [u8]>,
}
impl Debug for PngChunk<'_> {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("PngChunk")
      .field("ty", &self.ty)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .finish()
  }
}
impl<'b> PngChunk<'b> {
  /// Makes a chunk of the given kind.
  #[inline]
  #[must_use]
  pub fn new(kind: PngChunkKind, data: impl Into<Cow<'b, [u8]>>) -> Self {
    Self { ty: kind.tag(), data: data.into() }
  }

  /// What kind of chunk this is.
  #[inline]
  #[must_use]
  pub fn kind(&self) -> PngChunkKind {
    PngChunkKind::from(self.ty)
  }

  /// CRC-32 over the tag and data, as stored after the chunk.
  #[inline]
  #[must_use]
  pub fn compute_crc(&self) -> u32 {
    let mut crc = Crc32::new();
    crc.update(self.ty.as_bytes());
    crc.update(&self.data);
    crc.finish()
  }

  /// The sequence number of an `fcTL` or `fdAT` chunk.
  #[inline]
  #[must_use]
  pub fn sequence_number(&self) -> Option<u32> {
    match (self.kind(), &self.data[..]) {
      (PngChunkKind::fcTL | PngChunkKind::fdAT, [a, b, c, d, ..]) => {
        Some(u32::from_be_bytes([*a, *b, *c, *d]))
      }
      _ => None,
    }
  }

  /// Bytes this chunk takes up once written: length, tag, data, and CRC.
  #[inline]
  #[must_use]
  pub fn encoded_len(&self) -> usize {
    4 + 4 + self.data.len() + 4
  }
}

/// Iterates the chunks of PNG bytes, checking each chunk's CRC.
///
/// * Iteration stops after an `IEND` chunk, or at the end of the data.
/// * A chunk with a bad CRC produces an error and then ends the iteration.
/// * Truncated data doesn't panic: the missing bytes read as zero, which
///   then shows up as a CRC error.
#[derive(Debug, Clone)]
pub struct PngChunkIter<'b> {
  reader: BitReader<'b, Msb0>,
  done: bool,
}
impl<'b> PngChunkIter<'b> {
  /// Pass the full PNG bytes, it will skip the signature automatically.
  ///
  /// The signature itself isn't checked, use [`is_png`] for that.
  #[inline]
  #[must_use]
  pub fn new(bytes: &'b [u8]) -> Self {
    Self::from_chunk_bytes(bytes.get(PNG_SIGNATURE.len()..).unwrap_or(&[]))
  }

  /// Pass bytes that start directly with the first chunk.
  #[inline]
  #[must_use]
  pub const fn from_chunk_bytes(bytes: &'b [u8]) -> Self {
    Self { reader: BitReader::new(bytes), done: false }
  }
}
impl<'b> Iterator for PngChunkIter<'b> {
  type Item = AnimResult<PngChunk<'b>>;
  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    if self.done || self.reader.is_empty() {
      return None;
    }
    let length = self.reader.read_bits(32) as usize;
    let ty: AsciiArray<4> = self.reader.read_ascii();
    let data: &'b [u8] = self.reader.read_bytes(length);
    let declared = self.reader.read_bits(32);
    let chunk = PngChunk { ty, data: Cow::Borrowed(data) };
    let actual = chunk.compute_crc();
    if declared != actual {
      self.done = true;
      return Some(Err(AnimError::CorruptChunk { chunk: ty, declared, actual }));
    }
    if chunk.kind() == PngChunkKind::IEND {
      self.done = true;
    }
    Some(Ok(chunk))
  }
}

/// Reads every chunk out of full PNG bytes (signature included).
#[inline]
pub fn read_png_chunks(bytes: &[u8]) -> AnimResult<Vec<PngChunk<'_>>> {
  PngChunkIter::new(bytes).collect()
}

/// Writes chunks out with their lengths and CRCs. No signature is written.
#[must_use]
pub fn write_png_chunks(chunks: &[PngChunk<'_>]) -> Vec<u8> {
  let mut buffer = vec![0_u8; chunks.iter().map(PngChunk::encoded_len).sum()];
  let mut writer = BitWriter::<Msb0>::new(&mut buffer);
  for chunk in chunks {
    debug_assert!(chunk.data.len() <= u32::MAX as usize);
    writer.write_bits(32, chunk.data.len() as u32);
    writer.write_ascii(chunk.ty);
    writer.write_bytes(&chunk.data);
    writer.write_bits(32, chunk.compute_crc());
  }
  buffer
}
