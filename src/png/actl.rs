use super::*;

/// Animation Control
///
/// Spec: [acTL](https://www.w3.org/TR/png-3/#acTL-chunk)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
#[allow(nonstandard_style)]
pub struct acTL {
  num_frames: U32BE,
  num_plays: U32BE,
}
impl acTL {
  /// `num_plays` of 0 means the animation loops forever.
  #[inline]
  #[must_use]
  pub const fn new(num_frames: u32, num_plays: u32) -> Self {
    Self { num_frames: U32BE::from_u32(num_frames), num_plays: U32BE::from_u32(num_plays) }
  }
  /// Total frames in the animation.
  #[inline]
  #[must_use]
  pub const fn num_frames(&self) -> u32 {
    self.num_frames.to_u32()
  }
  /// Times to play the animation, 0 for forever.
  #[inline]
  #[must_use]
  pub const fn num_plays(&self) -> u32 {
    self.num_plays.to_u32()
  }

  /// Builds the chunk.
  #[must_use]
  pub fn to_chunk(&self) -> PngChunk<'static> {
    let mut buffer = vec![0_u8; 8];
    let mut writer = BitWriter::<Msb0>::new(&mut buffer);
    writer.write_bits(32, self.num_frames());
    writer.write_bits(32, self.num_plays());
    PngChunk::new(PngChunkKind::acTL, buffer)
  }
}
impl TryFrom<&[u8]> for acTL {
  type Error = AnimError;
  #[inline]
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    try_read_pod(data).ok_or(AnimError::MissingChunk("acTL"))
  }
}
