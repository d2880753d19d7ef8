use super::*;

/// What happens to a frame's region once its delay is over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DisposeOp {
  /// Leave the region as it is.
  #[default]
  None = 0,
  /// Clear the region to transparent black.
  Background = 1,
  /// Restore the region to what it was before this frame.
  Previous = 2,
}
impl TryFrom<u8> for DisposeOp {
  type Error = ();
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      0 => Self::None,
      1 => Self::Background,
      2 => Self::Previous,
      _ => return Err(()),
    })
  }
}

/// How a frame is combined with what's already in its region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BlendOp {
  /// Overwrite the region, alpha included.
  #[default]
  Source = 0,
  /// Alpha-composite over the region.
  Over = 1,
}
impl TryFrom<u8> for BlendOp {
  type Error = ();
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      0 => Self::Source,
      1 => Self::Over,
      _ => return Err(()),
    })
  }
}

/// Frame Control
///
/// Spec: [fcTL](https://www.w3.org/TR/png-3/#fcTL-chunk)
///
/// The frame is shown for `delay_num / delay_den` seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
#[allow(nonstandard_style)]
pub struct fcTL {
  sequence_number: U32BE,
  width: U32BE,
  height: U32BE,
  x_offset: U32BE,
  y_offset: U32BE,
  delay_num: U16BE,
  delay_den: U16BE,
  dispose_op: u8,
  blend_op: u8,
}
impl fcTL {
  /// A frame at offset `(0,0)` with the default dispose and blend ops.
  #[inline]
  #[must_use]
  pub const fn new(
    sequence_number: u32, width: u32, height: u32, delay_num: u16, delay_den: u16,
  ) -> Self {
    Self {
      sequence_number: U32BE::from_u32(sequence_number),
      width: U32BE::from_u32(width),
      height: U32BE::from_u32(height),
      x_offset: U32BE::from_u32(0),
      y_offset: U32BE::from_u32(0),
      delay_num: U16BE::from_u16(delay_num),
      delay_den: U16BE::from_u16(delay_den),
      dispose_op: DisposeOp::None as u8,
      blend_op: BlendOp::Source as u8,
    }
  }
  /// Position of this chunk in the `fcTL`/`fdAT` sequence.
  #[inline]
  #[must_use]
  pub const fn sequence_number(&self) -> u32 {
    self.sequence_number.to_u32()
  }
  /// Frame width.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width.to_u32()
  }
  /// Frame height.
  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.height.to_u32()
  }
  /// Horizontal position of the frame on the canvas.
  #[inline]
  #[must_use]
  pub const fn x_offset(&self) -> u32 {
    self.x_offset.to_u32()
  }
  /// Vertical position of the frame on the canvas.
  #[inline]
  #[must_use]
  pub const fn y_offset(&self) -> u32 {
    self.y_offset.to_u32()
  }
  /// Delay numerator.
  #[inline]
  #[must_use]
  pub const fn delay_num(&self) -> u16 {
    self.delay_num.to_u16()
  }
  /// Delay denominator. A value of 0 is treated as 100 by decoders.
  #[inline]
  #[must_use]
  pub const fn delay_den(&self) -> u16 {
    self.delay_den.to_u16()
  }
  /// `None` if the byte isn't a known op.
  #[inline]
  #[must_use]
  pub fn dispose_op(&self) -> Option<DisposeOp> {
    DisposeOp::try_from(self.dispose_op).ok()
  }
  /// `None` if the byte isn't a known op.
  #[inline]
  #[must_use]
  pub fn blend_op(&self) -> Option<BlendOp> {
    BlendOp::try_from(self.blend_op).ok()
  }

  /// Builds the chunk.
  #[must_use]
  pub fn to_chunk(&self) -> PngChunk<'static> {
    let mut buffer = vec![0_u8; 26];
    let mut writer = BitWriter::<Msb0>::new(&mut buffer);
    writer.write_bits(32, self.sequence_number());
    writer.write_bits(32, self.width());
    writer.write_bits(32, self.height());
    writer.write_bits(32, self.x_offset());
    writer.write_bits(32, self.y_offset());
    writer.write_bits(16, u32::from(self.delay_num()));
    writer.write_bits(16, u32::from(self.delay_den()));
    writer.write_bits(8, u32::from(self.dispose_op));
    writer.write_bits(8, u32::from(self.blend_op));
    PngChunk::new(PngChunkKind::fcTL, buffer)
  }
}
impl TryFrom<&[u8]> for fcTL {
  type Error = AnimError;
  #[inline]
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    try_read_pod(data).ok_or(AnimError::MissingChunk("fcTL"))
  }
}

/// Builds an `fdAT` chunk: a sequence number, then data that would otherwise
/// have gone in an `IDAT` chunk.
#[must_use]
pub fn fdat_chunk(sequence_number: u32, frame_data: &[u8]) -> PngChunk<'static> {
  let mut buffer = vec![0_u8; 4 + frame_data.len()];
  let mut writer = BitWriter::<Msb0>::new(&mut buffer);
  writer.write_bits(32, sequence_number);
  writer.write_bytes(frame_data);
  PngChunk::new(PngChunkKind::fdAT, buffer)
}
