use super::*;

/// The bits of a `VP8 ` or `VP8L` bitstream header the muxer needs.
///
/// Dimensions are kept "minus one", the way every WebP container field stores
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHeader {
  /// Width in pixels, minus one.
  pub width_minus_one: u32,
  /// Height in pixels, minus one.
  pub height_minus_one: u32,
  /// If a lossless bitstream says it uses its alpha channel. Always `false`
  /// for lossy bitstreams, which carry alpha in a separate `ALPH` chunk.
  pub alpha_is_used: bool,
}
impl ImageHeader {
  /// Peeks at a `VP8 ` bitstream.
  ///
  /// The 3 byte frame tag and 3 byte start code are skipped, then there's a
  /// 14 bit width and 14 bit height, each followed by 2 bits of scaling info.
  ///
  /// Fails with [`InvalidDimensions`](AnimError::InvalidDimensions) if either
  /// size is 0.
  pub fn from_vp8(data: &[u8]) -> AnimResult<Self> {
    let mut reader = BitReader::<Lsb0>::new(data);
    reader.next(48);
    let width = reader.read_bits(16) & 0x3FFF;
    let height = reader.read_bits(16) & 0x3FFF;
    if width == 0 || height == 0 {
      return Err(AnimError::InvalidDimensions);
    }
    Ok(Self {
      width_minus_one: width - 1,
      height_minus_one: height - 1,
      alpha_is_used: false,
    })
  }

  /// Peeks at a `VP8L` bitstream.
  ///
  /// After the one byte signature (`0x2F`) the header stores width-1 and
  /// height-1 directly as 14 bit fields, then a one bit alpha hint.
  #[must_use]
  pub fn from_vp8l(data: &[u8]) -> Self {
    let mut reader = BitReader::<Lsb0>::new(data);
    reader.next(8);
    let width_minus_one = reader.read_bits(14);
    let height_minus_one = reader.read_bits(14);
    let alpha_is_used = reader.read_bits(1) != 0;
    Self { width_minus_one, height_minus_one, alpha_is_used }
  }

  /// Width in pixels.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width_minus_one + 1
  }

  /// Height in pixels.
  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.height_minus_one + 1
  }
}
