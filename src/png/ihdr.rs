use super::*;

/// Image Header
///
/// Spec: [IHDR](https://www.w3.org/TR/png-3/#11IHDR)
///
/// The muxer only needs the dimensions, everything else is carried along
/// untouched when the chunk is copied into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct IHDR {
  width: U32BE,
  height: U32BE,
  bit_depth: u8,
  color_type: u8,
  compression_method: u8,
  filter_method: u8,
  interlace_method: u8,
}
impl IHDR {
  /// Width in pixels.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width.to_u32()
  }
  /// Height in pixels.
  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.height.to_u32()
  }
  /// Bits per channel.
  #[inline]
  #[must_use]
  pub const fn bit_depth(&self) -> u8 {
    self.bit_depth
  }
  /// Raw color type value (0, 2, 3, 4, or 6 in a valid PNG).
  #[inline]
  #[must_use]
  pub const fn color_type(&self) -> u8 {
    self.color_type
  }
  /// If both headers describe image data that decodes the same way: everything
  /// except the dimensions matches.
  #[inline]
  #[must_use]
  pub const fn same_format(&self, other: &Self) -> bool {
    self.bit_depth == other.bit_depth
      && self.color_type == other.color_type
      && self.compression_method == other.compression_method
      && self.filter_method == other.filter_method
      && self.interlace_method == other.interlace_method
  }
  /// If the header uses an indexed color type, which needs a `PLTE`.
  #[inline]
  #[must_use]
  pub const fn is_indexed(&self) -> bool {
    self.color_type == 3
  }
  /// If the image data is stored interlaced.
  #[inline]
  #[must_use]
  pub const fn is_interlaced(&self) -> bool {
    self.interlace_method == 1
  }
}
impl TryFrom<&[u8]> for IHDR {
  type Error = AnimError;
  /// Fails if the data isn't 13 bytes, or the width or height is 0.
  #[inline]
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    let ihdr: IHDR = try_read_pod(data).ok_or(AnimError::MissingChunk("IHDR"))?;
    if ihdr.width() == 0 || ihdr.height() == 0 {
      return Err(AnimError::InvalidDimensions);
    }
    Ok(ihdr)
  }
}
