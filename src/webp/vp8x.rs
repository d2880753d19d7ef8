use super::*;

/// The feature bits of a `VP8X` chunk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Vp8xFlags {
  /// The file has `ANIM`/`ANMF` chunks.
  pub animation: bool,
  /// The file has an `XMP ` chunk.
  pub xmp: bool,
  /// The file has an `EXIF` chunk.
  pub exif: bool,
  /// Some of the image uses alpha.
  pub alpha: bool,
  /// The file has an `ICCP` chunk.
  pub icc: bool,
}
impl Vp8xFlags {
  /// Unpacks the first byte of a `VP8X` chunk.
  #[inline]
  #[must_use]
  pub fn from_byte(byte: u8) -> Self {
    let mut reader = BitReader::<Lsb0>::new(core::slice::from_ref(&byte));
    reader.next(1);
    let animation = reader.read_bits(1) != 0;
    let xmp = reader.read_bits(1) != 0;
    let exif = reader.read_bits(1) != 0;
    let alpha = reader.read_bits(1) != 0;
    let icc = reader.read_bits(1) != 0;
    Self { animation, xmp, exif, alpha, icc }
  }
}

/// Extended format header
///
/// Spec: [VP8X](https://developers.google.com/speed/webp/docs/riff_container#extended_file_format)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct VP8X {
  flags: u8,
  reserved: [u8; 3],
  canvas_width_minus_one: U24LE,
  canvas_height_minus_one: U24LE,
}
impl VP8X {
  /// The feature flags.
  #[inline]
  #[must_use]
  pub fn flags(&self) -> Vp8xFlags {
    Vp8xFlags::from_byte(self.flags)
  }
  /// Canvas width in pixels, minus one.
  #[inline]
  #[must_use]
  pub const fn canvas_width_minus_one(&self) -> u32 {
    self.canvas_width_minus_one.to_u32()
  }
  /// Canvas height in pixels, minus one.
  #[inline]
  #[must_use]
  pub const fn canvas_height_minus_one(&self) -> u32 {
    self.canvas_height_minus_one.to_u32()
  }
}
impl TryFrom<&[u8]> for VP8X {
  type Error = AnimError;
  #[inline]
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    try_read_pod(data).ok_or(AnimError::MissingChunk("VP8X"))
  }
}

/// Builds a `VP8X` chunk.
#[must_use]
pub fn vp8x_chunk(
  flags: Vp8xFlags, canvas_width_minus_one: u32, canvas_height_minus_one: u32,
) -> WebpChunk<'static> {
  let mut buffer = vec![0_u8; 10];
  let mut writer = BitWriter::<Lsb0>::new(&mut buffer);
  writer.next(1);
  writer.write_bits(1, u32::from(flags.animation));
  writer.write_bits(1, u32::from(flags.xmp));
  writer.write_bits(1, u32::from(flags.exif));
  writer.write_bits(1, u32::from(flags.alpha));
  writer.write_bits(1, u32::from(flags.icc));
  writer.next(2);
  writer.next(24);
  writer.write_bits(24, canvas_width_minus_one);
  writer.write_bits(24, canvas_height_minus_one);
  WebpChunk::new(WebpChunkKind::VP8X, buffer)
}

/// Animation parameters
///
/// Spec: [ANIM](https://developers.google.com/speed/webp/docs/riff_container#animation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct ANIM {
  background_color: U32LE,
  loop_count: U16LE,
}
impl ANIM {
  /// Background color, as a little-endian packed `[B, G, R, A]`.
  #[inline]
  #[must_use]
  pub const fn background_color(&self) -> u32 {
    self.background_color.to_u32()
  }
  /// Times to play the animation, 0 for forever.
  #[inline]
  #[must_use]
  pub const fn loop_count(&self) -> u16 {
    self.loop_count.to_u16()
  }
}
impl TryFrom<&[u8]> for ANIM {
  type Error = AnimError;
  #[inline]
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    try_read_pod(data).ok_or(AnimError::MissingChunk("ANIM"))
  }
}

/// Builds an `ANIM` chunk.
#[must_use]
pub fn anim_chunk(background_color: u32, loop_count: u16) -> WebpChunk<'static> {
  let mut buffer = vec![0_u8; 6];
  let mut writer = BitWriter::<Lsb0>::new(&mut buffer);
  writer.write_bits(32, background_color);
  writer.write_bits(16, u32::from(loop_count));
  WebpChunk::new(WebpChunkKind::ANIM, buffer)
}
