use super::*;

/// How the frame's area is treated once the frame's duration is over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DisposeMethod {
  /// Leave the canvas as is.
  #[default]
  None,
  /// Fill the frame's area with the background color.
  Background,
}

/// How the frame's pixels are combined with the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BlendMethod {
  /// Alpha-blend the frame over the canvas.
  #[default]
  AlphaBlend,
  /// Overwrite the canvas with the frame.
  NoBlend,
}

/// The fixed 16 byte header at the start of an `ANMF` chunk's data.
///
/// The frame's own `ALPH` and `VP8 `/`VP8L` chunks follow it.
///
/// Spec: [ANMF](https://developers.google.com/speed/webp/docs/riff_container#animation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct AnmfHeader {
  x_div_two: U24LE,
  y_div_two: U24LE,
  width_minus_one: U24LE,
  height_minus_one: U24LE,
  duration: U24LE,
  flags: u8,
}
impl AnmfHeader {
  /// The header's size in bytes.
  pub const SIZE: usize = 16;

  /// Frame X offset, in pixels.
  #[inline]
  #[must_use]
  pub const fn x(&self) -> u32 {
    self.x_div_two.to_u32() * 2
  }
  /// Frame Y offset, in pixels.
  #[inline]
  #[must_use]
  pub const fn y(&self) -> u32 {
    self.y_div_two.to_u32() * 2
  }
  /// Frame width in pixels, minus one.
  #[inline]
  #[must_use]
  pub const fn width_minus_one(&self) -> u32 {
    self.width_minus_one.to_u32()
  }
  /// Frame height in pixels, minus one.
  #[inline]
  #[must_use]
  pub const fn height_minus_one(&self) -> u32 {
    self.height_minus_one.to_u32()
  }
  /// Frame duration in milliseconds.
  #[inline]
  #[must_use]
  pub const fn duration(&self) -> u32 {
    self.duration.to_u32()
  }
  /// Disposal, bit 0 of the flags.
  #[inline]
  #[must_use]
  pub const fn dispose_method(&self) -> DisposeMethod {
    if self.flags & 0b01 != 0 {
      DisposeMethod::Background
    } else {
      DisposeMethod::None
    }
  }
  /// Blending, bit 1 of the flags.
  #[inline]
  #[must_use]
  pub const fn blend_method(&self) -> BlendMethod {
    if self.flags & 0b10 != 0 {
      BlendMethod::NoBlend
    } else {
      BlendMethod::AlphaBlend
    }
  }
}

/// Builds an `ANMF` chunk for a frame at offset (0,0) out of the frame's
/// already written `ALPH`/image chunks.
///
/// Every value must fit in 24 bits, larger values are truncated.
#[must_use]
pub fn anmf_chunk(
  width_minus_one: u32, height_minus_one: u32, duration: u32, dispose: DisposeMethod,
  blend: BlendMethod, frame_data: &[u8],
) -> WebpChunk<'static> {
  let mut buffer = vec![0_u8; AnmfHeader::SIZE + frame_data.len()];
  let mut writer = BitWriter::<Lsb0>::new(&mut buffer);
  writer.write_bits(24, 0);
  writer.write_bits(24, 0);
  writer.write_bits(24, width_minus_one);
  writer.write_bits(24, height_minus_one);
  writer.write_bits(24, duration);
  writer.write_bits(1, u32::from(dispose == DisposeMethod::Background));
  writer.write_bits(1, u32::from(blend == BlendMethod::NoBlend));
  writer.next(6);
  writer.write_bytes(frame_data);
  WebpChunk::new(WebpChunkKind::ANMF, buffer)
}

/// Splits an `ANMF` chunk's data into its header and its sub-chunks.
pub fn parse_anmf(data: &[u8]) -> AnimResult<(AnmfHeader, Vec<WebpChunk<'_>>)> {
  let (header, rest) = try_pull_pod::<AnmfHeader>(data).ok_or(AnimError::MissingChunk("ANMF"))?;
  Ok((header, read_riff_chunks(rest)))
}
