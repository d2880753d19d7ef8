use core::fmt::Write;

/// An array of bytes expected to contain ascii data.
///
/// Both PNG and RIFF identify their chunks with a four byte tag that's meant
/// to be read as ascii (`IHDR`, `fdAT`, `VP8 `, `ANMF`, ...). There's no
/// actual enforced encoding! The `Debug` and `Display` impls will just `as`
/// cast each byte into a character, which is still safe for non-ascii data
/// (you just get odd characters out).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct AsciiArray<const N: usize>(pub [u8; N]);

// Safety: `repr(transparent)` over a byte array.
unsafe impl<const N: usize> bytemuck::Zeroable for AsciiArray<N> {}
unsafe impl<const N: usize> bytemuck::Pod for AsciiArray<N> {}

impl<const N: usize> Default for AsciiArray<N> {
  #[inline]
  #[must_use]
  fn default() -> Self {
    bytemuck::Zeroable::zeroed()
  }
}

impl<const N: usize> AsciiArray<N> {
  /// The raw bytes of the tag.
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; N] {
    &self.0
  }
}

impl<const N: usize> core::fmt::Debug for AsciiArray<N> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char('\"')?;
    for ch in self.0.iter().copied().map(|u| u as char) {
      f.write_char(ch)?;
    }
    f.write_char('\"')?;
    Ok(())
  }
}
impl<const N: usize> core::fmt::Display for AsciiArray<N> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    for ch in self.0.iter().copied().map(|u| u as char) {
      f.write_char(ch)?;
    }
    Ok(())
  }
}

impl<const N: usize> From<[u8; N]> for AsciiArray<N> {
  #[inline]
  #[must_use]
  fn from(array: [u8; N]) -> Self {
    Self(array)
  }
}

impl<const N: usize> PartialEq<[u8; N]> for AsciiArray<N> {
  #[inline]
  fn eq(&self, other: &[u8; N]) -> bool {
    self.0 == *other
  }
}
