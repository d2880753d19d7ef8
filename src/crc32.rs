//! The IEEE CRC-32 that guards every PNG chunk.

const CRC_TABLE: [u32; 256] = make_crc_table();

const fn make_crc_table() -> [u32; 256] {
  let mut out = [0; 256];
  let mut n = 0;
  while n < 256 {
    let mut c = n as u32;
    let mut k = 0;
    while k < 8 {
      if (c & 1) != 0 {
        c = 0xEDB8_8320_u32 ^ (c >> 1);
      } else {
        c = c >> 1;
      }
      //
      k += 1;
    }
    out[n] = c;
    //
    n += 1;
  }
  out
}

/// A running CRC-32 computation.
///
/// ```
/// use animux::Crc32;
/// assert_eq!(Crc32::calc(b"123456789"), 0xCBF4_3926);
///
/// let mut crc = Crc32::new();
/// crc.update(b"1234");
/// crc.update(b"56789");
/// assert_eq!(crc.finish(), 0xCBF4_3926);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crc32(u32);
impl Default for Crc32 {
  #[inline]
  #[must_use]
  fn default() -> Self {
    Self::new()
  }
}
impl Crc32 {
  /// A fresh computation.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self(u32::MAX)
  }

  /// Feeds more bytes in.
  #[inline]
  pub fn update(&mut self, bytes: &[u8]) {
    self.update_iter(bytes.iter().copied())
  }

  /// Feeds more bytes in.
  #[inline]
  pub fn update_iter(&mut self, iter: impl Iterator<Item = u8>) {
    let mut crc = self.0;
    for byte in iter {
      let i = (crc ^ u32::from(byte)) as u8 as usize;
      crc = CRC_TABLE[i] ^ (crc >> 8);
    }
    self.0 = crc;
  }

  /// The checksum of everything fed in so far.
  #[inline]
  #[must_use]
  pub const fn finish(self) -> u32 {
    self.0 ^ u32::MAX
  }

  /// Checksum of a single byte slice.
  #[inline]
  #[must_use]
  pub fn calc(bytes: &[u8]) -> u32 {
    Self::calc_iter(bytes.iter().copied())
  }

  /// Checksum of a byte iterator.
  #[inline]
  #[must_use]
  pub fn calc_iter(iter: impl Iterator<Item = u8>) -> u32 {
    let mut crc = Self::new();
    crc.update_iter(iter);
    crc.finish()
  }
}

#[test]
fn test_crc32_known_values() {
  assert_eq!(Crc32::calc(b""), 0);
  assert_eq!(Crc32::calc(b"123456789"), 0xCBF4_3926);
  assert_eq!(Crc32::calc(b"The quick brown fox jumps over the lazy dog"), 0x414F_A339);
  // the CRC of an empty IEND chunk, as seen at the end of every PNG
  assert_eq!(Crc32::calc(b"IEND"), 0xAE42_6082);
}

#[test]
fn test_crc32_table_spot_checks() {
  assert_eq!(CRC_TABLE[0], 0);
  assert_eq!(CRC_TABLE[1], 0x7707_3096);
  assert_eq!(CRC_TABLE[255], 0x2D02_EF8D);
}
