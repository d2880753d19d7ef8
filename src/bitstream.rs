//! Cursor-tracked bit access over a fixed byte buffer.
//!
//! Chunk framing in both containers goes through these types: PNG stores its
//! integers most significant bit first, while WebP packs its headers least
//! significant bit first. The bit order is a type parameter so each mode gets
//! its own loop at compile time.
//!
//! Neither the reader nor the writer ever fails. A read that would run past
//! the end of the buffer yields zero (or an empty slice) and a write that
//! would run past the end is dropped, and in both cases the cursor still moves
//! forward. Higher layers catch the damage: PNG through its chunk CRCs, WebP
//! through chunk dispatch.

use crate::AsciiArray;

/// Picks where bit `n` of a byte lives.
pub trait BitOrder {
  /// Shift that moves bit number `bit` (0..8, in stream order) of a byte down
  /// to the lowest position.
  fn shift(bit: usize) -> usize;

  /// Folds `bit` into a value that has been built from `i` earlier bits of an
  /// `n` bit read.
  fn push(value: u32, bit: u32, i: u32, n: u32) -> u32;

  /// The bit of `value` that goes out at step `i` of an `n` bit write.
  fn pull(value: u32, i: u32, n: u32) -> u32;
}

/// Most significant bit first. Multi-bit values are big-endian.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Msb0;
impl BitOrder for Msb0 {
  #[inline]
  fn shift(bit: usize) -> usize {
    7 - bit
  }
  #[inline]
  fn push(value: u32, bit: u32, _i: u32, _n: u32) -> u32 {
    (value << 1) | bit
  }
  #[inline]
  fn pull(value: u32, i: u32, n: u32) -> u32 {
    (value >> (n - 1 - i)) & 1
  }
}

/// Least significant bit first. Multi-bit values are little-endian.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Lsb0;
impl BitOrder for Lsb0 {
  #[inline]
  fn shift(bit: usize) -> usize {
    bit
  }
  #[inline]
  fn push(value: u32, bit: u32, i: u32, _n: u32) -> u32 {
    value | (bit << i)
  }
  #[inline]
  fn pull(value: u32, i: u32, _n: u32) -> u32 {
    (value >> i) & 1
  }
}

#[inline]
#[must_use]
const fn bits_of(bytes: usize) -> usize {
  bytes.saturating_mul(8)
}

/// Reads values out of a byte slice.
#[derive(Debug, Clone)]
pub struct BitReader<'b, O> {
  data: &'b [u8],
  position: usize,
  order: core::marker::PhantomData<O>,
}

impl<'b, O: BitOrder> BitReader<'b, O> {
  /// Starts reading at the first bit of `data`.
  #[inline]
  #[must_use]
  pub const fn new(data: &'b [u8]) -> Self {
    Self { data, position: 0, order: core::marker::PhantomData }
  }

  /// Cursor position, in bits.
  #[inline]
  #[must_use]
  pub const fn position(&self) -> usize {
    self.position
  }

  /// Length of the underlying buffer, in bits.
  #[inline]
  #[must_use]
  pub const fn total_bits(&self) -> usize {
    bits_of(self.data.len())
  }

  /// If the cursor is at (or past) the end of the data.
  #[inline]
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.position >= self.total_bits()
  }

  #[inline]
  fn fits(&self, bits: usize) -> bool {
    self.position.saturating_add(bits) <= self.total_bits()
  }

  /// Reads an `n` bit unsigned value, `n <= 32`.
  ///
  /// Past the end of the data this gives 0.
  #[inline]
  pub fn read_bits(&mut self, n: u32) -> u32 {
    debug_assert!(n <= 32);
    if !self.fits(n as usize) {
      self.position = self.position.saturating_add(n as usize);
      return 0;
    }
    let mut value = 0_u32;
    for i in 0..n {
      let byte = self.data[self.position >> 3];
      let bit = u32::from((byte >> O::shift(self.position & 7)) & 1);
      value = O::push(value, bit, i, n);
      self.position += 1;
    }
    value
  }

  /// Borrows the next `n` bytes. The cursor must be byte aligned.
  ///
  /// Past the end of the data this gives an empty slice.
  #[inline]
  pub fn read_bytes(&mut self, n: usize) -> &'b [u8] {
    debug_assert!(self.position % 8 == 0, "unaligned byte read");
    let bits = bits_of(n);
    if !self.fits(bits) {
      self.position = self.position.saturating_add(bits);
      return &[];
    }
    let start = self.position >> 3;
    self.position += bits;
    &self.data[start..start + n]
  }

  /// Reads `N` bytes as an ascii tag. The cursor must be byte aligned.
  ///
  /// Past the end of the data this gives an all-zero tag.
  #[inline]
  pub fn read_ascii<const N: usize>(&mut self) -> AsciiArray<N> {
    let bytes = self.read_bytes(N);
    match <[u8; N]>::try_from(bytes) {
      Ok(array) => AsciiArray(array),
      Err(_) => AsciiArray::default(),
    }
  }

  /// Skips `n` bits.
  #[inline]
  pub fn next(&mut self, n: usize) {
    self.position = self.position.saturating_add(n);
  }

  /// Backs up `n` bits (stopping at the start).
  #[inline]
  pub fn previous(&mut self, n: usize) {
    self.position = self.position.saturating_sub(n);
  }
}

/// Writes values into a byte slice that's already the final size.
#[derive(Debug)]
pub struct BitWriter<'b, O> {
  data: &'b mut [u8],
  position: usize,
  order: core::marker::PhantomData<O>,
}

impl<'b, O: BitOrder> BitWriter<'b, O> {
  /// Starts writing at the first bit of `data`.
  #[inline]
  #[must_use]
  pub fn new(data: &'b mut [u8]) -> Self {
    Self { data, position: 0, order: core::marker::PhantomData }
  }

  /// Cursor position, in bits.
  #[inline]
  #[must_use]
  pub const fn position(&self) -> usize {
    self.position
  }

  /// Length of the underlying buffer, in bits.
  #[inline]
  #[must_use]
  pub fn total_bits(&self) -> usize {
    bits_of(self.data.len())
  }

  #[inline]
  fn fits(&self, bits: usize) -> bool {
    self.position.saturating_add(bits) <= self.total_bits()
  }

  /// Writes the low `n` bits of `value`, `n <= 32`.
  ///
  /// Bits that would land past the end of the buffer are dropped.
  #[inline]
  pub fn write_bits(&mut self, n: u32, value: u32) {
    debug_assert!(n <= 32);
    if !self.fits(n as usize) {
      self.position = self.position.saturating_add(n as usize);
      return;
    }
    for i in 0..n {
      let shift = O::shift(self.position & 7);
      let byte = &mut self.data[self.position >> 3];
      let bit = O::pull(value, i, n) as u8;
      *byte = (*byte & !(1 << shift)) | (bit << shift);
      self.position += 1;
    }
  }

  /// Copies `bytes` in. The cursor must be byte aligned.
  #[inline]
  pub fn write_bytes(&mut self, bytes: &[u8]) {
    debug_assert!(self.position % 8 == 0, "unaligned byte write");
    let bits = bits_of(bytes.len());
    if !self.fits(bits) {
      self.position = self.position.saturating_add(bits);
      return;
    }
    let start = self.position >> 3;
    self.data[start..start + bytes.len()].copy_from_slice(bytes);
    self.position += bits;
  }

  /// Writes an ascii tag. The cursor must be byte aligned.
  #[inline]
  pub fn write_ascii<const N: usize>(&mut self, tag: AsciiArray<N>) {
    self.write_bytes(tag.as_bytes());
  }

  /// Skips `n` bits, leaving whatever was already there.
  #[inline]
  pub fn next(&mut self, n: usize) {
    self.position = self.position.saturating_add(n);
  }

  /// Backs up `n` bits (stopping at the start).
  #[inline]
  pub fn previous(&mut self, n: usize) {
    self.position = self.position.saturating_sub(n);
  }
}
