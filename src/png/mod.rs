//! Animated PNG muxing.
//!
//! * [Portable Network Graphics Specification (Third Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/png-3/
//!
//! The general format of a PNG is that the information is stored in "chunks".
//! Each chunk is a big-endian length, a four byte tag, the data, and a CRC-32
//! of the tag and data. An APNG is an ordinary PNG with three extra chunk
//! types:
//! * **Animation Control** (`acTL`) - Right after the header, says how many
//!   frames there are and how many times to play them.
//! * **Frame Control** (`fcTL`) - One per frame, gives the frame's region and
//!   how long it's shown.
//! * **Frame Data** (`fdAT`) - Just like `IDAT`, but with a sequence number on
//!   the front. The first frame keeps using plain `IDAT` chunks so that
//!   decoders without animation support still show something.
//!
//! The [`ApngEncoder`] takes whole single-frame PNG files and re-chunks them
//! into that layout. Compressed image data is copied without being touched,
//! so every frame has to already use the same pixel format as the first one.
//!
//! ```
//! # fn demo(first: Vec<u8>, second: Vec<u8>) -> animux::AnimResult<()> {
//! use animux::png::ApngEncoder;
//!
//! let mut apng = ApngEncoder::new();
//! apng.add_frame(first, 100);
//! apng.add_frame(second, 200);
//! let bytes: Vec<u8> = apng.render(0)?;
//! # Ok(())
//! # }
//! ```

use alloc::{borrow::Cow, vec, vec::Vec};
use core::fmt::Debug;

use bytemuck::{Pod, Zeroable};

use crate::{
  bitstream::{BitReader, BitWriter, Msb0},
  int_endian::{U16BE, U32BE},
  parser_helpers::try_read_pod,
  AnimError, AnimResult, AsciiArray, Crc32, Frame,
};

mod chunk;
pub use chunk::*;

mod ihdr;
pub use ihdr::*;

mod actl;
pub use actl::*;

mod fctl;
pub use fctl::*;

mod encoder;
pub use encoder::*;

#[cfg(test)]
mod tests;
