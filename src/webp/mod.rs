//! Animated WebP muxing.
//!
//! * [WebP Container Specification][webp-spec]
//!
//! [webp-spec]: https://developers.google.com/speed/webp/docs/riff_container
//!
//! A WebP file is a single RIFF chunk with the form type `WEBP`, and inside
//! that is a flat list of sub-chunks. Each chunk is a four byte tag, a
//! little-endian length, the data, and one padding byte when the length is odd.
//! A still image is usually just one `VP8 ` (lossy) or `VP8L` (lossless)
//! chunk, possibly with an `ALPH` chunk holding the alpha of a lossy image.
//!
//! An animation uses the extended layout:
//! * `VP8X` - feature flags and the canvas size.
//! * `ANIM` - background color and loop count.
//! * `ANMF` - one per frame: the frame's placement and duration, followed by
//!   the frame's own `ALPH` and `VP8 `/`VP8L` chunks.
//!
//! The [`WebpAnimEncoder`] pulls the image chunks out of still WebP files and
//! wraps them in that layout. The VP8/VP8L bitstreams are never decoded, only
//! their headers are peeked at for the frame size.

use alloc::{borrow::Cow, vec, vec::Vec};
use core::fmt::Debug;

use bytemuck::{Pod, Zeroable};

use crate::{
  bitstream::{BitReader, BitWriter, Lsb0},
  int_endian::{U16LE, U24LE, U32LE},
  parser_helpers::{try_pull_pod, try_read_pod},
  AnimError, AnimResult, AsciiArray, Frame,
};

mod chunk;
pub use chunk::*;

mod image_header;
pub use image_header::*;

mod vp8x;
pub use vp8x::*;

mod anmf;
pub use anmf::*;

mod encoder;
pub use encoder::*;
