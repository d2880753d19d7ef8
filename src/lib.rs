#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A crate for stitching still images into animations.
//!
//! You give an encoder a series of complete single-frame image files (plus how
//! long each one should be shown), and it re-chunks them into one animated
//! file of the same container format:
//!
//! * PNG frames become an [Animated PNG](png::ApngEncoder).
//! * WebP frames become an [animated WebP](webp::WebpAnimEncoder).
//!
//! The compressed image data inside each frame is never decoded. `IDAT` and
//! `VP8 `/`VP8L` payloads are copied through byte for byte, only the container
//! around them is rebuilt.
//!
//! If you don't know ahead of time which format you'll be handed, the
//! [`AnimationEncoder`] sniffs each payload and picks the right muxer.

extern crate alloc;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

#[cfg(not(any(feature = "png", feature = "webp")))]
compile_error!("enable at least one of the `png` or `webp` features");

pub mod ascii_array;
pub use ascii_array::*;

pub mod bitstream;

mod crc32;
pub use crc32::*;

mod error;
pub use error::*;

pub mod int_endian;

mod parser_helpers;

mod anim;
pub use anim::*;

#[cfg(feature = "png")]
#[cfg_attr(docs_rs, doc(cfg(feature = "png")))]
pub mod png;

#[cfg(feature = "webp")]
#[cfg_attr(docs_rs, doc(cfg(feature = "webp")))]
pub mod webp;
