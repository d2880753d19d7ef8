use thiserror::Error;

use crate::AsciiArray;

/// Result alias used throughout the crate.
pub type AnimResult<T> = Result<T, AnimError>;

/// An error from the `animux` crate.
///
/// Every error is terminal for the `render` call that produced it: no partial
/// output is handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AnimError {
  /// A PNG chunk's stored CRC-32 doesn't match its type and data.
  #[error("chunk {chunk} is corrupt: declared CRC {declared:#010x}, computed {actual:#010x}")]
  CorruptChunk {
    /// The chunk's tag.
    chunk: AsciiArray<4>,
    /// The CRC stored after the chunk.
    declared: u32,
    /// The CRC computed over the chunk's tag and data.
    actual: u32,
  },

  /// The frame isn't exactly one top-level `RIFF` chunk.
  #[error("can't find RIFF chunk")]
  NotRiff,

  /// The `RIFF` chunk's form type isn't `WEBP`.
  #[error("RIFF form type is not WEBP")]
  NotWebp,

  /// A chunk that a frame can't do without is absent.
  #[error("frame has no {0} chunk")]
  MissingChunk(&'static str),

  /// The payload isn't a container this crate knows how to handle.
  #[error("unsupported image payload")]
  Unsupported,

  /// `render` was called before any frame was added.
  #[error("no frames to render")]
  NoFrames,

  /// An image header declared a zero or otherwise unusable size.
  #[error("invalid image dimensions")]
  InvalidDimensions,

  /// A frame is bigger than the canvas set by the first frame.
  #[error("frame {index} is {width}x{height}, larger than the {canvas_width}x{canvas_height} canvas")]
  FrameOutsideCanvas {
    /// Index of the frame, in insertion order.
    index: usize,
    /// Frame width.
    width: u32,
    /// Frame height.
    height: u32,
    /// Canvas width.
    canvas_width: u32,
    /// Canvas height.
    canvas_height: u32,
  },

  /// A later frame's pixel format or palette differs from the first
  /// frame's. Its image data can't be decoded with the first frame's header.
  #[error("frame {index} doesn't use the first frame's pixel format and palette")]
  FrameFormatMismatch {
    /// Index of the frame, in insertion order.
    index: usize,
  },

  /// A chunk that may only appear once per frame appeared again.
  #[error("frame has more than one {0} chunk")]
  DuplicateChunk(&'static str),

  /// The frame duration doesn't fit the container's duration field.
  #[error("frame duration of {0}ms is out of range")]
  DurationOutOfRange(u32),

  /// The loop count doesn't fit the container's loop count field.
  #[error("loop count {0} is out of range")]
  LoopCountOutOfRange(u32),
}
