use alloc::vec::Vec;
use core::fmt::Debug;

use crate::{AnimError, AnimResult};

#[cfg(feature = "png")]
use crate::png::{is_png, ApngEncoder};
#[cfg(feature = "webp")]
use crate::webp::{is_webp, WebpAnimEncoder};

/// How long a frame is shown when no duration is given.
pub const DEFAULT_FRAME_DURATION_MS: u32 = 1000;

/// One frame of an animation: a complete single-frame image file, and how
/// long to show it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Frame {
  /// The image file's bytes.
  pub payload: Vec<u8>,
  /// Display time in milliseconds.
  pub duration_ms: u32,
}
impl Debug for Frame {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Frame")
      .field("payload", &(&self.payload[..self.payload.len().min(12)], self.payload.len()))
      .field("duration_ms", &self.duration_ms)
      .finish()
  }
}
impl Default for Frame {
  #[inline]
  fn default() -> Self {
    Self { payload: Vec::new(), duration_ms: DEFAULT_FRAME_DURATION_MS }
  }
}
impl Frame {
  /// A frame shown for [`DEFAULT_FRAME_DURATION_MS`].
  #[inline]
  #[must_use]
  pub fn new(payload: impl Into<Vec<u8>>) -> Self {
    Self { payload: payload.into(), duration_ms: DEFAULT_FRAME_DURATION_MS }
  }

  /// Changes the display time.
  #[inline]
  #[must_use]
  pub fn with_duration(self, duration_ms: u32) -> Self {
    Self { duration_ms, ..self }
  }
}

/// The image containers this crate can animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContainerKind {
  /// PNG, animated as APNG.
  Png,
  /// WebP, animated with the extended format.
  Webp,
}
impl ContainerKind {
  /// Guesses the container from the first few bytes.
  ///
  /// Formats whose feature is turned off are never detected.
  #[inline]
  #[must_use]
  pub fn sniff(bytes: &[u8]) -> Option<Self> {
    #[cfg(feature = "png")]
    if is_png(bytes) {
      return Some(Self::Png);
    }
    #[cfg(feature = "webp")]
    if is_webp(bytes) {
      return Some(Self::Webp);
    }
    let _ = bytes;
    None
  }

  /// The MIME type of an animation in this container.
  #[inline]
  #[must_use]
  pub const fn mime_type(self) -> &'static str {
    match self {
      Self::Png => "image/png",
      Self::Webp => "image/webp",
    }
  }

  /// The usual file extension, without the dot.
  #[inline]
  #[must_use]
  pub const fn extension(self) -> &'static str {
    match self {
      Self::Png => "png",
      Self::Webp => "webp",
    }
  }
}

/// An encoder for either container, picked at runtime.
///
/// ```
/// # use animux::*;
/// let mut encoder = AnimationEncoder::new(ContainerKind::Webp).unwrap();
/// assert_eq!(encoder.add_frame(&b"not an image"[..], 100), Err(AnimError::Unsupported));
/// assert!(encoder.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum AnimationEncoder {
  /// Builds an APNG.
  #[cfg(feature = "png")]
  Png(ApngEncoder),
  /// Builds an animated WebP.
  #[cfg(feature = "webp")]
  Webp(WebpAnimEncoder),
}
impl AnimationEncoder {
  /// An empty encoder for the given container.
  ///
  /// ## Failure
  /// * [`Unsupported`](AnimError::Unsupported) if that container's feature
  ///   is off.
  #[inline]
  pub fn new(kind: ContainerKind) -> AnimResult<Self> {
    match kind {
      #[cfg(feature = "png")]
      ContainerKind::Png => Ok(Self::Png(ApngEncoder::new())),
      #[cfg(feature = "webp")]
      ContainerKind::Webp => Ok(Self::Webp(WebpAnimEncoder::new())),
      #[allow(unreachable_patterns)]
      _ => Err(AnimError::Unsupported),
    }
  }

  /// An empty encoder for whatever container `first_payload` is in, with that
  /// payload already added as the first frame.
  ///
  /// ## Failure
  /// * [`Unsupported`](AnimError::Unsupported) if the container isn't
  ///   recognized.
  #[inline]
  pub fn from_first_frame(first_payload: impl Into<Vec<u8>>, duration_ms: u32) -> AnimResult<Self> {
    let payload = first_payload.into();
    let kind = ContainerKind::sniff(&payload).ok_or(AnimError::Unsupported)?;
    let mut encoder = Self::new(kind)?;
    encoder.add_frame(payload, duration_ms)?;
    Ok(encoder)
  }

  /// The container being built.
  #[inline]
  #[must_use]
  pub fn kind(&self) -> ContainerKind {
    match self {
      #[cfg(feature = "png")]
      Self::Png(_) => ContainerKind::Png,
      #[cfg(feature = "webp")]
      Self::Webp(_) => ContainerKind::Webp,
    }
  }

  /// Adds a complete single-frame image file, shown for `duration_ms`.
  ///
  /// Only the file's signature is checked here, the chunks are checked by
  /// [`render`](Self::render).
  ///
  /// ## Failure
  /// * [`Unsupported`](AnimError::Unsupported) if the payload isn't in this
  ///   encoder's container. The frame isn't added.
  pub fn add_frame(&mut self, payload: impl Into<Vec<u8>>, duration_ms: u32) -> AnimResult<()> {
    let payload = payload.into();
    if ContainerKind::sniff(&payload) != Some(self.kind()) {
      log::trace!("rejecting a frame that isn't {}", self.kind().mime_type());
      return Err(AnimError::Unsupported);
    }
    match self {
      #[cfg(feature = "png")]
      Self::Png(png) => png.add_frame(payload, duration_ms),
      #[cfg(feature = "webp")]
      Self::Webp(webp) => webp.add_frame(payload, duration_ms),
    }
    Ok(())
  }

  /// Number of frames added so far.
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    match self {
      #[cfg(feature = "png")]
      Self::Png(png) => png.len(),
      #[cfg(feature = "webp")]
      Self::Webp(webp) => webp.len(),
    }
  }

  /// If no frames have been added.
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Renders the animation.
  ///
  /// `loop_count` is how many times the animation plays, 0 for forever.
  ///
  /// ## Failure
  /// * [`LoopCountOutOfRange`](AnimError::LoopCountOutOfRange) if a WebP loop
  ///   count doesn't fit in 16 bits.
  /// * Anything the underlying encoder's `render` can give.
  pub fn render(&self, loop_count: u32) -> AnimResult<Vec<u8>> {
    match self {
      #[cfg(feature = "png")]
      Self::Png(png) => png.render(loop_count),
      #[cfg(feature = "webp")]
      Self::Webp(webp) => {
        let loop_count =
          u16::try_from(loop_count).map_err(|_| AnimError::LoopCountOutOfRange(loop_count))?;
        webp.render(loop_count)
      }
    }
  }
}
