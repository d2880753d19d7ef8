use super::*;

/// One frame's image chunks, pulled out of its still WebP file.
struct FrameParts<'b> {
  alph: Option<WebpChunk<'b>>,
  image: WebpChunk<'b>,
  header: ImageHeader,
}

/// Builds an animated WebP out of still WebP files.
///
/// The first frame's image size becomes the canvas size, and its `ICCP`,
/// `EXIF` and `XMP ` chunks become the file's metadata. Later frames may be
/// smaller than the canvas (they're placed at the top left), but not larger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WebpAnimEncoder {
  frames: Vec<Frame>,
  background_color: u32,
}

impl WebpAnimEncoder {
  /// An encoder with no frames and a background color of 0.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { frames: Vec::new(), background_color: 0 }
  }

  /// Adds a complete still WebP file, shown for `duration_ms`.
  ///
  /// The payload isn't looked at until [`render`](Self::render).
  #[inline]
  pub fn add_frame(&mut self, payload: impl Into<Vec<u8>>, duration_ms: u32) {
    self.push_frame(Frame::new(payload).with_duration(duration_ms));
  }

  /// Adds a frame.
  #[inline]
  pub fn push_frame(&mut self, frame: Frame) {
    self.frames.push(frame);
  }

  /// Sets the `ANIM` background color, packed little-endian as `[B, G, R, A]`.
  ///
  /// Viewers are free to ignore it.
  #[inline]
  pub fn set_background_color(&mut self, background_color: u32) {
    self.background_color = background_color;
  }

  /// The `ANIM` background color.
  #[inline]
  #[must_use]
  pub const fn background_color(&self) -> u32 {
    self.background_color
  }

  /// The frames added so far.
  #[inline]
  #[must_use]
  pub fn frames(&self) -> &[Frame] {
    &self.frames
  }

  /// Number of frames added so far.
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.frames.len()
  }

  /// If no frames have been added.
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.frames.is_empty()
  }

  /// Renders the animation as WebP bytes.
  ///
  /// `loop_count` is how many times the animation plays, 0 for forever.
  ///
  /// ## Failure
  /// * [`NoFrames`](AnimError::NoFrames) if nothing was added.
  /// * [`NotRiff`](AnimError::NotRiff) or [`NotWebp`](AnimError::NotWebp) if
  ///   a frame isn't a WebP file.
  /// * [`MissingChunk`](AnimError::MissingChunk) if a frame has no `VP8 ` or
  ///   `VP8L` chunk.
  /// * [`InvalidDimensions`](AnimError::InvalidDimensions) if a lossy frame
  ///   header gives a size of 0.
  /// * [`FrameOutsideCanvas`](AnimError::FrameOutsideCanvas) if a frame is
  ///   bigger than the first one.
  /// * [`DurationOutOfRange`](AnimError::DurationOutOfRange) if a duration
  ///   doesn't fit in 24 bits.
  pub fn render(&self, loop_count: u16) -> AnimResult<Vec<u8>> {
    if self.frames.is_empty() {
      return Err(AnimError::NoFrames);
    }
    let mut iccp: Option<WebpChunk<'_>> = None;
    let mut exif: Option<WebpChunk<'_>> = None;
    let mut xmp: Option<WebpChunk<'_>> = None;
    let mut canvas: Option<ImageHeader> = None;
    let mut any_alpha = false;
    let mut anmfs: Vec<WebpChunk<'_>> = Vec::with_capacity(self.frames.len());

    for (index, frame) in self.frames.iter().enumerate() {
      if frame.duration_ms > U24LE::MAX {
        return Err(AnimError::DurationOutOfRange(frame.duration_ms));
      }
      let chunks = read_webp_chunks(&frame.payload)?;
      let parts = split_frame(index, chunks, &mut iccp, &mut exif, &mut xmp)?;
      let header = parts.header;

      if let Some(canvas) = canvas {
        if header.width() > canvas.width() || header.height() > canvas.height() {
          return Err(AnimError::FrameOutsideCanvas {
            index,
            width: header.width(),
            height: header.height(),
            canvas_width: canvas.width(),
            canvas_height: canvas.height(),
          });
        }
      } else {
        log::trace!("canvas is {}x{}", header.width(), header.height());
        canvas = Some(header);
      }
      any_alpha |= parts.alph.is_some() || header.alpha_is_used;

      let mut inner = Vec::with_capacity(2);
      inner.extend(parts.alph);
      inner.push(parts.image);
      anmfs.push(anmf_chunk(
        header.width_minus_one,
        header.height_minus_one,
        frame.duration_ms,
        DisposeMethod::None,
        BlendMethod::AlphaBlend,
        &write_riff_chunks(&inner),
      ));
    }

    let Some(canvas) = canvas else {
      return Err(AnimError::NoFrames);
    };
    let flags = Vp8xFlags {
      animation: true,
      xmp: xmp.is_some(),
      exif: exif.is_some(),
      alpha: any_alpha,
      icc: iccp.is_some(),
    };

    let mut rebuilt: Vec<WebpChunk<'_>> = Vec::with_capacity(anmfs.len() + 5);
    rebuilt.push(vp8x_chunk(flags, canvas.width_minus_one, canvas.height_minus_one));
    rebuilt.extend(iccp);
    rebuilt.push(anim_chunk(self.background_color, loop_count));
    rebuilt.extend(anmfs);
    rebuilt.extend(exif);
    rebuilt.extend(xmp);

    let body = write_riff_chunks(&rebuilt);
    let out = write_riff_chunks(&[riff_chunk(AsciiArray(*b"WEBP"), &body)]);
    log::debug!(
      "rendered animated WebP: {} frames, {}x{} canvas, {} bytes",
      self.frames.len(),
      canvas.width(),
      canvas.height(),
      out.len()
    );
    Ok(out)
  }
}

/// Pulls the first image chunk (and the `ALPH` ahead of it) out of a frame's
/// chunk list. Frame 0's metadata chunks are put in the given slots.
fn split_frame<'b>(
  index: usize, chunks: Vec<WebpChunk<'b>>, iccp: &mut Option<WebpChunk<'b>>,
  exif: &mut Option<WebpChunk<'b>>, xmp: &mut Option<WebpChunk<'b>>,
) -> AnimResult<FrameParts<'b>> {
  let mut alph: Option<WebpChunk<'b>> = None;
  let mut parts: Option<FrameParts<'b>> = None;
  for chunk in chunks {
    match chunk.kind() {
      WebpChunkKind::ALPH if parts.is_none() => alph = Some(chunk),
      WebpChunkKind::VP8 if parts.is_none() => {
        let header = ImageHeader::from_vp8(&chunk.data)?;
        parts = Some(FrameParts { alph: alph.take(), image: chunk, header });
      }
      WebpChunkKind::VP8L if parts.is_none() => {
        let header = ImageHeader::from_vp8l(&chunk.data);
        parts = Some(FrameParts { alph: alph.take(), image: chunk, header });
      }
      WebpChunkKind::ICCP if index == 0 => *iccp = Some(chunk),
      WebpChunkKind::EXIF if index == 0 => *exif = Some(chunk),
      WebpChunkKind::XMP if index == 0 => *xmp = Some(chunk),
      _ => {
        log::trace!("frame {index}: dropping chunk {}", chunk.fourcc);
      }
    }
  }
  parts.ok_or(AnimError::MissingChunk("VP8 /VP8L"))
}
