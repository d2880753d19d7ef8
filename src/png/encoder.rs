use super::*;

/// Builds an APNG out of single-frame PNG files.
///
/// Frames are shown in the order they're added. The first frame's `IHDR`
/// decides the canvas size and pixel format, and its ancillary chunks (palette,
/// transparency, color space info, and so on) are carried into the output.
/// Ancillary chunks of later frames are dropped, so those frames must share
/// the first frame's pixel format and palette, which `render` checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ApngEncoder {
  frames: Vec<Frame>,
}

impl ApngEncoder {
  /// The denominator of every frame delay: durations are in milliseconds.
  pub const DELAY_DEN: u16 = 1000;

  /// An encoder with no frames.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { frames: Vec::new() }
  }

  /// Adds a complete single-frame PNG file, shown for `duration_ms`.
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

  /// Renders the animation as PNG bytes.
  ///
  /// `loop_count` is how many times the animation plays, 0 for forever.
  ///
  /// ## Failure
  /// * [`NoFrames`](AnimError::NoFrames) if nothing was added.
  /// * [`CorruptChunk`](AnimError::CorruptChunk) if any chunk of any frame
  ///   fails its CRC check.
  /// * [`MissingChunk`](AnimError::MissingChunk) if a frame has no `IHDR` or
  ///   no `IDAT`.
  /// * [`DuplicateChunk`](AnimError::DuplicateChunk) if a frame has more
  ///   than one `IHDR`.
  /// * [`FrameOutsideCanvas`](AnimError::FrameOutsideCanvas) if a frame is
  ///   bigger than the first one.
  /// * [`FrameFormatMismatch`](AnimError::FrameFormatMismatch) if a frame's
  ///   bit depth, color type, compression, filter, or interlace differs from
  ///   the first frame's, or an indexed frame has a different palette.
  /// * [`DurationOutOfRange`](AnimError::DurationOutOfRange) if a duration
  ///   doesn't fit in 16 bits.
  pub fn render(&self, loop_count: u32) -> AnimResult<Vec<u8>> {
    if self.frames.is_empty() {
      return Err(AnimError::NoFrames);
    }
    let num_frames = u32::try_from(self.frames.len()).unwrap_or(u32::MAX);
    let mut rebuilt: Vec<PngChunk<'_>> = Vec::new();
    let mut sequence_number = 0_u32;
    let mut canvas: Option<IHDR> = None;
    let mut palette: Option<Cow<'_, [u8]>> = None;

    for (index, frame) in self.frames.iter().enumerate() {
      let delay_num = u16::try_from(frame.duration_ms)
        .map_err(|_| AnimError::DurationOutOfRange(frame.duration_ms))?;
      let mut header: Option<IHDR> = None;
      let mut needs_fctl = false;
      let mut saw_idat = false;

      for chunk in PngChunkIter::new(&frame.payload) {
        let chunk = chunk?;
        match chunk.kind() {
          PngChunkKind::IHDR => {
            if header.is_some() {
              return Err(AnimError::DuplicateChunk("IHDR"));
            }
            let ihdr = IHDR::try_from(&chunk.data[..])?;
            if let Some(canvas) = canvas {
              if !ihdr.same_format(&canvas) {
                return Err(AnimError::FrameFormatMismatch { index });
              }
              if ihdr.width() > canvas.width() || ihdr.height() > canvas.height() {
                return Err(AnimError::FrameOutsideCanvas {
                  index,
                  width: ihdr.width(),
                  height: ihdr.height(),
                  canvas_width: canvas.width(),
                  canvas_height: canvas.height(),
                });
              }
            } else {
              log::trace!("canvas is {}x{}", ihdr.width(), ihdr.height());
              canvas = Some(ihdr);
              rebuilt.push(chunk);
              rebuilt.push(acTL::new(num_frames, loop_count).to_chunk());
            }
            header = Some(ihdr);
            needs_fctl = true;
          }
          PngChunkKind::IDAT => {
            let Some(ihdr) = header else {
              return Err(AnimError::MissingChunk("IHDR"));
            };
            // the frame's fcTL goes right before its first data chunk, after
            // any palette or other ancillary chunks
            if needs_fctl {
              let fctl =
                fcTL::new(sequence_number, ihdr.width(), ihdr.height(), delay_num, Self::DELAY_DEN);
              rebuilt.push(fctl.to_chunk());
              sequence_number += 1;
              needs_fctl = false;
            }
            saw_idat = true;
            if index == 0 {
              rebuilt.push(chunk);
            } else {
              rebuilt.push(fdat_chunk(sequence_number, &chunk.data));
              sequence_number += 1;
            }
          }
          PngChunkKind::IEND => (),
          PngChunkKind::PLTE if index == 0 => {
            palette = Some(chunk.data.clone());
            rebuilt.push(chunk);
          }
          PngChunkKind::PLTE => {
            let indexed = canvas.is_some_and(|canvas| canvas.is_indexed());
            if indexed && palette.as_deref() != Some(&chunk.data[..]) {
              return Err(AnimError::FrameFormatMismatch { index });
            }
            log::trace!("frame {index}: dropping PLTE");
          }
          PngChunkKind::acTL | PngChunkKind::fcTL | PngChunkKind::fdAT => {
            log::trace!("frame {index}: dropping animation chunk {}", chunk.ty);
          }
          _ if index == 0 => {
            log::trace!("frame {index}: passing through {}", chunk.ty);
            rebuilt.push(chunk);
          }
          _ => {
            log::trace!("frame {index}: dropping ancillary chunk {}", chunk.ty);
          }
        }
      }

      if header.is_none() {
        return Err(AnimError::MissingChunk("IHDR"));
      }
      if !saw_idat {
        return Err(AnimError::MissingChunk("IDAT"));
      }
    }

    rebuilt.push(PngChunk::new(PngChunkKind::IEND, Vec::new()));

    let body = write_png_chunks(&rebuilt);
    let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + body.len());
    out.extend_from_slice(&PNG_SIGNATURE);
    out.extend_from_slice(&body);
    log::debug!(
      "rendered APNG: {num_frames} frames, {sequence_number} sequence numbers, {} bytes",
      out.len()
    );
    Ok(out)
  }
}
