//! Shorthands for viewing chunk bodies as plain-old-data structs.

use bytemuck::{pod_read_unaligned, try_pod_read_unaligned, Pod};
use core::mem::size_of;

/// Reads a `T` off the front of `bytes`, handing back the rest.
#[inline]
#[must_use]
pub(crate) fn try_pull_pod<T: Pod>(bytes: &[u8]) -> Option<(T, &[u8])> {
  let position = size_of::<T>();
  if bytes.len() >= position {
    let (head, tail) = bytes.split_at(position);
    Some((pod_read_unaligned(head), tail))
  } else {
    None
  }
}

/// Reads a `T` that must span exactly all of `bytes`.
#[inline]
#[must_use]
pub(crate) fn try_read_pod<T: Pod>(bytes: &[u8]) -> Option<T> {
  try_pod_read_unaligned(bytes).ok()
}
