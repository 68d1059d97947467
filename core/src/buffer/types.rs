//! buffer/types.rs
//! Core buffer struct: storage, cursor, growth and bounds checks.
//!
//! Design notes:
//! - Storage only grows, and only by zero-padding up to exactly `cursor + width`.
//! - The cursor may be parked anywhere; bounds are enforced lazily when a read
//!   or write touches storage.
//! - Reads never grow. Writes always grow first, so they cannot run out of room.

use std::fmt;
use std::ops::Range;

use bytes::{Bytes, BytesMut};
use thiserror::Error;
use tracing::{debug, trace};

/// Errors surfaced by the checked `try_read_*` family.
///
/// The unchecked reads panic with the same message instead of returning this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// A read needs bytes past the end of storage.
    #[error("out of bounds: need {need} bytes at position {position}, buffer length is {len}")]
    OutOfBounds { position: usize, need: usize, len: usize },

    /// `position + need` does not fit in `usize`.
    #[error("position overflow: {position} + {need} exceeds usize::MAX")]
    PositionOverflow { position: usize, need: usize },
}

/// Growable byte storage with a single read/write cursor.
///
/// Every multi-byte value is big-endian. Single owner, no interior
/// synchronization: wrap it in a `Mutex` if it has to be shared.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ByteCursorBuffer {
    storage: Vec<u8>,
    cursor: usize,
}

impl ByteCursorBuffer {
    /// Empty storage, cursor at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty storage with room reserved for `capacity` bytes.
    ///
    /// Only the allocation is reserved; `len()` stays 0.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            cursor: 0,
        }
    }

    /// Take ownership of `bytes` as the initial storage, cursor at 0.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            storage: bytes.into(),
            cursor: 0,
        }
    }

    /// Live view of the storage, including any zero-padding from growth.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.storage
    }

    /// Live mutable view. The length is fixed; only contents can change.
    #[inline]
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.storage
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Move the cursor to `position` without any check against `len()`.
    #[inline]
    pub fn set_position(&mut self, position: usize) {
        self.cursor = position;
    }

    #[inline]
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// `len() - position()`. Negative once the cursor is parked past the end.
    pub fn remaining(&self) -> isize {
        let len = self.storage.len();
        if self.cursor <= len {
            // Vec lengths never exceed isize::MAX.
            (len - self.cursor) as isize
        } else {
            isize::try_from(self.cursor - len).map_or(isize::MIN, |past| -past)
        }
    }

    /// Bytes left to read, saturating at 0.
    #[inline]
    pub fn remaining_len(&self) -> usize {
        self.storage.len().saturating_sub(self.cursor)
    }

    /// Grow storage with zeros so that `position() + size` bytes exist.
    ///
    /// Appends exactly the missing bytes and nothing more. No-op when the
    /// storage is already long enough.
    ///
    /// # Panics
    /// If `position() + size` overflows `usize`.
    #[track_caller]
    pub fn ensure_capacity(&mut self, size: usize) {
        let end = self.end_of(size);
        let len = self.storage.len();
        if end > len {
            trace!(old_len = len, new_len = end, position = self.cursor, "growing buffer");
            self.storage.resize(end, 0);
        }
    }

    /// Consume the buffer, keeping the storage.
    pub fn into_vec(self) -> Vec<u8> {
        self.storage
    }

    /// Consume the buffer into a shareable `Bytes` without copying.
    pub fn into_bytes(self) -> Bytes {
        Bytes::from(self.storage)
    }

    // -------------------------------------------------------------------------
    // Cursor plumbing shared by decode.rs / encode.rs
    // -------------------------------------------------------------------------

    #[track_caller]
    fn end_of(&self, need: usize) -> usize {
        match self.cursor.checked_add(need) {
            Some(end) => end,
            None => panic!(
                "{}",
                BufferError::PositionOverflow { position: self.cursor, need }
            ),
        }
    }

    /// Range `[cursor, cursor + need)` if it lies inside storage.
    pub(crate) fn checked_span(&self, need: usize) -> Result<Range<usize>, BufferError> {
        let position = self.cursor;
        let end = position
            .checked_add(need)
            .ok_or(BufferError::PositionOverflow { position, need })?;
        let len = self.storage.len();
        if end > len {
            return Err(BufferError::OutOfBounds { position, need, len });
        }
        Ok(position..end)
    }

    /// Consume `need` bytes for a read, panicking if they are not there.
    #[track_caller]
    pub(crate) fn take(&mut self, need: usize) -> &[u8] {
        let span = match self.checked_span(need) {
            Ok(span) => span,
            Err(err) => panic!("{err}"),
        };
        self.cursor = span.end;
        &self.storage[span]
    }

    /// Consume `need` bytes for a read. Cursor is untouched on error.
    pub(crate) fn try_take(&mut self, need: usize) -> Result<&[u8], BufferError> {
        let span = self.checked_span(need).map_err(|err| {
            debug!(%err, "checked read failed");
            err
        })?;
        self.cursor = span.end;
        Ok(&self.storage[span])
    }

    /// Reserve `need` bytes at the cursor for a write and advance past them.
    #[track_caller]
    pub(crate) fn put(&mut self, need: usize) -> &mut [u8] {
        self.ensure_capacity(need);
        let start = self.cursor;
        self.cursor = start + need;
        &mut self.storage[start..start + need]
    }
}

impl fmt::Debug for ByteCursorBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteCursorBuffer")
            .field("position", &self.cursor)
            .field("len", &self.storage.len())
            .field("bytes", &format_args!("0x{}", hex::encode(&self.storage)))
            .finish()
    }
}

impl From<Vec<u8>> for ByteCursorBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&[u8]> for ByteCursorBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Bytes> for ByteCursorBuffer {
    fn from(bytes: Bytes) -> Self {
        Self::from_bytes(Vec::from(bytes))
    }
}

impl From<BytesMut> for ByteCursorBuffer {
    fn from(bytes: BytesMut) -> Self {
        Self::from_bytes(Vec::from(bytes))
    }
}

impl From<ByteCursorBuffer> for Vec<u8> {
    fn from(buf: ByteCursorBuffer) -> Self {
        buf.into_vec()
    }
}
