//! snapshot.rs
//! Immutable view of a buffer's shape for diagnostics.
//!
//! Holds plain values only, so it can be logged or serialized after the
//! buffer has moved on.

use serde::{Deserialize, Serialize};

use crate::buffer::ByteCursorBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferSnapshot {
    pub len: usize,
    pub position: usize,
    /// Signed; negative when the cursor is parked past the end.
    pub remaining: isize,
}

impl BufferSnapshot {
    pub fn from(buf: &ByteCursorBuffer) -> Self {
        Self {
            len: buf.len(),
            position: buf.position(),
            remaining: buf.remaining(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining <= 0
    }
}

impl ByteCursorBuffer {
    pub fn snapshot(&self) -> BufferSnapshot {
        BufferSnapshot::from(self)
    }
}
