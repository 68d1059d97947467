//! cursor-codec
//!
//! Big-endian fixed-width binary codec over a growable byte buffer.
//! No IO, no framing, no locking.

#![forbid(unsafe_code)]

pub mod constants;
pub mod utils;

pub mod buffer;
pub mod snapshot;

pub use buffer::{BufferError, ByteCursorBuffer};
pub use snapshot::BufferSnapshot;

// -----------------------------------------------------------------------------
// Prelude
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::buffer::{BufferError, ByteCursorBuffer};
    pub use crate::snapshot::BufferSnapshot;
}
