//! buffer/mod.rs
//! Cursor buffer: growable storage plus big-endian fixed-width codec.
//!
//! Non-responsibilities:
//! - Framing, length prefixes, checksums
//! - Variable-length integers
//! - IO and synchronization

pub mod types;
pub mod decode;
pub mod encode;

pub use types::{BufferError, ByteCursorBuffer};
