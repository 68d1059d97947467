//! buffer/encode.rs
//!
//! Big-endian writes at the cursor.
//!
//! Every write grows storage first (`ensure_capacity`), then overwrites
//! `[cursor, cursor + width)` and advances the cursor by `width`. Writing
//! inside existing storage overwrites in place; nothing is inserted.

use byteorder::{BigEndian, ByteOrder};

use crate::buffer::types::ByteCursorBuffer;
use crate::constants::{bool_bytes, BOOL_LEN, U16_LEN, U32_LEN, U64_LEN, U8_LEN};

impl ByteCursorBuffer {
    #[inline]
    #[track_caller]
    pub fn write_u8(&mut self, value: u8) {
        self.put(U8_LEN)[0] = value;
    }

    #[inline]
    #[track_caller]
    pub fn write_u16(&mut self, value: u16) {
        BigEndian::write_u16(self.put(U16_LEN), value);
    }

    #[inline]
    #[track_caller]
    pub fn write_u32(&mut self, value: u32) {
        BigEndian::write_u32(self.put(U32_LEN), value);
    }

    #[inline]
    #[track_caller]
    pub fn write_u64(&mut self, value: u64) {
        BigEndian::write_u64(self.put(U64_LEN), value);
    }

    #[inline]
    #[track_caller]
    pub fn write_i8(&mut self, value: i8) {
        self.write_u8(value as u8);
    }

    #[inline]
    #[track_caller]
    pub fn write_i16(&mut self, value: i16) {
        self.write_u16(value as u16);
    }

    #[inline]
    #[track_caller]
    pub fn write_i32(&mut self, value: i32) {
        self.write_u32(value as u32);
    }

    #[inline]
    #[track_caller]
    pub fn write_i64(&mut self, value: i64) {
        self.write_u64(value as u64);
    }

    /// Writes the binary32 bit pattern; NaN payloads are preserved.
    #[inline]
    #[track_caller]
    pub fn write_f32(&mut self, value: f32) {
        self.write_u32(value.to_bits());
    }

    #[inline]
    #[track_caller]
    pub fn write_f64(&mut self, value: f64) {
        self.write_u64(value.to_bits());
    }

    /// Always emits exactly `0x00` or `0x01`.
    #[inline]
    #[track_caller]
    pub fn write_bool(&mut self, value: bool) {
        self.put(BOOL_LEN)[0] = if value { bool_bytes::TRUE } else { bool_bytes::FALSE };
    }

    /// Copy `src` verbatim at the cursor, growing only as much as needed.
    #[track_caller]
    pub fn write_bytes(&mut self, src: &[u8]) {
        self.put(src.len()).copy_from_slice(src);
    }
}
