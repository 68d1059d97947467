//! buffer/decode.rs
//!
//! Big-endian reads at the cursor.
//!
//! Design notes:
//! - Reads never grow storage. A read past the end panics; use the
//!   `try_read_*` twin when the input is untrusted.
//! - Signed and float reads go through the unsigned path of the same width and
//!   reinterpret the bits, so every pattern (NaN payloads, -0.0) comes back exactly.
//! - The cursor only moves after the bounds check passed.

use byteorder::{BigEndian, ByteOrder};

use crate::buffer::types::{BufferError, ByteCursorBuffer};
use crate::constants::{bool_bytes, BOOL_LEN, U16_LEN, U32_LEN, U64_LEN, U8_LEN};

impl ByteCursorBuffer {
    // -------------------------------------------------------------------------
    // Unsigned
    // -------------------------------------------------------------------------

    #[inline]
    #[track_caller]
    pub fn read_u8(&mut self) -> u8 {
        self.take(U8_LEN)[0]
    }

    #[inline]
    #[track_caller]
    pub fn read_u16(&mut self) -> u16 {
        BigEndian::read_u16(self.take(U16_LEN))
    }

    #[inline]
    #[track_caller]
    pub fn read_u32(&mut self) -> u32 {
        BigEndian::read_u32(self.take(U32_LEN))
    }

    #[inline]
    #[track_caller]
    pub fn read_u64(&mut self) -> u64 {
        BigEndian::read_u64(self.take(U64_LEN))
    }

    // -------------------------------------------------------------------------
    // Signed (two's complement reinterpretation)
    // -------------------------------------------------------------------------

    #[inline]
    #[track_caller]
    pub fn read_i8(&mut self) -> i8 {
        self.read_u8() as i8
    }

    #[inline]
    #[track_caller]
    pub fn read_i16(&mut self) -> i16 {
        self.read_u16() as i16
    }

    #[inline]
    #[track_caller]
    pub fn read_i32(&mut self) -> i32 {
        self.read_u32() as i32
    }

    #[inline]
    #[track_caller]
    pub fn read_i64(&mut self) -> i64 {
        self.read_u64() as i64
    }

    // -------------------------------------------------------------------------
    // IEEE-754 and bool
    // -------------------------------------------------------------------------

    #[inline]
    #[track_caller]
    pub fn read_f32(&mut self) -> f32 {
        f32::from_bits(self.read_u32())
    }

    #[inline]
    #[track_caller]
    pub fn read_f64(&mut self) -> f64 {
        f64::from_bits(self.read_u64())
    }

    /// Any non-zero byte is `true`.
    #[inline]
    #[track_caller]
    pub fn read_bool(&mut self) -> bool {
        self.take(BOOL_LEN)[0] != bool_bytes::FALSE
    }

    // -------------------------------------------------------------------------
    // Byte spans
    // -------------------------------------------------------------------------

    /// Borrow the next `n` bytes of storage and advance past them.
    ///
    /// The view stays tied to the buffer borrow, so the buffer cannot be
    /// written while it is held. Use [`read_bytes_to_vec`](Self::read_bytes_to_vec)
    /// for a copy that outlives further buffer use.
    #[inline]
    #[track_caller]
    pub fn read_bytes(&mut self, n: usize) -> &[u8] {
        self.take(n)
    }

    /// Owned copy of the next `n` bytes.
    #[track_caller]
    pub fn read_bytes_to_vec(&mut self, n: usize) -> Vec<u8> {
        self.take(n).to_vec()
    }

    /// Next `N` bytes as a fixed array (magic markers, salts, ids).
    #[track_caller]
    pub fn read_array<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N));
        out
    }

    // -------------------------------------------------------------------------
    // Checked reads
    // -------------------------------------------------------------------------

    pub fn try_read_u8(&mut self) -> Result<u8, BufferError> {
        Ok(self.try_take(U8_LEN)?[0])
    }

    pub fn try_read_u16(&mut self) -> Result<u16, BufferError> {
        self.try_take(U16_LEN).map(BigEndian::read_u16)
    }

    pub fn try_read_u32(&mut self) -> Result<u32, BufferError> {
        self.try_take(U32_LEN).map(BigEndian::read_u32)
    }

    pub fn try_read_u64(&mut self) -> Result<u64, BufferError> {
        self.try_take(U64_LEN).map(BigEndian::read_u64)
    }

    pub fn try_read_i8(&mut self) -> Result<i8, BufferError> {
        self.try_read_u8().map(|v| v as i8)
    }

    pub fn try_read_i16(&mut self) -> Result<i16, BufferError> {
        self.try_read_u16().map(|v| v as i16)
    }

    pub fn try_read_i32(&mut self) -> Result<i32, BufferError> {
        self.try_read_u32().map(|v| v as i32)
    }

    pub fn try_read_i64(&mut self) -> Result<i64, BufferError> {
        self.try_read_u64().map(|v| v as i64)
    }

    pub fn try_read_f32(&mut self) -> Result<f32, BufferError> {
        self.try_read_u32().map(f32::from_bits)
    }

    pub fn try_read_f64(&mut self) -> Result<f64, BufferError> {
        self.try_read_u64().map(f64::from_bits)
    }

    pub fn try_read_bool(&mut self) -> Result<bool, BufferError> {
        Ok(self.try_take(BOOL_LEN)?[0] != bool_bytes::FALSE)
    }

    pub fn try_read_bytes(&mut self, n: usize) -> Result<&[u8], BufferError> {
        self.try_take(n)
    }
}
