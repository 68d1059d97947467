//! constants.rs
//! Wire widths for every scalar kind the buffer encodes.
//!
//! All multi-byte values are big-endian; these are the byte counts a read
//! consumes and a write produces.

pub const U8_LEN: usize = 1;
pub const U16_LEN: usize = 2;
pub const U32_LEN: usize = 4;
pub const U64_LEN: usize = 8;

pub const I8_LEN: usize = U8_LEN;
pub const I16_LEN: usize = U16_LEN;
pub const I32_LEN: usize = U32_LEN;
pub const I64_LEN: usize = U64_LEN;

/// binary32 travels as its u32 bit pattern.
pub const F32_LEN: usize = U32_LEN;
/// binary64 travels as its u64 bit pattern.
pub const F64_LEN: usize = U64_LEN;

pub const BOOL_LEN: usize = U8_LEN;

/// Boolean wire bytes. Reads accept any non-zero byte as `true`.
pub mod bool_bytes {
    pub const FALSE: u8 = 0x00;
    pub const TRUE: u8 = 0x01;
}
