/// Render a byte span for diagnostics.
///
/// Printable ASCII comes out as a byte-string literal, anything else as
/// `0x` followed by lowercase hex.
pub fn fmt_bytes(b: &[u8]) -> String {
    if b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}
