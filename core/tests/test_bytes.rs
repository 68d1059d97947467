// Byte-span suite: raw span reads/writes, owned copies, and conversions in
// and out of the buffer.

#[cfg(test)]
mod tests {
    use bytes::{Bytes, BytesMut};
    use cursor_codec::ByteCursorBuffer;
    use proptest::prelude::*;

    #[test]
    fn write_then_read_same_span() {
        let mut buf = ByteCursorBuffer::new();
        buf.write_bytes(b"hello world");
        buf.set_position(0);
        assert_eq!(buf.read_bytes(11), b"hello world");
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn longer_span_grows_exactly() {
        let mut buf = ByteCursorBuffer::from_bytes(vec![0xEE; 4]);
        buf.set_position(2);
        buf.write_bytes(&[1, 2, 3, 4, 5]);
        assert_eq!(buf.bytes(), &[0xEE, 0xEE, 1, 2, 3, 4, 5]);
        assert_eq!(buf.len(), 7);
    }

    #[test]
    fn zero_length_read_does_not_move() {
        let mut buf = ByteCursorBuffer::from_bytes(vec![1]);
        assert!(buf.read_bytes(0).is_empty());
        assert_eq!(buf.position(), 0);
    }

    #[test]
    fn read_bytes_is_a_view_of_storage() {
        let mut buf = ByteCursorBuffer::from_bytes(b"abcdef".to_vec());
        buf.set_position(2);
        let view = buf.read_bytes(3);
        assert_eq!(view, b"cde");
        assert_eq!(buf.position(), 5);
    }

    #[test]
    fn read_bytes_to_vec_outlives_later_writes() {
        let mut buf = ByteCursorBuffer::from_bytes(b"abcd".to_vec());
        let copy = buf.read_bytes_to_vec(2);
        buf.set_position(0);
        buf.write_bytes(b"zz");
        assert_eq!(copy, b"ab");
        assert_eq!(buf.bytes(), b"zzcd");
    }

    #[test]
    fn read_array_takes_fixed_width() {
        let mut buf = ByteCursorBuffer::from_bytes(b"RSE1\x00\x01".to_vec());
        let magic: [u8; 4] = buf.read_array();
        assert_eq!(&magic, b"RSE1");
        assert_eq!(buf.read_u16(), 1);
    }

    #[test]
    fn mixed_scalars_and_spans_interleave() {
        let mut buf = ByteCursorBuffer::new();
        buf.write_u16(3);
        buf.write_bytes(b"abc");
        buf.write_bool(true);
        buf.rewind();

        let n = buf.read_u16() as usize;
        assert_eq!(buf.read_bytes(n), b"abc");
        assert!(buf.read_bool());
    }

    #[test]
    fn bytes_mut_edits_in_place() {
        let mut buf = ByteCursorBuffer::from_bytes(vec![0, 0]);
        buf.bytes_mut()[1] = 0xFF;
        assert_eq!(buf.read_u16(), 0x00FF);
    }

// # Conversions

    #[test]
    fn conversions_in_are_equivalent() {
        let v = vec![1u8, 2, 3];
        let a = ByteCursorBuffer::from(v.clone());
        let b = ByteCursorBuffer::from(&v[..]);
        let c = ByteCursorBuffer::from(Bytes::from(v.clone()));
        let d = ByteCursorBuffer::from(BytesMut::from(&v[..]));
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(c, d);
        assert_eq!(a.position(), 0);
    }

    #[test]
    fn conversions_out_keep_padding() {
        let mut buf = ByteCursorBuffer::new();
        buf.set_position(1);
        buf.write_u8(2);

        let frozen = buf.clone().into_bytes();
        assert_eq!(&frozen[..], &[0, 2]);

        let v: Vec<u8> = buf.into();
        assert_eq!(v, vec![0, 2]);
    }

    proptest! {
        #[test]
        fn prop_span_round_trip(prefix in 0usize..16, data in proptest::collection::vec(any::<u8>(), 0..256)) {
            let mut buf = ByteCursorBuffer::new();
            buf.set_position(prefix);
            buf.write_bytes(&data);
            prop_assert_eq!(buf.len(), prefix + data.len());
            prop_assert!(buf.bytes()[..prefix].iter().all(|&b| b == 0));

            buf.set_position(prefix);
            prop_assert_eq!(buf.read_bytes(data.len()), &data[..]);
        }
    }
}
