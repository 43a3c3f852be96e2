//! End-to-end tests of the safe-append protocol as call sites use it:
//! many appends of mixed flavors into one buffer, with the summed overflow
//! counts giving an exact total of dropped bytes.

use mudstr_buffer::{BUFFER_LEN, BoundedWriter, SBUF_LEN};
use proptest::prelude::*;

#[test]
fn building_a_message_line() {
    let mut buf = [0u8; BUFFER_LEN];
    let mut w = BoundedWriter::new(&mut buf);

    let mut dropped = 0;
    dropped += w.append_str("You rolled ");
    dropped += w.append_integer(17, 10);
    dropped += w.append_str(" (");
    dropped += w.append_hex(&[0x11]);
    dropped += w.append_str(") ");
    dropped += w.append_codepoint('\u{2605}');
    w.terminate();

    assert_eq!(dropped, 0);
    assert_eq!(w.written(), "You rolled 17 (11) \u{2605}".as_bytes());
}

#[test]
fn short_buffer_convention() {
    // SBUF_LEN buffers use the identical protocol at a smaller capacity.
    let mut buf = [0u8; SBUF_LEN];
    let mut w = BoundedWriter::new(&mut buf);
    assert_eq!(w.fill(b'x', SBUF_LEN), 1);
    assert_eq!(w.position(), SBUF_LEN - 1);
}

#[test]
fn dropped_totals_accumulate_exactly() {
    let mut buf = [0u8; 10];
    let mut w = BoundedWriter::new(&mut buf);

    let mut dropped = 0;
    dropped += w.append_str("hello ");  // fits, 6 bytes
    dropped += w.append_str("world!"); // 3 fit, 3 dropped
    dropped += w.append_str("more");   // all 4 dropped
    dropped += w.append_byte(b'!');    // dropped

    assert_eq!(w.written(), b"hello wor");
    assert_eq!(dropped, 8);
}

proptest! {
    #[test]
    fn mixed_appends_account_for_every_byte(
        pieces in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..24), 0..12),
        cap in 1usize..48,
    ) {
        let total: usize = pieces.iter().map(Vec::len).sum();
        let mut buf = vec![0u8; cap];
        let mut w = BoundedWriter::new(&mut buf);
        let dropped: usize = pieces.iter().map(|p| w.append_bytes(p)).sum();
        prop_assert_eq!(w.position() + dropped, total);
        prop_assert!(w.position() <= cap - 1);
    }

    #[test]
    fn terminated_buffer_is_nul_delimited(
        data in proptest::collection::vec(any::<u8>(), 0..40),
        cap in 2usize..32,
    ) {
        let mut buf = vec![0xFFu8; cap];
        let mut w = BoundedWriter::new(&mut buf);
        w.append_bytes(&data);
        let end = w.position();
        w.terminate();
        prop_assert_eq!(buf[end], 0);
    }
}
