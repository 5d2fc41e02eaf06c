use super::*;
use pretty_assertions::assert_eq;

// === Basic Ordering ===

#[test]
fn empty_equals_empty() {
    assert_eq!(utf8_sorted_as_unicode(&[], &[]), Ordering::Equal);
    assert!(!utf8_sorted_as_unicode_less(&[], &[]));
}

#[test]
fn identical_sequences_are_equal() {
    assert_eq!(
        utf8_sorted_as_unicode(&[0x01, 0x02], &[0x01, 0x02]),
        Ordering::Equal
    );
}

#[test]
fn first_difference_decides() {
    assert_eq!(utf8_sorted_as_unicode(b"abc", b"abd"), Ordering::Less);
    assert_eq!(utf8_sorted_as_unicode(b"b", b"abc"), Ordering::Greater);
}

// === Prefix Rule ===

#[test]
fn proper_prefix_sorts_first() {
    assert_eq!(utf8_sorted_as_unicode(&[0x61], &[0x61, 0x00]), Ordering::Less);
    assert_eq!(
        utf8_sorted_as_unicode(&[0x61, 0x00], &[0x61]),
        Ordering::Greater
    );
}

#[test]
fn empty_sorts_before_everything() {
    assert!(utf8_sorted_as_unicode_less(&[], &[0x00]));
    assert!(!utf8_sorted_as_unicode_less(&[0x00], &[]));
}

// === Unsigned Interpretation ===

#[test]
fn high_bytes_sort_above_ascii() {
    // A signed comparison would read 0x80 as -128 and invert this.
    assert!(utf8_sorted_as_unicode_less(&[0x7F], &[0x80]));
    assert!(!utf8_sorted_as_unicode_less(&[0x80], &[0x7F]));
    assert!(utf8_sorted_as_unicode_less(&[0x00], &[0xFF]));
}

#[test]
fn matches_code_point_order() {
    // U+007A 'z' < U+00E9 'é' < U+4E2D '中' < U+1F600
    let words = ["z", "\u{e9}", "\u{4e2d}", "\u{1F600}"];
    for pair in words.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(a < b, "code point order: {a:?} < {b:?}");
        assert!(
            utf8_sorted_as_unicode_less(a.as_bytes(), b.as_bytes()),
            "byte order disagrees for {a:?} < {b:?}"
        );
    }
}
