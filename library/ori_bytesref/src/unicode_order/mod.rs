//! Unsigned byte ordering for UTF-8 encoded terms.
//!
//! Comparing UTF-8 bytes as unsigned ordinals gives the same order as
//! comparing the decoded text by Unicode code point, so term dictionaries
//! can sort and binary-search encoded terms without decoding them.
//!
//! Lead bytes of multi-byte sequences are `>= 0xC0` and continuation bytes
//! are `0x80..=0xBF`; both must sort above ASCII. A signed comparison would
//! put them below `0x00` and break the order.

use std::cmp::Ordering;

/// Compare two byte sequences by unsigned byte value.
///
/// The first differing byte decides. If one sequence is a prefix of the
/// other, the shorter one sorts first. Total order over all finite byte
/// sequences.
#[inline]
pub fn utf8_sorted_as_unicode(a: &[u8], b: &[u8]) -> Ordering {
    for (&x, &y) in a.iter().zip(b) {
        if x != y {
            return x.cmp(&y);
        }
    }

    // One is a prefix of the other, or they are equal.
    a.len().cmp(&b.len())
}

/// `true` iff `a` sorts strictly before `b` under [`utf8_sorted_as_unicode`].
#[inline]
pub fn utf8_sorted_as_unicode_less(a: &[u8], b: &[u8]) -> bool {
    utf8_sorted_as_unicode(a, b) == Ordering::Less
}

#[cfg(test)]
mod tests;
