//! Aliased or owned reference to a run of term bytes.
//!
//! A [`BytesRef`] is created one of two ways, and the ownership mode is part
//! of its type:
//!
//! - [`BytesRef::wrap`] borrows caller-owned bytes for `'a`. No allocation,
//!   no copy. Once the view is dropped the owner may mutate the storage again
//!   and the next view sees the new contents.
//! - [`BytesRef::deep_copy_of`] allocates storage of its own and returns a
//!   `BytesRef<'static>`, independent of the source's lifetime and contents.
//!
//! [`BytesRef::copy_from`] is the in-place variant of the deep copy. It reuses
//! owned storage when its capacity already fits the source, which keeps a
//! single scratch `BytesRef` allocation-free across many copies (e.g. while
//! iterating the terms of a postings list).

use std::borrow::{Borrow, Cow};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

use crate::unicode_order::utf8_sorted_as_unicode;

/// Shared zero-length byte run aliased by [`BytesRef::empty`].
pub const EMPTY_BYTES: &[u8] = &[];

/// Reference to a sequence of raw bytes, usually an encoded term.
///
/// Never absent: "empty" is a zero-length sequence. Equality and hashing are
/// by content; ordering is [`utf8_sorted_as_unicode`].
///
/// `Clone` keeps the ownership mode: cloning a view yields another view of
/// the same storage, cloning an owned reference copies its bytes.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BytesRef<'a> {
    value: Cow<'a, [u8]>,
}

impl<'a> BytesRef<'a> {
    /// View over `bytes` without copying.
    #[inline]
    pub const fn wrap(bytes: &'a [u8]) -> Self {
        BytesRef {
            value: Cow::Borrowed(bytes),
        }
    }

    /// Canonical empty reference, aliasing [`EMPTY_BYTES`].
    #[inline]
    pub const fn empty() -> Self {
        Self::wrap(EMPTY_BYTES)
    }

    /// The referenced bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.value
    }

    /// Number of referenced bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Returns `true` for a zero-length reference.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Returns `true` if this reference owns its storage.
    #[inline]
    pub fn is_owned(&self) -> bool {
        matches!(self.value, Cow::Owned(_))
    }

    /// Bytes the current storage can hold without reallocating.
    ///
    /// For a view this is the view's length: aliased storage is never
    /// written through, so there is no spare room to reuse.
    pub fn capacity(&self) -> usize {
        match &self.value {
            Cow::Borrowed(bytes) => bytes.len(),
            Cow::Owned(buf) => buf.capacity(),
        }
    }

    /// Mutable access to owned storage. Views return `None`.
    pub fn as_mut_bytes(&mut self) -> Option<&mut [u8]> {
        match &mut self.value {
            Cow::Borrowed(_) => None,
            Cow::Owned(buf) => Some(buf.as_mut_slice()),
        }
    }

    /// Copy `other` into this reference.
    ///
    /// Owned storage with enough capacity is reused; otherwise new storage of
    /// exactly `other.len()` bytes is allocated. Either way the resulting
    /// length is `other.len()` and no stale trailing bytes remain. A view is
    /// never written through: copying into one always allocates.
    pub fn copy_bytes(&mut self, other: &[u8]) {
        if let Cow::Owned(buf) = &mut self.value {
            if buf.capacity() >= other.len() {
                buf.clear();
                buf.extend_from_slice(other);
                return;
            }
        }

        tracing::trace!(
            len = other.len(),
            capacity = self.capacity(),
            "allocating storage for byte copy"
        );
        self.value = Cow::Owned(other.to_vec());
    }

    /// Copy the bytes referenced by `other` into this reference.
    ///
    /// See [`copy_bytes`](Self::copy_bytes) for the reuse rules.
    #[inline]
    pub fn copy_from(&mut self, other: &BytesRef<'_>) {
        self.copy_bytes(other.as_bytes());
    }
}

impl BytesRef<'static> {
    /// Take ownership of `bytes` without copying.
    #[inline]
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        BytesRef {
            value: Cow::Owned(bytes),
        }
    }

    /// New reference owning a copy of `other`'s bytes.
    ///
    /// Later changes to the storage behind `other` never show up in the copy,
    /// and the copy may outlive it.
    pub fn deep_copy_of(other: &BytesRef<'_>) -> Self {
        let mut copy = BytesRef::empty();
        copy.copy_from(other);
        copy
    }
}

impl Default for BytesRef<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for BytesRef<'_> {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        &self.value
    }
}

impl AsRef<[u8]> for BytesRef<'_> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.value
    }
}

// Hash/Eq/Ord of BytesRef all agree with [u8], so this is sound for maps.
impl Borrow<[u8]> for BytesRef<'_> {
    #[inline]
    fn borrow(&self) -> &[u8] {
        &self.value
    }
}

impl<'a> From<&'a [u8]> for BytesRef<'a> {
    #[inline]
    fn from(bytes: &'a [u8]) -> Self {
        Self::wrap(bytes)
    }
}

impl From<Vec<u8>> for BytesRef<'static> {
    #[inline]
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_vec(bytes)
    }
}

impl Ord for BytesRef<'_> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        utf8_sorted_as_unicode(&self.value, &other.value)
    }
}

impl PartialOrd for BytesRef<'_> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Hex rendering, e.g. `[61 62 ff]`.
impl fmt::Debug for BytesRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, byte) in self.value.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02x}")?;
        }
        f.write_str("]")
    }
}
