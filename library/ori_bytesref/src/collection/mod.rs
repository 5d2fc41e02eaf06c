//! Sortable run of byte sequences.
//!
//! [`BytesRefs`] borrows a mutable slice of anything that can be viewed as
//! bytes (`Vec<u8>`, `&[u8]`, [`BytesRef`](crate::BytesRef), ...) and exposes
//! the [`Sortable`] primitives over it, ordered by
//! [`utf8_sorted_as_unicode`]. The elements stay where the caller put them;
//! sorting only permutes the slice.

use crate::error::IndexError;
use crate::sort::{self, Sortable};
use crate::unicode_order::{utf8_sorted_as_unicode, utf8_sorted_as_unicode_less};

/// Byte sequences held by reference, sortable in place.
///
/// Element count is fixed for the lifetime of the adaptor; `swap` is the
/// only mutation.
#[derive(Debug)]
pub struct BytesRefs<'s, T> {
    items: &'s mut [T],
}

impl<'s, T: AsRef<[u8]>> BytesRefs<'s, T> {
    /// Adapt an existing slice. Nothing is copied.
    #[inline]
    pub fn new(items: &'s mut [T]) -> Self {
        BytesRefs { items }
    }

    /// Bytes of the element at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.items.get(index).map(AsRef::as_ref)
    }

    /// Elements in their current order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.items.iter().map(AsRef::as_ref)
    }

    /// The underlying slice in its current order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.items
    }

    /// Checked [`Sortable::less`].
    pub fn try_less(&self, i: usize, j: usize) -> Result<bool, IndexError> {
        let len = self.items.len();
        IndexError::check(i, len)?;
        IndexError::check(j, len)?;
        Ok(utf8_sorted_as_unicode_less(
            self.items[i].as_ref(),
            self.items[j].as_ref(),
        ))
    }

    /// Checked [`Sortable::swap`].
    pub fn try_swap(&mut self, i: usize, j: usize) -> Result<(), IndexError> {
        let len = self.items.len();
        IndexError::check(i, len)?;
        IndexError::check(j, len)?;
        self.items.swap(i, j);
        Ok(())
    }

    /// Sort the elements in place by unsigned byte order.
    pub fn sort(&mut self) {
        sort::sort(self);
    }

    /// Returns `true` if the elements are in unsigned byte order.
    pub fn is_sorted(&self) -> bool {
        sort::is_sorted(self)
    }

    /// Binary search a sorted collection for `key`.
    ///
    /// Returns `Ok(index)` of a matching element, or `Err(index)` where `key`
    /// would have to be inserted to keep the order. Meaningless unless the
    /// collection is sorted.
    pub fn binary_search(&self, key: &[u8]) -> Result<usize, usize> {
        self.items
            .binary_search_by(|probe| utf8_sorted_as_unicode(probe.as_ref(), key))
    }

    fn checked(&self, index: usize) -> usize {
        if let Err(err) = IndexError::check(index, self.items.len()) {
            panic!("{err}");
        }
        index
    }
}

impl<T: AsRef<[u8]>> Sortable for BytesRefs<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    /// Panics if `i` or `j` is out of bounds.
    fn less(&self, i: usize, j: usize) -> bool {
        let (i, j) = (self.checked(i), self.checked(j));
        utf8_sorted_as_unicode_less(self.items[i].as_ref(), self.items[j].as_ref())
    }

    /// Panics if `i` or `j` is out of bounds.
    fn swap(&mut self, i: usize, j: usize) {
        let (i, j) = (self.checked(i), self.checked(j));
        self.items.swap(i, j);
    }
}

/// Sort `terms` in place by unsigned byte order.
pub fn sort_terms<T: AsRef<[u8]>>(terms: &mut [T]) {
    BytesRefs::new(terms).sort();
}
