//! Ori Bytesref - Byte References for Index Terms
//!
//! This crate contains the leaf value types the indexer uses to carry encoded
//! terms around:
//! - [`BytesRef`] for aliased or owned views over raw term bytes
//! - [`utf8_sorted_as_unicode`] for the unsigned byte ordering of terms
//! - [`BytesRefs`] for sorting a run of terms in place
//! - [`Sortable`] and [`sort`] for the generic in-place sort behind it
//!
//! # Design Philosophy
//!
//! - **Ownership in the type**: `wrap` borrows (zero copy), `deep_copy_of`
//!   owns (`BytesRef<'static>`). Nothing copies behind the caller's back.
//! - **Bytes are opaque**: no text encoding, locale, or case-folding. Ordering
//!   is by unsigned byte value, which matches code point order for UTF-8.
//! - **Capabilities, not algorithms**: collections expose `len`/`less`/`swap`
//!   and any routine written against [`Sortable`] can drive them.

mod bytes_ref;
mod collection;
mod error;
pub mod sort;
mod unicode_order;

pub use bytes_ref::{BytesRef, EMPTY_BYTES};
pub use collection::{sort_terms, BytesRefs};
pub use error::IndexError;
pub use sort::{is_sorted, sort, Sortable};
pub use unicode_order::{utf8_sorted_as_unicode, utf8_sorted_as_unicode_less};
