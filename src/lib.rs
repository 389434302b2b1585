//! Synthetic range shapes and a conformance harness for range insertion.
//!
//! This crate checks that a container's range-accepting insertion behaves the same no matter
//! what shape of range it is handed. It provides:
//!
//! - [`TestRange`] - a view over a backing slice whose iterator is *exactly* as strong as its
//!   type parameters declare: category, sizedness, difference, commonality, comparison,
//!   proxy references and copyability
//! - [`dispatch`] - drives a test body once per legal combination of those capabilities, plus
//!   once per ordinary range source (array, `Vec`, `LinkedList`, slice)
//! - [`oracle`] - order-insensitive, duplicate-sensitive comparison of the result
//! - [`UnorderedMultiSet`] and [`UnorderedMultiMap`] - hash-based multi-containers whose
//!   `insert_range` is the operation under test
//!
//! # Example
//!
//! ```
//! use core::borrow::Borrow;
//! use wabi_range::dispatch::{self, Instantiator};
//! use wabi_range::{InputRange, UnorderedMultiSet, oracle};
//!
//! struct InsertAll;
//!
//! impl Instantiator<i32> for InsertAll {
//!     fn call<R>(&mut self, range: R)
//!     where
//!         R: InputRange,
//!         R::Item: Borrow<i32>,
//!     {
//!         let mut set: UnorderedMultiSet<i32> = UnorderedMultiSet::new();
//!         set.insert_range(range);
//!         oracle::assert_conforms(&R::CAPABILITIES, set.iter().copied(), [1, 2, 2, 3]);
//!     }
//! }
//!
//! let visited = dispatch::run(&mut InsertAll, &[2, 1, 3, 2]);
//! assert_eq!(visited.len(), 39);
//! ```
//!
//! # Capability boundaries
//!
//! A range never offers more than it declares. A forward range cannot be walked backwards, a
//! non-common range has no end cursor to walk back from, and a move-only range is gone once
//! it has been iterated. Asking for more is a compile error, not a runtime check:
//!
//! ```compile_fail
//! use wabi_range::TestRange;
//! use wabi_range::tag::{ByRef, Copyable, Forward};
//!
//! let range = TestRange::<i32, Forward, ByRef, Copyable, false, false, true, true>::new(&[1, 2]);
//! let _ = range.into_iter().rev();
//! ```

// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod capability;
mod source;

pub mod dispatch;
pub mod oracle;
pub mod range;
pub mod tag;
pub mod unordered_multimap;
pub mod unordered_multiset;

pub use capability::{Capabilities, CapabilityError, Copyability, IterCategory, ReferenceKind};
pub use range::{Cursor, Iter, Sentinel, TestRange};
pub use source::InputRange;
pub use unordered_multimap::UnorderedMultiMap;
pub use unordered_multiset::UnorderedMultiSet;
