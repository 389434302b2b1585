//! Multiset comparison of insertion results.
//!
//! Insertion into a multi-container promises nothing about order, so results are compared as
//! multisets: every element must appear exactly as many times as expected.
//!
//! Ranges whose positions yield proxies rather than true references are only consumed, never
//! compared. [`judge`] reports them as [`Verdict::Skipped`].

use core::fmt;
use core::hash::Hash;
use std::collections::HashMap;

use tracing::{debug, error};

use crate::Capabilities;

/// The difference between two multisets.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MultisetDiff<T> {
    /// Elements expected more often than they appeared, with the shortfall.
    pub missing: Vec<(T, usize)>,
    /// Elements that appeared more often than expected, with the excess.
    pub unexpected: Vec<(T, usize)>,
}

impl<T> MultisetDiff<T> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

impl<T: fmt::Debug> fmt::Display for MultisetDiff<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing {:?}, unexpected {:?}", self.missing, self.unexpected)
    }
}

/// The outcome of checking one instantiation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Verdict<T> {
    /// The container holds exactly the expected elements.
    Equivalent,
    /// The range yields proxies; its result is not compared.
    Skipped,
    Mismatch(MultisetDiff<T>),
}

/// Computes how `actual` differs from `expected`, ignoring order.
///
/// Entries within `missing` and `unexpected` are in no particular order.
///
/// # Examples
///
/// ```
/// use wabi_range::oracle;
///
/// let diff = oracle::diff([4, 1, 4], [1, 4, 4]);
/// assert!(diff.is_empty());
///
/// let diff = oracle::diff([4, 1], [1, 4, 4]);
/// assert_eq!(diff.missing, [(4, 1)]);
/// assert!(diff.unexpected.is_empty());
/// ```
pub fn diff<T, A, E>(actual: A, expected: E) -> MultisetDiff<T>
where
    T: Eq + Hash,
    A: IntoIterator<Item = T>,
    E: IntoIterator<Item = T>,
{
    let mut balance: HashMap<T, isize> = HashMap::new();
    for item in actual {
        *balance.entry(item).or_default() += 1;
    }
    for item in expected {
        *balance.entry(item).or_default() -= 1;
    }

    let mut diff = MultisetDiff {
        missing: Vec::new(),
        unexpected: Vec::new(),
    };
    for (item, count) in balance {
        if count < 0 {
            diff.missing.push((item, count.unsigned_abs()));
        } else if count > 0 {
            diff.unexpected.push((item, count.unsigned_abs()));
        }
    }
    diff
}

/// Decides whether an insertion through a range with `capabilities` produced `expected`.
pub fn judge<T, A, E>(capabilities: &Capabilities, actual: A, expected: E) -> Verdict<T>
where
    T: Eq + Hash,
    A: IntoIterator<Item = T>,
    E: IntoIterator<Item = T>,
{
    if !capabilities.yields_references() {
        return Verdict::Skipped;
    }
    let diff = diff(actual, expected);
    if diff.is_empty() {
        Verdict::Equivalent
    } else {
        Verdict::Mismatch(diff)
    }
}

/// Asserts that an insertion through a range with `capabilities` produced `expected`.
///
/// # Panics
///
/// Panics on a mismatch. There is no retry and no partial credit.
#[track_caller]
pub fn assert_conforms<T, A, E>(capabilities: &Capabilities, actual: A, expected: E)
where
    T: Eq + Hash + fmt::Debug,
    A: IntoIterator<Item = T>,
    E: IntoIterator<Item = T>,
{
    match judge(capabilities, actual, expected) {
        Verdict::Equivalent => {}
        Verdict::Skipped => debug!(%capabilities, "proxy range consumed, contents not compared"),
        Verdict::Mismatch(diff) => {
            error!(%capabilities, %diff, "insertion result diverged");
            panic!("insertion through a `{capabilities}` range diverged from the expected contents: {diff}");
        }
    }
}
