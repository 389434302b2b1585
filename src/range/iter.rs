use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::IterCategory;
use crate::tag::{Access, Category, MultiPass, Reversible};

/// The iterator of a [`TestRange`](crate::TestRange).
///
/// It implements the standard iterator traits only where the range's capabilities allow:
///
/// - `Clone` for forward and stronger categories; an input iterator is strictly one-shot
/// - [`DoubleEndedIterator`] for bidirectional and stronger categories, and only when the
///   range is common, since a sentinel cannot be walked back from
/// - [`ExactSizeIterator`] when the range is sized; an unsized range reports a size hint
///   of `(0, None)`
///
/// Only a random-access iterator skips elements in constant time through [`Iterator::nth`] and
/// [`DoubleEndedIterator::nth_back`]. Weaker categories read every element they step over.
///
/// ```compile_fail
/// use wabi_range::TestRange;
/// use wabi_range::tag::{Bidirectional, ByRef, Copyable};
///
/// // Bidirectional, but not common.
/// let range = TestRange::<i32, Bidirectional, ByRef, Copyable, false, false, false, true>::new(&[1]);
/// let _ = range.into_iter().next_back();
/// ```
///
/// ```compile_fail
/// use wabi_range::TestRange;
/// use wabi_range::tag::{ByRef, Input, MoveOnly};
///
/// let range = TestRange::<i32, Input, ByRef, MoveOnly, false, false, false, false>::new(&[1]);
/// let iter = range.into_iter();
/// let _ = iter.clone();
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T, C, A, const SIZED: bool, const COMMON: bool> {
    rest: &'a [T],
    _marker: PhantomData<fn() -> (C, A)>,
}

impl<'a, T, C, A, const SIZED: bool, const COMMON: bool> Iter<'a, T, C, A, SIZED, COMMON> {
    pub(crate) fn new(data: &'a [T]) -> Self {
        Iter {
            rest: data,
            _marker: PhantomData,
        }
    }
}

impl<'a, T, C, A, const SIZED: bool, const COMMON: bool> Iterator for Iter<'a, T, C, A, SIZED, COMMON>
where
    T: Clone + 'a,
    C: Category,
    A: Access,
{
    type Item = A::Ref<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (first, rest) = self.rest.split_first()?;
        self.rest = rest;
        Some(A::fetch(first))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if matches!(C::KIND, IterCategory::RandomAccess) {
            self.rest = self.rest.get(n..).unwrap_or_default();
        } else {
            for _ in 0..n {
                self.next()?;
            }
        }
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if SIZED {
            (self.rest.len(), Some(self.rest.len()))
        } else {
            (0, None)
        }
    }
}

impl<'a, T, C, A, const SIZED: bool> DoubleEndedIterator for Iter<'a, T, C, A, SIZED, true>
where
    T: Clone + 'a,
    C: Reversible,
    A: Access,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let (last, rest) = self.rest.split_last()?;
        self.rest = rest;
        Some(A::fetch(last))
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        if matches!(C::KIND, IterCategory::RandomAccess) {
            let keep = self.rest.len().saturating_sub(n);
            self.rest = &self.rest[..keep];
        } else {
            for _ in 0..n {
                self.next_back()?;
            }
        }
        self.next_back()
    }
}

impl<'a, T, C, A, const COMMON: bool> ExactSizeIterator for Iter<'a, T, C, A, true, COMMON>
where
    T: Clone + 'a,
    C: Category,
    A: Access,
{
    fn len(&self) -> usize {
        self.rest.len()
    }
}

impl<'a, T, C, A, const SIZED: bool, const COMMON: bool> FusedIterator for Iter<'a, T, C, A, SIZED, COMMON>
where
    T: Clone + 'a,
    C: Category,
    A: Access,
{
}

impl<T, C: MultiPass, A, const SIZED: bool, const COMMON: bool> Clone for Iter<'_, T, C, A, SIZED, COMMON> {
    fn clone(&self) -> Self {
        Iter {
            rest: self.rest,
            _marker: PhantomData,
        }
    }
}

impl<T: fmt::Debug, C: Category, A, const SIZED: bool, const COMMON: bool> fmt::Debug
    for Iter<'_, T, C, A, SIZED, COMMON>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("category", &C::KIND)
            .field("rest", &self.rest)
            .finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use core::cell::Cell;

    use crate::TestRange;
    use crate::tag::{Bidirectional, ByRef, ByValue, Copyable, Forward, MoveOnly, RandomAccess};

    const DATA: [i32; 3] = [1, 2, 3];

    /// Counts every read made through a by-value iterator.
    struct Counted<'c>(&'c Cell<usize>);

    impl Clone for Counted<'_> {
        fn clone(&self) -> Self {
            self.0.set(self.0.get() + 1);
            Counted(self.0)
        }
    }

    #[test]
    fn unsized_iter_hides_its_length() {
        let iter = TestRange::<i32, Forward, ByRef, MoveOnly, false, false, false, true>::new(&DATA).into_iter();
        assert_eq!(iter.size_hint(), (0, None));
        assert_eq!(iter.count(), 3);
    }

    #[test]
    fn sized_iter_counts_down() {
        let mut iter = TestRange::<i32, RandomAccess, ByValue, MoveOnly, true, true, false, true>::new(&DATA).into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.size_hint(), (2, Some(2)));
    }

    #[test]
    fn common_bidirectional_meets_in_the_middle() {
        let mut iter = TestRange::<i32, Bidirectional, ByRef, Copyable, false, false, true, true>::new(&DATA).into_iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn forward_clone_restarts_independently() {
        let mut iter = TestRange::<i32, Forward, ByValue, Copyable, false, false, true, true>::new(&DATA).into_iter();
        iter.next();
        let saved = iter.clone();
        assert_eq!(iter.collect::<Vec<_>>(), [2, 3]);
        assert_eq!(saved.collect::<Vec<_>>(), [2, 3]);
    }

    #[test]
    fn random_access_nth_reads_only_the_target() {
        let reads = Cell::new(0);
        let data: Vec<_> = (0..6).map(|_| Counted(&reads)).collect();
        let mut iter = TestRange::<_, RandomAccess, ByValue, MoveOnly, true, true, true, true>::new(&data).into_iter();

        assert!(iter.nth(3).is_some());
        assert_eq!(reads.get(), 1);
        assert_eq!(iter.len(), 2);

        assert!(iter.nth_back(1).is_some());
        assert_eq!(reads.get(), 2);
        assert_eq!(iter.len(), 0);

        assert!(iter.nth(7).is_none());
        assert!(iter.nth_back(7).is_none());
        assert_eq!(reads.get(), 2);
    }

    #[test]
    fn weaker_categories_step_through_nth() {
        let reads = Cell::new(0);
        let data: Vec<_> = (0..6).map(|_| Counted(&reads)).collect();
        let mut iter = TestRange::<_, Bidirectional, ByValue, MoveOnly, false, false, true, true>::new(&data).into_iter();

        assert!(iter.nth(3).is_some());
        assert_eq!(reads.get(), 4);
        assert!(iter.nth_back(1).is_some());
        assert_eq!(reads.get(), 6);
        assert!(iter.next().is_none());
    }

    #[test]
    fn nth_agrees_across_categories() {
        let data = [10, 20, 30, 40, 50];
        let mut random = TestRange::<i32, RandomAccess, ByRef, Copyable, true, true, true, true>::new(&data).into_iter();
        let mut bidi = TestRange::<i32, Bidirectional, ByRef, Copyable, false, false, true, true>::new(&data).into_iter();

        assert_eq!(random.nth(1), Some(&20));
        assert_eq!(bidi.nth(1), Some(&20));
        assert_eq!(random.nth_back(1), Some(&40));
        assert_eq!(bidi.nth_back(1), Some(&40));
        assert_eq!(random.collect::<Vec<_>>(), [&30]);
        assert_eq!(bidi.collect::<Vec<_>>(), [&30]);
    }
}
