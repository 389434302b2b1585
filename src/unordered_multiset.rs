use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;
use core::iter::FusedIterator;
use std::collections::HashMap;
use std::collections::hash_map;

/// A hash-based multiset: an unordered collection that keeps every duplicate.
///
/// Equal elements are stored once with a count. Iteration order is unspecified, and two
/// multisets are equal when they hold the same elements the same number of times.
///
/// # Examples
///
/// ```
/// use wabi_range::UnorderedMultiSet;
///
/// let mut set: UnorderedMultiSet<i32> = UnorderedMultiSet::new();
/// set.insert_range(&[4, 2, 4]);
/// set.insert(4);
///
/// assert_eq!(set.len(), 4);
/// assert_eq!(set.count(&4), 3);
/// assert_eq!(set, UnorderedMultiSet::from([2, 4, 4, 4]));
/// ```
pub struct UnorderedMultiSet<T> {
    counts: HashMap<T, usize>,
    len: usize,
}

/// An iterator over the elements of an `UnorderedMultiSet`, repeating each duplicate.
///
/// This `struct` is created by the [`iter`] method on [`UnorderedMultiSet`].
///
/// [`iter`]: UnorderedMultiSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    inner: hash_map::Iter<'a, T, usize>,
    current: Option<(&'a T, usize)>,
    remaining: usize,
}

impl<T> UnorderedMultiSet<T> {
    /// Makes a new, empty `UnorderedMultiSet`.
    #[must_use]
    pub fn new() -> Self {
        UnorderedMultiSet {
            counts: HashMap::new(),
            len: 0,
        }
    }

    /// Creates an empty multiset with room for at least `capacity` distinct elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        UnorderedMultiSet {
            counts: HashMap::with_capacity(capacity),
            len: 0,
        }
    }

    /// Returns the number of elements, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.counts.clear();
        self.len = 0;
    }

    /// Gets an iterator that visits every element, each duplicate separately, in no
    /// particular order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.counts.iter(),
            current: None,
            remaining: self.len,
        }
    }
}

impl<T: Eq + Hash> UnorderedMultiSet<T> {
    /// Adds a value, keeping any equal values already present.
    ///
    /// Returns how many times the value is now present.
    pub fn insert(&mut self, value: T) -> usize {
        let count = self.counts.entry(value).or_insert(0);
        *count += 1;
        self.len += 1;
        *count
    }

    /// Inserts every element of `range`.
    ///
    /// Elements may arrive as references or as values; references are cloned. The range is
    /// walked exactly once, front to back, so single-pass and move-only ranges are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_range::UnorderedMultiSet;
    ///
    /// let mut set: UnorderedMultiSet<i32> = UnorderedMultiSet::new();
    /// set.insert_range(vec![1, 1]);
    /// set.insert_range(&[1, 2]);
    /// assert_eq!(set.count(&1), 3);
    /// ```
    pub fn insert_range<R>(&mut self, range: R)
    where
        R: IntoIterator,
        R::Item: Borrow<T>,
        T: Clone,
    {
        for item in range {
            self.insert(item.borrow().clone());
        }
    }

    /// Returns how many elements equal `value`.
    #[must_use]
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(value).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.contains_key(value)
    }
}

impl<T: Eq + Hash> PartialEq for UnorderedMultiSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.counts == other.counts
    }
}

impl<T: Eq + Hash> Eq for UnorderedMultiSet<T> {}

impl<T: Clone> Clone for UnorderedMultiSet<T> {
    fn clone(&self) -> Self {
        UnorderedMultiSet {
            counts: self.counts.clone(),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for UnorderedMultiSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for UnorderedMultiSet<T> {
    fn default() -> Self {
        UnorderedMultiSet::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for UnorderedMultiSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Eq + Hash> Extend<T> for UnorderedMultiSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Eq + Hash + Copy> Extend<&'a T> for UnorderedMultiSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.insert(value);
        }
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for UnorderedMultiSet<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a UnorderedMultiSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some((value, left)) = &mut self.current {
                if *left > 0 {
                    *left -= 1;
                    self.remaining -= 1;
                    return Some(*value);
                }
            }
            let (value, &count) = self.inner.next()?;
            self.current = Some((value, count));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
            current: self.current,
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
