use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;
use core::iter::FusedIterator;
use core::slice;
use std::collections::HashMap;
use std::collections::hash_map;

/// A hash-based multimap: an unordered map that keeps every entry, even for equal keys.
///
/// Inserting under an existing key never overwrites. Entries sharing a key are kept together
/// in insertion order; the order of keys is unspecified. Two multimaps are equal when every
/// key maps to the same values, counted with multiplicity, in any order.
///
/// # Examples
///
/// ```
/// use wabi_range::UnorderedMultiMap;
///
/// let mut map: UnorderedMultiMap<i32, &str> = UnorderedMultiMap::new();
/// map.insert_range(&[(1, "a"), (2, "b")]);
/// map.insert(1, "c");
///
/// assert_eq!(map.len(), 3);
/// assert_eq!(map.get_all(&1), ["a", "c"]);
/// assert_eq!(map, UnorderedMultiMap::from([(2, "b"), (1, "c"), (1, "a")]));
/// ```
pub struct UnorderedMultiMap<K, V> {
    groups: HashMap<K, Vec<V>>,
    len: usize,
}

/// An iterator over the entries of an `UnorderedMultiMap`.
///
/// This `struct` is created by the [`iter`] method on [`UnorderedMultiMap`].
///
/// [`iter`]: UnorderedMultiMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    groups: hash_map::Iter<'a, K, Vec<V>>,
    current: Option<(&'a K, slice::Iter<'a, V>)>,
    remaining: usize,
}

impl<K, V> UnorderedMultiMap<K, V> {
    /// Makes a new, empty `UnorderedMultiMap`.
    #[must_use]
    pub fn new() -> Self {
        UnorderedMultiMap {
            groups: HashMap::new(),
            len: 0,
        }
    }

    /// Creates an empty multimap with room for at least `capacity` distinct keys.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        UnorderedMultiMap {
            groups: HashMap::with_capacity(capacity),
            len: 0,
        }
    }

    /// Returns the number of entries, counting every value under a shared key.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.groups.clear();
        self.len = 0;
    }

    /// Gets an iterator over every entry. Entries for one key are adjacent.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            groups: self.groups.iter(),
            current: None,
            remaining: self.len,
        }
    }
}

impl<K: Eq + Hash, V> UnorderedMultiMap<K, V> {
    /// Adds an entry. Existing entries under `key` are kept.
    pub fn insert(&mut self, key: K, value: V) {
        self.groups.entry(key).or_default().push(value);
        self.len += 1;
    }

    /// Inserts every entry of `range`.
    ///
    /// Entries may arrive as references or as values; references are cloned. The range is
    /// walked exactly once, front to back.
    pub fn insert_range<R>(&mut self, range: R)
    where
        R: IntoIterator,
        R::Item: Borrow<(K, V)>,
        K: Clone,
        V: Clone,
    {
        for item in range {
            let (key, value) = item.borrow().clone();
            self.insert(key, value);
        }
    }

    /// Returns every value stored under `key`, in insertion order.
    #[must_use]
    pub fn get_all<Q>(&self, key: &Q) -> &[V]
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns how many entries are stored under `key`.
    #[must_use]
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_all(key).len()
    }

    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.groups.contains_key(key)
    }
}

/// Returns `true` if `a` is a reordering of `b`.
fn is_permutation<V: PartialEq>(a: &[V], b: &[V]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut used = vec![false; b.len()];
    a.iter().all(|x| {
        match b
            .iter()
            .zip(used.iter_mut())
            .find(|(y, taken)| !**taken && x == *y)
        {
            Some((_, taken)) => {
                *taken = true;
                true
            }
            None => false,
        }
    })
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for UnorderedMultiMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self.groups.len() == other.groups.len()
            && self
                .groups
                .iter()
                .all(|(key, values)| other.groups.get(key).is_some_and(|theirs| is_permutation(values, theirs)))
    }
}

impl<K: Eq + Hash, V: Eq> Eq for UnorderedMultiMap<K, V> {}

impl<K: Clone, V: Clone> Clone for UnorderedMultiMap<K, V> {
    fn clone(&self) -> Self {
        UnorderedMultiMap {
            groups: self.groups.clone(),
            len: self.len,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for UnorderedMultiMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for UnorderedMultiMap<K, V> {
    fn default() -> Self {
        UnorderedMultiMap::new()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for UnorderedMultiMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Eq + Hash, V> Extend<(K, V)> for UnorderedMultiMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K: Eq + Hash + Copy, V: Copy> Extend<(&'a K, &'a V)> for UnorderedMultiMap<K, V> {
    fn extend<I: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: I) {
        for (&key, &value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Eq + Hash, V, const N: usize> From<[(K, V); N]> for UnorderedMultiMap<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K, V> IntoIterator for &'a UnorderedMultiMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        loop {
            if let Some((key, values)) = &mut self.current {
                if let Some(value) = values.next() {
                    self.remaining -= 1;
                    return Some((*key, value));
                }
            }
            let (key, values) = self.groups.next()?;
            self.current = Some((key, values.iter()));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            groups: self.groups.clone(),
            current: self.current.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
