use core::fmt;
use core::marker::PhantomData;
use core::ptr;

use crate::tag::{Access, Category, MultiPass, RandomOffset, Reversible};

/// A position within a [`TestRange`](crate::TestRange).
///
/// Every cursor can be read, advanced and compared against the range's [`Sentinel`]. Anything
/// beyond that depends on the range's capabilities:
///
/// | Capability            | Requires                                        |
/// |-----------------------|-------------------------------------------------|
/// | `Clone`               | forward or stronger                             |
/// | `PartialEq`           | `CMP`                                           |
/// | [`retreat`]           | bidirectional or stronger                       |
/// | [`offset`], [`at`]    | random-access                                   |
/// | [`distance_to`]       | `DIFF`                                          |
///
/// [`retreat`]: Cursor::retreat
/// [`offset`]: Cursor::offset
/// [`at`]: Cursor::at
/// [`distance_to`]: Cursor::distance_to
///
/// ```compile_fail
/// use wabi_range::TestRange;
/// use wabi_range::tag::{ByRef, Copyable, Forward};
///
/// let data = [1, 2];
/// let range = TestRange::<i32, Forward, ByRef, Copyable, false, false, true, true>::new(&data);
/// let (begin, end) = range.into_bounds();
/// let _ = begin.distance_to(&end);
/// ```
///
/// ```compile_fail
/// use wabi_range::TestRange;
/// use wabi_range::tag::{ByRef, Input, MoveOnly};
///
/// let data = [1, 2];
/// let range = TestRange::<i32, Input, ByRef, MoveOnly, false, false, false, false>::new(&data);
/// let (begin, _end) = range.into_bounds();
/// let _ = begin.clone();
/// ```
pub struct Cursor<'a, T, C, A, const DIFF: bool, const CMP: bool> {
    data: &'a [T],
    pos: usize,
    _marker: PhantomData<fn() -> (C, A)>,
}

/// The end of a non-common [`TestRange`](crate::TestRange).
///
/// A sentinel only marks where iteration stops. It cannot be read, moved or turned back into a
/// [`Cursor`]. Like cursors, it belongs to one range: a cursor only reaches the sentinel of the
/// slice it walks.
pub struct Sentinel<'a, T> {
    data: &'a [T],
}

impl<'a, T, C, A, const DIFF: bool, const CMP: bool> Cursor<'a, T, C, A, DIFF, CMP> {
    pub(crate) fn new(data: &'a [T], pos: usize) -> Self {
        Cursor {
            data,
            pos,
            _marker: PhantomData,
        }
    }

    /// Steps to the next position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end of the range.
    pub fn advance(&mut self) {
        assert!(
            self.pos < self.data.len(),
            "`Cursor::advance()` - cursor is already at the end!"
        );
        self.pos += 1;
    }
}

impl<'a, T, C, A, const DIFF: bool, const CMP: bool> Cursor<'a, T, C, A, DIFF, CMP>
where
    T: Clone + 'a,
    A: Access,
{
    /// Reads the element at this position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end of the range.
    #[must_use]
    pub fn get(&self) -> A::Ref<'a, T> {
        let data = self.data;
        match data.get(self.pos) {
            Some(element) => A::fetch(element),
            None => panic!("`Cursor::get()` - cursor is at the end!"),
        }
    }
}

impl<T, C: Reversible, A, const DIFF: bool, const CMP: bool> Cursor<'_, T, C, A, DIFF, CMP> {
    /// Steps to the previous position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the start of the range.
    pub fn retreat(&mut self) {
        assert!(self.pos > 0, "`Cursor::retreat()` - cursor is already at the start!");
        self.pos -= 1;
    }
}

impl<'a, T, C: RandomOffset, A, const DIFF: bool, const CMP: bool> Cursor<'a, T, C, A, DIFF, CMP> {
    /// Moves the cursor by `n` positions in either direction.
    ///
    /// # Panics
    ///
    /// Panics if the new position falls outside the range.
    pub fn offset(&mut self, n: isize) {
        self.pos = self.shifted(n, "`Cursor::offset()` - offset leaves the range!");
    }

    /// Reads the element `n` positions away without moving the cursor.
    ///
    /// # Panics
    ///
    /// Panics if that position is outside the range or is its end.
    #[must_use]
    pub fn at(&self, n: isize) -> A::Ref<'a, T>
    where
        T: Clone + 'a,
        A: Access,
    {
        let pos = self.shifted(n, "`Cursor::at()` - offset leaves the range!");
        let data = self.data;
        match data.get(pos) {
            Some(element) => A::fetch(element),
            None => panic!("`Cursor::at()` - offset points at the end!"),
        }
    }

    fn shifted(&self, n: isize, message: &str) -> usize {
        match self.pos.checked_add_signed(n) {
            Some(pos) if pos <= self.data.len() => pos,
            _ => panic!("{message}"),
        }
    }
}

impl<T, C, A, const CMP: bool> Cursor<'_, T, C, A, true, CMP> {
    /// Returns the signed number of steps from `self` to `other`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn distance_to(&self, other: &Self) -> isize {
        // Slice lengths never exceed `isize::MAX`.
        other.pos as isize - self.pos as isize
    }
}

impl<'a, T> Sentinel<'a, T> {
    pub(crate) fn new(data: &'a [T]) -> Self {
        Sentinel { data }
    }

    /// Returns the number of steps from `cursor` to this sentinel.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn distance_from<C, A, const CMP: bool>(&self, cursor: &Cursor<'a, T, C, A, true, CMP>) -> isize {
        self.data.len() as isize - cursor.pos as isize
    }
}

impl<T, C: MultiPass, A, const DIFF: bool, const CMP: bool> Clone for Cursor<'_, T, C, A, DIFF, CMP> {
    fn clone(&self) -> Self {
        Cursor {
            data: self.data,
            pos: self.pos,
            _marker: PhantomData,
        }
    }
}

impl<T, C, A, const DIFF: bool> PartialEq for Cursor<'_, T, C, A, DIFF, true> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.data, other.data) && self.pos == other.pos
    }
}

impl<T, C, A, const DIFF: bool> Eq for Cursor<'_, T, C, A, DIFF, true> {}

impl<'a, T, C, A, const DIFF: bool, const CMP: bool> PartialEq<Sentinel<'a, T>> for Cursor<'a, T, C, A, DIFF, CMP> {
    fn eq(&self, other: &Sentinel<'a, T>) -> bool {
        ptr::eq(self.data, other.data) && self.pos == other.data.len()
    }
}

impl<'a, T, C, A, const DIFF: bool, const CMP: bool> PartialEq<Cursor<'a, T, C, A, DIFF, CMP>> for Sentinel<'a, T> {
    fn eq(&self, other: &Cursor<'a, T, C, A, DIFF, CMP>) -> bool {
        other == self
    }
}

impl<T, C: Category, A, const DIFF: bool, const CMP: bool> fmt::Debug for Cursor<'_, T, C, A, DIFF, CMP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("category", &C::KIND)
            .field("pos", &self.pos)
            .field("len", &self.data.len())
            .finish()
    }
}

impl<T> Clone for Sentinel<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Sentinel<'_, T> {}

impl<T> fmt::Debug for Sentinel<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sentinel").field("end", &self.data.len()).finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use crate::TestRange;
    use crate::tag::{Bidirectional, ByRef, ByValue, Copyable, Input, MoveOnly, RandomAccess};

    const DATA: [i32; 4] = [10, 20, 30, 40];

    type RandomNonCommon<'a> = TestRange<'a, i32, RandomAccess, ByRef, MoveOnly, true, true, false, true>;
    type RandomCommon<'a> = TestRange<'a, i32, RandomAccess, ByValue, Copyable, true, true, true, true>;
    type BidiCommon<'a> = TestRange<'a, i32, Bidirectional, ByRef, Copyable, false, false, true, true>;
    type InputOnly<'a> = TestRange<'a, i32, Input, ByRef, MoveOnly, false, false, false, false>;

    #[test]
    fn random_access_jumps() {
        let (mut cursor, end) = RandomNonCommon::new(&DATA).into_bounds();
        assert_eq!(*cursor.at(2), 30);
        cursor.offset(3);
        assert_eq!(*cursor.get(), 40);
        assert_eq!(*cursor.at(-3), 10);
        cursor.offset(1);
        assert_eq!(cursor, end);
        cursor.offset(-4);
        assert_eq!(*cursor.get(), 10);
    }

    #[test]
    fn sentinel_measures_distance() {
        let (mut cursor, end) = RandomNonCommon::new(&DATA).into_bounds();
        assert_eq!(end.distance_from(&cursor), 4);
        cursor.advance();
        assert_eq!(end.distance_from(&cursor), 3);
        assert_ne!(end, cursor);
    }

    #[test]
    fn common_cursors_measure_distance() {
        let (begin, end) = RandomCommon::new(&DATA).into_bounds();
        assert_eq!(begin.distance_to(&end), 4);
        assert_eq!(end.distance_to(&begin), -4);
        assert_eq!(begin.get(), 10);
    }

    #[test]
    fn bidirectional_walks_back_from_end() {
        let (begin, mut cursor) = BidiCommon::new(&DATA).into_bounds();
        let mut items = Vec::new();
        while cursor != begin {
            cursor.retreat();
            items.push(*cursor.get());
        }
        assert_eq!(items, [40, 30, 20, 10]);
    }

    #[test]
    fn cloned_cursor_is_independent() {
        let (mut cursor, _) = BidiCommon::new(&DATA).into_bounds();
        let saved = cursor.clone();
        cursor.advance();
        assert_ne!(cursor, saved);
        assert_eq!(*saved.get(), 10);
    }

    #[test]
    fn cursors_over_different_data_differ() {
        let other = DATA;
        let (a, _) = BidiCommon::new(&DATA).into_bounds();
        let (b, _) = BidiCommon::new(&other).into_bounds();
        assert_ne!(a, b);
    }

    #[test]
    fn sentinel_belongs_to_its_range() {
        let other = DATA;
        let (mut cursor, _) = RandomNonCommon::new(&DATA).into_bounds();
        let (_, foreign_end) = RandomNonCommon::new(&other).into_bounds();
        cursor.offset(4);
        assert_ne!(cursor, foreign_end);
        assert_ne!(foreign_end, cursor);
    }

    #[test]
    #[should_panic(expected = "`Cursor::advance()` - cursor is already at the end!")]
    fn advance_past_end() {
        let (mut cursor, _) = InputOnly::new(&[1]).into_bounds();
        cursor.advance();
        cursor.advance();
    }

    #[test]
    #[should_panic(expected = "`Cursor::get()` - cursor is at the end!")]
    fn read_at_end() {
        let (cursor, _) = InputOnly::new(&[]).into_bounds();
        let _ = cursor.get();
    }

    #[test]
    #[should_panic(expected = "`Cursor::retreat()` - cursor is already at the start!")]
    fn retreat_past_start() {
        let (mut cursor, _) = BidiCommon::new(&DATA).into_bounds();
        cursor.retreat();
    }

    #[test]
    #[should_panic(expected = "`Cursor::offset()` - offset leaves the range!")]
    fn offset_past_end() {
        let (mut cursor, _) = RandomCommon::new(&DATA).into_bounds();
        cursor.offset(5);
    }

    #[test]
    #[should_panic(expected = "`Cursor::at()` - offset points at the end!")]
    fn at_end() {
        let (cursor, _) = RandomCommon::new(&DATA).into_bounds();
        let _ = cursor.at(4);
    }
}
