use core::fmt;
use core::marker::PhantomData;

use crate::Capabilities;
use crate::tag::{Access, Category, Copyable, Ownership};

mod cursor;
mod iter;

pub use cursor::{Cursor, Sentinel};
pub use iter::Iter;

/// A synthetic range over a borrowed slice, exactly as capable as its parameters declare.
///
/// - `C` - the iterator category ([`Input`], [`Forward`], [`Bidirectional`] or [`RandomAccess`])
/// - `A` - what reading a position yields ([`ByRef`] or the proxy-like [`ByValue`])
/// - `O` - whether the range can be cloned ([`Copyable`]) or only moved ([`MoveOnly`])
/// - `SIZED` - the length is known up front ([`len`], [`ExactSizeIterator`])
/// - `DIFF` - cursors can measure the distance between them
/// - `COMMON` - the end of the range is a [`Cursor`] rather than a [`Sentinel`]
/// - `CMP` - cursors can be compared with each other
///
/// The range never mutates the backing slice and never offers a capability it was not given:
/// each one is a separate trait implementation or inherent method gated on the matching
/// parameter. Combinations that break a category's minimum requirements (see
/// [`Capabilities::validate`]) are rejected when [`new`] is instantiated.
///
/// [`Input`]: crate::tag::Input
/// [`Forward`]: crate::tag::Forward
/// [`Bidirectional`]: crate::tag::Bidirectional
/// [`RandomAccess`]: crate::tag::RandomAccess
/// [`ByRef`]: crate::tag::ByRef
/// [`ByValue`]: crate::tag::ByValue
/// [`MoveOnly`]: crate::tag::MoveOnly
/// [`len`]: TestRange::len
/// [`new`]: TestRange::new
///
/// # Examples
///
/// ```
/// use wabi_range::TestRange;
/// use wabi_range::tag::{Bidirectional, ByRef, MoveOnly};
///
/// let data = [3, 1, 2];
/// let range = TestRange::<_, Bidirectional, ByRef, MoveOnly, false, false, true, true>::new(&data);
/// let backwards: Vec<_> = range.into_iter().rev().copied().collect();
/// assert_eq!(backwards, [2, 1, 3]);
/// ```
///
/// A move-only range is gone once iterated:
///
/// ```compile_fail
/// use wabi_range::TestRange;
/// use wabi_range::tag::{ByRef, Input, MoveOnly};
///
/// let range = TestRange::<i32, Input, ByRef, MoveOnly, false, false, false, false>::new(&[1]);
/// let first: Vec<_> = range.into_iter().collect();
/// let second: Vec<_> = range.into_iter().collect();
/// ```
///
/// An unsized range has no length:
///
/// ```compile_fail
/// use wabi_range::TestRange;
/// use wabi_range::tag::{ByRef, Copyable, Forward};
///
/// let range = TestRange::<i32, Forward, ByRef, Copyable, false, false, false, true>::new(&[1]);
/// let _ = range.len();
/// ```
///
/// A proxy range does not hand out references:
///
/// ```compile_fail
/// use wabi_range::TestRange;
/// use wabi_range::tag::{ByValue, Copyable, Forward};
///
/// let data = [1];
/// let range = TestRange::<i32, Forward, ByValue, Copyable, false, false, false, true>::new(&data);
/// let _: Vec<&i32> = range.into_iter().collect();
/// ```
pub struct TestRange<
    'a,
    T,
    C,
    A,
    O,
    const SIZED: bool,
    const DIFF: bool,
    const COMMON: bool,
    const CMP: bool,
> {
    data: &'a [T],
    _marker: PhantomData<fn() -> (C, A, O)>,
}

impl<'a, T, C, A, O, const SIZED: bool, const DIFF: bool, const COMMON: bool, const CMP: bool>
    TestRange<'a, T, C, A, O, SIZED, DIFF, COMMON, CMP>
where
    C: Category,
    A: Access,
    O: Ownership,
{
    /// The capabilities this range type declares.
    pub const DESCRIPTOR: Capabilities = Capabilities {
        category: C::KIND,
        sized: SIZED,
        differenceable: DIFF,
        common: COMMON,
        comparable: CMP,
        reference: A::KIND,
        copyability: O::KIND,
    };

    const CONTRACT: () = assert!(
        Self::DESCRIPTOR.is_valid(),
        "`TestRange` capabilities violate the minimum requirements of their category"
    );

    /// Creates a range over `data`.
    ///
    /// Instantiating this for an invalid combination of capabilities fails to compile.
    ///
    /// Random access without a known size:
    ///
    /// ```compile_fail
    /// use wabi_range::TestRange;
    /// use wabi_range::tag::{ByRef, Copyable, RandomAccess};
    ///
    /// let _ = TestRange::<i32, RandomAccess, ByRef, Copyable, false, true, true, true>::new(&[1]);
    /// ```
    ///
    /// A single-pass range whose end is a cursor:
    ///
    /// ```compile_fail
    /// use wabi_range::TestRange;
    /// use wabi_range::tag::{ByRef, Input, MoveOnly};
    ///
    /// let _ = TestRange::<i32, Input, ByRef, MoveOnly, false, false, true, false>::new(&[1]);
    /// ```
    ///
    /// A multi-pass range whose cursors cannot be compared:
    ///
    /// ```compile_fail
    /// use wabi_range::TestRange;
    /// use wabi_range::tag::{ByRef, Copyable, Forward};
    ///
    /// let _ = TestRange::<i32, Forward, ByRef, Copyable, false, false, false, false>::new(&[1]);
    /// ```
    ///
    /// The same parameters with the missing capability restored are accepted:
    ///
    /// ```
    /// use wabi_range::TestRange;
    /// use wabi_range::tag::{ByRef, Copyable, Forward, RandomAccess};
    ///
    /// let random = TestRange::<i32, RandomAccess, ByRef, Copyable, true, true, true, true>::new(&[1]);
    /// let forward = TestRange::<i32, Forward, ByRef, Copyable, false, false, false, true>::new(&[1]);
    /// assert!(random.into_iter().eq(forward));
    /// ```
    #[must_use]
    pub fn new(data: &'a [T]) -> Self {
        let () = Self::CONTRACT;
        TestRange {
            data,
            _marker: PhantomData,
        }
    }
}

impl<'a, T, C, A, O, const SIZED: bool, const DIFF: bool, const CMP: bool>
    TestRange<'a, T, C, A, O, SIZED, DIFF, false, CMP>
{
    /// Splits a non-common range into its first position and a sentinel of a different type.
    ///
    /// ```
    /// use wabi_range::TestRange;
    /// use wabi_range::tag::{ByRef, Forward, MoveOnly};
    ///
    /// let data = [7, 8];
    /// let range = TestRange::<_, Forward, ByRef, MoveOnly, false, false, false, true>::new(&data);
    /// let (mut cursor, end) = range.into_bounds();
    /// let mut seen = Vec::new();
    /// while cursor != end {
    ///     seen.push(*cursor.get());
    ///     cursor.advance();
    /// }
    /// assert_eq!(seen, [7, 8]);
    /// ```
    #[must_use]
    pub fn into_bounds(self) -> (Cursor<'a, T, C, A, DIFF, CMP>, Sentinel<'a, T>) {
        (Cursor::new(self.data, 0), Sentinel::new(self.data))
    }
}

impl<'a, T, C, A, O, const SIZED: bool, const DIFF: bool, const CMP: bool>
    TestRange<'a, T, C, A, O, SIZED, DIFF, true, CMP>
{
    /// Splits a common range into its first position and its end position, of the same type.
    #[must_use]
    pub fn into_bounds(self) -> (Cursor<'a, T, C, A, DIFF, CMP>, Cursor<'a, T, C, A, DIFF, CMP>) {
        (Cursor::new(self.data, 0), Cursor::new(self.data, self.data.len()))
    }
}

impl<T, C, A, O, const DIFF: bool, const COMMON: bool, const CMP: bool>
    TestRange<'_, T, C, A, O, true, DIFF, COMMON, CMP>
{
    /// Returns the number of elements, available only on sized ranges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T, C, A, const SIZED: bool, const DIFF: bool, const COMMON: bool, const CMP: bool> Clone
    for TestRange<'_, T, C, A, Copyable, SIZED, DIFF, COMMON, CMP>
{
    fn clone(&self) -> Self {
        TestRange {
            data: self.data,
            _marker: PhantomData,
        }
    }
}

impl<'a, T, C, A, O, const SIZED: bool, const DIFF: bool, const COMMON: bool, const CMP: bool> IntoIterator
    for TestRange<'a, T, C, A, O, SIZED, DIFF, COMMON, CMP>
where
    T: Clone + 'a,
    C: Category,
    A: Access,
{
    type Item = A::Ref<'a, T>;
    type IntoIter = Iter<'a, T, C, A, SIZED, COMMON>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self.data)
    }
}

impl<T, C, A, O, const SIZED: bool, const DIFF: bool, const COMMON: bool, const CMP: bool> fmt::Debug
    for TestRange<'_, T, C, A, O, SIZED, DIFF, COMMON, CMP>
where
    T: fmt::Debug,
    C: Category,
    A: Access,
    O: Ownership,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestRange")
            .field("capabilities", &Self::DESCRIPTOR)
            .field("data", &self.data)
            .finish()
    }
}
