use std::collections::LinkedList;

use crate::range::TestRange;
use crate::tag::{Access, Category, Ownership};
use crate::Capabilities;

/// A range that can be handed to an insertion under test.
///
/// Implemented for every [`TestRange`] and for the ordinary borrowed sources: arrays, slices,
/// `Vec` and `LinkedList`.
pub trait InputRange: IntoIterator {
    /// What this range can do.
    const CAPABILITIES: Capabilities;
}

impl<'a, T, C, A, O, const SIZED: bool, const DIFF: bool, const COMMON: bool, const CMP: bool> InputRange
    for TestRange<'a, T, C, A, O, SIZED, DIFF, COMMON, CMP>
where
    T: Clone + 'a,
    C: Category,
    A: Access,
    O: Ownership,
{
    const CAPABILITIES: Capabilities = Self::DESCRIPTOR;
}

impl<T, const N: usize> InputRange for &[T; N] {
    const CAPABILITIES: Capabilities = Capabilities::CONTIGUOUS;
}

impl<T> InputRange for &[T] {
    const CAPABILITIES: Capabilities = Capabilities::CONTIGUOUS;
}

impl<T> InputRange for &Vec<T> {
    const CAPABILITIES: Capabilities = Capabilities::CONTIGUOUS;
}

impl<T> InputRange for &LinkedList<T> {
    const CAPABILITIES: Capabilities = Capabilities::LINKED;
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::IterCategory;

    fn capabilities_of<R: InputRange>(_: R) -> Capabilities {
        R::CAPABILITIES
    }

    #[test]
    fn ordinary_sources_declare_themselves() {
        let array = [1, 2, 3];
        let vec = array.to_vec();
        let list: LinkedList<i32> = array.iter().copied().collect();

        assert_eq!(capabilities_of(&array), Capabilities::CONTIGUOUS);
        assert_eq!(capabilities_of(array.as_slice()), Capabilities::CONTIGUOUS);
        assert_eq!(capabilities_of(&vec), Capabilities::CONTIGUOUS);
        assert_eq!(capabilities_of(&list).category, IterCategory::Bidirectional);
        assert!(!capabilities_of(&list).differenceable);
    }
}
