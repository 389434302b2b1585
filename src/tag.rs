//! Compile-time capability tags for [`TestRange`](crate::TestRange).
//!
//! Tags are uninhabited types. They never exist at runtime; they only select which trait
//! implementations a range, its iterator and its cursors receive.

use core::borrow::Borrow;

use crate::{Copyability, IterCategory, ReferenceKind};

/// An iterator category tag.
pub trait Category {
    const KIND: IterCategory;
}

/// Categories whose positions can be duplicated: forward and stronger.
pub trait MultiPass: Category {}

/// Categories whose positions can step backwards: bidirectional and stronger.
pub trait Reversible: MultiPass {}

/// Categories whose positions can jump by an offset: random-access.
pub trait RandomOffset: Reversible {}

#[derive(Debug)]
pub enum Input {}

#[derive(Debug)]
pub enum Forward {}

#[derive(Debug)]
pub enum Bidirectional {}

#[derive(Debug)]
pub enum RandomAccess {}

impl Category for Input {
    const KIND: IterCategory = IterCategory::Input;
}

impl Category for Forward {
    const KIND: IterCategory = IterCategory::Forward;
}

impl Category for Bidirectional {
    const KIND: IterCategory = IterCategory::Bidirectional;
}

impl Category for RandomAccess {
    const KIND: IterCategory = IterCategory::RandomAccess;
}

impl MultiPass for Forward {}
impl MultiPass for Bidirectional {}
impl MultiPass for RandomAccess {}

impl Reversible for Bidirectional {}
impl Reversible for RandomAccess {}

impl RandomOffset for RandomAccess {}

/// What a position yields when read.
///
/// Both kinds can be borrowed as the element, so a consumer written against
/// `Borrow<T>` accepts either. A consumer that insists on `&T` does not compile against
/// [`ByValue`].
pub trait Access {
    const KIND: ReferenceKind;

    type Ref<'a, T>: Borrow<T>
    where
        T: Clone + 'a;

    fn fetch<'a, T>(element: &'a T) -> Self::Ref<'a, T>
    where
        T: Clone + 'a;
}

/// Positions yield references into the backing slice.
#[derive(Debug)]
pub enum ByRef {}

/// Positions yield a fresh copy of the element, standing in for it like a proxy.
#[derive(Debug)]
pub enum ByValue {}

impl Access for ByRef {
    const KIND: ReferenceKind = ReferenceKind::Reference;

    type Ref<'a, T>
        = &'a T
    where
        T: Clone + 'a;

    #[inline]
    fn fetch<'a, T>(element: &'a T) -> Self::Ref<'a, T>
    where
        T: Clone + 'a,
    {
        element
    }
}

impl Access for ByValue {
    const KIND: ReferenceKind = ReferenceKind::Proxy;

    type Ref<'a, T>
        = T
    where
        T: Clone + 'a;

    #[inline]
    fn fetch<'a, T>(element: &'a T) -> Self::Ref<'a, T>
    where
        T: Clone + 'a,
    {
        element.clone()
    }
}

/// Whether the range value itself may be duplicated.
pub trait Ownership {
    const KIND: Copyability;
}

/// The range implements `Clone`.
#[derive(Debug)]
pub enum Copyable {}

/// The range can only be moved, and is consumed by iteration.
#[derive(Debug)]
pub enum MoveOnly {}

impl Ownership for Copyable {
    const KIND: Copyability = Copyability::Copyable;
}

impl Ownership for MoveOnly {
    const KIND: Copyability = Copyability::MoveOnly;
}
