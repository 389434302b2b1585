//! Drives a test body once per range shape.
//!
//! A test body is an [`Instantiator`]. Each function here hands it a sequence of freshly built
//! ranges over the same backing data, one per shape, and returns the [`Capabilities`] of every
//! range it was handed, in order. The order is fixed: two runs over the same data visit the
//! same shapes in the same sequence, and no instantiation depends on another.
//!
//! Shapes are concrete types, so the enumeration is a list of explicit instantiations. It is
//! kept in step with [`Capabilities::enumerate`], which describes the same list as data.

use core::borrow::Borrow;
use std::collections::LinkedList;

use tracing::{debug_span, info, trace};

use crate::range::TestRange;
use crate::tag::{Access, Bidirectional, ByRef, ByValue, Copyable, Forward, Input, MoveOnly, Ownership, RandomAccess};
use crate::{Capabilities, InputRange};

/// A test body, called once per range shape.
///
/// # Examples
///
/// ```
/// use core::borrow::Borrow;
/// use wabi_range::dispatch::{self, Instantiator};
/// use wabi_range::InputRange;
///
/// #[derive(Default)]
/// struct Sum(Vec<i64>);
///
/// impl Instantiator<i64> for Sum {
///     fn call<R>(&mut self, range: R)
///     where
///         R: InputRange,
///         R::Item: Borrow<i64>,
///     {
///         self.0.push(range.into_iter().map(|x| *x.borrow()).sum());
///     }
/// }
///
/// let mut sum = Sum::default();
/// dispatch::test_in(&mut sum, &[1, 2, 3]);
/// assert!(sum.0.iter().all(|&total| total == 6));
/// ```
pub trait Instantiator<T> {
    /// Runs the test body against `range`.
    fn call<R>(&mut self, range: R)
    where
        R: InputRange,
        R::Item: Borrow<T>;
}

fn instantiate<I, T, R>(instantiator: &mut I, range: R, visited: &mut Vec<Capabilities>)
where
    I: Instantiator<T>,
    R: InputRange,
    R::Item: Borrow<T>,
{
    let capabilities = R::CAPABILITIES;
    let _span = debug_span!("instantiation", %capabilities).entered();
    trace!("invoking test body");
    instantiator.call(range);
    visited.push(capabilities);
}

/// Every category and commonality for one reference kind and copyability.
///
/// Sizedness and difference come with random access; comparison comes with forward.
fn test_shapes<I, T, A, O>(instantiator: &mut I, data: &[T], visited: &mut Vec<Capabilities>)
where
    I: Instantiator<T>,
    T: Clone,
    A: Access,
    O: Ownership,
{
    instantiate(instantiator, TestRange::<T, Input, A, O, false, false, false, false>::new(data), visited);
    instantiate(instantiator, TestRange::<T, Forward, A, O, false, false, false, true>::new(data), visited);
    instantiate(instantiator, TestRange::<T, Forward, A, O, false, false, true, true>::new(data), visited);
    instantiate(instantiator, TestRange::<T, Bidirectional, A, O, false, false, false, true>::new(data), visited);
    instantiate(instantiator, TestRange::<T, Bidirectional, A, O, false, false, true, true>::new(data), visited);
    instantiate(instantiator, TestRange::<T, RandomAccess, A, O, true, true, false, true>::new(data), visited);
    instantiate(instantiator, TestRange::<T, RandomAccess, A, O, true, true, true, true>::new(data), visited);
}

/// Runs `instantiator` over every legal synthetic range shape.
///
/// The shapes are exactly [`Capabilities::enumerate`], in the same order.
pub fn test_in<I, T>(instantiator: &mut I, data: &[T]) -> Vec<Capabilities>
where
    I: Instantiator<T>,
    T: Clone,
{
    let mut visited = Vec::new();
    test_shapes::<I, T, ByRef, Copyable>(instantiator, data, &mut visited);
    test_shapes::<I, T, ByRef, MoveOnly>(instantiator, data, &mut visited);
    test_shapes::<I, T, ByValue, Copyable>(instantiator, data, &mut visited);
    test_shapes::<I, T, ByValue, MoveOnly>(instantiator, data, &mut visited);
    info!(shapes = visited.len(), "synthetic range shapes exercised");
    visited
}

/// Runs `instantiator` over the seven move-only views yielding true references.
pub fn test_move_only_views<I, T>(instantiator: &mut I, data: &[T]) -> Vec<Capabilities>
where
    I: Instantiator<T>,
    T: Clone,
{
    let mut visited = Vec::new();
    test_shapes::<I, T, ByRef, MoveOnly>(instantiator, data, &mut visited);
    visited
}

/// Runs `instantiator` over a plain contiguous view of `data`.
pub fn test_copyable_views<I, T>(instantiator: &mut I, data: &[T]) -> Vec<Capabilities>
where
    I: Instantiator<T>,
{
    let mut visited = Vec::new();
    instantiate(instantiator, data, &mut visited);
    visited
}

/// Runs `instantiator` over ordinary owning sources: the array itself, a `Vec` and a
/// `LinkedList` holding copies of `data`.
pub fn test_sources<I, T, const N: usize>(instantiator: &mut I, data: &[T; N]) -> Vec<Capabilities>
where
    I: Instantiator<T>,
    T: Clone,
{
    let mut visited = Vec::new();
    instantiate(instantiator, data, &mut visited);

    let vec = data.to_vec();
    instantiate(instantiator, &vec, &mut visited);

    let list: LinkedList<T> = data.iter().cloned().collect();
    instantiate(instantiator, &list, &mut visited);

    visited
}

/// Runs the full programme: views, move-only views, ordinary sources, then every synthetic
/// shape.
///
/// A failing test body panics, which ends the run.
pub fn run<I, T, const N: usize>(instantiator: &mut I, data: &[T; N]) -> Vec<Capabilities>
where
    I: Instantiator<T>,
    T: Clone,
{
    let mut visited = test_copyable_views(instantiator, data.as_slice());
    visited.extend(test_move_only_views(instantiator, data));
    visited.extend(test_sources(instantiator, data));
    visited.extend(test_in(instantiator, data));
    info!(instantiations = visited.len(), "range insertion run complete");
    visited
}
