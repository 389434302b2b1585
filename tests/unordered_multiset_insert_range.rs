use core::borrow::Borrow;
use std::collections::LinkedList;

use pretty_assertions::assert_eq;
use wabi_range::dispatch::{self, Instantiator};
use wabi_range::tag::{Bidirectional, ByRef, Forward, Input, MoveOnly, RandomAccess};
use wabi_range::{Capabilities, InputRange, TestRange, UnorderedMultiSet, oracle};

static SOME_INTS: [i32; 10] = [4, 2, 3, 4, 0, 5, 6, 4, 7, 1];

const EXPECTED: [i32; 10] = [0, 1, 2, 3, 4, 4, 4, 5, 6, 7];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Inserts `range` and checks the result through the oracle, which skips proxy ranges.
fn test_unordered_multiset<R>(range: R) -> UnorderedMultiSet<i32>
where
    R: InputRange,
    R::Item: Borrow<i32>,
{
    let mut set: UnorderedMultiSet<i32> = UnorderedMultiSet::new();
    set.insert_range(range);
    oracle::assert_conforms(&R::CAPABILITIES, set.iter().copied(), EXPECTED);
    set
}

struct UnorderedMultisetInstantiator;

impl Instantiator<i32> for UnorderedMultisetInstantiator {
    fn call<R>(&mut self, range: R)
    where
        R: InputRange,
        R::Item: Borrow<i32>,
    {
        test_unordered_multiset(range);
    }
}

type MoveOnlyView<'a, C, const RANDOM: bool, const COMMON: bool, const CMP: bool> =
    TestRange<'a, i32, C, ByRef, MoveOnly, RANDOM, RANDOM, COMMON, CMP>;

// ─── Views ───────────────────────────────────────────────────────────────────

#[test]
fn copyable_views() {
    test_unordered_multiset(SOME_INTS.as_slice());
}

#[test]
fn move_only_views() {
    test_unordered_multiset(MoveOnlyView::<Input, false, false, false>::new(&SOME_INTS));
    test_unordered_multiset(MoveOnlyView::<Forward, false, false, true>::new(&SOME_INTS));
    test_unordered_multiset(MoveOnlyView::<Forward, false, true, true>::new(&SOME_INTS));
    test_unordered_multiset(MoveOnlyView::<Bidirectional, false, false, true>::new(&SOME_INTS));
    test_unordered_multiset(MoveOnlyView::<Bidirectional, false, true, true>::new(&SOME_INTS));
    test_unordered_multiset(MoveOnlyView::<RandomAccess, true, false, true>::new(&SOME_INTS));
    test_unordered_multiset(MoveOnlyView::<RandomAccess, true, true, true>::new(&SOME_INTS));
}

// ─── Non-views ───────────────────────────────────────────────────────────────

#[test]
fn array() {
    test_unordered_multiset(&SOME_INTS);
}

#[test]
fn lvalue_vec() {
    let vec = SOME_INTS.to_vec();
    test_unordered_multiset(&vec);
    assert_eq!(vec, SOME_INTS);
}

#[test]
fn lvalue_linked_list() {
    let list: LinkedList<i32> = SOME_INTS.iter().copied().collect();
    test_unordered_multiset(&list);
}

// ─── Every synthetic shape ───────────────────────────────────────────────────

#[test]
fn every_shape() {
    init_tracing();
    let visited = dispatch::test_in(&mut UnorderedMultisetInstantiator, &SOME_INTS);
    assert_eq!(visited, Capabilities::enumerate().collect::<Vec<_>>());
}

#[test]
fn full_run() {
    init_tracing();
    let visited = dispatch::run(&mut UnorderedMultisetInstantiator, &SOME_INTS);
    assert_eq!(visited.len(), 39);
}

// ─── Result details ──────────────────────────────────────────────────────────

#[test]
fn duplicates_are_preserved() {
    let set = test_unordered_multiset(&SOME_INTS);
    assert_eq!(set.len(), 10);
    assert_eq!(set.count(&4), 3);
    for value in [0, 1, 2, 3, 5, 6, 7] {
        assert_eq!(set.count(&value), 1, "count of {value}");
    }
}

#[test]
fn proxy_ranges_are_consumed() {
    use wabi_range::tag::{ByValue, Copyable};

    let range = TestRange::<i32, Forward, ByValue, Copyable, false, false, false, true>::new(&SOME_INTS);
    let set = test_unordered_multiset(range);
    assert_eq!(set.len(), SOME_INTS.len());
}

#[test]
fn insertion_adds_to_existing_contents() {
    let mut set = UnorderedMultiSet::from([4]);
    set.insert_range(MoveOnlyView::<Input, false, false, false>::new(&SOME_INTS));
    assert_eq!(set.count(&4), 4);
    assert_eq!(set.len(), 11);
}
