//! IAI-Callgrind benchmark for IntSet merge walks.
//!
//! Measures instruction counts for union and intersection of two interleaved
//! sets of 1000 elements each.

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use intset::IntSet;
use std::hint::black_box;

fn setup_pair_1000() -> (IntSet, IntSet) {
    let evens = IntSet::try_from_iter((0..1000).map(|value| value * 2)).unwrap();
    let thirds = IntSet::try_from_iter((0..1000).map(|value| value * 3)).unwrap();
    (evens, thirds)
}

#[library_benchmark]
#[bench::with_setup(setup_pair_1000())]
fn union_1000(pair: (IntSet, IntSet)) -> usize {
    let (mut left, right) = pair;
    black_box(left.union(black_box(&right)).unwrap())
}

#[library_benchmark]
#[bench::with_setup(setup_pair_1000())]
fn intersection_1000(pair: (IntSet, IntSet)) -> usize {
    let (mut left, right) = pair;
    black_box(left.intersection(black_box(&right)))
}

library_benchmark_group!(
    name = merge_group;
    benchmarks = union_1000, intersection_1000
);

main!(library_benchmark_groups = merge_group);
