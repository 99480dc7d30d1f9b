//! End-to-end pipeline behavior: ordering, equivalences, and laziness.

use std::cell::Cell;
use std::rc::Rc;

use lazy_seq::{generate, lazy, range_from, Indexed, Nested, Sequence, Step};

/// A source that counts how many elements it has handed out.
struct CountingSource {
    limit: usize,
    pulls: Rc<Cell<usize>>,
}

impl CountingSource {
    fn new(limit: usize) -> (Self, Rc<Cell<usize>>) {
        let pulls = Rc::new(Cell::new(0));
        (CountingSource { limit, pulls: Rc::clone(&pulls) }, pulls)
    }
}

impl Sequence for CountingSource {
    type Item = usize;

    fn each<F>(&self, mut visitor: F) -> Step
    where
        F: FnMut(usize, usize) -> Step,
    {
        for index in 0..self.limit {
            self.pulls.set(self.pulls.get() + 1);
            if visitor(index, index).is_stop() {
                return Step::Stop;
            }
        }
        Step::Continue
    }
}

#[test]
fn to_vec_agrees_with_each() {
    let source = lazy(vec![3, 1, 4, 1, 5]);
    let mut visited = Vec::new();
    source.each(|x, _| {
        visited.push(x);
        Step::Continue
    });
    assert_eq!(source.to_vec(), visited);
}

#[test]
fn map_commutes_with_materialization() {
    let input = vec![1, 2, 3, 4];
    let through_sequence = lazy(input.clone()).map(|x, _| x * x).to_vec();
    let through_vec: Vec<i32> = input.into_iter().map(|x| x * x).collect();
    itertools::assert_equal(through_sequence, through_vec);
}

#[test]
fn filter_commutes_with_materialization() {
    let input = vec![1, 2, 3, 4, 5, 6];
    let through_sequence = lazy(input.clone()).filter(|x, _| x % 2 == 0).to_vec();
    let through_vec: Vec<i32> = input.into_iter().filter(|x| x % 2 == 0).collect();
    assert_eq!(through_sequence, through_vec);
}

#[test]
fn mapping_twice_composes() {
    let composed = lazy(vec![1, 2, 3]).map(|x, _| x + 1).map(|x, _| x * 10).to_vec();
    let fused = lazy(vec![1, 2, 3]).map(|x, _| (x + 1) * 10).to_vec();
    assert_eq!(composed, fused);
}

#[test]
fn double_reverse_is_identity() {
    let input = vec![1, 2, 3, 4, 5];
    assert_eq!(lazy(input.clone()).reverse().reverse().to_vec(), input);
}

#[test]
fn take_then_skip_partitions() {
    let input = vec![1, 2, 3, 4, 5, 6, 7];
    for cut in 0..=input.len() {
        let recombined = lazy(input.clone())
            .take(cut)
            .concat(lazy(input.clone()).skip(cut))
            .to_vec();
        assert_eq!(recombined, input, "cut at {cut}");
    }
}

#[test]
fn take_never_exceeds_its_count() {
    assert_eq!(lazy(vec![1, 2]).take(5).to_vec().len(), 2);
    assert_eq!(lazy(vec![1, 2, 3, 4]).take(3).to_vec().len(), 3);
}

#[test]
fn pipelines_are_repeatable() {
    let pipeline = lazy(vec![5, 3, 1, 3]).map(|x, _| x * 2).filter(|x, _| *x > 2);
    assert_eq!(pipeline.to_vec(), pipeline.to_vec());
}

// Short-circuiting terminals must not drive the source past the deciding
// element; the counting source verifies exact invocation counts.

#[test]
fn index_of_stops_at_the_match() {
    let (source, pulls) = CountingSource::new(100);
    assert_eq!(source.index_of(&3), Some(3));
    assert_eq!(pulls.get(), 4);
}

#[test]
fn find_stops_at_the_witness() {
    let (source, pulls) = CountingSource::new(100);
    assert_eq!(source.find(|&x, _| x >= 5), Some(5));
    assert_eq!(pulls.get(), 6);
}

#[test]
fn any_and_all_stop_at_the_decision() {
    let (source, pulls) = CountingSource::new(100);
    assert!(source.any(|&x, _| x == 2));
    assert_eq!(pulls.get(), 3);

    let (other, other_pulls) = CountingSource::new(100);
    assert!(!other.all(|&x, _| x < 4));
    assert_eq!(other_pulls.get(), 5);
}

#[test]
fn take_pulls_exactly_its_count() {
    let (source, pulls) = CountingSource::new(100);
    assert_eq!(source.take(3).to_vec(), vec![0, 1, 2]);
    assert_eq!(pulls.get(), 3);
}

#[test]
fn first_pulls_exactly_one() {
    let (source, pulls) = CountingSource::new(100);
    assert_eq!(source.first(), Some(0));
    assert_eq!(pulls.get(), 1);
}

// Laziness: constructing a pipeline must not invoke the producer at all.

#[test]
fn construction_invokes_no_generator() {
    let calls = Rc::new(Cell::new(0usize));
    let tracker = Rc::clone(&calls);
    let pipeline = generate(move |i| {
        tracker.set(tracker.get() + 1);
        1u64 << i
    })
    .map(|x, _| x)
    .take(4);
    assert_eq!(calls.get(), 0);
    assert_eq!(pipeline.to_vec(), vec![1, 2, 4, 8]);
    assert_eq!(calls.get(), 4);
}

#[test]
fn unbounded_sources_support_short_circuiting_terminals() {
    let naturals = generate(|i| i as u64);
    assert_eq!(naturals.find(|&x, _| x > 5), Some(6));
}

// Concrete scenarios.

#[test]
fn range_one_to_ten() {
    assert_eq!(range_from(1, 10).to_vec(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn flatten_nested_lists() {
    let nested: Vec<Nested<i32>> = vec![
        1.into(),
        vec![2, 3].into(),
        Nested::List(vec![4.into(), vec![5].into()]),
    ];
    assert_eq!(lazy(nested).flatten().to_vec(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn uniq_scenario() {
    assert_eq!(lazy(vec![1, 2, 2, 3, 3, 3]).uniq().to_vec(), vec![1, 2, 3]);
}

#[test]
fn uniq_emits_each_distinct_value_once_in_first_occurrence_order() {
    let distinct = lazy(vec![3, 1, 3, 2, 1, 2, 3]).uniq().to_vec();
    assert_eq!(distinct, vec![3, 1, 2]);
}

#[test]
fn last_index_of_scenario() {
    assert_eq!(lazy(vec!["a", "b", "c", "b", "a"]).last_index_of(&"b"), Some(3));
}

#[test]
fn reduce_scenario() {
    assert_eq!(lazy(vec![5, 10, 15, 20]).fold(0, |a, b| a + b), 50);
}

#[test]
fn sort_by_is_non_decreasing_under_the_key() {
    let sorted = lazy(vec![9, 2, 7, 2, 5]).sort_by(|&x| x).to_vec();
    for pair in sorted.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

#[test]
fn zip_scenario() {
    let rows = lazy(vec![1, 2]).zip(vec![vec![10, 20], vec![100, 200]]).to_vec();
    assert_eq!(rows[0].as_slice(), &[1, 10, 100]);
    assert_eq!(rows[1].as_slice(), &[2, 20, 200]);
}

#[test]
fn derived_operations_compose() {
    // last(2) of the even squares, via the bounded tail buffer
    let tail = lazy((1..=10).collect::<Vec<i64>>())
        .map(|x, _| x * x)
        .filter(|x, _| x % 2 == 0)
        .last_n(2)
        .to_vec();
    assert_eq!(tail, vec![64, 100]);
}

#[test]
fn chained_indexable_operators_preserve_random_access() {
    let pipeline = lazy((0..20).collect::<Vec<i32>>())
        .map(|x, _| x * 3)
        .skip(2)
        .take(5)
        .reverse();
    assert_eq!(pipeline.length(), 5);
    assert_eq!(pipeline.get(0), Some(18));
    assert_eq!(pipeline.to_vec(), vec![18, 15, 12, 9, 6]);
}
