//! Generated sequences: elements computed from their index on demand.

use std::time::Duration;

use crate::cursor::GenerateCursor;
use crate::indexed::Indexed;
use crate::schedule::AsyncSequence;
use crate::sequence::{Sequence, Step};

/// A sequence whose `i`-th element is `generator(i)`.
///
/// With a length the sequence is bounded and indexable. Without one it is
/// unbounded: only short-circuiting terminals, or a `take`, make a full
/// drain terminate, and asking for its length is a contract violation.
pub struct GeneratedSequence<F> {
    generator: F,
    length: Option<usize>,
}

impl<T, F> GeneratedSequence<F>
where
    F: Fn(usize) -> T,
{
    /// A pull cursor over the generator that never materializes, suitable
    /// for consuming unbounded sequences element by element.
    pub fn into_cursor(self) -> GenerateCursor<T, F> {
        GenerateCursor::new(self.generator, self.length)
    }

    /// Re-expresses this generated sequence through a scheduler, pulling
    /// straight off the generator.
    ///
    /// This shadows the generic [`Sequence::into_async`] with a variant
    /// driven by the unbuffered generator cursor, so an unbounded sequence
    /// ticks one element per scheduled step until a visitor stops it.
    pub fn into_async(self, interval: Option<Duration>) -> AsyncSequence<GenerateCursor<T, F>> {
        AsyncSequence::new(self.into_cursor(), interval)
    }
}

impl<T, F> Sequence for GeneratedSequence<F>
where
    F: Fn(usize) -> T,
{
    type Item = T;

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut(T, usize) -> Step,
    {
        let mut index = 0;
        loop {
            if let Some(limit) = self.length {
                if index >= limit {
                    return Step::Continue;
                }
            }
            if visitor((self.generator)(index), index).is_stop() {
                return Step::Stop;
            }
            index += 1;
        }
    }
}

impl<T, F> Indexed for GeneratedSequence<F>
where
    F: Fn(usize) -> T,
{
    /// The fixed length.
    ///
    /// # Panics
    ///
    /// Panics when the sequence was generated without one.
    fn length(&self) -> usize {
        self.length.expect("an unbounded generated sequence has no length")
    }

    fn get(&self, index: usize) -> Option<T> {
        match self.length {
            Some(limit) if index >= limit => None,
            _ => Some((self.generator)(index)),
        }
    }
}

/// An unbounded sequence of `generator(0), generator(1), …`.
///
/// # Examples
///
/// ```
/// use lazy_seq::{generate, Sequence};
///
/// let squares = generate(|i| i * i).take(4).to_vec();
/// assert_eq!(squares, vec![0, 1, 4, 9]);
/// ```
pub fn generate<T, F>(generator: F) -> GeneratedSequence<F>
where
    F: Fn(usize) -> T,
{
    GeneratedSequence { generator, length: None }
}

/// A bounded sequence of `generator(0) … generator(length - 1)`.
pub fn generate_with_length<T, F>(generator: F, length: usize) -> GeneratedSequence<F>
where
    F: Fn(usize) -> T,
{
    GeneratedSequence { generator, length: Some(length) }
}

/// The integers `0, 1, …, stop - 1`.
pub fn range(stop: i64) -> GeneratedSequence<impl Fn(usize) -> i64> {
    range_step(0, stop, 1)
}

/// The integers `start, start + 1, …, stop - 1`.
///
/// # Examples
///
/// ```
/// use lazy_seq::{range_from, Sequence};
///
/// assert_eq!(range_from(1, 10).to_vec(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
pub fn range_from(start: i64, stop: i64) -> GeneratedSequence<impl Fn(usize) -> i64> {
    range_step(start, stop, 1)
}

/// The arithmetic progression `start, start + step, …` up to but excluding
/// `stop`. The step may be negative for descending ranges.
///
/// # Panics
///
/// Panics on a zero step.
pub fn range_step(start: i64, stop: i64, step: i64) -> GeneratedSequence<impl Fn(usize) -> i64> {
    assert!(step != 0, "range step must be nonzero");
    let count = if (step > 0 && stop > start) || (step < 0 && stop < start) {
        let span = stop.abs_diff(start);
        let pace = step.unsigned_abs();
        (span.div_ceil(pace)) as usize
    } else {
        0
    };
    generate_with_length(move |index| start + (index as i64) * step, count)
}

/// The value, repeated without end.
pub fn repeat<T: Clone>(value: T) -> GeneratedSequence<impl Fn(usize) -> T> {
    generate(move |_| value.clone())
}

/// The value, repeated `count` times.
pub fn repeat_n<T: Clone>(value: T, count: usize) -> GeneratedSequence<impl Fn(usize) -> T> {
    generate_with_length(move |_| value.clone(), count)
}
