//! Prefix operators: limit a sequence to its leading elements.
//!
//! Both nodes stream. [`Take`] stops driving its parent the moment the limit
//! is reached, which is what makes `take` usable on unbounded sequences and
//! is load-bearing for the short-circuit contract: a counting source under
//! `take(n)` is invoked exactly n times.

use crate::indexed::Indexed;
use crate::sequence::{Sequence, Step};

/// The first `count` elements of the parent.
pub struct Take<S> {
    parent: S,
    count: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(parent: S, count: usize) -> Self {
        Take { parent, count }
    }
}

impl<S> Sequence for Take<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut(S::Item, usize) -> Step,
    {
        if self.count == 0 {
            return Step::Continue;
        }
        // Distinguish the visitor stopping from the limit being reached: only
        // the former is reported upward as a stop.
        let mut outcome = Step::Continue;
        let mut taken = 0;
        self.parent.each(|item, index| {
            outcome = visitor(item, index);
            if outcome.is_stop() {
                return Step::Stop;
            }
            taken += 1;
            if taken == self.count {
                Step::Stop
            } else {
                Step::Continue
            }
        });
        outcome
    }
}

impl<S> Indexed for Take<S>
where
    S: Indexed,
{
    fn length(&self) -> usize {
        self.count.min(self.parent.length())
    }

    fn get(&self, index: usize) -> Option<S::Item> {
        if index < self.count {
            self.parent.get(index)
        } else {
            None
        }
    }
}

/// The leading elements of the parent for which a predicate holds.
pub struct TakeWhile<S, P> {
    parent: S,
    predicate: P,
}

impl<S, P> TakeWhile<S, P> {
    pub(crate) fn new(parent: S, predicate: P) -> Self {
        TakeWhile { parent, predicate }
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item, usize) -> bool,
{
    type Item = S::Item;

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut(S::Item, usize) -> Step,
    {
        let mut outcome = Step::Continue;
        self.parent.each(|item, index| {
            if !(self.predicate)(&item, index) {
                return Step::Stop;
            }
            outcome = visitor(item, index);
            outcome
        });
        outcome
    }
}

#[cfg(test)]
mod tests {
    use crate::{lazy, Indexed, Sequence};

    #[test]
    fn take_limits_and_preserves_random_access() {
        let prefix = lazy(vec![1, 2, 3, 4, 5]).take(3);
        assert_eq!(prefix.to_vec(), vec![1, 2, 3]);
        assert_eq!(prefix.length(), 3);
        assert_eq!(prefix.get(2), Some(3));
        assert_eq!(prefix.get(3), None);
    }

    #[test]
    fn take_beyond_the_end_yields_everything() {
        let prefix = lazy(vec![1, 2]).take(10);
        assert_eq!(prefix.to_vec(), vec![1, 2]);
        assert_eq!(prefix.length(), 2);
    }

    #[test]
    fn take_zero_is_empty() {
        assert_eq!(lazy(vec![1, 2]).take(0).to_vec(), Vec::<i32>::new());
    }

    #[test]
    fn take_while_stops_at_the_first_failure() {
        let prefix = lazy(vec![1, 2, 3, 1, 2]).take_while(|&x, _| x < 3).to_vec();
        assert_eq!(prefix, vec![1, 2]);
    }
}
