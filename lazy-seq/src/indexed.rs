//! The indexable specialization: sequences with O(1) random access.
//!
//! An [`Indexed`] sequence knows its [`length`](Indexed::length) without
//! iterating and can [`get`](Indexed::get) any element by position. Operator
//! nodes that can preserve these capabilities do so through conditional
//! `Indexed` implementations: a mapped indexable sequence answers `get(i)` by
//! mapping the parent's `get(i)`, a reversed one by reading from the far end,
//! and take/skip by offset arithmetic. Nodes that cannot preserve random
//! access directly (such as filter) answer from their materialization cache.

use crate::cursor::IndexCursor;
use crate::operators::sort::natural_order;
use crate::operators::take::Take;
use crate::sequence::Sequence;

/// A sequence with a known length and O(1) element access.
///
/// Iterating an indexed sequence with `each` yields exactly `length()`
/// elements, in index order.
pub trait Indexed: Sequence {
    /// The number of elements, known without iteration.
    fn length(&self) -> usize;

    /// The element at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<Self::Item>;

    /// All elements but the last `count`.
    fn initial(self, count: usize) -> Take<Self>
    where
        Self: Sized,
    {
        let keep = self.length().saturating_sub(count);
        Take::new(self, keep)
    }

    /// The position of the last element equal to `value`, or `None`.
    ///
    /// Scans backward from the end and stops at the first match.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_seq::{lazy, Indexed};
    ///
    /// let letters = lazy(vec!["a", "b", "c", "b", "a"]);
    /// assert_eq!(letters.last_index_of(&"b"), Some(3));
    /// ```
    fn last_index_of(&self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        (0..self.length())
            .rev()
            .find(|&index| self.get(index).as_ref() == Some(value))
    }

    /// The position at which `value` could be inserted to keep the sequence
    /// sorted, found by binary search.
    ///
    /// Assumes the sequence is already sorted under the library's comparator;
    /// on unsorted input the result is unspecified, but the search always
    /// terminates.
    fn sorted_index(&self, value: &Self::Item) -> usize
    where
        Self::Item: PartialOrd,
    {
        let mut lower = 0;
        let mut upper = self.length();
        while lower < upper {
            let middle = (lower + upper) / 2;
            let before = match self.get(middle) {
                Some(item) => natural_order(&item, value) == std::cmp::Ordering::Less,
                None => false,
            };
            if before {
                lower = middle + 1;
            } else {
                upper = middle;
            }
        }
        lower
    }

    /// A pull cursor over this sequence, positioned before the first element.
    fn cursor(&self) -> IndexCursor<'_, Self>
    where
        Self: Sized,
    {
        IndexCursor::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lazy;

    #[test]
    fn initial_keeps_all_but_the_tail() {
        assert_eq!(lazy(vec![1, 2, 3, 4, 5]).initial(2).to_vec(), vec![1, 2, 3]);
        assert_eq!(lazy(vec![1, 2]).initial(5).to_vec(), Vec::<i32>::new());
    }

    #[test]
    fn last_index_of_finds_the_final_occurrence() {
        let letters = lazy(vec!["a", "b", "c", "b", "a"]);
        assert_eq!(letters.last_index_of(&"b"), Some(3));
        assert_eq!(letters.last_index_of(&"a"), Some(4));
        assert_eq!(letters.last_index_of(&"z"), None);
    }

    #[test]
    fn sorted_index_is_the_lower_bound() {
        let sorted = lazy(vec![10, 20, 20, 30]);
        assert_eq!(sorted.sorted_index(&5), 0);
        assert_eq!(sorted.sorted_index(&20), 1);
        assert_eq!(sorted.sorted_index(&25), 3);
        assert_eq!(sorted.sorted_index(&99), 4);
    }
}
