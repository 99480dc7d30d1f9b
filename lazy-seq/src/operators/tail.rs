//! The trailing elements of a sequence.

use std::cell::OnceCell;
use std::collections::VecDeque;

use log::debug;

use crate::indexed::Indexed;
use crate::sequence::{each_items, Sequence, Step};

/// The last `count` elements of the parent.
///
/// The parent is drained once through a bounded ring buffer, so no more than
/// `count` elements are ever held, and sequences with no known length are
/// supported. The buffered tail is kept and reused across iterations.
pub struct Tail<S: Sequence> {
    parent: S,
    count: usize,
    cache: OnceCell<Vec<S::Item>>,
}

impl<S: Sequence> Tail<S> {
    pub(crate) fn new(parent: S, count: usize) -> Self {
        Tail { parent, count, cache: OnceCell::new() }
    }
}

impl<S> Tail<S>
where
    S: Sequence,
    S::Item: Clone,
{
    fn kept(&self) -> &[S::Item] {
        self.cache.get_or_init(|| {
            if self.count == 0 {
                return Vec::new();
            }
            debug!("draining parent through a {}-element tail buffer", self.count);
            let mut ring: VecDeque<S::Item> = VecDeque::with_capacity(self.count);
            self.parent.each(|item, _| {
                if ring.len() == self.count {
                    ring.pop_front();
                }
                ring.push_back(item);
                Step::Continue
            });
            ring.into_iter().collect()
        })
    }
}

impl<S> Sequence for Tail<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut(S::Item, usize) -> Step,
    {
        each_items(self.kept(), &mut visitor)
    }
}

impl<S> Indexed for Tail<S>
where
    S: Sequence,
    S::Item: Clone,
{
    fn length(&self) -> usize {
        self.kept().len()
    }

    fn get(&self, index: usize) -> Option<S::Item> {
        self.kept().get(index).cloned()
    }
}

#[cfg(test)]
mod tests {
    use crate::{lazy, Sequence};

    #[test]
    fn last_n_keeps_the_tail() {
        assert_eq!(lazy(vec![1, 2, 3, 4, 5]).last_n(2).to_vec(), vec![4, 5]);
        assert_eq!(lazy(vec![1, 2]).last_n(5).to_vec(), vec![1, 2]);
        assert_eq!(lazy(vec![1, 2]).last_n(0).to_vec(), Vec::<i32>::new());
    }
}
