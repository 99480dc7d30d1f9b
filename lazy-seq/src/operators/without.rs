//! Membership operators: set difference and intersection against arrays.

use crate::sequence::{Sequence, Step};

/// The parent's elements, minus those equal to any excluded value.
pub struct Without<S: Sequence> {
    parent: S,
    excluded: Vec<S::Item>,
}

impl<S: Sequence> Without<S> {
    pub(crate) fn new(parent: S, excluded: Vec<S::Item>) -> Self {
        Without { parent, excluded }
    }
}

impl<S> Sequence for Without<S>
where
    S: Sequence,
    S::Item: PartialEq,
{
    type Item = S::Item;

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut(S::Item, usize) -> Step,
    {
        let mut emitted = 0;
        self.parent.each(|item, _| {
            if self.excluded.contains(&item) {
                Step::Continue
            } else {
                let step = visitor(item, emitted);
                emitted += 1;
                step
            }
        })
    }
}

/// The parent's elements present in every companion array, each at most once.
pub struct Intersection<S: Sequence> {
    parent: S,
    others: Vec<Vec<S::Item>>,
}

impl<S: Sequence> Intersection<S> {
    pub(crate) fn new(parent: S, others: Vec<Vec<S::Item>>) -> Self {
        Intersection { parent, others }
    }
}

impl<S> Sequence for Intersection<S>
where
    S: Sequence,
    S::Item: Clone + PartialEq,
{
    type Item = S::Item;

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut(S::Item, usize) -> Step,
    {
        let mut seen: Vec<S::Item> = Vec::new();
        let mut emitted = 0;
        self.parent.each(|item, _| {
            if seen.contains(&item) || !self.others.iter().all(|other| other.contains(&item)) {
                return Step::Continue;
            }
            seen.push(item.clone());
            let step = visitor(item, emitted);
            emitted += 1;
            step
        })
    }
}
