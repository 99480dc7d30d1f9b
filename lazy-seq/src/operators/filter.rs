//! Selection operators: keep a subset of the parent's elements.
//!
//! Filtering cannot know where its n-th element lives without scanning, so
//! [`Filtered`] carries a materialization cache: iteration streams straight
//! off the parent, but the first call to `get` or `length` populates the
//! cache, and later reads (including subsequent `each` calls) serve from it.

use std::cell::OnceCell;

use log::debug;

use crate::fields::Field;
use crate::indexed::Indexed;
use crate::sequence::{each_items, Sequence, Step};

/// A sequence of the parent elements accepted by a predicate.
///
/// The predicate receives each element with its position in the parent;
/// positions reported downstream are renumbered over the kept elements.
pub struct Filtered<S: Sequence, P> {
    parent: S,
    predicate: P,
    cache: OnceCell<Vec<S::Item>>,
}

impl<S: Sequence, P> Filtered<S, P> {
    pub(crate) fn new(parent: S, predicate: P) -> Self {
        Filtered { parent, predicate, cache: OnceCell::new() }
    }
}

impl<S, P> Filtered<S, P>
where
    S: Sequence,
    S::Item: Clone,
    P: Fn(&S::Item, usize) -> bool,
{
    /// The kept elements, materialized once and reused thereafter.
    fn kept(&self) -> &[S::Item] {
        self.cache.get_or_init(|| {
            debug!("materializing filtered sequence for random access");
            let mut kept = Vec::new();
            self.parent.each(|item, index| {
                if (self.predicate)(&item, index) {
                    kept.push(item);
                }
                Step::Continue
            });
            kept
        })
    }
}

impl<S, P> Sequence for Filtered<S, P>
where
    S: Sequence,
    S::Item: Clone,
    P: Fn(&S::Item, usize) -> bool,
{
    type Item = S::Item;

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut(S::Item, usize) -> Step,
    {
        if let Some(kept) = self.cache.get() {
            return each_items(kept, &mut visitor);
        }
        let mut emitted = 0;
        self.parent.each(|item, index| {
            if (self.predicate)(&item, index) {
                let step = visitor(item, emitted);
                emitted += 1;
                step
            } else {
                Step::Continue
            }
        })
    }
}

impl<S, P> Indexed for Filtered<S, P>
where
    S: Sequence,
    S::Item: Clone,
    P: Fn(&S::Item, usize) -> bool,
{
    fn length(&self) -> usize {
        self.kept().len()
    }

    fn get(&self, index: usize) -> Option<S::Item> {
        self.kept().get(index).cloned()
    }
}

/// A sequence of the record elements whose fields all equal a property list.
pub struct WhereFields<S: Sequence>
where
    S::Item: Field,
{
    parent: S,
    properties: Vec<(String, <S::Item as Field>::Value)>,
}

impl<S: Sequence> WhereFields<S>
where
    S::Item: Field,
{
    pub(crate) fn new(parent: S, properties: Vec<(String, <S::Item as Field>::Value)>) -> Self {
        WhereFields { parent, properties }
    }

    fn accepts(&self, item: &S::Item) -> bool {
        self.properties
            .iter()
            .all(|(name, expected)| item.field(name).as_ref() == Some(expected))
    }
}

impl<S> Sequence for WhereFields<S>
where
    S: Sequence,
    S::Item: Field,
{
    type Item = S::Item;

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut(S::Item, usize) -> Step,
    {
        let mut emitted = 0;
        self.parent.each(|item, _| {
            if self.accepts(&item) {
                let step = visitor(item, emitted);
                emitted += 1;
                step
            } else {
                Step::Continue
            }
        })
    }
}

/// A sequence of the present values in a parent of optional values.
pub struct Compacted<S> {
    parent: S,
}

impl<S> Compacted<S> {
    pub(crate) fn new(parent: S) -> Self {
        Compacted { parent }
    }
}

impl<T, S> Sequence for Compacted<S>
where
    S: Sequence<Item = Option<T>>,
{
    type Item = T;

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut(T, usize) -> Step,
    {
        let mut emitted = 0;
        self.parent.each(|item, _| {
            if let Some(value) = item {
                let step = visitor(value, emitted);
                emitted += 1;
                step
            } else {
                Step::Continue
            }
        })
    }
}
