//! Projection operators: apply a function to each element as it flows past.
//!
//! All three nodes here are streaming: they hold no state beyond their parent
//! and configuration, and they preserve random access whenever the parent has
//! it, by projecting the parent's `get(i)` on demand.

use crate::fields::Field;
use crate::indexed::Indexed;
use crate::sequence::{Sequence, Step};

/// A sequence whose elements are the parent's, passed through a mapper.
pub struct Mapped<S, F> {
    parent: S,
    mapper: F,
}

impl<S, F> Mapped<S, F> {
    pub(crate) fn new(parent: S, mapper: F) -> Self {
        Mapped { parent, mapper }
    }
}

impl<S, B, F> Sequence for Mapped<S, F>
where
    S: Sequence,
    F: Fn(S::Item, usize) -> B,
{
    type Item = B;

    #[inline]
    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut(B, usize) -> Step,
    {
        self.parent.each(|item, index| visitor((self.mapper)(item, index), index))
    }
}

impl<S, B, F> Indexed for Mapped<S, F>
where
    S: Indexed,
    F: Fn(S::Item, usize) -> B,
{
    fn length(&self) -> usize {
        self.parent.length()
    }

    fn get(&self, index: usize) -> Option<B> {
        self.parent.get(index).map(|item| (self.mapper)(item, index))
    }
}

/// A sequence of one named field projected out of each record element.
///
/// Elements lacking the field project to `None`.
pub struct Plucked<S> {
    parent: S,
    name: String,
}

impl<S> Plucked<S> {
    pub(crate) fn new(parent: S, name: String) -> Self {
        Plucked { parent, name }
    }
}

impl<S> Sequence for Plucked<S>
where
    S: Sequence,
    S::Item: Field,
{
    type Item = Option<<S::Item as Field>::Value>;

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut(Self::Item, usize) -> Step,
    {
        self.parent.each(|item, index| visitor(item.field(&self.name), index))
    }
}

impl<S> Indexed for Plucked<S>
where
    S: Indexed,
    S::Item: Field,
{
    fn length(&self) -> usize {
        self.parent.length()
    }

    fn get(&self, index: usize) -> Option<Self::Item> {
        self.parent.get(index).map(|item| item.field(&self.name))
    }
}

/// A sequence projected through a function reference, element by element.
pub struct Invoked<S: Sequence, B> {
    parent: S,
    method: fn(&S::Item) -> B,
}

impl<S: Sequence, B> Invoked<S, B> {
    pub(crate) fn new(parent: S, method: fn(&S::Item) -> B) -> Self {
        Invoked { parent, method }
    }
}

impl<S, B> Sequence for Invoked<S, B>
where
    S: Sequence,
{
    type Item = B;

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut(B, usize) -> Step,
    {
        self.parent.each(|item, index| visitor((self.method)(&item), index))
    }
}

impl<S, B> Indexed for Invoked<S, B>
where
    S: Indexed,
{
    fn length(&self) -> usize {
        self.parent.length()
    }

    fn get(&self, index: usize) -> Option<B> {
        self.parent.get(index).map(|item| (self.method)(&item))
    }
}
