//! The keyed specialization: sequences of key/value pairs.
//!
//! A keyed sequence is an ordinary [`Sequence`] whose elements are
//! `(String, V)` pairs, plus association lookup by key and the pair-shaped
//! operators: project keys or values, merge two keyed sequences, fill
//! defaults, invert, and restrict by key membership. Iteration order is the
//! source's insertion order, and `to_vec` naturally yields the pairs form.

use fnv::FnvHashSet;

use crate::sequence::{Sequence, Step};

/// Whether a value counts as present for [`KeyedSequence::defaults`].
///
/// Optional values are present when `Some`; plain scalar and string values
/// are always present.
pub trait Defined {
    /// True when the value counts as present.
    fn is_defined(&self) -> bool;
}

impl<T> Defined for Option<T> {
    fn is_defined(&self) -> bool {
        self.is_some()
    }
}

macro_rules! always_defined {
    ($($kind:ty),* $(,)?) => {
        $(impl Defined for $kind {
            fn is_defined(&self) -> bool {
                true
            }
        })*
    };
}

always_defined!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
    &str,
);

/// Whether a value can be called, for [`KeyedSequence::functions`].
///
/// Callability is a property of the value type; keyed collections that mix
/// data and behavior implement this for their value type to make the
/// behavioral entries discoverable.
pub trait Invocable {
    /// True when the value is invocable.
    fn is_invocable(&self) -> bool;
}

impl<R> Invocable for fn() -> R {
    fn is_invocable(&self) -> bool {
        true
    }
}

/// A sequence of key/value pairs with association lookup.
pub trait KeyedSequence: Sequence<Item = (String, Self::Value)> {
    /// The value type associated with each key.
    type Value;

    /// The value associated with `key`, or `None`.
    fn get(&self, key: &str) -> Option<Self::Value>;

    /// Projects the keys, in iteration order.
    fn keys(self) -> Keys<Self>
    where
        Self: Sized,
    {
        Keys { parent: self }
    }

    /// Projects the values, in iteration order.
    fn values(self) -> Values<Self>
    where
        Self: Sized,
    {
        Values { parent: self }
    }

    /// Merges `other` over this sequence; `other` wins on key conflicts.
    ///
    /// Emission order is `other`'s entries first, then this sequence's
    /// entries whose keys `other` does not shadow.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_seq::{KeyedSequence, ObjectSequence};
    ///
    /// let merged = ObjectSequence::from_pairs(vec![("foo", "bar")])
    ///     .assign(ObjectSequence::from_pairs(vec![("foo", "baz"), ("qux", "quux")]));
    /// assert_eq!(merged.get("foo"), Some("baz"));
    /// assert_eq!(merged.get("qux"), Some("quux"));
    /// ```
    fn assign<O>(self, other: O) -> Assign<Self, O>
    where
        Self: Sized,
        O: KeyedSequence<Value = Self::Value>,
    {
        Assign { parent: self, other }
    }

    /// Merges `other` over this sequence; `other` wins on key conflicts.
    fn extend<O>(self, other: O) -> Assign<Self, O>
    where
        Self: Sized,
        O: KeyedSequence<Value = Self::Value>,
    {
        self.assign(other)
    }

    /// Fills in entries from `fallback` for keys this sequence does not
    /// carry a present value for.
    ///
    /// Every parent entry is emitted, but only keys whose values are present
    /// (per [`Defined`]) suppress the fallback; an absent value is followed
    /// by the fallback entry for its key.
    fn defaults<O>(self, fallback: O) -> Defaults<Self, O>
    where
        Self: Sized,
        Self::Value: Defined,
        O: KeyedSequence<Value = Self::Value>,
    {
        Defaults { parent: self, fallback }
    }

    /// Swaps keys and values; values become keys through their string form.
    fn invert(self) -> Inverted<Self>
    where
        Self: Sized,
        Self::Value: ToString,
    {
        Inverted { parent: self }
    }

    /// Restricts to the entries whose keys are listed.
    fn pick(self, keys: &[&str]) -> Picked<Self>
    where
        Self: Sized,
    {
        Picked { parent: self, names: keys.iter().map(|&key| key.to_owned()).collect() }
    }

    /// Restricts to the entries whose keys are not listed.
    fn omit(self, keys: &[&str]) -> Omitted<Self>
    where
        Self: Sized,
    {
        Omitted { parent: self, names: keys.iter().map(|&key| key.to_owned()).collect() }
    }

    /// Projects the keys of the entries whose values are invocable.
    fn functions(self) -> Callables<Self>
    where
        Self: Sized,
        Self::Value: Invocable,
    {
        Callables { parent: self }
    }

    /// Projects the keys of the entries whose values are invocable.
    fn methods(self) -> Callables<Self>
    where
        Self: Sized,
        Self::Value: Invocable,
    {
        self.functions()
    }
}

/// The keys of a keyed sequence.
pub struct Keys<S> {
    parent: S,
}

impl<S: KeyedSequence> Sequence for Keys<S> {
    type Item = String;

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut(String, usize) -> Step,
    {
        self.parent.each(|(key, _), index| visitor(key, index))
    }
}

/// The values of a keyed sequence.
pub struct Values<S> {
    parent: S,
}

impl<S: KeyedSequence> Sequence for Values<S> {
    type Item = S::Value;

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut(S::Value, usize) -> Step,
    {
        self.parent.each(|(_, value), index| visitor(value, index))
    }
}

/// A keyed sequence merged over another; the overlay wins on conflicts.
pub struct Assign<S, O> {
    parent: S,
    other: O,
}

impl<S, O> Sequence for Assign<S, O>
where
    S: KeyedSequence,
    O: KeyedSequence<Value = S::Value>,
{
    type Item = (String, S::Value);

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut((String, S::Value), usize) -> Step,
    {
        let mut shadowed: FnvHashSet<String> = FnvHashSet::default();
        let mut emitted = 0;
        let outcome = self.other.each(|(key, value), _| {
            shadowed.insert(key.clone());
            let step = visitor((key, value), emitted);
            emitted += 1;
            step
        });
        if outcome.is_stop() {
            return Step::Stop;
        }
        self.parent.each(|(key, value), _| {
            if shadowed.contains(&key) {
                Step::Continue
            } else {
                let step = visitor((key, value), emitted);
                emitted += 1;
                step
            }
        })
    }
}

impl<S, O> KeyedSequence for Assign<S, O>
where
    S: KeyedSequence,
    O: KeyedSequence<Value = S::Value>,
{
    type Value = S::Value;

    fn get(&self, key: &str) -> Option<S::Value> {
        self.other.get(key).or_else(|| self.parent.get(key))
    }
}

/// A keyed sequence backed by fallback entries for missing values.
pub struct Defaults<S, O> {
    parent: S,
    fallback: O,
}

impl<S, O> Sequence for Defaults<S, O>
where
    S: KeyedSequence,
    S::Value: Defined,
    O: KeyedSequence<Value = S::Value>,
{
    type Item = (String, S::Value);

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut((String, S::Value), usize) -> Step,
    {
        let mut satisfied: FnvHashSet<String> = FnvHashSet::default();
        let mut emitted = 0;
        let outcome = self.parent.each(|(key, value), _| {
            if value.is_defined() {
                satisfied.insert(key.clone());
            }
            let step = visitor((key, value), emitted);
            emitted += 1;
            step
        });
        if outcome.is_stop() {
            return Step::Stop;
        }
        self.fallback.each(|(key, value), _| {
            if satisfied.contains(&key) {
                Step::Continue
            } else {
                let step = visitor((key, value), emitted);
                emitted += 1;
                step
            }
        })
    }
}

impl<S, O> KeyedSequence for Defaults<S, O>
where
    S: KeyedSequence,
    S::Value: Defined,
    O: KeyedSequence<Value = S::Value>,
{
    type Value = S::Value;

    fn get(&self, key: &str) -> Option<S::Value> {
        match self.parent.get(key) {
            Some(value) if value.is_defined() => Some(value),
            otherwise => self.fallback.get(key).or(otherwise),
        }
    }
}

/// A keyed sequence with keys and values swapped.
pub struct Inverted<S> {
    parent: S,
}

impl<S> Sequence for Inverted<S>
where
    S: KeyedSequence,
    S::Value: ToString,
{
    type Item = (String, String);

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut((String, String), usize) -> Step,
    {
        self.parent.each(|(key, value), index| visitor((value.to_string(), key), index))
    }
}

impl<S> KeyedSequence for Inverted<S>
where
    S: KeyedSequence,
    S::Value: ToString,
{
    type Value = String;

    fn get(&self, key: &str) -> Option<String> {
        let mut found = None;
        self.parent.each(|(original, value), _| {
            if value.to_string() == key {
                found = Some(original);
                Step::Stop
            } else {
                Step::Continue
            }
        });
        found
    }
}

/// A keyed sequence restricted to a set of keys.
pub struct Picked<S> {
    parent: S,
    names: Vec<String>,
}

impl<S: KeyedSequence> Sequence for Picked<S> {
    type Item = (String, S::Value);

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut((String, S::Value), usize) -> Step,
    {
        let mut emitted = 0;
        self.parent.each(|(key, value), _| {
            if self.names.iter().any(|name| name == &key) {
                let step = visitor((key, value), emitted);
                emitted += 1;
                step
            } else {
                Step::Continue
            }
        })
    }
}

impl<S: KeyedSequence> KeyedSequence for Picked<S> {
    type Value = S::Value;

    fn get(&self, key: &str) -> Option<S::Value> {
        if self.names.iter().any(|name| name == key) {
            self.parent.get(key)
        } else {
            None
        }
    }
}

/// A keyed sequence with a set of keys removed.
pub struct Omitted<S> {
    parent: S,
    names: Vec<String>,
}

impl<S: KeyedSequence> Sequence for Omitted<S> {
    type Item = (String, S::Value);

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut((String, S::Value), usize) -> Step,
    {
        let mut emitted = 0;
        self.parent.each(|(key, value), _| {
            if self.names.iter().any(|name| name == &key) {
                Step::Continue
            } else {
                let step = visitor((key, value), emitted);
                emitted += 1;
                step
            }
        })
    }
}

impl<S: KeyedSequence> KeyedSequence for Omitted<S> {
    type Value = S::Value;

    fn get(&self, key: &str) -> Option<S::Value> {
        if self.names.iter().any(|name| name == key) {
            None
        } else {
            self.parent.get(key)
        }
    }
}

/// The keys of the invocable entries of a keyed sequence.
pub struct Callables<S> {
    parent: S,
}

impl<S> Sequence for Callables<S>
where
    S: KeyedSequence,
    S::Value: Invocable,
{
    type Item = String;

    fn each<V>(&self, mut visitor: V) -> Step
    where
        V: FnMut(String, usize) -> Step,
    {
        let mut emitted = 0;
        self.parent.each(|(key, value), _| {
            if value.is_invocable() {
                let step = visitor(key, emitted);
                emitted += 1;
                step
            } else {
                Step::Continue
            }
        })
    }
}
