//! Lazy-seq is a library for building and evaluating lazy sequence pipelines.
//!
//! Programs are written in a collection-oriented style, where sequences of
//! elements are transformed and combined using operations like `map`, `filter`,
//! `concat`, and `group_by`. Building a pipeline performs no work on the
//! elements themselves: each operation returns a new sequence node describing
//! the transformation, and elements are produced only when a terminal
//! operation (`to_vec`, `fold`, `find`, and friends) drives iteration, and
//! then only as many as the terminal needs.
//!
//! Sequences come in several kinds, each a capability on top of the base
//! [`Sequence`] protocol: [`Indexed`] sequences additionally offer O(1)
//! random access and a known length, [`KeyedSequence`]s iterate key/value
//! pairs, [`StringSequence`]s iterate the characters of a string and support
//! pattern matching and splitting, and [`AsyncSequence`]s re-express
//! iteration through a host-supplied [`Scheduler`].
//!
//! # Examples
//!
//! ```
//! use lazy_seq::{lazy, Sequence};
//!
//! let evens = lazy(vec![1, 2, 3, 4, 5, 6])
//!     .filter(|x, _| x % 2 == 0)
//!     .map(|x, _| x * 10)
//!     .to_vec();
//!
//! assert_eq!(evens, vec![20, 40, 60]);
//! ```
//!
//! Pipelines over unbounded sources remain usable as long as a terminal only
//! demands finitely many elements:
//!
//! ```
//! use lazy_seq::{generate, Sequence};
//!
//! let powers = generate(|i| 1u64 << i).take(4).to_vec();
//! assert_eq!(powers, vec![1, 2, 4, 8]);
//! ```

#![forbid(missing_docs)]

/// A composite trait for element types flowing through sequences.
///
/// Sequences hand elements to visitors by value, and nodes that materialize
/// re-emit their buffered elements, so element types must be cloneable and
/// free of borrowed data. Nothing more is asked of them here; operations
/// that compare, hash, or order elements state those bounds themselves.
pub trait Data: Clone + 'static {}
impl<T: Clone + 'static> Data for T {}

pub use crate::cursor::Cursor;
pub use crate::fields::Field;
pub use crate::indexed::Indexed;
pub use crate::keyed::{Defined, Invocable, KeyedSequence};
pub use crate::operators::flatten::Nested;
pub use crate::schedule::{AsyncSequence, QueueScheduler, Scheduler};
pub use crate::sequence::{Sequence, Step};
pub use crate::sources::array::ArraySequence;
pub use crate::sources::generate::{
    generate, generate_with_length, range, range_from, range_step, repeat, repeat_n,
    GeneratedSequence,
};
pub use crate::sources::object::ObjectSequence;
pub use crate::sources::stream::{ChunkSource, Lines, ReaderSource, StreamSequence};
pub use crate::strings::StringSequence;

pub mod cursor;
pub mod fields;
pub mod indexed;
pub mod keyed;
pub mod operators;
pub mod schedule;
pub mod sequence;
pub mod sources;
pub mod strings;

/// Conversion of an in-memory value into the sequence kind that suits it.
///
/// This is the dispatch half of the library's entry point: vectors and
/// slices become [`ArraySequence`]s, strings become [`StringSequence`]s, and
/// key/value maps become [`ObjectSequence`]s. A plain vector of pairs wraps
/// as an array sequence; use [`ObjectSequence::new`] to treat it as keyed.
/// A value that is already a sequence needs no dispatch at all; its type is
/// its kind.
pub trait IntoSequence {
    /// The sequence kind constructed from `Self`.
    type Seq;
    /// Wraps `self` in its sequence kind.
    fn into_sequence(self) -> Self::Seq;
}

impl<T: Data> IntoSequence for Vec<T> {
    type Seq = ArraySequence<T>;
    fn into_sequence(self) -> ArraySequence<T> {
        ArraySequence::new(self)
    }
}

impl<T: Data> IntoSequence for &[T] {
    type Seq = ArraySequence<T>;
    fn into_sequence(self) -> ArraySequence<T> {
        ArraySequence::new(self.to_vec())
    }
}

impl IntoSequence for String {
    type Seq = StringSequence;
    fn into_sequence(self) -> StringSequence {
        StringSequence::new(self)
    }
}

impl IntoSequence for &str {
    type Seq = StringSequence;
    fn into_sequence(self) -> StringSequence {
        StringSequence::new(self.to_owned())
    }
}

impl<V: Data> IntoSequence for std::collections::BTreeMap<String, V> {
    type Seq = ObjectSequence<V>;
    fn into_sequence(self) -> ObjectSequence<V> {
        ObjectSequence::new(self.into_iter().collect())
    }
}

/// Wraps a value in the sequence kind appropriate to it.
///
/// # Examples
///
/// ```
/// use lazy_seq::{lazy, Sequence};
///
/// assert_eq!(lazy(vec![1, 2, 3]).map(|x, _| x + 1).to_vec(), vec![2, 3, 4]);
/// assert_eq!(lazy("abc").size(), 3);
/// ```
pub fn lazy<T: IntoSequence>(value: T) -> T::Seq {
    value.into_sequence()
}
