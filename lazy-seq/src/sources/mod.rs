//! Concrete source adapters: the leaves a pipeline pulls from.
//!
//! Each adapter wraps one kind of input (an in-memory buffer, a keyed
//! collection, a string, a generator function, or a chunked transport) and
//! exposes it through the sequence protocol. Everything downstream of a
//! source is an operator node; sources are where elements actually live.

pub mod array;
pub mod generate;
pub mod object;
pub mod stream;

pub use self::array::ArraySequence;
pub use self::generate::{
    generate, generate_with_length, range, range_from, range_step, repeat, repeat_n,
    GeneratedSequence,
};
pub use self::object::ObjectSequence;
pub use self::stream::{ChunkSource, Lines, ReaderSource, StreamSequence};
