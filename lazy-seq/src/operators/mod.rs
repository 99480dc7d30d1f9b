//! Operator node types, one module per pipeline stage.
//!
//! Each node is an immutable descriptor holding its parent sequence by value
//! plus whatever configuration its stage needs. Nodes come in two shapes:
//! streaming nodes implement `each` directly over the parent, and caching
//! nodes materialize the parent into an internal buffer on first read and
//! serve everything from it afterwards. The cache is the only mutable state
//! a node ever has, it is populated at most once, and it is never exposed.

pub mod chunk;
pub mod concat;
pub mod filter;
pub mod flatten;
pub mod group;
pub mod map;
pub mod reverse;
pub mod shuffle;
pub mod skip;
pub mod sort;
pub mod tail;
pub mod take;
pub mod tap;
pub mod unique;
pub mod without;
pub mod zip;

pub use self::chunk::Chunked;
pub use self::concat::Concatenated;
pub use self::filter::{Compacted, Filtered, WhereFields};
pub use self::flatten::{Flattened, Nested};
pub use self::group::{Counted, Grouped, IndexedBy};
pub use self::map::{Invoked, Mapped, Plucked};
pub use self::reverse::Reversed;
pub use self::shuffle::Shuffled;
pub use self::skip::{Skip, SkipWhile};
pub use self::sort::Sorted;
pub use self::tail::Tail;
pub use self::take::{Take, TakeWhile};
pub use self::tap::Tapped;
pub use self::unique::{Unique, UniqueArray};
pub use self::without::{Intersection, Without};
pub use self::zip::{ZipRow, Zipped};
