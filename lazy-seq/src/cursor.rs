//! Traits and types for pull-style iteration over sequences.
//!
//! The [`Cursor`] trait is the inverse of [`each`](crate::Sequence::each):
//! instead of the sequence pushing elements at a visitor, the caller pulls
//! one element at a time with [`advance`](Cursor::advance) and reads it with
//! [`current`](Cursor::current). A fresh cursor sits *before* the first
//! element, so `advance` must be called once before the first read. Pull
//! iteration is what the asynchronous driver is built on: each scheduled
//! step advances a cursor exactly once.

use log::debug;

use crate::indexed::Indexed;
use crate::sequence::Sequence;

/// A pull cursor over a sequence of elements.
pub trait Cursor {
    /// The element type produced by this cursor.
    type Item;

    /// Moves to the next element. Returns false when exhausted.
    fn advance(&mut self) -> bool;

    /// The element at the cursor, if positioned on one.
    fn get(&self) -> Option<Self::Item>;

    /// The element at the cursor. Panics if not positioned on one.
    fn current(&self) -> Self::Item {
        self.get().expect("cursor is not positioned on an element")
    }
}

/// The default cursor over an indexable sequence: an index walked forward.
pub struct IndexCursor<'s, S: Sequence> {
    sequence: &'s S,
    next: usize,
    item: Option<S::Item>,
}

impl<'s, S: Indexed> IndexCursor<'s, S> {
    /// A cursor positioned before the first element of `sequence`.
    pub fn new(sequence: &'s S) -> Self {
        IndexCursor { sequence, next: 0, item: None }
    }
}

impl<S: Indexed> Cursor for IndexCursor<'_, S>
where
    S::Item: Clone,
{
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        self.item = self.sequence.get(self.next);
        if self.item.is_some() {
            self.next += 1;
            true
        } else {
            false
        }
    }

    fn get(&self) -> Option<S::Item> {
        self.item.clone()
    }
}

/// A cursor that owns its sequence and materializes it on first use.
///
/// This is the generic pull adapter: sequences with no random access are
/// buffered in full the first time `advance` is called, and the cursor then
/// walks the buffer. Unbounded sequences cannot be pulled this way; see
/// [`GenerateCursor`] for generators.
pub struct MaterializedCursor<S: Sequence> {
    sequence: S,
    buffer: Option<Vec<S::Item>>,
    next: usize,
}

impl<S: Sequence> MaterializedCursor<S> {
    /// A cursor positioned before the first element of `sequence`.
    pub fn new(sequence: S) -> Self {
        MaterializedCursor { sequence, buffer: None, next: 0 }
    }

    fn buffered(&mut self) -> &[S::Item] {
        if self.buffer.is_none() {
            debug!("materializing sequence for pull iteration");
            self.buffer = Some(self.sequence.to_vec());
        }
        self.buffer.as_deref().unwrap_or(&[])
    }
}

impl<S: Sequence> Cursor for MaterializedCursor<S>
where
    S::Item: Clone,
{
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        let position = self.next;
        if position < self.buffered().len() {
            self.next += 1;
            true
        } else {
            // park one past the end so `get` stays empty
            self.next = self.buffered().len() + 1;
            false
        }
    }

    fn get(&self) -> Option<S::Item> {
        let buffer = self.buffer.as_deref()?;
        self.next.checked_sub(1).and_then(|position| buffer.get(position)).cloned()
    }
}

/// A cursor over a generator function, pulling lazily without buffering.
pub struct GenerateCursor<T, F> {
    generator: F,
    length: Option<usize>,
    next: usize,
    item: Option<T>,
}

impl<T, F> GenerateCursor<T, F>
where
    F: Fn(usize) -> T,
{
    pub(crate) fn new(generator: F, length: Option<usize>) -> Self {
        GenerateCursor { generator, length, next: 0, item: None }
    }
}

impl<T, F> Cursor for GenerateCursor<T, F>
where
    T: Clone,
    F: Fn(usize) -> T,
{
    type Item = T;

    fn advance(&mut self) -> bool {
        if let Some(limit) = self.length {
            if self.next >= limit {
                self.item = None;
                return false;
            }
        }
        self.item = Some((self.generator)(self.next));
        self.next += 1;
        true
    }

    fn get(&self) -> Option<T> {
        self.item.clone()
    }
}

/// A cursor that skips the inner cursor's elements a predicate rejects.
pub struct FilterCursor<C, P> {
    inner: C,
    predicate: P,
}

impl<C, P> FilterCursor<C, P> {
    /// Wraps `inner`, keeping only elements accepted by `predicate`.
    pub fn new(inner: C, predicate: P) -> Self {
        FilterCursor { inner, predicate }
    }
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn advance(&mut self) -> bool {
        while self.inner.advance() {
            if let Some(item) = self.inner.get() {
                if (self.predicate)(&item) {
                    return true;
                }
            }
        }
        false
    }

    fn get(&self) -> Option<C::Item> {
        self.inner.get()
    }
}

/// A cursor over the characters of a string.
pub struct CharCursor {
    chars: Vec<char>,
    next: usize,
}

impl CharCursor {
    /// A cursor positioned before the first character of `text`.
    pub fn new(text: &str) -> Self {
        CharCursor { chars: text.chars().collect(), next: 0 }
    }
}

impl Cursor for CharCursor {
    type Item = char;

    fn advance(&mut self) -> bool {
        if self.next < self.chars.len() {
            self.next += 1;
            true
        } else {
            // park one past the end so `get` stays empty
            self.next = self.chars.len() + 1;
            false
        }
    }

    fn get(&self) -> Option<char> {
        self.next.checked_sub(1).and_then(|position| self.chars.get(position)).copied()
    }
}

/// A cursor over successive non-overlapping matches of a pattern.
pub struct MatchCursor {
    text: String,
    pattern: regex::Regex,
    position: usize,
    item: Option<String>,
}

impl MatchCursor {
    /// A cursor positioned before the first match of `pattern` in `text`.
    pub fn new(text: String, pattern: regex::Regex) -> Self {
        MatchCursor { text, pattern, position: 0, item: None }
    }
}

impl Cursor for MatchCursor {
    type Item = String;

    fn advance(&mut self) -> bool {
        if self.position > self.text.len() {
            self.item = None;
            return false;
        }
        match self.pattern.find_at(&self.text, self.position) {
            Some(found) => {
                self.item = Some(found.as_str().to_owned());
                // an empty match must still move the scan forward
                self.position = if found.end() > self.position {
                    found.end()
                } else {
                    past_char(&self.text, found.end())
                };
                true
            }
            None => {
                self.item = None;
                self.position = self.text.len() + 1;
                false
            }
        }
    }

    fn get(&self) -> Option<String> {
        self.item.clone()
    }
}

/// The byte offset just past the character at `at`, or past the end.
fn past_char(text: &str, at: usize) -> usize {
    match text[at..].chars().next() {
        Some(character) => at + character.len_utf8(),
        None => text.len() + 1,
    }
}

/// A cursor over the segments of a string between pattern matches.
///
/// After the last match one final segment is produced, possibly empty, and
/// only then does `advance` report exhaustion.
pub struct PatternSplitCursor {
    text: String,
    pattern: regex::Regex,
    position: usize,
    finished: bool,
    item: Option<String>,
}

impl PatternSplitCursor {
    /// A cursor positioned before the first segment of `text`.
    pub fn new(text: String, pattern: regex::Regex) -> Self {
        PatternSplitCursor { text, pattern, position: 0, finished: false, item: None }
    }
}

impl Cursor for PatternSplitCursor {
    type Item = String;

    fn advance(&mut self) -> bool {
        if self.finished {
            self.item = None;
            return false;
        }
        match self.pattern.find_at(&self.text, self.position) {
            // an empty match would never advance the split point; treat it
            // as the end of useful delimiters
            Some(found) if found.end() > found.start() => {
                self.item = Some(self.text[self.position..found.start()].to_owned());
                self.position = found.end();
                true
            }
            _ => {
                self.item = Some(self.text[self.position..].to_owned());
                self.finished = true;
                true
            }
        }
    }

    fn get(&self) -> Option<String> {
        self.item.clone()
    }
}

/// A cursor over the segments of a string between delimiter occurrences.
///
/// Tracks the left edge of the next segment; when no further delimiter is
/// found it emits one final segment through the end of the source, which may
/// be empty, and reports exhaustion on the call after that.
pub struct StringSplitCursor {
    text: String,
    delimiter: String,
    start: usize,
    finished: bool,
    item: Option<String>,
}

impl StringSplitCursor {
    /// A cursor positioned before the first segment of `text`.
    ///
    /// # Panics
    ///
    /// Panics on an empty delimiter; empty delimiters mean character
    /// iteration, which [`CharCursor`] provides.
    pub fn new(text: String, delimiter: String) -> Self {
        assert!(!delimiter.is_empty(), "string split requires a non-empty delimiter");
        StringSplitCursor { text, delimiter, start: 0, finished: false, item: None }
    }
}

impl Cursor for StringSplitCursor {
    type Item = String;

    fn advance(&mut self) -> bool {
        if self.finished {
            self.item = None;
            return false;
        }
        match self.text[self.start..].find(&self.delimiter) {
            Some(offset) => {
                let end = self.start + offset;
                self.item = Some(self.text[self.start..end].to_owned());
                self.start = end + self.delimiter.len();
                true
            }
            None => {
                self.item = Some(self.text[self.start..].to_owned());
                self.finished = true;
                true
            }
        }
    }

    fn get(&self) -> Option<String> {
        self.item.clone()
    }
}
