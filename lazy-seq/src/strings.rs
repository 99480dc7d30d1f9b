//! The string specialization: character sequences with pattern support.
//!
//! A [`StringSequence`] is an indexable sequence of characters that keeps
//! its backing text, which is what pattern matching and splitting work on.
//! The pattern operators hold a compiled [`regex::Regex`]; the regex
//! engine's scanner carries no mutable state, so a caller's pattern is
//! cloned cheaply and never mutated.

use regex::Regex;

use crate::cursor::{CharCursor, Cursor, MatchCursor, PatternSplitCursor, StringSplitCursor};
use crate::indexed::Indexed;
use crate::sequence::{Sequence, Step};

/// A sequence over the characters of a string.
pub struct StringSequence {
    text: String,
    chars: Vec<char>,
}

impl StringSequence {
    /// Wraps a string.
    pub fn new(text: String) -> Self {
        let chars = text.chars().collect();
        StringSequence { text, chars }
    }

    /// The backing text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The character at `index`, or `None` past the end.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// A pull cursor over the characters.
    pub fn char_cursor(&self) -> CharCursor {
        CharCursor::new(&self.text)
    }

    /// The successive non-overlapping matches of `pattern`, as substrings.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_seq::{lazy, Sequence};
    ///
    /// let pattern = regex::Regex::new(r"\d+").unwrap();
    /// let digits = lazy("a1b22c333").match_pattern(&pattern).to_vec();
    /// assert_eq!(digits, vec!["1", "22", "333"]);
    /// ```
    pub fn match_pattern(&self, pattern: &Regex) -> Matches {
        Matches { text: self.text.clone(), pattern: pattern.clone() }
    }

    /// The segments of the text between occurrences of `delimiter`,
    /// including the final segment after the last occurrence, which may be
    /// empty. An empty delimiter yields the individual characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_seq::{lazy, Sequence};
    ///
    /// assert_eq!(lazy("hello world").split(" ").to_vec(), vec!["hello", "world"]);
    /// ```
    pub fn split(&self, delimiter: &str) -> SplitString {
        SplitString { text: self.text.clone(), delimiter: delimiter.to_owned() }
    }

    /// The segments of the text between matches of `pattern`, then the
    /// final segment. A pattern that only matches the empty string yields
    /// the individual characters.
    pub fn split_pattern(&self, pattern: &Regex) -> SplitPattern {
        SplitPattern { text: self.text.clone(), pattern: pattern.clone() }
    }
}

impl Sequence for StringSequence {
    type Item = char;

    fn each<F>(&self, mut visitor: F) -> Step
    where
        F: FnMut(char, usize) -> Step,
    {
        for (index, &character) in self.chars.iter().enumerate() {
            if visitor(character, index).is_stop() {
                return Step::Stop;
            }
        }
        Step::Continue
    }
}

impl Indexed for StringSequence {
    fn length(&self) -> usize {
        self.chars.len()
    }

    fn get(&self, index: usize) -> Option<char> {
        self.char_at(index)
    }
}

/// Drives a string cursor as a sequence, renumbering from zero.
fn each_pulled<C, F>(mut cursor: C, visitor: &mut F) -> Step
where
    C: Cursor<Item = String>,
    F: FnMut(String, usize) -> Step,
{
    let mut index = 0;
    while cursor.advance() {
        if visitor(cursor.current(), index).is_stop() {
            return Step::Stop;
        }
        index += 1;
    }
    Step::Continue
}

/// The successive matches of a pattern against a string.
pub struct Matches {
    text: String,
    pattern: Regex,
}

impl Sequence for Matches {
    type Item = String;

    fn each<F>(&self, mut visitor: F) -> Step
    where
        F: FnMut(String, usize) -> Step,
    {
        each_pulled(MatchCursor::new(self.text.clone(), self.pattern.clone()), &mut visitor)
    }
}

/// The segments of a string split on a literal delimiter.
pub struct SplitString {
    text: String,
    delimiter: String,
}

impl Sequence for SplitString {
    type Item = String;

    fn each<F>(&self, mut visitor: F) -> Step
    where
        F: FnMut(String, usize) -> Step,
    {
        if self.delimiter.is_empty() {
            for (index, character) in self.text.chars().enumerate() {
                if visitor(character.to_string(), index).is_stop() {
                    return Step::Stop;
                }
            }
            return Step::Continue;
        }
        each_pulled(
            StringSplitCursor::new(self.text.clone(), self.delimiter.clone()),
            &mut visitor,
        )
    }
}

/// The segments of a string split on a pattern.
pub struct SplitPattern {
    text: String,
    pattern: Regex,
}

impl Sequence for SplitPattern {
    type Item = String;

    fn each<F>(&self, mut visitor: F) -> Step
    where
        F: FnMut(String, usize) -> Step,
    {
        if self.pattern.as_str().is_empty() {
            for (index, character) in self.text.chars().enumerate() {
                if visitor(character.to_string(), index).is_stop() {
                    return Step::Stop;
                }
            }
            return Step::Continue;
        }
        each_pulled(
            PatternSplitCursor::new(self.text.clone(), self.pattern.clone()),
            &mut visitor,
        )
    }
}
