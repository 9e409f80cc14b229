//! Scope stack and candidate key generation.
//!
//! A scope stack prefixes message keys with the active naming scopes. With
//! `["outer", "inner"]` pushed, the leaf key `msg` is looked up as
//! `outer.inner.msg`, then `outer.msg`, then `msg`.
//!
//! Each push precomputes the dotted prefix for its depth, so candidate
//! generation walks the stack once without re-joining segments.

use std::iter::{FusedIterator, Rev};
use std::slice::Iter;

/// An ordered, strictly nested stack of scope segments.
///
/// Segments are opaque: a segment containing dots (`"b.c.d"`) is kept verbatim
/// and never re-split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeStack {
    segments: Vec<String>,
    /// `prebuilt[i]` is `segments[0..=i]` joined with `.`.
    prebuilt: Vec<String>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a segment, extending the innermost prefix.
    pub fn push(&mut self, segment: impl Into<String>) {
        let segment = segment.into();
        let prefix = match self.prebuilt.last() {
            Some(last) => format!("{}.{}", last, segment),
            None => segment.clone(),
        };
        self.segments.push(segment);
        self.prebuilt.push(prefix);
    }

    /// Pop the most recently pushed segment.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty. Every pop must pair with a prior push.
    pub fn pop(&mut self) -> String {
        self.prebuilt.pop();
        match self.segments.pop() {
            Some(segment) => segment,
            None => panic!("ScopeStack::pop called on an empty scope stack"),
        }
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The dotted path of the whole stack (`"ab.cd"`), empty for an empty stack.
    pub fn path(&self) -> &str {
        self.prebuilt.last().map(String::as_str).unwrap_or("")
    }

    /// Candidate keys for `leaf`, most specific first, bare `leaf` last.
    ///
    /// The returned iterator borrows the stack and never mutates it; calling
    /// `candidates` again restarts the sequence.
    pub fn candidates<'a>(&'a self, leaf: &'a str) -> Candidates<'a> {
        Candidates {
            prefixes: self.prebuilt.iter().rev(),
            leaf,
            leaf_done: false,
        }
    }

    /// The most specific candidate for `leaf`.
    pub fn first(&self, leaf: &str) -> String {
        match self.prebuilt.last() {
            Some(prefix) => format!("{}.{}", prefix, leaf),
            None => leaf.to_string(),
        }
    }
}

/// Iterator over candidate keys, see [`ScopeStack::candidates`].
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    prefixes: Rev<Iter<'a, String>>,
    leaf: &'a str,
    leaf_done: bool,
}

impl Iterator for Candidates<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if let Some(prefix) = self.prefixes.next() {
            return Some(format!("{}.{}", prefix, self.leaf));
        }
        if self.leaf_done {
            return None;
        }
        self.leaf_done = true;
        Some(self.leaf.to_string())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.prefixes.len() + usize::from(!self.leaf_done);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Candidates<'_> {}

impl FusedIterator for Candidates<'_> {}
