use std::borrow::Cow;

use crate::{Automaton, Label, ROOT};

/// The character [`Automaton::mask`] writes over matched text.
pub const DEFAULT_MASK: char = '*';

impl<L: Label> Automaton<L> {
    /// Walks child edges from the root along `haystack[start..]` and returns
    /// the end of the first pattern boundary reached, or `None` if the walk
    /// falls off the trie first.
    ///
    /// Suffix links are not consulted: the first boundary wins, even when a
    /// longer pattern shares its prefix.
    #[inline]
    fn first_boundary(&self, haystack: &[L], start: usize) -> Option<usize> {
        let mut current = ROOT;
        for (offset, &label) in haystack[start..].iter().enumerate() {
            current = self.nodes[current as usize].child(self.code_map.get(label))?;
            if self.nodes[current as usize].pattern_id().is_some() {
                return Some(start + offset + 1);
            }
        }
        None
    }

    /// Overwrites matched spans of `haystack` with `mask` and returns how many
    /// spans were masked.
    ///
    /// Scanning moves left to right. From each start position the trie is
    /// walked until the first pattern boundary; the span up to it is masked
    /// and scanning resumes right after it. A start position that reaches no
    /// boundary is skipped.
    pub fn mask_labels(&self, haystack: &mut [L], mask: L) -> usize {
        let mut spans = 0;
        let mut i = 0;
        while i < haystack.len() {
            match self.first_boundary(haystack, i) {
                Some(end) => {
                    haystack[i..end].fill(mask);
                    spans += 1;
                    i = end;
                }
                None => i += 1,
            }
        }
        spans
    }

    /// Copies `haystack`, replacing each matched span with `substitution`.
    ///
    /// Spans are chosen exactly as in [`mask_labels`](Self::mask_labels); all
    /// other labels are copied through unchanged.
    pub fn replace_labels(&self, haystack: &[L], substitution: &[L]) -> Vec<L> {
        let mut out = Vec::with_capacity(haystack.len());
        let mut i = 0;
        while i < haystack.len() {
            match self.first_boundary(haystack, i) {
                Some(end) => {
                    out.extend_from_slice(substitution);
                    i = end;
                }
                None => {
                    out.push(haystack[i]);
                    i += 1;
                }
            }
        }
        out
    }
}

impl Automaton<char> {
    /// Masks matched spans of `text` with [`DEFAULT_MASK`].
    /// See [`mask_with`](Self::mask_with).
    pub fn mask<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.mask_with(text, DEFAULT_MASK)
    }

    /// Masks matched spans of `text` codepoint by codepoint with `mask`.
    ///
    /// The result has as many codepoints as `text`. When nothing matches,
    /// `text` itself is returned as [`Cow::Borrowed`].
    pub fn mask_with<'a>(&self, text: &'a str, mask: char) -> Cow<'a, str> {
        let mut chars: Vec<char> = text.chars().collect();
        if self.mask_labels(&mut chars, mask) == 0 {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(chars.into_iter().collect())
        }
    }

    /// Returns a new string with every matched span of `text` replaced by
    /// `substitution`.
    pub fn replace(&self, text: &str, substitution: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let substitution: Vec<char> = substitution.chars().collect();
        self.replace_labels(&chars, &substitution)
            .into_iter()
            .collect()
    }
}
