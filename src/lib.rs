//! A char-wise Aho-Corasick automaton for finding and redacting dictionary words.
//!
//! This crate provides [`Automaton`], a trie with suffix (fail) links built from
//! a dictionary of forbidden words. It supports:
//!
//! - overlapping multi-pattern search ([`Automaton::scan`]), reporting every
//!   dictionary entry found in a text, including entries that are suffixes of
//!   longer matches
//! - in-place masking ([`Automaton::mask`]), overwriting each matched span with
//!   a mask character
//! - token replacement ([`Automaton::replace`]), substituting each matched span
//!   with a caller-supplied string
//!
//! The automaton is generic over [`Label`] (`char` or `u8`); the `&str`
//! conveniences decode by Unicode codepoint.
//!
//! # Quick start
//!
//! ```
//! use wordguard::Automaton;
//!
//! let ac = Automaton::from_patterns(["he", "she", "his", "hers"]).unwrap();
//! assert_eq!(ac.scan("ushers"), vec![1, 0, 3]);
//!
//! let ac = Automaton::from_patterns(["ga"]).unwrap();
//! assert_eq!(ac.replace("666ga.ga", "**"), "666**.**");
//! assert_eq!(ac.mask("galaxy"), "**laxy");
//! ```

#![warn(missing_docs)]

mod build;
mod code_map;
pub mod config;
pub mod dictionary;
pub mod filter;
mod label;
mod node;
mod redact;
mod search;

use std::marker::PhantomData;

pub use build::{Builder, DuplicateId};
pub use code_map::CodeMapper;
pub use config::{ConfigError, FilterConfig};
pub use dictionary::{Dictionary, DictionaryError};
pub use filter::{Filter, FilterError};
pub use label::Label;
pub use node::{Node, NodeId, ROOT};
pub use redact::DEFAULT_MASK;
pub use search::OverlapMatch;

/// Errors that can occur while building an automaton.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A pattern has no labels.
    #[error("pattern {index} is empty")]
    EmptyPattern {
        /// Position of the offending pattern in the input.
        index: usize,
    },
    /// The trie needs more nodes than a [`NodeId`] can address.
    #[error("automaton exceeds {} nodes", u32::MAX)]
    TooManyNodes,
    /// The dictionary holds more patterns than a pattern id can address.
    #[error("dictionary exceeds {} patterns", u32::MAX)]
    TooManyPatterns,
}

/// An Aho-Corasick automaton over labels of type `L`.
///
/// Nodes live in an arena indexed by [`NodeId`]; index 0 is the root. Children
/// and suffix links are stored as ids, so the structure holds no references
/// into itself. Once built, an automaton is never mutated: every search takes
/// `&self`, keeps its bookkeeping on the stack, and may run concurrently with
/// other searches on the same instance.
#[derive(Clone, Debug)]
pub struct Automaton<L: Label> {
    pub(crate) nodes: Vec<Node>,
    pub(crate) code_map: CodeMapper,
    pub(crate) pattern_count: u32,
    _phantom: PhantomData<L>,
}

impl<L: Label> Automaton<L> {
    /// Creates an automaton with no patterns. Every search on it comes back
    /// empty and every redaction returns its input unchanged.
    pub fn new() -> Self {
        Self::from_parts(vec![Node::default()], CodeMapper::default(), 0)
    }

    pub(crate) fn from_parts(nodes: Vec<Node>, code_map: CodeMapper, pattern_count: u32) -> Self {
        Self {
            nodes,
            code_map,
            pattern_count,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of nodes in the trie, root included.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of insertions performed at build time, duplicates
    /// included. Pattern ids range over `0..pattern_count()`.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count as usize
    }

    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.nodes[ROOT as usize]
    }

    /// Returns the node with the given id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id as usize)
    }

    /// Returns the label-to-code mapping used by this automaton.
    pub fn code_map(&self) -> &CodeMapper {
        &self.code_map
    }

    /// Follows `key` from the root along child edges only.
    /// Returns the node reached, or `None` if `key` is not a trie prefix.
    pub fn walk(&self, key: &[L]) -> Option<NodeId> {
        key.iter().try_fold(ROOT, |node, &label| {
            self.nodes[node as usize].child(self.code_map.get(label))
        })
    }
}

impl<L: Label> Default for Automaton<L> {
    fn default() -> Self {
        Self::new()
    }
}
