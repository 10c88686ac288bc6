use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{Automaton, BuildError, CodeMapper, Label, Node, NodeId, ROOT};

/// Which pattern id a node keeps when the same pattern is inserted twice.
///
/// Weight always accumulates; this only decides the id reported for it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateId {
    /// Keep the index of the first insertion.
    First,
    /// Overwrite with the index of the most recent insertion.
    #[default]
    Last,
}

/// Configures and builds an [`Automaton`].
#[derive(Clone, Debug, Default)]
pub struct Builder {
    duplicate_id: DuplicateId,
}

impl Builder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pattern id policy for duplicate insertions.
    pub fn duplicate_id(mut self, policy: DuplicateId) -> Self {
        self.duplicate_id = policy;
        self
    }

    /// Builds an automaton from keys in insertion order.
    ///
    /// Each key `keys[i]` is assigned pattern id `i`. Duplicate keys are legal
    /// and raise the weight of their terminal node.
    ///
    /// # Errors
    /// - [`BuildError::EmptyPattern`] if any key is empty.
    /// - [`BuildError::TooManyPatterns`] / [`BuildError::TooManyNodes`] if the
    ///   dictionary does not fit 32-bit ids.
    pub fn build<L: Label>(&self, keys: &[impl AsRef<[L]>]) -> Result<Automaton<L>, BuildError> {
        if let Some(index) = keys.iter().position(|k| k.as_ref().is_empty()) {
            return Err(BuildError::EmptyPattern { index });
        }
        let pattern_count = u32::try_from(keys.len()).map_err(|_| BuildError::TooManyPatterns)?;

        let code_map = CodeMapper::build::<L>(keys);
        let keep_first = self.duplicate_id == DuplicateId::First;
        let mut nodes = vec![Node::default()];

        for (pattern_id, key) in keys.iter().enumerate() {
            let mut current = ROOT;
            for &label in key.as_ref() {
                let code = code_map.get(label);
                current = match nodes[current as usize].child(code) {
                    Some(next) => next,
                    None => {
                        let next =
                            NodeId::try_from(nodes.len()).map_err(|_| BuildError::TooManyNodes)?;
                        let depth = nodes[current as usize].depth() + 1;
                        nodes.push(Node::with_depth(depth));
                        nodes[current as usize].insert_child(code, next);
                        next
                    }
                };
            }
            nodes[current as usize].add_terminal(pattern_id as u32, keep_first);
        }

        link_suffixes(&mut nodes);

        tracing::debug!(
            patterns = pattern_count,
            nodes = nodes.len(),
            labels = code_map.alphabet_size() - 1,
            "built automaton"
        );

        Ok(Automaton::from_parts(nodes, code_map, pattern_count))
    }

    /// Builds a `char` automaton from string patterns, decoding each one by
    /// Unicode codepoint.
    pub fn build_patterns<I, S>(&self, patterns: I) -> Result<Automaton<char>, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys: Vec<Vec<char>> = patterns
            .into_iter()
            .map(|p| p.as_ref().chars().collect())
            .collect();
        self.build(&keys)
    }
}

/// Assigns suffix links breadth-first, so every link is resolved from
/// shallower nodes whose own links are already final.
fn link_suffixes(nodes: &mut [Node]) {
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    for i in 0..nodes[ROOT as usize].children().len() {
        let (_, child) = nodes[ROOT as usize].children()[i];
        nodes[child as usize].set_suffix_link(ROOT);
        queue.push_back(child);
    }

    while let Some(parent) = queue.pop_front() {
        let parent_link = nodes[parent as usize].suffix_link();
        for i in 0..nodes[parent as usize].children().len() {
            let (code, child) = nodes[parent as usize].children()[i];
            let mut p = parent_link;
            let link = loop {
                if let Some(next) = nodes[p as usize].child(code) {
                    break next;
                }
                if p == ROOT {
                    break ROOT;
                }
                p = nodes[p as usize].suffix_link();
            };
            nodes[child as usize].set_suffix_link(link);
            queue.push_back(child);
        }
    }
}

impl<L: Label> Automaton<L> {
    /// Builds an automaton from keys with default settings.
    ///
    /// Each key `keys[i]` is assigned pattern id `i`. See [`Builder::build`].
    pub fn build(keys: &[impl AsRef<[L]>]) -> Result<Self, BuildError> {
        Builder::new().build(keys)
    }
}

impl Automaton<char> {
    /// Builds an automaton from string patterns with default settings.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Builder::new().build_patterns(patterns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn node_of(ac: &Automaton<char>, s: &str) -> NodeId {
        ac.walk(&chars(s)).unwrap()
    }

    fn link_of(ac: &Automaton<char>, s: &str) -> NodeId {
        ac.node(node_of(ac, s)).unwrap().suffix_link()
    }

    #[test]
    fn classic_dictionary_links() {
        let ac = Automaton::from_patterns(["he", "she", "his", "hers"]).unwrap();

        assert_eq!(link_of(&ac, "h"), ROOT);
        assert_eq!(link_of(&ac, "he"), ROOT);
        assert_eq!(link_of(&ac, "s"), ROOT);
        assert_eq!(link_of(&ac, "sh"), node_of(&ac, "h"));
        assert_eq!(link_of(&ac, "she"), node_of(&ac, "he"));
        assert_eq!(link_of(&ac, "his"), node_of(&ac, "s"));
        assert_eq!(link_of(&ac, "hers"), node_of(&ac, "s"));
        assert_eq!(link_of(&ac, "her"), ROOT);
    }

    #[test]
    fn links_only_shorten() {
        let ac = Automaton::from_patterns(["abcab", "bcabc", "cab", "ab", "b"]).unwrap();
        for id in 1..ac.num_nodes() as NodeId {
            let node = ac.node(id).unwrap();
            let link = ac.node(node.suffix_link()).unwrap();
            assert!(link.depth() < node.depth(), "node {id} links deeper");
        }
    }

    #[test]
    fn terminals_and_ids() {
        let ac = Automaton::from_patterns(["he", "she", "his", "hers"]).unwrap();
        assert_eq!(ac.pattern_count(), 4);
        // root + h, he, s, sh, she, hi, his, her, hers
        assert_eq!(ac.num_nodes(), 10);

        for (i, p) in ["he", "she", "his", "hers"].iter().enumerate() {
            let node = ac.node(node_of(&ac, p)).unwrap();
            assert_eq!(node.pattern_id(), Some(i as u32));
            assert_eq!(node.weight(), 1);
        }
        assert!(!ac.node(node_of(&ac, "her")).unwrap().is_terminal());
        assert_eq!(ac.node(node_of(&ac, "sh")).unwrap().pattern_id(), None);
    }

    #[test]
    fn duplicates_accumulate_weight() {
        let ac = Automaton::from_patterns(["cat", "dog", "cat"]).unwrap();
        let cat = ac.node(node_of(&ac, "cat")).unwrap();
        assert_eq!(cat.weight(), 2);
        assert_eq!(cat.pattern_id(), Some(2));
        assert_eq!(ac.pattern_count(), 3);
    }

    #[test]
    fn duplicates_keep_first_id() {
        let ac = Builder::new()
            .duplicate_id(DuplicateId::First)
            .build_patterns(["cat", "dog", "cat"])
            .unwrap();
        let cat = ac.node(node_of(&ac, "cat")).unwrap();
        assert_eq!(cat.weight(), 2);
        assert_eq!(cat.pattern_id(), Some(0));
    }

    #[test]
    fn empty_pattern_rejected() {
        let err = Automaton::from_patterns(["a", "", "b"]).unwrap_err();
        assert_eq!(err, BuildError::EmptyPattern { index: 1 });
    }

    #[test]
    fn empty_dictionary() {
        let ac = Automaton::from_patterns(Vec::<String>::new()).unwrap();
        assert_eq!(ac.num_nodes(), 1);
        assert_eq!(ac.pattern_count(), 0);
    }

    #[test]
    fn byte_keys() {
        let keys: Vec<&[u8]> = vec![b"ab", b"b"];
        let ac = Automaton::<u8>::build(&keys).unwrap();
        let ab = ac.walk(b"ab").unwrap();
        assert_eq!(ac.node(ab).unwrap().suffix_link(), ac.walk(b"b").unwrap());
    }

    #[test]
    fn multibyte_keys() {
        let ac = Automaton::from_patterns(["下来", "来了"]).unwrap();
        assert_eq!(link_of(&ac, "下来"), node_of(&ac, "来"));
        assert_eq!(ac.node(node_of(&ac, "来了")).unwrap().depth(), 2);
    }

    #[test]
    fn duplicate_id_parses_lowercase() {
        #[derive(Deserialize)]
        struct Wrap {
            policy: DuplicateId,
        }
        let w: Wrap = toml::from_str("policy = \"first\"").unwrap();
        assert_eq!(w.policy, DuplicateId::First);
    }
}
