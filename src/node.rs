/// Index of a node in an automaton's node arena. The root is always 0.
pub type NodeId = u32;

/// The root node's id.
pub const ROOT: NodeId = 0;

/// A node in the trie, representing one prefix state of the automaton.
///
/// - `children`: `(code, child)` pairs sorted by code, where `code` comes from
///   the automaton's [`CodeMapper`](crate::CodeMapper)
/// - `suffix_link`: node of the longest proper suffix that is also a trie
///   prefix. Unused on the root, which links to itself.
/// - `weight`: number of insertions ending exactly here
/// - `pattern_id`: dictionary index recorded for those insertions
/// - `depth`: length of the prefix this node spells
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    children: Vec<(u32, NodeId)>,
    suffix_link: NodeId,
    weight: u32,
    pattern_id: Option<u32>,
    depth: u32,
}

impl Node {
    pub(crate) fn with_depth(depth: u32) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    /// Returns the child reached under `code`, if any.
    #[inline]
    pub fn child(&self, code: u32) -> Option<NodeId> {
        if code == 0 {
            return None;
        }
        self.children
            .binary_search_by_key(&code, |&(c, _)| c)
            .ok()
            .map(|i| self.children[i].1)
    }

    /// Returns the `(code, child)` pairs of this node, sorted by code.
    #[inline]
    pub fn children(&self) -> &[(u32, NodeId)] {
        &self.children
    }

    /// Returns the suffix (fail) link.
    #[inline]
    pub fn suffix_link(&self) -> NodeId {
        self.suffix_link
    }

    /// Returns how many insertions terminate at this node.
    #[inline]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Returns the pattern id stored here, or `None` if this node is not a
    /// pattern boundary.
    #[inline]
    pub fn pattern_id(&self) -> Option<u32> {
        self.pattern_id
    }

    /// Returns true if at least one pattern ends at this node.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.weight > 0
    }

    /// Returns the length (in labels) of the prefix this node spells.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Registers `child` under `code`, replacing any existing edge.
    pub(crate) fn insert_child(&mut self, code: u32, child: NodeId) {
        debug_assert!(code != 0, "code 0 is reserved for unmapped labels");
        match self.children.binary_search_by_key(&code, |&(c, _)| c) {
            Ok(i) => self.children[i].1 = child,
            Err(i) => self.children.insert(i, (code, child)),
        }
    }

    #[inline]
    pub(crate) fn set_suffix_link(&mut self, link: NodeId) {
        self.suffix_link = link;
    }

    /// Records one more insertion ending here.
    ///
    /// `keep_first` leaves an existing pattern id untouched instead of
    /// overwriting it with `pattern_id`.
    #[inline]
    pub(crate) fn add_terminal(&mut self, pattern_id: u32, keep_first: bool) {
        self.weight += 1;
        if !(keep_first && self.pattern_id.is_some()) {
            self.pattern_id = Some(pattern_id);
        }
    }
}
