use crate::{Automaton, Label, Node, NodeId, ROOT};

/// A pattern boundary reported by [`Automaton::overlapping_matches`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlapMatch {
    /// The pattern id stored at the terminal node.
    pub pattern_id: u32,
    /// Position just past the last label of the match.
    pub end: usize,
    /// Length of the match (in labels).
    pub len: usize,
    /// Number of dictionary entries ending at this node.
    pub weight: u32,
}

impl OverlapMatch {
    /// Position of the first label of the match.
    #[inline]
    pub fn start(&self) -> usize {
        self.end - self.len
    }
}

impl<L: Label> Automaton<L> {
    /// Returns the state reached from `current` on `code`, following suffix
    /// links until some state has a child for it or the root is reached.
    #[inline]
    fn next_state(&self, mut current: NodeId, code: u32) -> NodeId {
        // Unmapped labels appear in no pattern; nothing can continue past them.
        if code == 0 {
            return ROOT;
        }
        loop {
            if let Some(next) = self.nodes[current as usize].child(code) {
                return next;
            }
            if current == ROOT {
                return ROOT;
            }
            current = self.nodes[current as usize].suffix_link();
        }
    }

    /// Drives the overlapping scan, calling `on_match(end, pattern_id, node)`
    /// the first time each pattern id is seen.
    ///
    /// Terminal nodes are reported in ascending end position; at equal end
    /// positions the longest match comes first, since suffix links only
    /// shorten.
    fn scan_overlapping<I, F>(&self, haystack: I, mut on_match: F)
    where
        I: IntoIterator<Item = L>,
        F: FnMut(usize, u32, &Node),
    {
        let mut visited = vec![false; self.pattern_count as usize];
        let mut current = ROOT;

        for (pos, label) in haystack.into_iter().enumerate() {
            current = self.next_state(current, self.code_map.get(label));

            // Walk the whole suffix chain: a visited or non-terminal node may
            // still link to an unvisited terminal.
            let mut p = current;
            while p != ROOT {
                let node = &self.nodes[p as usize];
                if let Some(id) = node.pattern_id() {
                    let seen = &mut visited[id as usize];
                    if node.is_terminal() && !*seen {
                        *seen = true;
                        on_match(pos + 1, id, node);
                    }
                }
                p = node.suffix_link();
            }
        }
    }

    /// Finds every dictionary entry occurring in `haystack`, overlaps included.
    ///
    /// Each pattern id is reported at most once per call, repeated `weight`
    /// times, in order of where it first ends. Ids ending at the same position
    /// are listed longest match first.
    pub fn find_overlapping<I>(&self, haystack: I) -> Vec<u32>
    where
        I: IntoIterator<Item = L>,
    {
        let mut ids = Vec::new();
        self.scan_overlapping(haystack, |_, id, node| {
            ids.extend(std::iter::repeat_n(id, node.weight() as usize));
        });
        ids
    }

    /// Returns `find_overlapping(haystack).len()` without building the list.
    pub fn count_overlapping<I>(&self, haystack: I) -> usize
    where
        I: IntoIterator<Item = L>,
    {
        let mut count = 0;
        self.scan_overlapping(haystack, |_, _, node| count += node.weight() as usize);
        count
    }

    /// Like [`find_overlapping`](Self::find_overlapping), but yields one
    /// [`OverlapMatch`] per terminal node with its position in `haystack`.
    pub fn overlapping_matches<I>(&self, haystack: I) -> Vec<OverlapMatch>
    where
        I: IntoIterator<Item = L>,
    {
        let mut matches = Vec::new();
        self.scan_overlapping(haystack, |end, pattern_id, node| {
            matches.push(OverlapMatch {
                pattern_id,
                end,
                len: node.depth() as usize,
                weight: node.weight(),
            });
        });
        matches
    }
}

impl Automaton<char> {
    /// Finds every dictionary entry in `text`, decoded by codepoint.
    /// See [`find_overlapping`](Self::find_overlapping).
    pub fn scan(&self, text: &str) -> Vec<u32> {
        self.find_overlapping(text.chars())
    }

    /// Returns `scan(text).len()` without building the list.
    pub fn match_count(&self, text: &str) -> usize {
        self.count_overlapping(text.chars())
    }
}
