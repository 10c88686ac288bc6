use crate::Label;

/// Maps labels to dense, frequency-ordered codes.
///
/// Code 0 is reserved for labels that occur in no pattern. Both the matcher
/// and the replacers check the code first: a zero code means no node in the
/// trie can have a child for that label, so the search can fall straight back
/// to the root without walking any child list.
#[derive(Clone, Debug)]
pub struct CodeMapper {
    /// label (as u32) → remapped code. 0 means unmapped.
    table: Vec<u32>,
    /// Number of distinct codes (including the unmapped code 0).
    alphabet_size: u32,
}

impl CodeMapper {
    /// Builds a CodeMapper from the given keys.
    ///
    /// Counts the frequency of each label across all keys and assigns
    /// dense codes in descending frequency order, so the labels that show up
    /// most often sit at the front of every node's child list.
    pub fn build<L: Label>(keys: &[impl AsRef<[L]>]) -> Self {
        let max_label = keys
            .iter()
            .flat_map(|key| key.as_ref().iter())
            .map(|&label| <L as Into<u32>>::into(label))
            .max();

        let Some(max_label) = max_label else {
            return Self::default();
        };

        // Direct frequency counting, sized to the largest label seen and never
        // past the label type's own alphabet.
        debug_assert!(max_label < L::ALPHABET_SIZE, "label {max_label} out of range");
        let table_size = (max_label as usize + 1).min(L::ALPHABET_SIZE as usize);
        let mut freq = vec![0u64; table_size];
        for key in keys {
            for &label in key.as_ref() {
                freq[<L as Into<u32>>::into(label) as usize] += 1;
            }
        }

        let mut labels: Vec<(u32, u64)> = freq
            .iter()
            .enumerate()
            .filter(|(_, &f)| f > 0)
            .map(|(i, &f)| (i as u32, f))
            .collect();

        // Sort by frequency descending, then by label ascending for stability
        labels.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        let mut table = vec![0u32; table_size];
        for (i, &(label, _)) in labels.iter().enumerate() {
            table[label as usize] = i as u32 + 1;
        }

        Self {
            table,
            alphabet_size: labels.len() as u32 + 1,
        }
    }

    /// Returns the code for a label. Returns 0 if the label is unmapped.
    #[inline]
    pub fn get<L: Label>(&self, label: L) -> u32 {
        let v: u32 = label.into();
        self.table.get(v as usize).copied().unwrap_or(0)
    }

    /// The number of distinct codes including the unmapped code.
    #[inline]
    pub fn alphabet_size(&self) -> u32 {
        self.alphabet_size
    }
}

impl Default for CodeMapper {
    /// A mapper with no labels: every lookup yields the unmapped code.
    fn default() -> Self {
        Self {
            table: vec![],
            alphabet_size: 1,
        }
    }
}
