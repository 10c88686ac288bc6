//! A ready-to-use word filter: one automaton plus its redaction settings.
//!
//! Callers build a [`Filter`] once at startup and pass it (or an `Arc` of it)
//! to whatever needs it. Every method takes `&self`.

use std::borrow::Cow;

use crate::{
    Automaton, BuildError, Builder, ConfigError, Dictionary, DictionaryError, FilterConfig,
    DEFAULT_MASK,
};

/// Error constructing a [`Filter`].
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// Loading the configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Loading the dictionary failed.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// Building the automaton failed.
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// A dictionary compiled into an automaton, with its substitution token and
/// mask character.
#[derive(Clone, Debug)]
pub struct Filter {
    dictionary: Dictionary,
    automaton: Automaton<char>,
    replacement: String,
    mask: char,
}

impl Filter {
    /// Builds a filter over `dictionary` that replaces matches with
    /// `replacement` and masks with [`DEFAULT_MASK`].
    pub fn new(
        dictionary: Dictionary,
        builder: &Builder,
        replacement: impl Into<String>,
    ) -> Result<Self, BuildError> {
        let automaton = dictionary.build_with(builder)?;
        Ok(Self {
            dictionary,
            automaton,
            replacement: replacement.into(),
            mask: DEFAULT_MASK,
        })
    }

    /// Sets the mask character.
    pub fn with_mask(mut self, mask: char) -> Self {
        self.mask = mask;
        self
    }

    /// Builds a filter from configuration, loading the configured dictionary.
    /// Without a dictionary the filter matches nothing.
    pub fn from_config(config: &FilterConfig) -> Result<Self, FilterError> {
        let dictionary = match &config.dictionary {
            Some(path) => Dictionary::load(path)?,
            None => {
                tracing::warn!("no dictionary configured, filter will match nothing");
                Dictionary::default()
            }
        };
        let builder = Builder::new().duplicate_id(config.duplicate_id);
        let filter = Self::new(dictionary, &builder, config.replacement.clone())?;

        tracing::debug!(
            patterns = filter.dictionary.len(),
            nodes = filter.automaton.num_nodes(),
            "filter ready"
        );
        Ok(filter.with_mask(config.mask))
    }

    /// Replaces every matched span of `text` with the substitution token.
    pub fn filter_text(&self, text: &str) -> String {
        self.automaton.replace(text, &self.replacement)
    }

    /// Masks every matched span of `text` with the mask character.
    pub fn mask<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.automaton.mask_with(text, self.mask)
    }

    /// Returns the ids of all dictionary entries in `text`, overlaps included.
    /// See [`Automaton::find_overlapping`].
    pub fn find_matches(&self, text: &str) -> Vec<u32> {
        self.automaton.scan(text)
    }

    /// Returns `find_matches(text).len()`.
    pub fn match_count(&self, text: &str) -> usize {
        self.automaton.match_count(text)
    }

    /// Returns true if any dictionary entry occurs in `text`.
    pub fn contains_match(&self, text: &str) -> bool {
        self.match_count(text) > 0
    }

    /// Returns the dictionary entry for a pattern id.
    pub fn pattern(&self, id: u32) -> Option<&str> {
        self.dictionary.get(id)
    }

    /// Returns the underlying automaton.
    pub fn automaton(&self) -> &Automaton<char> {
        &self.automaton
    }

    /// Returns the substitution token.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Returns the mask character.
    pub fn mask_char(&self) -> char {
        self.mask
    }
}
