use ahash::RandomState;
use std::collections::HashSet;

/// Analyzer struct
/// Turns raw text into the token stream the vectorizer counts.
///
/// Tokenization is deliberately simple: lowercase, split on every
/// non-alphanumeric boundary, drop empty tokens. No stemming, no language
/// detection. An optional stop-term set can be configured; scoring never
/// depends on it for correctness.
///
/// # Examples
/// ```
/// use doc_similarity::vectorizer::analyzer::Analyzer;
/// let analyzer = Analyzer::new();
/// let tokens = analyzer.analyze("The cat, the mat!");
/// assert_eq!(tokens, vec!["the", "cat", "the", "mat"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    stop_terms: HashSet<String, RandomState>,
}

impl Analyzer {
    /// Create a new Analyzer with no stop terms.
    pub fn new() -> Self {
        Analyzer {
            stop_terms: HashSet::with_hasher(RandomState::new()),
        }
    }

    /// Create an Analyzer that drops the given stop terms.
    /// Stop terms are matched after lowercasing.
    ///
    /// # Arguments
    /// * `terms` - terms to drop from every token stream
    pub fn with_stop_terms<I, T>(terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let stop_terms = terms
            .into_iter()
            .map(|t| t.as_ref().to_lowercase())
            .collect();
        Analyzer { stop_terms }
    }

    /// Tokenize a text.
    ///
    /// # Arguments
    /// * `text` - raw input text
    ///
    /// # Returns
    /// * `Vec<String>` - lowercased tokens in document order
    pub fn analyze(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(|t| t.to_lowercase())
            .filter(|t| !self.stop_terms.contains(t))
            .collect()
    }
}
