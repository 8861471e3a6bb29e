use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::vectorizer::term::TermFrequency;

/// Corpus struct
/// Keeps the per-invocation document count and document frequencies.
///
/// The corpus doubles as the vocabulary: terms are assigned column indices
/// in order of first appearance, so the column layout is reproducible for
/// identical input order and content. It is built fresh for every scoring
/// call and dropped with it; nothing survives between calls.
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct Corpus {
    /// term -> column index, insertion ordered
    #[serde(with = "indexmap::map::serde_seq")]
    vocabulary: IndexMap<String, usize>,
    /// number of documents containing the term at each column
    doc_frequency: Vec<u64>,
    /// number of documents added so far
    doc_num: u64,
}

impl Corpus {
    /// Create a new empty Corpus
    pub fn new() -> Self {
        Self {
            vocabulary: IndexMap::new(),
            doc_frequency: Vec::new(),
            doc_num: 0,
        }
    }

    /// Add one document's terms to the corpus.
    /// Every distinct term counts once toward its document frequency.
    ///
    /// # Arguments
    /// * `freq` - the document's term counts
    pub fn add_doc(&mut self, freq: &TermFrequency) {
        self.doc_num += 1;
        for term in freq.term_set() {
            let next_index = self.vocabulary.len();
            let index = *self
                .vocabulary
                .entry(term.to_string())
                .or_insert(next_index);
            if index == self.doc_frequency.len() {
                self.doc_frequency.push(0);
            }
            self.doc_frequency[index] += 1;
        }
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Get the column index of a term, if it is in the vocabulary
    #[inline]
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Get the document frequency for the term at a column
    #[inline]
    pub fn doc_frequency(&self, index: usize) -> u64 {
        self.doc_frequency.get(index).copied().unwrap_or(0)
    }

    /// Iterate over the vocabulary terms in column order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.vocabulary.keys().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq_of(terms: &[&str]) -> TermFrequency {
        TermFrequency::from(terms)
    }

    #[test]
    fn tracks_document_frequency() {
        let mut corpus = Corpus::new();
        corpus.add_doc(&freq_of(&["the", "cat", "the"]));
        corpus.add_doc(&freq_of(&["the", "dog"]));

        assert_eq!(corpus.doc_num(), 2);
        assert_eq!(corpus.vocab_size(), 3);
        // "the" appears in both documents, once each for df purposes
        let the = corpus.term_index("the").unwrap();
        assert_eq!(corpus.doc_frequency(the), 2);
        let cat = corpus.term_index("cat").unwrap();
        assert_eq!(corpus.doc_frequency(cat), 1);
        assert_eq!(corpus.term_index("bird"), None);
    }

    #[test]
    fn empty_document_only_bumps_doc_num() {
        let mut corpus = Corpus::new();
        corpus.add_doc(&TermFrequency::new());
        assert_eq!(corpus.doc_num(), 1);
        assert_eq!(corpus.vocab_size(), 0);
    }
}
