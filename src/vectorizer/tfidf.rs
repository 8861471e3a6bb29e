use num::Num;

use crate::vectorizer::{corpus::Corpus, term::TermFrequency};

/// TF-IDF calculation engine trait.
/// Implementing this trait plugs a different weighting strategy into the
/// vectorizer. The default engine performs smoothed textbook TF-IDF and is
/// provided for `f32` and `f64` weights.
pub trait TfIdfEngine<N>
where
    N: Num + Copy,
{
    /// Smoothed inverse document frequency for one term.
    ///
    /// # Arguments
    /// * `doc_num` - number of documents in this invocation
    /// * `doc_freq` - number of documents containing the term
    ///
    /// # Returns
    /// * `N` - ln((1 + doc_num) / (1 + doc_freq)) + 1
    ///
    /// The +1 terms keep the quotient finite and positive when a term
    /// appears in every document of the batch.
    fn idf(doc_num: u64, doc_freq: u64) -> N;

    /// Build one document's weighted row over the corpus columns.
    /// The row is scaled to unit Euclidean length; a document with no
    /// terms stays an all-zero row.
    ///
    /// # Arguments
    /// * `freq` - the document's term counts
    /// * `corpus` - vocabulary and document frequencies for this invocation
    ///
    /// # Returns
    /// * `Vec<N>` - dense row, one cell per vocabulary column
    fn weigh_row(freq: &TermFrequency, corpus: &Corpus) -> Vec<N>;
}

/// Default TF-IDF engine
/// weight(d, t) = count(t in d) * (ln((1 + N) / (1 + df(t))) + 1),
/// rows unit-normalized afterwards.
#[derive(Debug, Clone, Default)]
pub struct DefaultTfIdfEngine;

impl DefaultTfIdfEngine {
    pub fn new() -> Self {
        DefaultTfIdfEngine
    }
}

impl TfIdfEngine<f64> for DefaultTfIdfEngine {
    fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
    }

    fn weigh_row(freq: &TermFrequency, corpus: &Corpus) -> Vec<f64> {
        let mut row = vec![0.0f64; corpus.vocab_size()];
        let doc_num = corpus.doc_num();
        for (term, count) in freq.iter() {
            if let Some(index) = corpus.term_index(term) {
                let idf: f64 = Self::idf(doc_num, corpus.doc_frequency(index));
                row[index] = count as f64 * idf;
            }
        }
        let norm = row.iter().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for w in &mut row {
                *w /= norm;
            }
        }
        row
    }
}

impl TfIdfEngine<f32> for DefaultTfIdfEngine {
    fn idf(doc_num: u64, doc_freq: u64) -> f32 {
        (((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0) as f32
    }

    fn weigh_row(freq: &TermFrequency, corpus: &Corpus) -> Vec<f32> {
        let mut row = vec![0.0f32; corpus.vocab_size()];
        let doc_num = corpus.doc_num();
        for (term, count) in freq.iter() {
            if let Some(index) = corpus.term_index(term) {
                let idf: f32 = Self::idf(doc_num, corpus.doc_frequency(index));
                row[index] = count as f32 * idf;
            }
        }
        let norm = row.iter().map(|w| w * w).sum::<f32>().sqrt();
        if norm > 0.0 {
            for w in &mut row {
                *w /= norm;
            }
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothed_idf_value() {
        // 2 documents, term in 1 of them: ln(3/2) + 1
        let idf: f64 = <DefaultTfIdfEngine as TfIdfEngine<f64>>::idf(2, 1);
        assert!((idf - (1.5f64.ln() + 1.0)).abs() < 1e-12);
        // a term in every document bottoms out at 1.0, never 0 or negative
        let idf_all: f64 = <DefaultTfIdfEngine as TfIdfEngine<f64>>::idf(3, 3);
        assert!((idf_all - 1.0).abs() < 1e-12);
    }

    #[test]
    fn row_has_unit_norm() {
        let mut corpus = Corpus::new();
        let a = TermFrequency::from(["cat", "sat", "cat"].as_slice());
        let b = TermFrequency::from(["dog"].as_slice());
        corpus.add_doc(&a);
        corpus.add_doc(&b);

        let row: Vec<f64> = DefaultTfIdfEngine::weigh_row(&a, &corpus);
        assert_eq!(row.len(), corpus.vocab_size());
        let norm: f64 = row.iter().map(|w| w * w).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_document_stays_zero_row() {
        let mut corpus = Corpus::new();
        corpus.add_doc(&TermFrequency::from(["apple", "banana"].as_slice()));
        corpus.add_doc(&TermFrequency::new());

        let row: Vec<f64> = DefaultTfIdfEngine::weigh_row(&TermFrequency::new(), &corpus);
        assert!(row.iter().all(|&w| w == 0.0));
    }

    #[test]
    fn rarer_terms_weigh_more() {
        let mut corpus = Corpus::new();
        let a = TermFrequency::from(["shared", "rare"].as_slice());
        let b = TermFrequency::from(["shared"].as_slice());
        corpus.add_doc(&a);
        corpus.add_doc(&b);

        let row: Vec<f64> = DefaultTfIdfEngine::weigh_row(&a, &corpus);
        let shared = corpus.term_index("shared").unwrap();
        let rare = corpus.term_index("rare").unwrap();
        assert!(row[rare] > row[shared]);
    }
}
