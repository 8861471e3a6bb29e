pub mod analyzer;
pub mod compare;
pub mod corpus;
pub mod term;
pub mod tfidf;

use std::marker::PhantomData;

use log::debug;
use num::Num;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimilarityError};
use crate::vectorizer::analyzer::Analyzer;
use crate::vectorizer::corpus::Corpus;
use crate::vectorizer::term::TermFrequency;
use crate::vectorizer::tfidf::{DefaultTfIdfEngine, TfIdfEngine};

/// Dense term-weight matrix for one invocation.
/// Rows are documents in input order, columns are the vocabulary terms of
/// this invocation. Every row is unit-normalized TF-IDF weights, except
/// that a document with no terms after analysis keeps an all-zero row.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TermWeightMatrix<N>
where
    N: Num + Copy,
{
    /// unit-normalized TF-IDF rows, one per document
    pub rows: Vec<Vec<N>>,
    /// number of vocabulary columns
    pub vocab_size: usize,
}

impl<N> TermWeightMatrix<N>
where
    N: Num + Copy,
{
    /// Number of document rows
    #[inline]
    pub fn row_num(&self) -> usize {
        self.rows.len()
    }

    /// Get one row
    #[inline]
    pub fn row(&self, index: usize) -> &[N] {
        &self.rows[index]
    }
}

/// Vectorizer struct
/// Converts an ordered batch of raw texts into a [`TermWeightMatrix`].
///
/// `Vectorizer<N, E>` has the following generic parameters:
/// - `N`: weight type (`f32` or `f64` with the default engine)
/// - `E`: TF-IDF calculation engine type (e.g. [`DefaultTfIdfEngine`])
///
/// The vectorizer holds no per-call state: vocabulary and matrix are
/// rebuilt from scratch on every `fit_transform`, so concurrent calls
/// never interfere.
#[derive(Debug, Clone)]
pub struct Vectorizer<N = f64, E = DefaultTfIdfEngine>
where
    N: Num + Copy + Send + Sync,
    E: TfIdfEngine<N> + Send + Sync,
{
    analyzer: Analyzer,
    _marker: PhantomData<(N, E)>,
}

impl<N, E> Default for Vectorizer<N, E>
where
    N: Num + Copy + Send + Sync,
    E: TfIdfEngine<N> + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> Vectorizer<N, E>
where
    N: Num + Copy + Send + Sync,
    E: TfIdfEngine<N> + Send + Sync,
{
    /// Create a new Vectorizer with the default analyzer
    pub fn new() -> Self {
        Self::with_analyzer(Analyzer::new())
    }

    /// Create a new Vectorizer with a custom analyzer
    ///
    /// # Arguments
    /// * `analyzer` - tokenizer configuration (e.g. stop terms)
    pub fn with_analyzer(analyzer: Analyzer) -> Self {
        Vectorizer {
            analyzer,
            _marker: PhantomData,
        }
    }

    /// Build the term-weight matrix for an ordered batch of texts.
    /// One row per input text, same order as the input.
    ///
    /// # Arguments
    /// * `texts` - the document set; at least two entries
    ///
    /// # Returns
    /// * `TermWeightMatrix<N>` - unit-normalized TF-IDF rows
    ///
    /// Fails with [`SimilarityError::InvalidInput`] when fewer than two
    /// texts are supplied; no computation is performed in that case.
    pub fn fit_transform<T>(&self, texts: &[T]) -> Result<TermWeightMatrix<N>>
    where
        T: AsRef<str> + Sync,
    {
        if texts.len() < 2 {
            return Err(SimilarityError::invalid_input(format!(
                "need at least two texts for comparison, got {}",
                texts.len()
            )));
        }

        let freqs: Vec<TermFrequency> = texts
            .par_iter()
            .map(|text| TermFrequency::from(self.analyzer.analyze(text.as_ref()).as_slice()))
            .collect();

        let mut corpus = Corpus::new();
        for freq in &freqs {
            corpus.add_doc(freq);
        }
        debug!(
            "vectorizing {} documents over {} vocabulary terms",
            corpus.doc_num(),
            corpus.vocab_size()
        );

        let rows: Vec<Vec<N>> = freqs
            .par_iter()
            .map(|freq| E::weigh_row(freq, &corpus))
            .collect();

        Ok(TermWeightMatrix {
            rows,
            vocab_size: corpus.vocab_size(),
        })
    }
}
