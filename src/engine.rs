use crate::error::{Result, SimilarityError};
use crate::scorer;
use crate::vectorizer::analyzer::Analyzer;
use crate::vectorizer::Vectorizer;

/// SimilarityEngine struct
/// Facade tying the vectorizer and the scorer into the one operation the
/// service layer calls. Every call is a fresh, self-contained computation
/// over exactly the texts supplied; the engine holds configuration only,
/// so concurrent calls cannot interfere.
#[derive(Debug, Clone, Default)]
pub struct SimilarityEngine {
    vectorizer: Vectorizer<f64>,
}

impl SimilarityEngine {
    /// Create an engine with the default analyzer
    pub fn new() -> Self {
        SimilarityEngine {
            vectorizer: Vectorizer::new(),
        }
    }

    /// Create an engine with a custom analyzer
    ///
    /// # Arguments
    /// * `analyzer` - tokenizer configuration (e.g. stop terms)
    pub fn with_analyzer(analyzer: Analyzer) -> Self {
        SimilarityEngine {
            vectorizer: Vectorizer::with_analyzer(analyzer),
        }
    }

    /// Score a query document against a comparison set.
    ///
    /// The explicit form: the query is a named parameter instead of an
    /// implicit position in the batch.
    ///
    /// # Arguments
    /// * `query` - the newly submitted document
    /// * `corpus` - comparison documents, order preserved in the result
    ///
    /// # Returns
    /// * `Vec<f64>` - one score per corpus entry, each in [0, 1],
    ///   rounded to 4 decimals
    ///
    /// Fails with [`SimilarityError::InvalidInput`] when the corpus is
    /// empty.
    pub fn score<T>(&self, query: &str, corpus: &[T]) -> Result<Vec<f64>>
    where
        T: AsRef<str> + Sync,
    {
        if corpus.is_empty() {
            return Err(SimilarityError::invalid_input(
                "need at least one comparison text",
            ));
        }
        let mut texts: Vec<&str> = corpus.iter().map(|t| t.as_ref()).collect();
        texts.push(query);
        self.score_texts(&texts)
    }

    /// Score an ordered batch where the last element is the query.
    ///
    /// This is the positional convention of the wire protocol: all texts
    /// arrive in one batch and the newest document comes last.
    ///
    /// # Arguments
    /// * `texts` - at least two texts; the last one is the query
    ///
    /// # Returns
    /// * `Vec<f64>` - `texts.len() - 1` scores in input order
    pub fn score_texts<T>(&self, texts: &[T]) -> Result<Vec<f64>>
    where
        T: AsRef<str> + Sync,
    {
        let matrix = self.vectorizer.fit_transform(texts)?;
        Ok(scorer::score_matrix(&matrix))
    }
}
