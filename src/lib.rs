/// This crate is a document similarity scoring engine using a TF-IDF vectorizer.
pub mod engine;
pub mod error;
pub mod scorer;
pub mod utils;
pub mod vectorizer;

/// Similarity Engine
/// The top-level struct of this crate, tying the vectorizer and the scorer
/// into the single operation a duplicate-detection service calls.
///
/// Two entry points are provided:
/// - `score(query, corpus)`: the query document is an explicit, named
///   parameter (preferred)
/// - `score_texts(texts)`: the positional wire convention where the last
///   element of the batch is the query
///
/// Both return one score per comparison document, in input order, each in
/// [0, 1] and rounded to 4 decimal places. Every call builds its
/// vocabulary and matrix from scratch; nothing survives between calls.
pub use engine::SimilarityEngine;

/// TF-IDF Vectorizer
/// Converts an ordered batch of raw texts into a dense term-weight matrix:
/// one unit-normalized TF-IDF row per document over a vocabulary derived
/// from the whole batch.
///
/// `Vectorizer<N, E>` has the following generic parameters:
/// - `N`: weight type (`f32` or `f64` with the default engine)
/// - `E`: TF-IDF calculation engine type (e.g. `DefaultTfIdfEngine`)
pub use vectorizer::Vectorizer;

/// Term-weight matrix
/// Rows are documents in input order, columns are this invocation's
/// vocabulary terms. A document with no terms after analysis keeps an
/// all-zero row and scores 0.0 against everything.
pub use vectorizer::TermWeightMatrix;

/// TF-IDF Calculation Engine Trait
/// Implementing this trait plugs a different weighting strategy into the
/// vectorizer. `DefaultTfIdfEngine` performs smoothed textbook TF-IDF:
/// weight = count * (ln((1 + N) / (1 + df)) + 1), rows unit-normalized.
pub use vectorizer::tfidf::{DefaultTfIdfEngine, TfIdfEngine};

/// Term Frequency structure
/// Per-document term occurrence counts, preserving first-seen order so
/// vocabulary construction is reproducible.
pub use vectorizer::term::TermFrequency;

/// Analyzer
/// Tokenization: lowercase, split on non-alphanumeric boundaries, discard
/// empty tokens, optional stop-term filtering.
pub use vectorizer::analyzer::Analyzer;

/// Error type and Result alias for the scoring engine.
pub use error::{Result, SimilarityError};

/// Score report
/// The `{"scores": [...]}` shape the service layer emits.
pub use scorer::ScoreReport;
