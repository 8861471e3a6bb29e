use log::debug;
use num::Num;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::math::round_to;
use crate::vectorizer::compare::{Compare, DefaultCompare};
use crate::vectorizer::TermWeightMatrix;

/// Number of decimal places kept on every emitted score.
pub const SCORE_DECIMALS: u32 = 4;

/// Score list in the shape the service layer emits.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ScoreReport {
    pub scores: Vec<f64>,
}

/// Score the last matrix row (the query document) against every preceding
/// row. Returns one score per comparison row, in the order those rows
/// appear in the matrix, each rounded to [`SCORE_DECIMALS`] places.
///
/// Rows are unit length by construction, so cosine similarity reduces to
/// a dot product; an all-zero row (a document that produced no terms)
/// scores 0.0 against everything.
///
/// # Panics
/// Panics when the matrix has fewer than two rows. The vectorizer
/// validates the input set, so reaching this point with a short matrix is
/// a bug in the calling sequence, not a user error.
pub fn score_matrix<N>(matrix: &TermWeightMatrix<N>) -> Vec<f64>
where
    N: Num + Copy + Send + Sync,
    DefaultCompare: Compare<N>,
{
    assert!(
        matrix.row_num() >= 2,
        "term-weight matrix must hold the query row plus at least one comparison row, got {} rows",
        matrix.row_num()
    );

    let query = matrix.row(matrix.row_num() - 1);
    let comparison_num = matrix.row_num() - 1;
    debug!(
        "scoring query row against {} comparison rows ({} columns)",
        comparison_num, matrix.vocab_size
    );

    (0..comparison_num)
        .into_par_iter()
        .map(|i| {
            let cos = DefaultCompare::cosine_similarity(matrix.row(i), query);
            round_to(cos, SCORE_DECIMALS)
        })
        .collect()
}
