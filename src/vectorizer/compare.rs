use num::Num;

/// Row comparison operations used by the scorer.
pub trait Compare<N>
where
    N: Num + Copy,
{
    /// dot product
    /// d(a, b) = Σ(a_i * b_i)
    fn dot(a: &[N], b: &[N]) -> f64;

    /// cosine similarity
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    ///
    /// Returns 0.0 when either vector has zero norm, since the angle is
    /// undefined for a zero vector. For rows already scaled to unit
    /// length this is the plain dot product.
    fn cosine_similarity(a: &[N], b: &[N]) -> f64;
}

pub struct DefaultCompare;

impl Compare<f64> for DefaultCompare {
    fn dot(a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len(), "rows must share the vector space");
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
        let norm_a = Self::dot(a, a);
        let norm_b = Self::dot(b, b);
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        Self::dot(a, b) / (norm_a * norm_b).sqrt()
    }
}

impl Compare<f32> for DefaultCompare {
    fn dot(a: &[f32], b: &[f32]) -> f64 {
        debug_assert_eq!(a.len(), b.len(), "rows must share the vector space");
        a.iter().zip(b).map(|(x, y)| *x as f64 * *y as f64).sum()
    }

    fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
        let norm_a = Self::dot(a, a);
        let norm_b = Self::dot(b, b);
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        Self::dot(a, b) / (norm_a * norm_b).sqrt()
    }
}
