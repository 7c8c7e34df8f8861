use lingvec_common::{LingvecError, Result};
use ndarray::{Array1, ArrayView1};

use crate::types::RankedMatch;

/// Cosine similarity of two vectors of equal length.
///
/// Returns 0 when either vector has zero magnitude. The result is
/// accumulated in f64 and clamped to [-1, 1]. NaN or infinite
/// components are rejected as invalid input.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(LingvecError::dimension_mismatch(a.len(), b.len()));
    }

    if !a.iter().chain(b).all(|x| x.is_finite()) {
        return Err(LingvecError::invalid_input(
            "Embedding components must be finite numbers",
        ));
    }

    let a = widen(a);
    let b = widen(b);

    let dot = a.dot(&b);
    let norm_a = a.dot(&a).sqrt();
    let norm_b = b.dot(&b).sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok((dot / (norm_a * norm_b)).clamp(-1.0, 1.0) as f32)
}

/// Score every candidate against `query`, best first.
///
/// Ties keep input order. Any candidate of the wrong length fails the
/// whole call.
pub fn rank(query: &[f32], candidates: &[Vec<f32>], top_k: Option<usize>) -> Result<Vec<RankedMatch>> {
    let mut results = candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| {
            cosine_similarity(query, candidate).map(|score| RankedMatch { index, score })
        })
        .collect::<Result<Vec<_>>>()?;

    results.sort_by(|a, b| b.score.total_cmp(&a.score));

    if let Some(k) = top_k {
        results.truncate(k);
    }

    Ok(results)
}

fn widen(v: &[f32]) -> Array1<f64> {
    ArrayView1::from(v).mapv(f64::from)
}
