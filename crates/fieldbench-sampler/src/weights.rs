//! Rank-based weight assignment for skewed value distributions.

use crate::error::SamplerError;

/// Fixed weights for the three hottest ranks when the cardinality allows it.
const HEAD_WEIGHTS: [f64; 3] = [0.3, 0.2, 0.1];

/// Probability mass shared by ranks 4..K.
const TAIL_MASS: f64 = 0.4;

/// Geometric decay ratio within the tail.
const TAIL_RATIO: f64 = 0.85;

/// Compute the per-rank probabilities for a value set of cardinality `k`.
///
/// The distribution is top-heavy: a few hot ranks capture most of the mass,
/// mimicking skewed real-world value populations such as status codes or
/// country codes.
///
/// - `k == 1`: `[1.0]`
/// - `k == 2`: `[0.3, 0.7]`
/// - `k == 3`: `[0.3, 0.2, 0.5]`
/// - `k >= 4`: ranks 1..3 get `0.3, 0.2, 0.1`; the remaining `0.4` is spread
///   over ranks 4..K by geometric decay with ratio `0.85`, normalized within
///   the tail.
///
/// The returned vector always sums to 1.0 within floating-point tolerance.
pub fn rank_weights(k: usize) -> Result<Vec<f64>, SamplerError> {
    match k {
        0 => Err(SamplerError::InvalidCardinality),
        1 => Ok(vec![1.0]),
        2 => Ok(vec![0.3, 0.7]),
        3 => Ok(vec![0.3, 0.2, 0.5]),
        _ => {
            let mut weights = Vec::with_capacity(k);
            weights.extend_from_slice(&HEAD_WEIGHTS);

            let tail_len = k - HEAD_WEIGHTS.len();
            let raw: Vec<f64> = (0..tail_len).map(|i| TAIL_RATIO.powi(i as i32)).collect();
            let raw_sum: f64 = raw.iter().sum();
            weights.extend(raw.iter().map(|w| TAIL_MASS * (w / raw_sum)));

            Ok(weights)
        }
    }
}
