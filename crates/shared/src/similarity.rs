use anyhow::anyhow;
use tracing::{debug, trace};

use crate::{AppError, ErrorKind};

/// Dot product of two vectors.
///
/// # Panics
///
/// If the vectors differ in length.
#[must_use]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
  assert_eq!(a.len(), b.len(), "vector dimensions must match");
  a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[must_use]
pub fn sum_of_squares(v: &[f64]) -> f64 {
  v.iter().map(|x| x * x).sum()
}

/// Compute cosine similarity between two vectors.
///
/// Returns a value in [-1.0, 1.0] where 1.0 means identical direction.
/// If either vector is exactly all-zero the result is 0.0. Vectors that are
/// merely close to zero still go through the full formula.
///
/// The norms are combined as `(sum_sq_a * sum_sq_b)^-0.5` without rescaling,
/// so the product can leave the `f64` range: vectors with components around
/// `1e-160` give `inf`, and around `1e200` give `NaN`.
///
/// # Panics
///
/// If the vectors differ in length; see [`try_cosine`] for a checked variant.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
  assert_eq!(a.len(), b.len(), "vector dimensions must match");

  let sum_sq_a = sum_of_squares(a);
  let sum_sq_b = sum_of_squares(b);
  if sum_sq_a == 0.0 || sum_sq_b == 0.0 {
    trace!("cosine of a zero vector, falling back to 0.0");
    return 0.0;
  }

  dot(a, b) * (sum_sq_a * sum_sq_b).powf(-0.5)
}

/// Like [`cosine`], but rejects vectors of different dimension.
pub fn try_cosine(a: &[f64], b: &[f64]) -> Result<f64, AppError> {
  if a.len() != b.len() {
    debug!(left = a.len(), right = b.len(), "rejecting cosine of mismatched vectors");
    return Err(AppError::with_kind(
      ErrorKind::InvalidArgument,
      anyhow!("vector dimensions differ: {} vs {}", a.len(), b.len()),
    ));
  }

  Ok(cosine(a, b))
}

/// Scale a vector to unit length. The zero vector is returned as is.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn normalize(v: &[f64]) -> Vec<f64> {
  let sum_sq = sum_of_squares(v);
  if sum_sq == 0.0 {
    trace!("normalize of a zero vector, returning it unchanged");
    return v.to_vec();
  }

  let inv_norm = sum_sq.powf(-0.5);
  v.iter().map(|x| x * inv_norm).collect()
}

#[cfg(test)]
mod tests {
  use approx::{assert_abs_diff_eq, assert_relative_eq};

  use super::*;

  #[test]
  fn dot_and_sum_of_squares() {
    assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, -5.0, 6.0]), 12.0);
    assert_eq!(sum_of_squares(&[3.0, 4.0]), 25.0);
    assert_eq!(sum_of_squares(&[]), 0.0);
  }

  #[test]
  fn cosine_of_self_is_one() {
    for v in [vec![1.0, 2.0, 3.0], vec![-0.5, 0.25], vec![7.0]] {
      assert_relative_eq!(cosine(&v, &v), 1.0, epsilon = 1e-12);
    }
  }

  #[test]
  fn cosine_is_symmetric() {
    let a = [0.3, -1.2, 4.0, 2.5];
    let b = [1.1, 0.0, -2.0, 0.7];
    assert_eq!(cosine(&a, &b), cosine(&b, &a));
  }

  #[test]
  fn cosine_orthogonal_and_opposite() {
    assert_eq!(cosine(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    assert_eq!(cosine(&[1.0, 0.0], &[-1.0, 0.0]), -1.0);
  }

  #[test]
  fn cosine_known_angle() {
    // 45 degrees
    assert_relative_eq!(
      cosine(&[1.0, 0.0], &[1.0, 1.0]),
      std::f64::consts::FRAC_1_SQRT_2,
      epsilon = 1e-12
    );
  }

  #[test]
  fn cosine_zero_vector_falls_back() {
    assert_eq!(cosine(&[0.0, 0.0, 0.0], &[1.0, 2.0, 3.0]), 0.0);
    assert_eq!(cosine(&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0]), 0.0);
    assert_eq!(cosine(&[], &[]), 0.0);
  }

  #[test]
  fn cosine_near_zero_is_not_a_fallback() {
    let tiny = [1e-100, 0.0];
    assert_relative_eq!(cosine(&tiny, &[1.0, 0.0]), 1.0, epsilon = 1e-12);
  }

  #[test]
  #[should_panic(expected = "vector dimensions must match")]
  fn cosine_panics_on_mismatched_dimensions() {
    let _ = cosine(&[1.0, 0.0], &[1.0, 0.0, 5.0]);
  }

  #[test]
  #[should_panic(expected = "vector dimensions must match")]
  fn dot_panics_on_mismatched_dimensions() {
    let _ = dot(&[1.0], &[1.0, 2.0]);
  }

  #[test]
  fn cosine_leaves_f64_range_for_extreme_magnitudes() {
    assert!(cosine(&[1e-160], &[1e-160]).is_infinite());
    assert!(cosine(&[1e200], &[1e200]).is_nan());
  }

  #[test]
  fn try_cosine_rejects_mismatched_dimensions() {
    let err = try_cosine(&[1.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(err.to_string().contains("2 vs 3"));
  }

  #[test]
  fn try_cosine_matches_cosine() {
    let a = [2.0, -1.0, 0.5];
    let b = [0.5, 3.0, 1.0];
    assert_eq!(try_cosine(&a, &b).unwrap(), cosine(&a, &b));
    assert_eq!(try_cosine(&[0.0], &[5.0]).unwrap(), 0.0);
  }

  #[test]
  fn normalize_gives_unit_length() {
    let n = normalize(&[3.0, 4.0]);
    assert_abs_diff_eq!(n[0], 0.6, epsilon = 1e-12);
    assert_abs_diff_eq!(n[1], 0.8, epsilon = 1e-12);
    assert_relative_eq!(sum_of_squares(&n), 1.0, epsilon = 1e-12);
  }

  #[test]
  fn normalize_keeps_zero_vector() {
    assert_eq!(normalize(&[0.0, 0.0]), vec![0.0, 0.0]);
    assert!(normalize(&[]).is_empty());
  }
}
