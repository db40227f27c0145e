use std::str::FromStr;

use anyhow::anyhow;
use rand::{
  Rng, SeedableRng,
  rngs::StdRng,
  seq::{SliceRandom, index},
};
use tracing::debug;

use crate::{AppError, ErrorKind};

const BIND_LEFT: &str = "__bind_left__";
const BIND_RIGHT: &str = "__bind_right__";

/// How [`VectorModel::bind`] combines two vectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BindOperation {
  /// Sum of the two operands, each under its own permutation
  #[default]
  Addition,
  /// Circular convolution of the permuted operands
  Convolution,
}

impl FromStr for BindOperation {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "addition" => Ok(Self::Addition),
      "convolution" => Ok(Self::Convolution),
      other => Err(AppError::with_kind(
        ErrorKind::InvalidArgument,
        anyhow!("unknown bind operation: {other}"),
      )),
    }
  }
}

/// Generates and combines high-dimensional sparse ternary vectors.
///
/// Every vector has `dim` components. Fresh vectors from [`sparse`](Self::sparse)
/// hold exactly [`nonzero_count`](Self::nonzero_count) entries of `+1.0` or
/// `-1.0`, the rest zero. Labels are fixed permutations derived from the
/// model seed, so two models with the same seed label identically.
#[derive(Debug, Clone)]
pub struct VectorModel {
  dim: usize,
  nonzero: f64,
  bind_operation: BindOperation,
  seed: u64,
}

impl VectorModel {
  /// `nonzero` is the fraction of components set in each sparse vector.
  pub fn new(dim: usize, nonzero: f64, bind_operation: BindOperation) -> Result<Self, AppError> {
    Self::with_seed(dim, nonzero, bind_operation, rand::random())
  }

  pub fn with_seed(
    dim: usize,
    nonzero: f64,
    bind_operation: BindOperation,
    seed: u64,
  ) -> Result<Self, AppError> {
    if dim == 0 {
      return Err(invalid(anyhow!("dimension must be positive")));
    }
    if !(nonzero > 0.0 && nonzero <= 1.0) {
      return Err(invalid(anyhow!(
        "nonzero fraction must be in (0, 1], got {nonzero}"
      )));
    }

    let model = Self {
      dim,
      nonzero,
      bind_operation,
      seed,
    };
    if model.nonzero_count() == 0 {
      return Err(invalid(anyhow!(
        "{dim} * {nonzero} leaves no nonzero components"
      )));
    }

    Ok(model)
  }

  #[must_use]
  pub const fn dim(&self) -> usize {
    self.dim
  }

  #[must_use]
  pub const fn nonzero(&self) -> f64 {
    self.nonzero
  }

  #[must_use]
  pub const fn bind_operation(&self) -> BindOperation {
    self.bind_operation
  }

  /// Number of nonzero components in every fresh sparse vector.
  #[must_use]
  #[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
  )]
  pub fn nonzero_count(&self) -> usize {
    (self.dim as f64 * self.nonzero).round() as usize
  }

  #[must_use]
  pub fn zeros(&self) -> Vec<f64> {
    vec![0.0; self.dim]
  }

  /// A random sparse vector with random signs at random positions.
  pub fn sparse<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
    let mut vec = self.zeros();
    let positions = index::sample(rng, self.dim, self.nonzero_count());
    for i in positions.into_iter() {
      vec[i] = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    }
    vec
  }

  /// Permute `vec` by the fixed permutation belonging to `edge`.
  ///
  /// The same edge always gives the same permutation, and different edges
  /// give (almost surely) unrelated ones, so labeled copies of one vector
  /// are close to orthogonal.
  pub fn label(&self, vec: &[f64], edge: &str) -> Result<Vec<f64>, AppError> {
    self.check_dim(vec)?;

    let mut labeled = self.zeros();
    for (&target, &x) in self.permutation(edge).iter().zip(vec) {
      labeled[target] = x;
    }
    Ok(labeled)
  }

  /// Combine two vectors into one that resembles neither.
  ///
  /// The operands are labeled with distinct permutations first, so the
  /// result depends on argument order.
  pub fn bind(&self, a: &[f64], b: &[f64]) -> Result<Vec<f64>, AppError> {
    let left = self.label(a, BIND_LEFT)?;
    let right = self.label(b, BIND_RIGHT)?;

    Ok(match self.bind_operation {
      BindOperation::Addition => left.iter().zip(&right).map(|(x, y)| x + y).collect(),
      BindOperation::Convolution => circular_convolution(&left, &right),
    })
  }

  fn permutation(&self, edge: &str) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(self.seed ^ label_hash(edge));
    let mut perm: Vec<usize> = (0..self.dim).collect();
    perm.shuffle(&mut rng);
    perm
  }

  fn check_dim(&self, vec: &[f64]) -> Result<(), AppError> {
    if vec.len() == self.dim {
      return Ok(());
    }
    debug!(expected = self.dim, got = vec.len(), "rejecting vector of wrong dimension");
    Err(invalid(anyhow!(
      "vector has dimension {}, model expects {}",
      vec.len(),
      self.dim
    )))
  }
}

fn invalid(err: anyhow::Error) -> AppError {
  AppError::with_kind(ErrorKind::InvalidArgument, err)
}

/// FNV-1a, stable across builds unlike `DefaultHasher`.
fn label_hash(label: &str) -> u64 {
  label.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
    (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
  })
}

/// Skips zero components of `a`, which is most of them for sparse input.
#[allow(clippy::float_cmp)]
fn circular_convolution(a: &[f64], b: &[f64]) -> Vec<f64> {
  let n = a.len();
  let mut out = vec![0.0; n];
  for (i, &x) in a.iter().enumerate() {
    if x == 0.0 {
      continue;
    }
    for (j, &y) in b.iter().enumerate() {
      out[(i + j) % n] += x * y;
    }
  }
  out
}
