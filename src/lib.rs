//! Neighbor-overlap counting, cosine similarity and a sparse vector model.
//!
//! The logic lives in `numila_shared`; this crate re-exports it and owns
//! tracing setup.

pub use numila_shared::{
  AppError, BindOperation, ErrorKind, VectorModel, count_common_neighbors, cosine, dot,
  neighbor_multiplicities, neighbors, normalize, sum_of_squares, try_cosine,
};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// Reads `RUST_LOG` (a `.env` file is loaded first if present) and falls
/// back to debug output for this workspace. Later calls are no-ops.
pub fn init_tracing() {
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("{}=debug,numila_shared=debug", env!("CARGO_CRATE_NAME")).into()
      }),
    )
    .with(tracing_subscriber::fmt::layer())
    .try_init()
    .ok();
}
