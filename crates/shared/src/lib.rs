mod error;
pub use error::{AppError, ErrorKind};

pub mod neighbors;
pub use neighbors::{count_common_neighbors, neighbor_multiplicities, neighbors};

pub mod similarity;
pub use similarity::{cosine, dot, normalize, sum_of_squares, try_cosine};

mod vector_model;
pub use vector_model::{BindOperation, VectorModel};
