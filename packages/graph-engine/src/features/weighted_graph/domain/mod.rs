//! Weighted graph domain: cost matrix and computed path table

mod cost_matrix;
mod path_table;

pub use cost_matrix::{Cost, CostMatrix};
pub use path_table::{Distance, PathEntry, PathTable};
