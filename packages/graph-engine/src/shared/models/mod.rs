//! Shared models

mod vertex;

pub use vertex::{Label, VertexId};
