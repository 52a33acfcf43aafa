//! Adjacency graph domain

mod vertex;

pub use vertex::AdjacencyVertex;
