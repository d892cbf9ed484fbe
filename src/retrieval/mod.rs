//! Chunk indexing and similarity retrieval

pub mod store;

pub use store::IndexStore;
