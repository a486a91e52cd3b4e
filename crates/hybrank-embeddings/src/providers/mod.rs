//! Embedding providers shipped with the crate.

pub mod hashing;

pub use hashing::HashingEmbedder;
