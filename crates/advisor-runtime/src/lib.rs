//! Runtime — the `Advisor` pipeline tying resolution, understanding,
//! retrieval, and answer composition together.

pub mod advisor;

pub use advisor::Advisor;
