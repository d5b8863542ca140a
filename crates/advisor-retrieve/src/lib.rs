//! Retrieval — executes classified queries against the catalog snapshot
//! and produces the typed result handed to answer rendering.

pub mod retrieve;
pub mod types;

pub use retrieve::Retriever;
pub use types::{RankedPhone, ResolvedResult};
