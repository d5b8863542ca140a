//! Query understanding — criteria extraction and intent classification.

pub mod criteria;
pub mod intent;
pub mod types;

pub use criteria::extract_criteria;
pub use intent::classify;
pub use types::{Criteria, QueryIntent, QueryKind};
