//! Entity resolution — fuzzy matching of phone-name mentions against the
//! catalog, tolerant of spelling and formatting variance.

pub mod resolver;
pub mod types;

pub use resolver::EntityResolver;
pub use types::ResolvedMatch;
