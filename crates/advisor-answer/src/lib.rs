//! Answer composition — renders retrieval results into natural language,
//! via an external generation backend when configured, deterministic
//! templates otherwise.

pub mod backend;
pub mod compose;
pub mod templates;

pub use backend::{GenerateBackend, RemoteBackend};
pub use compose::AnswerComposer;
