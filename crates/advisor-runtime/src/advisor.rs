//! Advisor — coordinates the query-understanding and retrieval pipeline.
//!
//! Per request: snapshot the catalog, resolve mentions, extract criteria,
//! classify, retrieve, compose. Everything up to composition is pure and
//! synchronous; the single external call lives in the composer.

use std::sync::Arc;

use advisor_answer::{AnswerComposer, GenerateBackend, RemoteBackend};
use advisor_catalog::{CatalogIndex, CatalogSource};
use advisor_core::{AdvisorConfig, Result};
use advisor_query::{classify, extract_criteria, QueryIntent};
use advisor_resolve::EntityResolver;
use advisor_retrieve::{ResolvedResult, Retriever};
use tracing::{debug, info};

pub struct Advisor {
    config: AdvisorConfig,
    catalog: Arc<dyn CatalogSource>,
    backend: Option<Arc<dyn GenerateBackend>>,
}

impl Advisor {
    /// Create an advisor. The remote generation backend is enabled when
    /// the config carries an API key; otherwise answers come from the
    /// deterministic templates.
    pub fn new(config: AdvisorConfig, catalog: Arc<dyn CatalogSource>) -> Self {
        let backend = RemoteBackend::from_config(&config.generation)
            .map(|b| Arc::new(b) as Arc<dyn GenerateBackend>);
        info!(
            "Advisor initialized (generation backend: {})",
            if backend.is_some() { "remote" } else { "templates only" }
        );
        Self {
            config,
            catalog,
            backend,
        }
    }

    /// Replace the generation backend (tests, alternative providers).
    pub fn with_backend(mut self, backend: Arc<dyn GenerateBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Classify a question against a catalog snapshot.
    pub fn understand(&self, question: &str, snapshot: &CatalogIndex) -> QueryIntent {
        let matches = EntityResolver::resolve(question, snapshot, &self.config.resolver);
        let criteria = extract_criteria(question);
        classify(question, matches, criteria)
    }

    /// The deterministic half of the pipeline: question in, typed result
    /// out. Re-running against an unchanged catalog yields an identical
    /// result.
    pub fn retrieve(&self, question: &str) -> Result<ResolvedResult> {
        let snapshot = CatalogIndex::load(self.catalog.as_ref())?;
        debug!("Catalog snapshot holds {} records", snapshot.len());
        let intent = self.understand(question, &snapshot);
        Ok(Retriever::execute(&intent, &snapshot, &self.config.ranking))
    }

    /// Full pipeline: question in, answer text out. Dirty catalog data and
    /// generation failures degrade the answer, they never fail it.
    pub async fn ask(&self, question: &str) -> Result<String> {
        let snapshot = CatalogIndex::load(self.catalog.as_ref())?;
        debug!("Catalog snapshot holds {} records", snapshot.len());
        let intent = self.understand(question, &snapshot);
        let result = Retriever::execute(&intent, &snapshot, &self.config.ranking);
        let backend = self.backend.as_deref();
        Ok(AnswerComposer::compose(&result, question, &intent.criteria, backend).await)
    }
}
