//! Catalog access — collaborator trait and per-request snapshot.

use std::collections::HashMap;

use advisor_core::Result;

use crate::types::PhoneRecord;

/// External catalog collaborator. Implementations sit in front of whatever
/// persistence the surrounding service uses; this crate only requires the
/// two read operations.
pub trait CatalogSource: Send + Sync {
    /// All records, in catalog insertion order.
    fn all(&self) -> Result<Vec<PhoneRecord>>;

    /// Exact lookup by model name (case-insensitive). Resolution of fuzzy
    /// mentions is the entity resolver's job, not this one.
    fn by_name(&self, model_name: &str) -> Result<Option<PhoneRecord>>;
}

/// Read-only snapshot of the catalog, built once per request. The source
/// may refresh between requests; a snapshot never observes that.
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    records: Vec<PhoneRecord>,
    by_name: HashMap<String, usize>,
}

impl CatalogIndex {
    /// Build a snapshot from a source.
    pub fn load(source: &dyn CatalogSource) -> Result<Self> {
        Ok(Self::from_records(source.all()?))
    }

    /// Build a snapshot directly from records, preserving their order.
    pub fn from_records(records: Vec<PhoneRecord>) -> Self {
        let by_name = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.model_name.to_lowercase(), i))
            .collect();
        Self { records, by_name }
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[PhoneRecord] {
        &self.records
    }

    /// Exact-match lookup, case-insensitive.
    pub fn by_name(&self, model_name: &str) -> Option<&PhoneRecord> {
        self.by_name
            .get(&model_name.to_lowercase())
            .map(|&i| &self.records[i])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// In-memory catalog source. The simplest collaborator; also the test
/// fixture.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    records: Vec<PhoneRecord>,
}

impl StaticCatalog {
    pub fn new(records: Vec<PhoneRecord>) -> Self {
        Self { records }
    }
}

impl CatalogSource for StaticCatalog {
    fn all(&self) -> Result<Vec<PhoneRecord>> {
        Ok(self.records.clone())
    }

    fn by_name(&self, model_name: &str) -> Result<Option<PhoneRecord>> {
        let wanted = model_name.to_lowercase();
        Ok(self
            .records
            .iter()
            .find(|r| r.model_name.to_lowercase() == wanted)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(name: &str) -> PhoneRecord {
        PhoneRecord {
            model_name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_snapshot_preserves_order() {
        let source = StaticCatalog::new(vec![
            phone("Galaxy S25 Ultra"),
            phone("Galaxy S24 Ultra"),
            phone("Galaxy A55"),
        ]);
        let index = CatalogIndex::load(&source).unwrap();
        assert_eq!(index.len(), 3);
        assert_eq!(index.all()[0].model_name, "Galaxy S25 Ultra");
        assert_eq!(index.all()[2].model_name, "Galaxy A55");
    }

    #[test]
    fn test_by_name_exact_case_insensitive() {
        let index = CatalogIndex::from_records(vec![phone("Galaxy A55")]);
        assert!(index.by_name("galaxy a55").is_some());
        assert!(index.by_name("Galaxy A55").is_some());
        // No fuzzy behavior here
        assert!(index.by_name("A55").is_none());
        assert!(index.by_name("Galaxy A5").is_none());
    }

    #[test]
    fn test_empty_catalog() {
        let index = CatalogIndex::from_records(Vec::new());
        assert!(index.is_empty());
        assert!(index.by_name("anything").is_none());
    }
}
