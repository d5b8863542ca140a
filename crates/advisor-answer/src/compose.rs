//! Answer composer — delegates to the generation backend when one is
//! available, and always has the deterministic templates to fall back on.
//!
//! The prompt carries only the resolved records, never the full catalog:
//! this bounds cost and keeps the model from inventing fields.

use advisor_catalog::PhoneRecord;
use advisor_query::Criteria;
use advisor_retrieve::ResolvedResult;
use tracing::{debug, warn};

use crate::backend::GenerateBackend;
use crate::templates;

pub struct AnswerComposer;

impl AnswerComposer {
    /// Render a resolved result into answer text. Backend failure of any
    /// kind routes to the templates; this never fails the request.
    pub async fn compose(
        result: &ResolvedResult,
        question: &str,
        criteria: &Criteria,
        backend: Option<&dyn GenerateBackend>,
    ) -> String {
        if let (Some(backend), Some(prompt)) =
            (backend, Self::build_prompt(result, question, criteria))
        {
            match backend.generate(&prompt).await {
                Ok(text) => return text,
                Err(e) => {
                    warn!("Generation unavailable, using templates: {}", e);
                }
            }
        } else {
            debug!("No generation backend or no resolved data; using templates");
        }
        templates::render(result)
    }

    /// Structured prompt for the backend, or `None` when there is no
    /// resolved data worth sending (not-found and empty-list answers are
    /// fixed text).
    pub fn build_prompt(
        result: &ResolvedResult,
        question: &str,
        criteria: &Criteria,
    ) -> Option<String> {
        let (label, records): (&str, Vec<&PhoneRecord>) = match result {
            ResolvedResult::SingleSpec(r) => ("spec_lookup", vec![r]),
            ResolvedResult::Comparison(a, b) => ("comparison", vec![a, b]),
            ResolvedResult::RankedList(entries) if !entries.is_empty() => (
                "recommendation",
                entries.iter().take(5).map(|e| &e.record).collect(),
            ),
            _ => return None,
        };

        let mut prompt = String::from(
            "You are a phone specifications assistant. Answer the user's question using \
             only the data below; do not invent values.\n\n",
        );
        prompt.push_str(&format!("User question: {}\n", question));
        prompt.push_str(&format!("Query type: {}\n", label));
        if let Some(summary) = criteria.summary() {
            prompt.push_str(&format!("Criteria: {}\n", summary));
        }

        for record in records {
            prompt.push_str(&format!("\nPhone: {}\n", record.model_name));
            prompt.push_str(&format!("- Release: {}\n", record.release_date));
            prompt.push_str(&format!("- Display: {}\n", record.display));
            prompt.push_str(&format!("- Battery: {}\n", record.battery));
            prompt.push_str(&format!("- Camera: {}\n", record.camera));
            prompt.push_str(&format!("- RAM: {}\n", record.ram));
            prompt.push_str(&format!("- Storage: {}\n", record.storage));
            prompt.push_str(&format!("- Chipset: {}\n", record.chipset));
            prompt.push_str(&format!("- OS: {}\n", record.os));
            prompt.push_str(&format!("- Price: {}\n", record.price));
        }

        prompt.push_str(
            "\nProvide a helpful, concise response under 200 words that directly answers \
             the question, includes the relevant specifications, and highlights key \
             differences when comparing.",
        );
        Some(prompt)
    }
}
