//! Phone advisor CLI — answer one question against a JSON catalog.
//!
//! Usage: `advisor <catalog.json> "<question>"`
//!
//! The catalog file holds an array of phone records. Configuration is read
//! from `ADVISOR_CONFIG` (JSON, optional); `GEMINI_API_KEY` enables the
//! remote generation backend.

use std::path::PathBuf;
use std::sync::Arc;

use advisor_catalog::{PhoneRecord, StaticCatalog};
use advisor_core::{AdvisorConfig, Error, Result};
use advisor_runtime::Advisor;
use tracing_subscriber::EnvFilter;

fn config_path() -> PathBuf {
    std::env::var("ADVISOR_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("advisor.json"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let (catalog_path, question) = match (args.next(), args.next()) {
        (Some(path), Some(question)) => (path, question),
        _ => {
            eprintln!("Usage: advisor <catalog.json> \"<question>\"");
            std::process::exit(2);
        }
    };

    let raw = std::fs::read_to_string(&catalog_path)?;
    let records: Vec<PhoneRecord> = serde_json::from_str(&raw)
        .map_err(|e| Error::Catalog(format!("{}: {}", catalog_path, e)))?;

    let config = AdvisorConfig::load(&config_path());
    let advisor = Advisor::new(config, Arc::new(StaticCatalog::new(records)));

    let answer = advisor.ask(&question).await?;
    println!("{}", answer);
    Ok(())
}
