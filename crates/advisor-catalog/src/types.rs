//! Phone specification records.
//!
//! All spec fields are free text as scraped; an empty string means the
//! field is unknown. Numeric views are parsed lazily and parse failures
//! surface as `None`, never as errors.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A single phone specification record. `model_name` is the identity;
/// every other field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneRecord {
    pub model_name: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub battery: String,
    #[serde(default)]
    pub camera: String,
    #[serde(default)]
    pub ram: String,
    #[serde(default)]
    pub storage: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub chipset: String,
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub url: String,
}

// Handles "$1299", "$ 1,049.99", "€849.99"
static USD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\s*([\d,]+\.?\d*)").unwrap());
static EUR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"€\s*([\d,]+\.?\d*)").unwrap());
static MAH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+)\s*mAh").unwrap());
static MP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+)\s*MP").unwrap());
static GB_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+)\s*GB").unwrap());
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19|20)\d{2}\b").unwrap());

fn capture_number(re: &Regex, text: &str) -> Option<f64> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().replace(',', "").parse().ok())
}

fn capture_int(re: &Regex, text: &str) -> Option<u32> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

impl PhoneRecord {
    /// Numeric price. USD takes precedence over EUR when both appear.
    pub fn price_usd(&self) -> Option<f64> {
        capture_number(&USD_RE, &self.price).or_else(|| capture_number(&EUR_RE, &self.price))
    }

    /// Battery capacity in mAh.
    pub fn battery_mah(&self) -> Option<u32> {
        capture_int(&MAH_RE, &self.battery)
    }

    /// Main camera resolution in MP (first value listed).
    pub fn camera_mp(&self) -> Option<u32> {
        capture_int(&MP_RE, &self.camera)
    }

    /// RAM in GB (first value listed).
    pub fn ram_gb(&self) -> Option<u32> {
        capture_int(&GB_RE, &self.ram)
    }

    /// Release year parsed from the free-text release date.
    pub fn release_year(&self) -> Option<i32> {
        YEAR_RE.find(&self.release_date)?.as_str().parse().ok()
    }
}
