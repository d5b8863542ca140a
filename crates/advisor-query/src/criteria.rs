//! Criteria extraction — numeric and categorical constraints from free text.
//!
//! Best-effort and order-independent: every recognized criterion applies,
//! unrecognized text contributes nothing, and extraction never fails.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Criteria;

static PRICE_UNDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:under|below)\s*\$?\s*([\d,]+(?:\.\d+)?)").unwrap());
static PRICE_LT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<\s*\$?\s*([\d,]+(?:\.\d+)?)").unwrap());
static BATTERY_FLOOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:at least|over|more than|minimum(?: of)?)\s*([\d,]+)\s*mah").unwrap()
});
static RAM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d+)\s*gb(?:\s+of)?\s+ram\b").unwrap());
static RAM_FLOOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bat least\s+(\d+)\s*gb\b").unwrap());

const BATTERY_KEYWORDS: &[&str] = &["battery", "backup", "long lasting"];
const CAMERA_KEYWORDS: &[&str] = &["camera", "photography", "photo"];
const DISPLAY_KEYWORDS: &[&str] = &["display", "screen", "amoled", "refresh rate"];

fn capture_f64(re: &Regex, text: &str) -> Option<f64> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().replace(',', "").parse().ok())
}

fn capture_u32(re: &Regex, text: &str) -> Option<u32> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().replace(',', "").parse().ok())
}

/// Extract criteria from a question. Returns an all-absent `Criteria` when
/// nothing is recognized.
pub fn extract_criteria(question: &str) -> Criteria {
    let lower = question.to_lowercase();

    let max_price =
        capture_f64(&PRICE_UNDER_RE, &lower).or_else(|| capture_f64(&PRICE_LT_RE, &lower));

    let min_battery_mah = capture_u32(&BATTERY_FLOOR_RE, &lower);
    let battery_preference =
        min_battery_mah.is_some() || BATTERY_KEYWORDS.iter().any(|k| lower.contains(k));

    let camera_preference = CAMERA_KEYWORDS.iter().any(|k| lower.contains(k));
    let display_preference = DISPLAY_KEYWORDS.iter().any(|k| lower.contains(k));

    let min_ram_gb =
        capture_u32(&RAM_RE, &lower).or_else(|| capture_u32(&RAM_FLOOR_RE, &lower));

    Criteria {
        max_price,
        min_battery_mah,
        min_ram_gb,
        battery_preference,
        camera_preference,
        display_preference,
    }
}
