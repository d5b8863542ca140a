//! Deterministic answer templates.
//!
//! The fallback path when generation is unavailable. Every field present
//! in the resolved records appears in the output; nothing is fabricated
//! beyond fixed phrasing. Unknown fields render as "N/A".

use advisor_catalog::PhoneRecord;
use advisor_retrieve::{RankedPhone, ResolvedResult};

pub const NOT_FOUND_MESSAGE: &str = "I couldn't understand the question or find a matching \
phone. Try asking about a specific model (like the Galaxy S25 Ultra) or describe what you \
need, e.g. \"best camera phone under $800\".";

pub const EMPTY_LIST_MESSAGE: &str = "No phones in the catalog satisfy those constraints. \
Try raising the budget or relaxing the requirements.";

/// Render a resolved result into answer text.
pub fn render(result: &ResolvedResult) -> String {
    match result {
        ResolvedResult::SingleSpec(record) => render_single(record),
        ResolvedResult::Comparison(a, b) => render_comparison(a, b),
        ResolvedResult::RankedList(entries) => render_ranked(entries),
        ResolvedResult::NotFound => NOT_FOUND_MESSAGE.to_string(),
    }
}

fn field(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

fn render_single(record: &PhoneRecord) -> String {
    let mut out = format!("{} specifications:\n\n", record.model_name);
    out.push_str(&format!("- Display: {}\n", field(&record.display)));
    out.push_str(&format!("- Battery: {}\n", field(&record.battery)));
    out.push_str(&format!("- Camera: {}\n", field(&record.camera)));
    out.push_str(&format!("- RAM: {}\n", field(&record.ram)));
    out.push_str(&format!("- Storage: {}\n", field(&record.storage)));
    out.push_str(&format!("- Chipset: {}\n", field(&record.chipset)));
    out.push_str(&format!("- OS: {}\n", field(&record.os)));
    out.push_str(&format!("- Price: {}\n", field(&record.price)));
    out.push_str(&format!("- Released: {}", field(&record.release_date)));
    if !record.body.is_empty() {
        out.push_str(&format!("\n- Body: {}", record.body));
    }
    if !record.url.is_empty() {
        out.push_str(&format!("\n- More: {}", record.url));
    }
    out
}

fn render_comparison(a: &PhoneRecord, b: &PhoneRecord) -> String {
    let mut out = format!("Comparing {} vs {}:\n", a.model_name, b.model_name);

    let sections: [(&str, &str, &str); 8] = [
        ("Display", a.display.as_str(), b.display.as_str()),
        ("Battery", a.battery.as_str(), b.battery.as_str()),
        ("Camera", a.camera.as_str(), b.camera.as_str()),
        ("RAM", a.ram.as_str(), b.ram.as_str()),
        ("Storage", a.storage.as_str(), b.storage.as_str()),
        ("Chipset", a.chipset.as_str(), b.chipset.as_str()),
        ("Price", a.price.as_str(), b.price.as_str()),
        ("Released", a.release_date.as_str(), b.release_date.as_str()),
    ];
    for (label, va, vb) in sections {
        out.push_str(&format!("\n{}:\n", label));
        out.push_str(&format!("  - {}: {}\n", a.model_name, field(va)));
        out.push_str(&format!("  - {}: {}\n", b.model_name, field(vb)));
    }

    out.push_str("\nVerdict:\n");
    out.push_str(&verdict(a, b));
    out
}

/// Deterministic closing pick: newer release year, then camera MP, then
/// battery mAh; neutral when nothing separates them.
fn verdict(a: &PhoneRecord, b: &PhoneRecord) -> String {
    match (a.release_year(), b.release_year()) {
        (Some(ya), Some(yb)) if ya != yb => {
            let newer = if ya > yb { a } else { b };
            return format!(
                "{} is the newer model with the more recent hardware.",
                newer.model_name
            );
        }
        _ => {}
    }
    if let (Some(ma), Some(mb)) = (a.camera_mp(), b.camera_mp()) {
        if ma != mb {
            let (better, hi, lo) = if ma > mb { (a, ma, mb) } else { (b, mb, ma) };
            return format!(
                "{} has the stronger camera ({} MP vs {} MP).",
                better.model_name, hi, lo
            );
        }
    }
    if let (Some(ba), Some(bb)) = (a.battery_mah(), b.battery_mah()) {
        if ba != bb {
            let (better, hi, lo) = if ba > bb { (a, ba, bb) } else { (b, bb, ba) };
            return format!(
                "{} has the larger battery ({} mAh vs {} mAh).",
                better.model_name, hi, lo
            );
        }
    }
    "Both phones are close on the listed specs; decide on price and size.".to_string()
}

fn render_ranked(entries: &[RankedPhone]) -> String {
    if entries.is_empty() {
        return EMPTY_LIST_MESSAGE.to_string();
    }

    let mut out = String::from("Based on your requirements, here are the top picks:\n");
    for (i, entry) in entries.iter().enumerate() {
        let r = &entry.record;
        out.push_str(&format!("\n{}. {} — {}\n", i + 1, r.model_name, entry.rationale));
        out.push_str(&format!("   - Price: {}\n", field(&r.price)));
        out.push_str(&format!("   - Battery: {}\n", field(&r.battery)));
        out.push_str(&format!("   - Camera: {}\n", field(&r.camera)));
        out.push_str(&format!("   - Display: {}\n", field(&r.display)));
        out.push_str(&format!("   - RAM: {}\n", field(&r.ram)));
    }
    out.push_str(&format!(
        "\nTop recommendation: {}.",
        entries[0].record.model_name
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> PhoneRecord {
        PhoneRecord {
            model_name: "Galaxy S25 Ultra".into(),
            release_date: "Released 2025, February 03".into(),
            display: "6.9\" QHD+ AMOLED, 120Hz".into(),
            battery: "5000 mAh".into(),
            camera: "200 MP wide".into(),
            ram: "12GB".into(),
            storage: "256GB / 512GB / 1TB".into(),
            price: "$1299.99".into(),
            chipset: "Snapdragon 8 Elite".into(),
            os: "Android 15, One UI 7".into(),
            body: String::new(),
            url: String::new(),
        }
    }

    #[test]
    fn test_single_lists_every_field() {
        let text = render_single(&full_record());
        for needle in [
            "Galaxy S25 Ultra",
            "6.9\" QHD+ AMOLED",
            "5000 mAh",
            "200 MP wide",
            "12GB",
            "256GB / 512GB / 1TB",
            "$1299.99",
            "Snapdragon 8 Elite",
            "Android 15",
            "Released 2025",
        ] {
            assert!(text.contains(needle), "missing {:?} in:\n{}", needle, text);
        }
    }

    #[test]
    fn test_unknown_fields_render_as_na() {
        let record = PhoneRecord {
            model_name: "Galaxy Mystery".into(),
            ..Default::default()
        };
        let text = render_single(&record);
        assert!(text.contains("Display: N/A"));
        assert!(text.contains("Price: N/A"));
        // Empty body/url lines are dropped, not faked
        assert!(!text.contains("Body:"));
        assert!(!text.contains("More:"));
    }

    #[test]
    fn test_comparison_names_both_and_picks_newer() {
        let a = full_record();
        let mut b = full_record();
        b.model_name = "Galaxy S24 Ultra".into();
        b.release_date = "Released 2024, January 24".into();
        b.price = "$1199.99".into();

        let text = render_comparison(&a, &b);
        assert!(text.starts_with("Comparing Galaxy S25 Ultra vs Galaxy S24 Ultra"));
        assert!(text.contains("$1299.99"));
        assert!(text.contains("$1199.99"));
        assert!(text.contains("Galaxy S25 Ultra is the newer model"));
    }

    #[test]
    fn test_comparison_same_year_falls_to_camera() {
        let mut a = full_record();
        a.release_date = "Released 2024".into();
        let mut b = full_record();
        b.model_name = "Galaxy A55".into();
        b.release_date = "Released 2024".into();
        b.camera = "50 MP wide".into();

        let text = render_comparison(&a, &b);
        assert!(text.contains("stronger camera (200 MP vs 50 MP)"));
    }

    #[test]
    fn test_ranked_list_numbered_with_rationale() {
        let entries = vec![
            RankedPhone {
                record: full_record(),
                score: 1.5,
                rationale: "200 MP camera in the top tier".into(),
            },
            RankedPhone {
                record: PhoneRecord {
                    model_name: "Galaxy A55".into(),
                    price: "$489.99".into(),
                    ..Default::default()
                },
                score: 1.0,
                rationale: "within $500 budget".into(),
            },
        ];
        let text = render_ranked(&entries);
        assert!(text.contains("1. Galaxy S25 Ultra — 200 MP camera in the top tier"));
        assert!(text.contains("2. Galaxy A55 — within $500 budget"));
        assert!(text.contains("Top recommendation: Galaxy S25 Ultra."));
    }

    #[test]
    fn test_empty_list_and_not_found_are_distinct() {
        assert_eq!(render(&ResolvedResult::RankedList(Vec::new())), EMPTY_LIST_MESSAGE);
        assert_eq!(render(&ResolvedResult::NotFound), NOT_FOUND_MESSAGE);
        assert_ne!(EMPTY_LIST_MESSAGE, NOT_FOUND_MESSAGE);
    }
}
