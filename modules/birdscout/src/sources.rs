//! Loaders for the three on-disk input tables: the life list, the name
//! translation table, and the hotspot list.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use birdscout_common::csv;
use birdscout_common::types::{GeoPoint, Hotspot, NameEntry};

/// Life-list CSV (eBird world life list export). Only the
/// `Scientific Name` column is used; every name in it is excluded from the
/// report.
pub fn load_life_list(path: &Path) -> Result<HashSet<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read life list {}", path.display()))?;
    let rows = csv::parse(&text);

    let header = rows
        .first()
        .context("Life list is empty")?;
    let sci_col = header
        .iter()
        .position(|h| h.trim() == "Scientific Name")
        .context("Life list has no 'Scientific Name' column")?;

    let mut library = HashSet::new();
    for row in rows.iter().skip(1) {
        if let Some(sci) = row.get(sci_col) {
            let sci = sci.trim();
            if !sci.is_empty() {
                library.insert(sci.to_string());
            }
        }
    }
    Ok(library)
}

/// Shape of one record in the integrated taxonomy JSON.
#[derive(Debug, Deserialize)]
struct TaxonomyEntry {
    #[serde(rename = "sciName", default)]
    sci_name: String,
    #[serde(rename = "comName_zh_SIM", default)]
    chinese: String,
    #[serde(rename = "comName_ja", default)]
    japanese: String,
}

/// Name-translation table: scientific name → localized common names.
///
/// Two formats are accepted, chosen by extension: the integrated eBird
/// taxonomy JSON (produced by `--mode fetch-taxonomy`), or an Avibase CSV
/// export (columns: English Name, Latin Name, Chinese Name; no Japanese).
pub fn load_name_map(path: &Path) -> Result<HashMap<String, NameEntry>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read name table {}", path.display()))?;

    if path.extension().is_some_and(|e| e == "json") {
        load_name_map_json(&text)
    } else {
        Ok(load_name_map_csv(&text))
    }
}

fn load_name_map_json(text: &str) -> Result<HashMap<String, NameEntry>> {
    let entries: Vec<TaxonomyEntry> =
        serde_json::from_str(text).context("Name table is not a JSON taxonomy array")?;

    let mut mapping = HashMap::new();
    for entry in entries {
        let latin = entry.sci_name.trim();
        if latin.is_empty() {
            continue;
        }
        mapping.insert(
            latin.to_string(),
            NameEntry {
                chinese: entry.chinese.trim().to_string(),
                japanese: entry.japanese.trim().to_string(),
            },
        );
    }
    Ok(mapping)
}

fn load_name_map_csv(text: &str) -> HashMap<String, NameEntry> {
    let mut mapping = HashMap::new();
    for row in csv::parse(text) {
        if csv::is_blank(&row) {
            continue;
        }
        // Header row starts with "English Name"
        if row[0].trim() == "English Name" {
            continue;
        }
        if row.len() < 3 {
            continue;
        }
        let latin = row[1].trim();
        if latin.is_empty() {
            continue;
        }
        mapping.insert(
            latin.to_string(),
            NameEntry {
                chinese: row[2].trim().to_string(),
                japanese: String::new(),
            },
        );
    }
    mapping
}

/// Hotspot CSV: numeric place id, display name, optional lat/lng columns.
/// Rows whose first column is not a number (headers, comments) are skipped.
pub fn load_hotspots(path: &Path) -> Result<Vec<Hotspot>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read hotspot list {}", path.display()))?;

    let mut hotspots = Vec::new();
    for row in csv::parse(&text) {
        if csv::is_blank(&row) {
            continue;
        }
        let pid = row[0].trim();
        if pid.parse::<u64>().is_err() {
            continue;
        }

        let location = row.get(1).map(|s| s.trim()).unwrap_or("").to_string();
        let point = match (
            row.get(2).and_then(|s| s.trim().parse::<f64>().ok()),
            row.get(3).and_then(|s| s.trim().parse::<f64>().ok()),
        ) {
            (Some(lat), Some(lng)) => Some(GeoPoint { lat, lng }),
            _ => None,
        };

        hotspots.push(Hotspot {
            url: format!("https://zoopicker.com/places/{pid}/watcheds"),
            location,
            point,
        });
    }
    Ok(hotspots)
}
