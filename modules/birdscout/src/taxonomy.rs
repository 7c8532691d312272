//! The fetch-taxonomy tool: download the eBird taxonomy in three locales
//! and merge the localized common names onto the English records, producing
//! the JSON name-translation table the report loaders consume.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use ebird_client::{EbirdClient, TaxonomyRecord};

pub const INTEGRATED_FILE: &str = "ebird_taxonomy_integrated.json";

/// Placeholder for species the localized taxonomies don't name.
const UNKNOWN_NAME: &str = "未知";

/// Merge Chinese and Japanese common names onto the English taxonomy,
/// keyed by species code.
pub fn integrate(
    mut english: Vec<TaxonomyRecord>,
    chinese: &[TaxonomyRecord],
    japanese: &[TaxonomyRecord],
) -> Vec<TaxonomyRecord> {
    let zh: HashMap<&str, &str> = chinese
        .iter()
        .map(|r| (r.species_code.as_str(), r.com_name.as_str()))
        .collect();
    let ja: HashMap<&str, &str> = japanese
        .iter()
        .map(|r| (r.species_code.as_str(), r.com_name.as_str()))
        .collect();

    for record in &mut english {
        let code = record.species_code.as_str();
        record.com_name_zh_sim = Some(zh.get(code).copied().unwrap_or(UNKNOWN_NAME).to_string());
        record.com_name_ja = Some(ja.get(code).copied().unwrap_or(UNKNOWN_NAME).to_string());
    }
    english
}

/// Download all three locales sequentially and write the integrated table
/// under the data directory. Returns the written path.
pub async fn fetch_and_integrate(client: &EbirdClient, data_dir: &Path) -> Result<PathBuf> {
    let english = client.taxonomy("en").await.context("en taxonomy download failed")?;
    let chinese = client.taxonomy("zh_SIM").await.context("zh_SIM taxonomy download failed")?;
    let japanese = client.taxonomy("ja").await.context("ja taxonomy download failed")?;
    info!(
        en = english.len(),
        zh_sim = chinese.len(),
        ja = japanese.len(),
        "Taxonomies downloaded"
    );

    let merged = integrate(english, &chinese, &japanese);

    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create {}", data_dir.display()))?;
    let path = data_dir.join(INTEGRATED_FILE);
    std::fs::write(&path, serde_json::to_string_pretty(&merged)?)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}
