use serde::{Deserialize, Serialize};

/// One record from `/v2/data/obs/geo/recent`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentObservation {
    pub species_code: String,
    pub com_name: String,
    pub sci_name: String,
    pub loc_name: String,
    /// `YYYY-MM-DD` or `YYYY-MM-DD HH:MM`.
    pub obs_dt: String,
    /// Absent when the checklist reported presence without a count ("X").
    #[serde(default)]
    pub how_many: Option<u32>,
    pub lat: f64,
    pub lng: f64,
}

/// One record from `/v2/ref/taxonomy/ebird?fmt=json`.
///
/// Unmodeled taxonomy columns are kept in `extra` so the integrated file
/// round-trips everything the API returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyRecord {
    #[serde(rename = "speciesCode")]
    pub species_code: String,
    #[serde(rename = "sciName")]
    pub sci_name: String,
    #[serde(rename = "comName")]
    pub com_name: String,
    #[serde(rename = "comName_zh_SIM", default, skip_serializing_if = "Option::is_none")]
    pub com_name_zh_sim: Option<String>,
    #[serde(rename = "comName_ja", default, skip_serializing_if = "Option::is_none")]
    pub com_name_ja: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
