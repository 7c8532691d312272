use serde::{Deserialize, Serialize};

// --- Geo Types ---

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

// --- Sources ---

/// Where an observation record came from. Rendered into the report so
/// duplicate sightings remain attributable after merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceTag {
    Zoopicker,
    Ebird,
}

impl std::fmt::Display for SourceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceTag::Zoopicker => write!(f, "zoopicker"),
            SourceTag::Ebird => write!(f, "ebird"),
        }
    }
}

// --- Observations ---

/// One sighting of one species, normalized from either source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Scientific name, the cross-source join key.
    pub scientific: String,
    /// Common name exactly as the source displayed it.
    pub observed_name: String,
    /// Report date key, e.g. `2025-08-24 (星期日)`.
    pub date_key: String,
    pub location: String,
    pub source: SourceTag,
    pub point: Option<GeoPoint>,
    /// Individuals counted. HTML records carry no count and default to 1.
    pub count: u32,
}

// --- Name translations ---

/// Localized common names for a scientific name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NameEntry {
    pub chinese: String,
    pub japanese: String,
}

/// A named, URL-addressable observation location on the hobbyist site.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotspot {
    pub url: String,
    pub location: String,
    pub point: Option<GeoPoint>,
}
