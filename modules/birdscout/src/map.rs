//! Geographic marker clustering and the PNG scatter map.
//!
//! Clustering is the informal greedy heuristic: scan markers in encounter
//! order and merge each one into the first existing cluster whose centroid
//! is within a fixed degree-space threshold, recomputing the centroid as a
//! weighted mean. The result depends on encounter order and is not
//! canonical; inputs are tens of points, so the O(n²) scan is fine.

use std::collections::BTreeSet;
use std::path::Path;

use plotters::prelude::*;

use birdscout_common::error::BirdscoutError;
use birdscout_common::types::GeoPoint;

use crate::aggregate::Aggregate;

/// Merge distance in degrees (~2 km north-south).
pub const CLUSTER_THRESHOLD_DEG: f64 = 0.02;

/// One plottable observation location before clustering.
#[derive(Debug, Clone, PartialEq)]
pub struct RawMarker {
    pub point: GeoPoint,
    /// Label payload, the species' scientific name.
    pub label: String,
    pub count: u32,
}

/// A cluster of merged raw markers.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub point: GeoPoint,
    pub labels: BTreeSet<String>,
    /// Number of raw markers merged in; the centroid weight.
    pub merged: u32,
    /// Total individuals across merged markers; drives the dot size.
    pub count: u32,
}

/// Flatten the aggregate to raw markers: one per (date, species, location)
/// that carries coordinates.
pub fn markers_from_aggregate(aggregate: &Aggregate) -> Vec<RawMarker> {
    let mut raw = Vec::new();
    for species in aggregate.by_date.values() {
        for (sci, entry) in species {
            for loc in entry.locations.values() {
                if let Some(point) = loc.point {
                    raw.push(RawMarker {
                        point,
                        label: sci.clone(),
                        count: loc.count,
                    });
                }
            }
        }
    }
    raw
}

fn degree_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    ((a.lat - b.lat).powi(2) + (a.lng - b.lng).powi(2)).sqrt()
}

/// Greedy nearest-centroid clustering in degree space.
pub fn cluster(raw: Vec<RawMarker>, threshold: f64) -> Vec<Marker> {
    let mut clusters: Vec<Marker> = Vec::new();

    for marker in raw {
        match clusters
            .iter_mut()
            .find(|c| degree_distance(c.point, marker.point) < threshold)
        {
            Some(c) => {
                let w = c.merged as f64;
                c.point = GeoPoint {
                    lat: (c.point.lat * w + marker.point.lat) / (w + 1.0),
                    lng: (c.point.lng * w + marker.point.lng) / (w + 1.0),
                };
                c.labels.insert(marker.label);
                c.merged += 1;
                c.count += marker.count;
            }
            None => clusters.push(Marker {
                point: marker.point,
                labels: BTreeSet::from([marker.label]),
                merged: 1,
                count: marker.count,
            }),
        }
    }

    clusters
}

/// Plot axis bounds: the region center padded out to cover every marker.
fn bounds(markers: &[Marker], center: GeoPoint) -> (f64, f64, f64, f64) {
    let mut half_lat: f64 = 0.05;
    let mut half_lng: f64 = 0.05;
    for m in markers {
        half_lat = half_lat.max((m.point.lat - center.lat).abs() * 1.2);
        half_lng = half_lng.max((m.point.lng - center.lng).abs() * 1.2);
    }
    (
        center.lng - half_lng,
        center.lng + half_lng,
        center.lat - half_lat,
        center.lat + half_lat,
    )
}

fn marker_caption(marker: &Marker) -> String {
    let mut names = marker.labels.iter().cloned().collect::<Vec<_>>();
    let extra = names.len().saturating_sub(2);
    names.truncate(2);
    let mut caption = names.join(", ");
    if extra > 0 {
        caption.push_str(&format!(" +{extra}"));
    }
    caption
}

fn draw_error(e: impl std::fmt::Display) -> BirdscoutError {
    BirdscoutError::Map(e.to_string())
}

/// Render clustered markers as a scatter map PNG.
pub fn render_png(
    markers: &[Marker],
    center: GeoPoint,
    path: &Path,
    title: &str,
) -> Result<(), BirdscoutError> {
    let root = BitMapBackend::new(path, (900, 900)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;

    let (x_min, x_max, y_min, y_max) = bounds(markers, center);
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .x_desc("lng")
        .y_desc("lat")
        .draw()
        .map_err(draw_error)?;

    // Region center as a hollow reference point
    chart
        .draw_series(std::iter::once(Circle::new(
            (center.lng, center.lat),
            6,
            BLUE.stroke_width(2),
        )))
        .map_err(draw_error)?;

    chart
        .draw_series(markers.iter().map(|m| {
            let radius = 4 + (m.count as f64).sqrt().round() as i32;
            Circle::new((m.point.lng, m.point.lat), radius, RED.mix(0.6).filled())
        }))
        .map_err(draw_error)?;

    chart
        .draw_series(markers.iter().map(|m| {
            Text::new(
                marker_caption(m),
                (m.point.lng, m.point.lat),
                ("sans-serif", 13),
            )
        }))
        .map_err(draw_error)?;

    root.present().map_err(draw_error)?;
    tracing::info!(path = %path.display(), markers = markers.len(), "Map written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(lat: f64, lng: f64, label: &str, count: u32) -> RawMarker {
        RawMarker {
            point: GeoPoint { lat, lng },
            label: label.to_string(),
            count,
        }
    }

    #[test]
    fn points_within_threshold_merge() {
        let clusters = cluster(
            vec![
                raw(35.700, 139.770, "Parus minor", 1),
                raw(35.710, 139.775, "Corvus macrorhynchos", 2),
            ],
            CLUSTER_THRESHOLD_DEG,
        );
        assert_eq!(clusters.len(), 1);
        let c = &clusters[0];
        assert_eq!(c.merged, 2);
        assert_eq!(c.count, 3);
        assert_eq!(c.labels.len(), 2);

        // Centroid lies within the convex hull (on the segment)
        assert!(c.point.lat >= 35.700 && c.point.lat <= 35.710);
        assert!(c.point.lng >= 139.770 && c.point.lng <= 139.775);
    }

    #[test]
    fn distant_points_stay_separate() {
        let clusters = cluster(
            vec![
                raw(35.700, 139.770, "Parus minor", 1),
                raw(35.800, 139.900, "Corvus macrorhynchos", 1),
            ],
            CLUSTER_THRESHOLD_DEG,
        );
        assert_eq!(clusters.len(), 2);
    }

    #[test]
    fn centroid_is_weighted_by_merged_count() {
        let clusters = cluster(
            vec![
                raw(35.700, 139.770, "a", 1),
                raw(35.700, 139.770, "b", 1),
                raw(35.712, 139.770, "c", 1),
            ],
            CLUSTER_THRESHOLD_DEG,
        );
        assert_eq!(clusters.len(), 1);
        // Two records at .700, one at .712: centroid = (2*35.700 + 35.712)/3
        assert!((clusters[0].point.lat - 35.704).abs() < 1e-9);
    }

    #[test]
    fn merge_order_follows_encounter_order() {
        // b is within threshold of a; c is within threshold of b but not a.
        // Greedy scan merges b into a, then c measures against the a-b
        // centroid. This documents the non-canonical behavior.
        let clusters = cluster(
            vec![
                raw(35.700, 139.770, "a", 1),
                raw(35.718, 139.770, "b", 1),
                raw(35.736, 139.770, "c", 1),
            ],
            CLUSTER_THRESHOLD_DEG,
        );
        // a-b centroid is 35.709; c at 35.736 is 0.027 away, a new cluster
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].merged, 2);
        assert_eq!(clusters[1].merged, 1);
    }

    #[test]
    fn markers_come_from_located_entries_only() {
        use std::collections::HashSet;

        use birdscout_common::types::{Observation, SourceTag};

        let with_point = Observation {
            scientific: "Parus minor".to_string(),
            observed_name: "Japanese Tit".to_string(),
            date_key: "2025-08-24 (星期日)".to_string(),
            location: "多摩川".to_string(),
            source: SourceTag::Ebird,
            point: Some(GeoPoint { lat: 35.6, lng: 139.6 }),
            count: 2,
        };
        let without_point = Observation {
            point: None,
            location: "上野公園".to_string(),
            source: SourceTag::Zoopicker,
            ..with_point.clone()
        };

        let (aggregate, _) = crate::aggregate::build(vec![with_point, without_point], &HashSet::new());
        let raw = markers_from_aggregate(&aggregate);
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0].label, "Parus minor");
        assert_eq!(raw[0].count, 2);
    }

    #[test]
    fn caption_truncates_long_label_lists() {
        let m = Marker {
            point: GeoPoint { lat: 0.0, lng: 0.0 },
            labels: BTreeSet::from([
                "Aix galericulata".to_string(),
                "Parus minor".to_string(),
                "Passer montanus".to_string(),
            ]),
            merged: 3,
            count: 3,
        };
        assert_eq!(marker_caption(&m), "Aix galericulata, Parus minor +1");
    }

    #[test]
    fn bounds_cover_all_markers() {
        let center = GeoPoint { lat: 35.7, lng: 139.7 };
        let markers = cluster(vec![raw(35.9, 139.5, "a", 1)], CLUSTER_THRESHOLD_DEG);
        let (x_min, x_max, y_min, y_max) = bounds(&markers, center);
        assert!(x_min < 139.5 && x_max > 139.7);
        assert!(y_min < 35.7 && y_max > 35.9);
    }
}
