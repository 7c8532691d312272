//! End-to-end pipeline test: canned hotspot pages and eBird records in,
//! rendered report and clustered markers out.

use std::collections::{HashMap, HashSet};

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use birdscout::aggregate;
use birdscout::fetch::PageFetcher;
use birdscout::map;
use birdscout::pipeline;
use birdscout::report;
use birdscout_common::dates::DateWindow;
use birdscout_common::types::{GeoPoint, Hotspot, NameEntry};
use ebird_client::RecentObservation;

struct CannedFetcher {
    pages: HashMap<String, String>,
}

#[async_trait]
impl PageFetcher for CannedFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("503 service unavailable"))
    }
}

fn window() -> DateWindow {
    // 2025-08-24 is a Sunday
    DateWindow::ending(NaiveDate::from_ymd_opt(2025, 8, 24).unwrap(), 3)
}

fn hotspot(id: u32, name: &str, point: Option<GeoPoint>) -> Hotspot {
    Hotspot {
        url: format!("https://zoopicker.com/places/{id}/watcheds"),
        location: name.to_string(),
        point,
    }
}

fn ueno_page() -> String {
    r#"
        <html><body>
            <p>シジュウカラ</p>
            <p>japtit1 / Parus minor</p>
            <p>2025年8月24日(日)に観察</p>

            <p>オシドリ</p>
            <p>mandu / Aix galericulata</p>
            <p>2025年8月23日(土)に観察</p>

            <p>先月の記録</p>
            <p>old / Ancient birdus</p>
            <p>2025年7月1日(火)に観察</p>
        </body></html>
    "#
    .to_string()
}

fn ebird_record(sci: &str, com: &str, obs_dt: &str, how_many: Option<u32>, lat: f64, lng: f64) -> RecentObservation {
    serde_json::from_value(serde_json::json!({
        "speciesCode": "x",
        "comName": com,
        "sciName": sci,
        "locName": "多摩川河口",
        "obsDt": obs_dt,
        "howMany": how_many,
        "lat": lat,
        "lng": lng,
    }))
    .unwrap()
}

fn names() -> HashMap<String, NameEntry> {
    HashMap::from([
        (
            "Aix galericulata".to_string(),
            NameEntry { chinese: "鸳鸯".to_string(), japanese: "オシドリ".to_string() },
        ),
        (
            "Parus minor".to_string(),
            NameEntry { chinese: "远东山雀".to_string(), japanese: "シジュウカラ".to_string() },
        ),
    ])
}

#[tokio::test]
async fn full_run_produces_filtered_merged_report_and_markers() {
    let ueno_point = GeoPoint { lat: 35.7151, lng: 139.7734 };
    let hotspots = vec![
        hotspot(1, "上野公園", Some(ueno_point)),
        hotspot(2, "落ちてるページ", None),
    ];
    let fetcher = CannedFetcher {
        pages: HashMap::from([(
            "https://zoopicker.com/places/1/watcheds".to_string(),
            ueno_page(),
        )]),
    };

    let window = window();
    let mut observations = pipeline::scrape_hotspots(&fetcher, &hotspots, &window).await;

    // eBird corroborates the mandarin duck near the same park and adds a
    // life-list species that must be filtered out.
    observations.extend(pipeline::ebird_to_observations(
        vec![
            ebird_record("Aix galericulata", "Mandarin Duck", "2025-08-23 07:30", Some(3), 35.7205, 139.7770),
            ebird_record("Passer montanus", "Eurasian Tree Sparrow", "2025-08-24", Some(10), 35.66, 139.70),
        ],
        &window,
    ));

    // Dead page skipped, 2 scraped + 2 API observations survive collection
    assert_eq!(observations.len(), 4);

    let life_list: HashSet<String> = ["Passer montanus".to_string()].into();
    let (aggregate, stats) = aggregate::build(observations, &life_list);
    assert_eq!(stats.excluded, 1);

    let markdown = report::render(&aggregate, &names(), 3);

    // Life-list species never mentioned
    assert!(!markdown.contains("Passer montanus"));
    assert!(!markdown.contains("Eurasian Tree Sparrow"));

    // One entry per (date, species): the duck appears once, under the 23rd,
    // with both sources listed and the total equal to the location sum
    assert!(markdown.contains("### 鸳鸯，オシドリ，Aix galericulata (4)"));
    assert!(markdown.contains("- 上野公園 (1, zoopicker)"));
    assert!(markdown.contains("- 多摩川河口 (3, ebird)"));
    assert!(markdown.contains("### 远东山雀，シジュウカラ，Parus minor (1)"));

    // Dates newest first
    let sunday = markdown.find("## 2025-08-24").unwrap();
    let saturday = markdown.find("## 2025-08-23").unwrap();
    assert!(sunday < saturday);

    // The park and the nearby eBird point merge into one marker whose
    // centroid sits between them
    let raw = map::markers_from_aggregate(&aggregate);
    let markers = map::cluster(raw, map::CLUSTER_THRESHOLD_DEG);
    let merged = markers.iter().find(|m| m.merged > 1).unwrap();
    assert!(merged.labels.contains("Aix galericulata"));
    assert!(merged.point.lat > 35.7151 && merged.point.lat < 35.7205);
    assert!(merged.point.lng > 139.7734 && merged.point.lng < 139.7770);
}

#[tokio::test]
async fn run_with_no_qualifying_observations_renders_placeholder() {
    let fetcher = CannedFetcher { pages: HashMap::new() };
    let hotspots = vec![hotspot(1, "上野公園", None)];

    let window = window();
    let observations = pipeline::scrape_hotspots(&fetcher, &hotspots, &window).await;
    assert!(observations.is_empty());

    let (aggregate, _) = aggregate::build(observations, &HashSet::new());
    let markdown = report::render(&aggregate, &names(), 3);
    assert_eq!(markdown, "# 最近3天观测到但未收录的鸟种：\n无新增鸟种记录。");
}
