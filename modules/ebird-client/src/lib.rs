pub mod error;
pub mod types;

pub use error::{EbirdError, Result};
pub use types::{RecentObservation, TaxonomyRecord};

use std::time::Duration;

const BASE_URL: &str = "https://api.ebird.org/v2";

pub struct EbirdClient {
    client: reqwest::Client,
    token: String,
}

impl EbirdClient {
    pub fn new(token: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            token: token.to_string(),
        }
    }

    /// Recent observations within ~25km of a point, looking back `back_days`
    /// days (the API caps this at 30).
    pub async fn recent_observations(
        &self,
        lat: f64,
        lng: f64,
        back_days: u32,
    ) -> Result<Vec<RecentObservation>> {
        let url = format!(
            "{BASE_URL}/data/obs/geo/recent?lat={lat:.4}&lng={lng:.4}&back={back_days}&fmt=json"
        );
        let resp = self
            .client
            .get(&url)
            .header("X-eBirdApiToken", &self.token)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(EbirdError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let observations: Vec<RecentObservation> = resp.json().await?;
        tracing::debug!(count = observations.len(), "Fetched recent observations");
        Ok(observations)
    }

    /// Full eBird taxonomy in the given locale (`en`, `zh_SIM`, `ja`, ...).
    pub async fn taxonomy(&self, locale: &str) -> Result<Vec<TaxonomyRecord>> {
        let url = format!("{BASE_URL}/ref/taxonomy/ebird?fmt=json&locale={locale}");
        let resp = self
            .client
            .get(&url)
            .header("X-eBirdApiToken", &self.token)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(EbirdError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let records: Vec<TaxonomyRecord> = resp.json().await?;
        tracing::debug!(locale, count = records.len(), "Fetched taxonomy");
        Ok(records)
    }
}
