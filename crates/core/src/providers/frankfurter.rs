use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::RateProvider;
use crate::errors::CoreError;
use crate::models::rate::RatePoint;

const BASE_URL: &str = "https://api.frankfurter.app";
const FROM: &str = "USD";
const TO: &str = "EUR";

/// Frankfurter API provider for the USD→EUR exchange rate.
///
/// - **Free**: No API key, no rate limits, open-source.
/// - **Source**: European Central Bank (ECB) data.
/// - **Endpoints**: `/latest`, `/{date}`, `/{start}..{end}`
///
/// Rates are published on ECB business days only, so range responses are
/// sparse over weekends and holidays.
pub struct FrankfurterProvider {
    client: Client,
}

impl FrankfurterProvider {
    pub fn new() -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Default for FrankfurterProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ── Frankfurter API response types ──────────────────────────────────

#[derive(Deserialize)]
struct LatestResponse {
    rates: HashMap<String, f64>,
    date: NaiveDate,
}

#[derive(Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
}

#[derive(Deserialize)]
struct TimeSeriesResponse {
    rates: HashMap<String, HashMap<String, f64>>,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl RateProvider for FrankfurterProvider {
    fn name(&self) -> &str {
        "Frankfurter"
    }

    async fn latest(&self) -> Result<RatePoint, CoreError> {
        let url = format!("{BASE_URL}/latest?from={FROM}&to={TO}");
        tracing::debug!(%url, "fetching latest rate");

        let resp: LatestResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "Frankfurter".into(),
                message: format!("Failed to parse latest {FROM}/{TO} response: {e}"),
            })?;

        let rate = resp.rates.get(TO).copied().ok_or_else(|| CoreError::Api {
            provider: "Frankfurter".into(),
            message: format!("No rate found for {FROM} → {TO}"),
        })?;

        Ok(RatePoint {
            date: resp.date,
            rate,
        })
    }

    async fn on_date(&self, date: NaiveDate) -> Result<f64, CoreError> {
        let date_str = date.format("%Y-%m-%d");
        let url = format!("{BASE_URL}/{date_str}?from={FROM}&to={TO}");
        tracing::debug!(%url, "fetching historical rate");

        let resp: RatesResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "Frankfurter".into(),
                message: format!("Failed to parse {FROM}/{TO} rate for {date}: {e}"),
            })?;

        resp.rates
            .get(TO)
            .copied()
            .ok_or_else(|| CoreError::RateNotAvailable {
                date: date.to_string(),
            })
    }

    async fn range(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<RatePoint>, CoreError> {
        let from_str = from.format("%Y-%m-%d");
        let to_str = to.format("%Y-%m-%d");
        let url = format!("{BASE_URL}/{from_str}..{to_str}?from={FROM}&to={TO}");
        tracing::debug!(%url, "fetching rate range");

        let resp: TimeSeriesResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "Frankfurter".into(),
                message: format!("Failed to parse {FROM}/{TO} time series: {e}"),
            })?;

        let mut points: Vec<RatePoint> = resp
            .rates
            .iter()
            .filter_map(|(date_str, rates)| {
                let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()?;
                let rate = rates.get(TO)?;
                Some(RatePoint { date, rate: *rate })
            })
            .collect();

        points.sort_by_key(|p| p.date);
        Ok(points)
    }
}
