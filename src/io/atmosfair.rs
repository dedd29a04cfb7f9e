//! atmosfair flight emissions API client
//!
//! Submits an artist's flight list to the calculation endpoint as one JSON
//! POST and exposes a single-flight primitive for degraded-window retries.
//! The request/response schema is a fixed external contract and must not be
//! reshaped.

use crate::domain::types::{FlightLeg, FlightRecord, Trip, TripEmissions};
use crate::services::reconciler::{FlightCalculator, Reconciler};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

const STATUS_SUCCESS: &str = "SUCCESS";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CalcRequest {
    account_id: String,
    password: String,
    flights: Vec<FlightLeg>,
}

#[derive(Debug, Deserialize)]
struct CalcResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    errors: Vec<String>,
    #[serde(default)]
    flights: Vec<FlightRecord>,
}

/// HTTP client for the atmosfair emission calculation service
pub struct AtmosfairClient {
    host: String,
    account_id: String,
    password: String,
    http: reqwest::Client,
}

impl AtmosfairClient {
    pub fn new(
        host: &str,
        account_id: &str,
        password: &str,
        timeout: Duration,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            host: host.to_string(),
            account_id: account_id.to_string(),
            password: password.to_string(),
            http,
        })
    }

    /// Build request legs from a flight plan.
    ///
    /// Trips with an unresolved airport code cannot be priced and are
    /// excluded here, so the batch response aligns positionally with the
    /// legs actually submitted.
    pub fn legs_from_trips(trips: &[Trip]) -> Vec<FlightLeg> {
        trips
            .iter()
            .filter(|t| !t.dep_code.is_empty() && !t.arr_code.is_empty())
            .map(FlightLeg::from_trip)
            .collect()
    }

    /// Full pipeline for one artist's flight plan: batch submit, repair the
    /// degraded window, convert to report rows.
    pub async fn calculate(
        &self,
        trips: &[Trip],
    ) -> Result<Vec<TripEmissions>, Box<dyn std::error::Error + Send + Sync>> {
        let legs = Self::legs_from_trips(trips);
        if legs.is_empty() {
            return Ok(Vec::new());
        }

        let records = self.submit(&legs).await?;
        let records = Reconciler::new(self).reconcile(records).await;

        Ok(records.iter().map(TripEmissions::from).collect())
    }

    fn request_body(&self, legs: &[FlightLeg]) -> CalcRequest {
        CalcRequest {
            account_id: self.account_id.clone(),
            password: self.password.clone(),
            flights: legs.to_vec(),
        }
    }

    async fn post(
        &self,
        request: &CalcRequest,
    ) -> Result<CalcResponse, Box<dyn std::error::Error + Send + Sync>> {
        let response = self
            .http
            .post(&self.host)
            .header("Accept", "application/json, text/plain, */*")
            .header("Content-Type", "application/json;charset=UTF-8")
            .json(request)
            .send()
            .await?;

        Ok(response.json::<CalcResponse>().await?)
    }

    /// A non-SUCCESS body status is a batch-level failure and carries the
    /// service-reported detail up to the caller
    fn records_from(
        response: CalcResponse,
    ) -> Result<Vec<FlightRecord>, Box<dyn std::error::Error + Send + Sync>> {
        if response.status != STATUS_SUCCESS {
            let detail = if response.errors.is_empty() {
                "no error detail".to_string()
            } else {
                response.errors.join("; ")
            };
            return Err(format!(
                "atmosfair rejected the request (status {:?}): {}",
                response.status, detail
            )
            .into());
        }
        Ok(response.flights)
    }
}

#[async_trait]
impl FlightCalculator for AtmosfairClient {
    async fn submit(
        &self,
        legs: &[FlightLeg],
    ) -> Result<Vec<FlightRecord>, Box<dyn std::error::Error + Send + Sync>> {
        info!(flights = legs.len(), "emissions_batch_submitted");
        let response = self.post(&self.request_body(legs)).await?;
        Self::records_from(response)
    }

    async fn submit_one(
        &self,
        leg: &FlightLeg,
    ) -> Result<FlightRecord, Box<dyn std::error::Error + Send + Sync>> {
        let response = self.post(&self.request_body(std::slice::from_ref(leg))).await?;
        let records = Self::records_from(response)?;

        match records.into_iter().next() {
            Some(record) => Ok(record),
            None => Err("atmosfair returned no record for a single-flight request".into()),
        }
    }
}
