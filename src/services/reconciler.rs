//! Degraded batch repair via individual re-submission
//!
//! atmosfair sometimes answers a batch request with a contiguous run of
//! zero-offset records, observed as a rate-limit artifact rather than real
//! zero-emissions flights. This module finds that run and resubmits each
//! affected flight one at a time, merging the results back in original
//! order. Retries are sequential with no backoff: the individual
//! resubmission itself is the mitigation.

use crate::domain::types::{FlightLeg, FlightRecord};
use async_trait::async_trait;
use tracing::{info, warn};

/// Submission seam to the emissions service
#[async_trait]
pub trait FlightCalculator {
    /// Submit a batch of flights as one request
    async fn submit(
        &self,
        legs: &[FlightLeg],
    ) -> Result<Vec<FlightRecord>, Box<dyn std::error::Error + Send + Sync>>;

    /// Submit a single flight, used for degraded-window retries
    async fn submit_one(
        &self,
        leg: &FlightLeg,
    ) -> Result<FlightRecord, Box<dyn std::error::Error + Send + Sync>>;
}

/// Bounds of the degraded run as `[start, end)`, or `None` when the batch
/// needs no repair.
///
/// Known limitation, kept deliberately: a degraded run that extends to the
/// very end of the batch has no healthy record after it and is never
/// retried.
fn degraded_window(records: &[FlightRecord]) -> Option<(usize, usize)> {
    let start = records.iter().position(|r| r.is_degraded())?;
    let end = records[start..]
        .iter()
        .position(|r| !r.is_degraded())
        .map(|offset| start + offset)?;

    if start >= end {
        return None;
    }
    Some((start, end))
}

/// Repairs the degraded window of a batch response
pub struct Reconciler<'a, C: FlightCalculator> {
    calculator: &'a C,
}

impl<'a, C: FlightCalculator> Reconciler<'a, C> {
    pub fn new(calculator: &'a C) -> Self {
        Self { calculator }
    }

    /// Resubmit every flight in the degraded window individually and splice
    /// the answers back into place.
    ///
    /// Order and length of the batch are preserved; only the window's values
    /// change. A record whose retry also fails stays degraded at its
    /// position rather than aborting the whole batch.
    pub async fn reconcile(&self, records: Vec<FlightRecord>) -> Vec<FlightRecord> {
        let Some((start, end)) = degraded_window(&records) else {
            return records;
        };

        info!(start = start, end = end, flights = records.len(), "degraded_window_detected");

        let mut retried = Vec::with_capacity(end - start);
        for record in &records[start..end] {
            let leg = record.leg();
            match self.calculator.submit_one(&leg).await {
                Ok(resolved) => retried.push(resolved),
                Err(e) => {
                    warn!(
                        departure = %leg.departure,
                        arrival = %leg.arrival,
                        date = %leg.departure_date,
                        error = %e,
                        "flight_retry_failed"
                    );
                    retried.push(FlightRecord::degraded(&leg));
                }
            }
        }

        // Merge into a fresh buffer, never aliasing the source batch
        let mut merged = Vec::with_capacity(records.len());
        merged.extend_from_slice(&records[..start]);
        merged.extend(retried);
        merged.extend_from_slice(&records[end..]);
        merged
    }
}
