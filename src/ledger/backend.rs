use std::time::Duration;

use serde::Deserialize;

use crate::error::{FitError, Result};
use crate::ledger::aggregator::aggregate_request;
use crate::models::{DailyLedger, LedgerRequest, Meal};

/// Default request timeout for the remote ledger.
pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(10);

/// Something that can turn a ledger request into daily totals.
pub trait LedgerBackend {
    fn name(&self) -> &str;

    fn calculate(&self, request: &LedgerRequest) -> Result<DailyLedger>;
}

/// In-process aggregation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalLedger;

impl LedgerBackend for LocalLedger {
    fn name(&self) -> &str {
        "local"
    }

    fn calculate(&self, request: &LedgerRequest) -> Result<DailyLedger> {
        aggregate_request(request)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Aggregation through a `/calculate-calories` endpoint.
pub struct RemoteLedger {
    url: String,
    client: reqwest::blocking::Client,
}

impl RemoteLedger {
    /// `url` is the full endpoint URL.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl LedgerBackend for RemoteLedger {
    fn name(&self) -> &str {
        "remote"
    }

    fn calculate(&self, request: &LedgerRequest) -> Result<DailyLedger> {
        tracing::debug!(url = %self.url, meals = request.meals.len(), "posting ledger request");

        let response = self.client.post(&self.url).json(request).send()?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .map(|b| b.error)
                .unwrap_or_else(|_| "unexpected response body".to_string());
            return Err(FitError::Remote(format!("{}: {}", status, message)));
        }

        Ok(response.json::<DailyLedger>()?)
    }
}

/// Compute daily totals, preferring `primary`.
///
/// Falls back to local aggregation when `primary` fails, and to a zeroed
/// ledger when the meals themselves are malformed.
pub fn calculate_totals(
    primary: &dyn LedgerBackend,
    meals: &[Meal],
    calories_burned: f64,
) -> DailyLedger {
    let request = LedgerRequest::new(meals.to_vec(), calories_burned);

    match primary.calculate(&request) {
        Ok(ledger) => return ledger,
        Err(e) => {
            tracing::warn!(backend = primary.name(), error = %e, "ledger backend failed");
        }
    }

    if primary.name() != LocalLedger.name() {
        match LocalLedger.calculate(&request) {
            Ok(ledger) => return ledger,
            Err(e) => {
                tracing::warn!(error = %e, "local aggregation failed");
            }
        }
    }

    tracing::warn!("falling back to zero totals");
    DailyLedger::zeroed(meals, calories_burned)
}
