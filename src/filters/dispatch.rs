//! Query dispatch — conditional fan-out of operand queries.
//!
//! DESIGN
//! ======
//! One query per non-empty dimension, none for empty ones. All planned
//! queries are polled together in the caller's task and joined; each result
//! stays paired with its dimension, so one failure never blanks the rest.
//! Retryable failures are retried with exponential backoff plus jitter.

use std::time::Duration;

use rand::Rng;
use tracing::warn;

use super::aggregate::{DimensionFailure, DimensionOutcome};
use super::request::{Dimension, FilterRequest};
use crate::error::ErrorCode;
use crate::graphql::{OperandSource, Operation};

const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_BACKOFF_MS: u64 = 200;
const MAX_BACKOFF_SHIFT: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Total attempts per query, first try included.
    pub max_attempts: u32,
    /// Delay before the first retry; doubles on each further retry.
    pub backoff: Duration,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self { max_attempts: DEFAULT_MAX_ATTEMPTS, backoff: Duration::from_millis(DEFAULT_BACKOFF_MS) }
    }
}

impl DispatchConfig {
    /// Read `FILTER_QUERY_MAX_ATTEMPTS` and `FILTER_QUERY_BACKOFF_MS`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_attempts: env_parse("FILTER_QUERY_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS),
            backoff: Duration::from_millis(env_parse("FILTER_QUERY_BACKOFF_MS", DEFAULT_BACKOFF_MS)),
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

// =============================================================================
// PLANNING
// =============================================================================

/// The operation answering `dimension`, or `None` when nothing is requested.
#[must_use]
pub fn operation_for(request: &FilterRequest, dimension: Dimension) -> Option<Operation> {
    if !request.requests(dimension) {
        return None;
    }
    let op = match dimension {
        Dimension::Channel => Operation::Channels,
        Dimension::Collection => Operation::Collections { slugs: request.collection().to_vec() },
        Dimension::Category => Operation::Categories { slugs: request.category().to_vec() },
        Dimension::ProductType => Operation::ProductTypes { slugs: request.product_type().to_vec() },
        Dimension::Attribute => Operation::Attributes {
            slugs: request.attribute_slugs(),
            choice_ids: request.attribute_choice_ids(),
        },
    };
    Some(op)
}

/// Every operation needed for `request`, tagged with its dimension.
#[must_use]
pub fn plan(request: &FilterRequest) -> Vec<(Dimension, Operation)> {
    Dimension::ALL
        .into_iter()
        .filter_map(|d| operation_for(request, d).map(|op| (d, op)))
        .collect()
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Run every planned query concurrently and wait for all of them.
pub async fn dispatch(source: &dyn OperandSource, request: &FilterRequest, config: DispatchConfig) -> Vec<DimensionOutcome> {
    let queries = plan(request).into_iter().map(|(dimension, op)| async move {
        let outcome = execute_with_retry(source, dimension, &op, config).await;
        (dimension, outcome)
    });
    futures::future::join_all(queries).await
}

async fn execute_with_retry(
    source: &dyn OperandSource,
    dimension: Dimension,
    op: &Operation,
    config: DispatchConfig,
) -> Result<serde_json::Value, DimensionFailure> {
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 0;
    loop {
        attempt += 1;
        match source.execute(op).await {
            Ok(data) => return Ok(data),
            Err(e) if e.retryable() && attempt < max_attempts => {
                let delay = backoff_delay(config.backoff, attempt);
                warn!(%dimension, operation = op.name(), attempt, error = %e, ?delay, "filters: retrying query");
                tokio::time::sleep(delay).await;
            }
            Err(e) => {
                warn!(%dimension, operation = op.name(), attempt, error = %e, "filters: query failed");
                return Err(DimensionFailure::from_error(&e, attempt));
            }
        }
    }
}

/// `base * 2^(attempt-1)` plus up to half of `base` of jitter.
fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    let shift = attempt.saturating_sub(1).min(MAX_BACKOFF_SHIFT);
    let exp = base.saturating_mul(1 << shift);
    let jitter_cap = u64::try_from(base.as_millis() / 2).unwrap_or(u64::MAX);
    let jitter = rand::rng().random_range(0..=jitter_cap);
    exp.saturating_add(Duration::from_millis(jitter))
}

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod tests;
