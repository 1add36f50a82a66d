//! Filters — initial filter state for the product list filter UI.
//!
//! ARCHITECTURE
//! ============
//! A [`FilterRequest`] names the identifiers a user selected per dimension.
//! The dispatcher turns it into at most five operand queries and runs them
//! concurrently; the aggregator classifies each result against the
//! dimension it was dispatched for, normalizes it into options, and folds
//! everything into a fresh [`AggregatedState`]. [`FilterStateMachine`] wraps
//! the cycle for long-lived consumers; [`resolve`] runs it once.

pub mod aggregate;
pub mod dispatch;
pub mod option;
pub mod request;
pub mod state;

#[cfg(test)]
pub(crate) mod test_helpers;

use tracing::{info, warn};
use uuid::Uuid;

pub use aggregate::{AggregatedState, Aggregation, ClassificationError, DimensionFailure};
pub use dispatch::DispatchConfig;
pub use option::{AttributeEntry, ItemOption};
pub use request::{Dimension, FilterRequest};
pub use state::{FilterPhase, FilterStateMachine, InitialStateView};

use crate::graphql::OperandSource;

/// Run one aggregation cycle: dispatch, join, fold.
///
/// Failed queries are reported per dimension in [`Aggregation::failures`].
///
/// # Errors
///
/// Returns a [`ClassificationError`] when a result does not have the shape
/// of the dimension it was dispatched for.
pub async fn resolve(
    source: &dyn OperandSource,
    request: &FilterRequest,
    config: DispatchConfig,
) -> Result<Aggregation, ClassificationError> {
    let cycle = Uuid::new_v4();
    let dimensions: Vec<&str> = dispatch::plan(request)
        .iter()
        .map(|(d, _)| d.as_str())
        .collect();
    if dimensions.is_empty() {
        info!(%cycle, "filters: empty request, nothing to dispatch");
        return Ok(Aggregation::default());
    }
    info!(%cycle, ?dimensions, "filters: dispatching operand queries");

    let outcomes = dispatch::dispatch(source, request, config).await;
    let aggregation = aggregate::aggregate(request, &outcomes)?;

    if aggregation.failures.is_empty() {
        info!(%cycle, "filters: aggregation complete");
    } else {
        let failed: Vec<&str> = aggregation.failures.keys().map(|d| d.as_str()).collect();
        warn!(%cycle, ?failed, "filters: aggregation complete with failed dimensions");
    }
    Ok(aggregation)
}
