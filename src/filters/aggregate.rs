//! Classification and merge of resolved operand queries.
//!
//! DESIGN
//! ======
//! Every result arrives paired with the dimension it was dispatched for.
//! The classifier still probes the `data` object for the five marker fields
//! and requires exactly one, equal to the dispatch tag, so a schema drift
//! between dispatcher and API surfaces as a [`ClassificationError`] instead
//! of a silently dropped result.
//!
//! The fold is synchronous and starts from defaults every time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::option::{AttributeEntry, ItemOption, options_from_edges};
use super::request::{Dimension, FilterRequest};
use crate::error::ErrorCode;
use crate::graphql::types::{AttributeNode, ChannelNode, Connection, NamedNode};

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassificationError {
    #[error("{dimension} result matched no operand shape")]
    NoMatch { dimension: Dimension },
    #[error("{dimension} result matched several operand shapes: {fields:?}")]
    Ambiguous { dimension: Dimension, fields: Vec<&'static str> },
    #[error("{dimension} result carried `{found}` instead of `{expected}`")]
    Mismatch { dimension: Dimension, expected: &'static str, found: &'static str },
    #[error("{dimension} result field `{field}` is malformed: {reason}")]
    Malformed { dimension: Dimension, field: &'static str, reason: String },
}

impl ErrorCode for ClassificationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoMatch { .. } => "E_CLASSIFY_NO_MATCH",
            Self::Ambiguous { .. } => "E_CLASSIFY_AMBIGUOUS",
            Self::Mismatch { .. } => "E_CLASSIFY_MISMATCH",
            Self::Malformed { .. } => "E_CLASSIFY_MALFORMED",
        }
    }
}

/// A dimension whose query failed after retries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionFailure {
    pub code: String,
    pub message: String,
    pub retryable: bool,
    pub attempts: u32,
}

impl DimensionFailure {
    #[must_use]
    pub fn from_error(err: &(impl ErrorCode + ?Sized), attempts: u32) -> Self {
        Self { code: err.error_code().to_string(), message: err.to_string(), retryable: err.retryable(), attempts }
    }
}

/// Outcome of one dispatched query.
pub type DimensionOutcome = (Dimension, Result<Value, DimensionFailure>);

// =============================================================================
// QUERY RESULT
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    Channels(Vec<ChannelNode>),
    Collections(Connection<NamedNode>),
    Categories(Connection<NamedNode>),
    ProductTypes(Connection<NamedNode>),
    Attributes(Connection<AttributeNode>),
}

impl QueryResult {
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        match self {
            Self::Channels(_) => Dimension::Channel,
            Self::Collections(_) => Dimension::Collection,
            Self::Categories(_) => Dimension::Category,
            Self::ProductTypes(_) => Dimension::ProductType,
            Self::Attributes(_) => Dimension::Attribute,
        }
    }
}

/// Classify the `data` object returned for `dimension`.
///
/// # Errors
///
/// Fails when zero or several marker fields are present, when the single
/// marker does not belong to `dimension`, or when its payload has the wrong
/// shape.
pub fn classify(dimension: Dimension, data: &Value) -> Result<QueryResult, ClassificationError> {
    let present: Vec<Dimension> = Dimension::ALL
        .into_iter()
        .filter(|d| data.get(d.marker_field()).is_some_and(|v| !v.is_null()))
        .collect();

    match present.as_slice() {
        [] => Err(ClassificationError::NoMatch { dimension }),
        [found] if *found == dimension => decode(dimension, &data[dimension.marker_field()]),
        [found] => Err(ClassificationError::Mismatch {
            dimension,
            expected: dimension.marker_field(),
            found: found.marker_field(),
        }),
        many => Err(ClassificationError::Ambiguous {
            dimension,
            fields: many.iter().map(|d| d.marker_field()).collect(),
        }),
    }
}

fn decode(dimension: Dimension, payload: &Value) -> Result<QueryResult, ClassificationError> {
    let malformed = |e: serde_json::Error| ClassificationError::Malformed {
        dimension,
        field: dimension.marker_field(),
        reason: e.to_string(),
    };
    let result = match dimension {
        Dimension::Channel => QueryResult::Channels(Vec::deserialize(payload).map_err(malformed)?),
        Dimension::Collection => QueryResult::Collections(Connection::deserialize(payload).map_err(malformed)?),
        Dimension::Category => QueryResult::Categories(Connection::deserialize(payload).map_err(malformed)?),
        Dimension::ProductType => QueryResult::ProductTypes(Connection::deserialize(payload).map_err(malformed)?),
        Dimension::Attribute => QueryResult::Attributes(Connection::deserialize(payload).map_err(malformed)?),
    };
    Ok(result)
}

// =============================================================================
// AGGREGATED STATE
// =============================================================================

/// Options per dimension, handed wholesale to the filter UI.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AggregatedState {
    pub category: Vec<ItemOption>,
    pub collection: Vec<ItemOption>,
    pub producttype: Vec<ItemOption>,
    pub channel: Vec<ItemOption>,
    pub attribute: BTreeMap<String, AttributeEntry>,
}

/// Aggregated state plus the dimensions that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Aggregation {
    pub state: AggregatedState,
    pub failures: BTreeMap<Dimension, DimensionFailure>,
}

/// Fold resolved outcomes into a fresh [`Aggregation`].
///
/// # Errors
///
/// Returns the first [`ClassificationError`]; the cycle is abandoned.
pub fn aggregate(request: &FilterRequest, outcomes: &[DimensionOutcome]) -> Result<Aggregation, ClassificationError> {
    let mut aggregation = Aggregation::default();
    for (dimension, outcome) in outcomes {
        match outcome {
            Ok(data) => {
                let result = classify(*dimension, data)?;
                apply(&mut aggregation.state, request, result);
            }
            Err(failure) => {
                aggregation.failures.insert(*dimension, failure.clone());
            }
        }
    }
    Ok(aggregation)
}

fn apply(state: &mut AggregatedState, request: &FilterRequest, result: QueryResult) {
    match result {
        QueryResult::Channels(channels) => {
            state.channel = channels
                .iter()
                .filter(|c| request.channel().contains(&c.slug))
                .map(ItemOption::from)
                .collect();
        }
        QueryResult::Collections(conn) => state.collection = options_from_edges(&conn.edges),
        QueryResult::Categories(conn) => state.category = options_from_edges(&conn.edges),
        QueryResult::ProductTypes(conn) => state.producttype = options_from_edges(&conn.edges),
        QueryResult::Attributes(conn) => {
            state.attribute = conn
                .edges
                .iter()
                .map(|edge| (edge.node.slug.clone(), AttributeEntry::from(&edge.node)))
                .collect();
        }
    }
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
