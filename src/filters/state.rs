//! Filter state machine — `Idle → Dispatching → Aggregated | Failed`.
//!
//! DESIGN
//! ======
//! The phase lives in a `watch` channel: `snapshot` pulls it, `subscribe`
//! pushes every transition. Each submitted request gets a new generation.
//! Submitting a different request aborts the in-flight cycle, and a result
//! whose generation is no longer current is discarded on arrival.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use super::aggregate::{AggregatedState, Aggregation, DimensionFailure};
use super::dispatch::DispatchConfig;
use super::request::{Dimension, FilterRequest};
use crate::error::ErrorBody;
use crate::graphql::OperandSource;

// =============================================================================
// PHASE
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum FilterPhase {
    /// No request submitted yet.
    Idle,
    Dispatching { generation: u64 },
    Aggregated { generation: u64, aggregation: Arc<Aggregation> },
    /// The cycle hit a classification error.
    Failed { generation: u64, error: ErrorBody },
}

impl FilterPhase {
    #[must_use]
    pub fn generation(&self) -> Option<u64> {
        match self {
            Self::Idle => None,
            Self::Dispatching { generation }
            | Self::Aggregated { generation, .. }
            | Self::Failed { generation, .. } => Some(*generation),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Dispatching { .. })
    }
}

/// What the filter UI consumes: data is default until the cycle settles,
/// then replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct InitialStateView {
    pub data: AggregatedState,
    pub loading: bool,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub failures: BTreeMap<Dimension, DimensionFailure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl InitialStateView {
    #[must_use]
    pub fn settled(aggregation: Aggregation) -> Self {
        Self { data: aggregation.state, loading: false, failures: aggregation.failures, error: None }
    }
}

impl From<&FilterPhase> for InitialStateView {
    fn from(phase: &FilterPhase) -> Self {
        match phase {
            FilterPhase::Idle => Self::default(),
            FilterPhase::Dispatching { .. } => Self { loading: true, ..Self::default() },
            FilterPhase::Aggregated { aggregation, .. } => Self::settled(aggregation.as_ref().clone()),
            FilterPhase::Failed { error, .. } => Self { error: Some(error.clone()), ..Self::default() },
        }
    }
}

// =============================================================================
// MACHINE
// =============================================================================

pub struct FilterStateMachine {
    source: Arc<dyn OperandSource>,
    config: DispatchConfig,
    phase: Arc<watch::Sender<FilterPhase>>,
    inner: Mutex<MachineInner>,
}

#[derive(Default)]
struct MachineInner {
    generation: u64,
    request: Option<FilterRequest>,
    task: Option<JoinHandle<()>>,
}

impl FilterStateMachine {
    #[must_use]
    pub fn new(source: Arc<dyn OperandSource>, config: DispatchConfig) -> Self {
        let (phase, _) = watch::channel(FilterPhase::Idle);
        Self { source, config, phase: Arc::new(phase), inner: Mutex::new(MachineInner::default()) }
    }

    /// Submit the current request. Returns `false` when it equals the one
    /// already submitted and nothing was dispatched.
    ///
    /// Must be called within a Tokio runtime.
    pub fn set_request(&self, request: FilterRequest) -> bool {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        self.submit(&mut inner, request, false)
    }

    /// Re-dispatch the last submitted request, e.g. after failures.
    pub fn refresh(&self) -> bool {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        match inner.request.clone() {
            Some(request) => self.submit(&mut inner, request, true),
            None => false,
        }
    }

    /// The last submitted request.
    #[must_use]
    pub fn request(&self) -> Option<FilterRequest> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .request
            .clone()
    }

    fn submit(&self, inner: &mut MachineInner, request: FilterRequest, force: bool) -> bool {
        if !force && inner.request.as_ref() == Some(&request) {
            return false;
        }

        inner.generation += 1;
        let generation = inner.generation;
        if let Some(stale) = inner.task.take() {
            debug!(generation, "filters: aborting stale cycle");
            stale.abort();
        }
        inner.request = Some(request.clone());

        if request.is_empty() {
            self.phase
                .send_replace(FilterPhase::Aggregated { generation, aggregation: Arc::new(Aggregation::default()) });
            return true;
        }

        self.phase.send_replace(FilterPhase::Dispatching { generation });
        let source = Arc::clone(&self.source);
        let phase = Arc::clone(&self.phase);
        let config = self.config;
        inner.task = Some(tokio::spawn(async move {
            let next = match super::resolve(source.as_ref(), &request, config).await {
                Ok(aggregation) => FilterPhase::Aggregated { generation, aggregation: Arc::new(aggregation) },
                Err(e) => {
                    error!(generation, error = %e, "filters: aggregation failed");
                    FilterPhase::Failed { generation, error: ErrorBody::from_error(&e) }
                }
            };
            phase.send_if_modified(|current| {
                if *current == (FilterPhase::Dispatching { generation }) {
                    *current = next;
                    true
                } else {
                    debug!(generation, "filters: discarding stale result");
                    false
                }
            });
        }));
        true
    }

    #[must_use]
    pub fn phase(&self) -> FilterPhase {
        self.phase.borrow().clone()
    }

    /// Pull the current view.
    #[must_use]
    pub fn snapshot(&self) -> InitialStateView {
        InitialStateView::from(&*self.phase.borrow())
    }

    /// Push every phase transition to the returned receiver.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FilterPhase> {
        self.phase.subscribe()
    }

    /// Wait until the current cycle leaves `Dispatching`.
    pub async fn settled(&self) -> InitialStateView {
        let mut rx = self.subscribe();
        match rx.wait_for(|phase| !phase.is_loading()).await {
            Ok(phase) => InitialStateView::from(&*phase),
            Err(_) => self.snapshot(),
        }
    }
}

impl Drop for FilterStateMachine {
    fn drop(&mut self) {
        let inner = self.inner.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(task) = inner.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
