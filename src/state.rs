//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the operand source every filter request dispatches against and the
//! retry policy for those queries.

use std::sync::Arc;

use crate::filters::DispatchConfig;
use crate::graphql::OperandSource;

/// Clone is required by Axum; the source is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn OperandSource>,
    pub dispatch: DispatchConfig,
}

impl AppState {
    #[must_use]
    pub fn new(source: Arc<dyn OperandSource>, dispatch: DispatchConfig) -> Self {
        Self { source, dispatch }
    }
}
