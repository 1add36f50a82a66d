//! In-process `OperandSource` for filter tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::{Value, json};
use tokio::sync::{Barrier, watch};

use crate::graphql::{GraphqlError, OperandSource, Operation};

/// Answers every operation from a fixture derived from its variables unless
/// a scripted response is queued for that operation name.
pub(crate) struct MockSource {
    scripted: Mutex<HashMap<&'static str, VecDeque<Result<Value, GraphqlError>>>>,
    calls: Mutex<Vec<Operation>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    barrier: Option<Barrier>,
    gate: Option<watch::Receiver<bool>>,
}

impl MockSource {
    pub(crate) fn new() -> Self {
        Self {
            scripted: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            barrier: None,
            gate: None,
        }
    }

    /// Every call waits until `n` calls are in flight together.
    pub(crate) fn with_barrier(mut self, n: usize) -> Self {
        self.barrier = Some(Barrier::new(n));
        self
    }

    /// Every call waits until the gate is opened with `true`.
    pub(crate) fn with_gate(mut self, gate: watch::Receiver<bool>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub(crate) fn script(&self, operation_name: &'static str, response: Result<Value, GraphqlError>) {
        self.scripted
            .lock()
            .unwrap()
            .entry(operation_name)
            .or_default()
            .push_back(response);
    }

    pub(crate) fn calls(&self) -> Vec<Operation> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self, operation_name: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|op| op.name() == operation_name)
            .count()
    }

    pub(crate) fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl OperandSource for MockSource {
    async fn execute(&self, operation: &Operation) -> Result<Value, GraphqlError> {
        self.calls.lock().unwrap().push(operation.clone());
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
        if let Some(gate) = &self.gate {
            let mut gate = gate.clone();
            let _ = gate.wait_for(|open| *open).await;
        }

        let scripted = self
            .scripted
            .lock()
            .unwrap()
            .get_mut(operation.name())
            .and_then(VecDeque::pop_front);
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        scripted.unwrap_or_else(|| Ok(fixture(operation)))
    }
}

/// The channel catalog served by the mock.
pub(crate) fn channel_catalog() -> Value {
    json!({ "channels": [
        { "id": "Q2g6MQ==", "name": "Channel One", "slug": "ch1" },
        { "id": "Q2g6Mg==", "name": "Channel Two", "slug": "ch2" },
        { "id": "Q2g6Mw==", "name": "Channel Three", "slug": "ch3" },
    ] })
}

fn named_edges(slugs: &[String]) -> Value {
    let edges: Vec<Value> = slugs
        .iter()
        .map(|slug| json!({ "node": { "id": format!("id-{slug}"), "name": title(slug), "slug": slug } }))
        .collect();
    json!({ "edges": edges })
}

fn title(slug: &str) -> String {
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(crate) fn fixture(operation: &Operation) -> Value {
    match operation {
        Operation::Channels => channel_catalog(),
        Operation::Collections { slugs } => json!({ "collections": named_edges(slugs) }),
        Operation::Categories { slugs } => json!({ "categories": named_edges(slugs) }),
        Operation::ProductTypes { slugs } => json!({ "productTypes": named_edges(slugs) }),
        Operation::Attributes { slugs, choice_ids } => {
            let edges: Vec<Value> = slugs
                .iter()
                .map(|slug| {
                    json!({ "node": {
                        "id": format!("attr-{slug}"),
                        "name": title(slug),
                        "slug": slug,
                        "inputType": "DROPDOWN",
                        "choices": named_edges_with_ids(choice_ids),
                    } })
                })
                .collect();
            json!({ "attributes": { "edges": edges } })
        }
    }
}

fn named_edges_with_ids(ids: &[String]) -> Value {
    let edges: Vec<Value> = ids
        .iter()
        .map(|id| json!({ "node": { "id": id, "name": title(id), "slug": id } }))
        .collect();
    json!({ "edges": edges })
}
