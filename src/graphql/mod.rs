//! GraphQL — transport for the shop API operand queries.
//!
//! DESIGN
//! ======
//! The filter core only sees the [`OperandSource`] trait: one operation in,
//! the raw `data` object out. [`GraphqlClient`] is the reqwest-backed
//! implementation configured from environment variables; tests substitute
//! in-process mocks.

pub mod client;
pub mod config;
pub mod queries;
pub mod types;

pub use client::GraphqlClient;
pub use config::GraphqlConfig;
pub use queries::Operation;
pub use types::{GraphqlError, OperandSource};
