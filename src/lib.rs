//! Dashboard filters service.
//!
//! Resolves the identifiers selected in the product list URL into labelled
//! filter options by querying the commerce GraphQL API, and serves the
//! supporting pieces of the dashboard's product screens: localized date
//! display and the variant datagrid model.

pub mod error;
pub mod filters;
pub mod graphql;
pub mod humanize;
pub mod routes;
pub mod state;
pub mod variants;
