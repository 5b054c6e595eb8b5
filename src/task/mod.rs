//! Task board management.
//!
//! Tasks fetched from the document store are partitioned into status
//! columns; a drag-and-drop move is reconciled into an optimistic board plus
//! the smallest batch of `{id, status, position}` rows that persists it. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
