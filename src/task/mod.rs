//! Task registry for the clinic tasks microservice.
//!
//! This module implements the full task lifecycle: authenticated creation,
//! retrieval by id (including soft-deleted records), paginated id listing,
//! full-record update, soft deletion, and per-patient listing. The module
//! follows hexagonal architecture:
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
