//! Clinic task registry microservice.
//!
//! Stores clinical task records (title, description, required expertise,
//! completion state, associated patient) and exposes create, read, update,
//! delete, and list operations over an authenticated remote-procedure
//! surface. Every operation requires a verified bearer token carrying the
//! `admin` role. Records are soft deleted: a deletion timestamp hides them
//! from listings while keeping them retrievable by id.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, APIs, etc.)
//!
//! # Modules
//!
//! - [`task`]: task domain model, persistence, and the registry service
//! - [`auth`]: token-verification capability consumed by the service
//! - [`rpc`]: wire types, status taxonomy, and the HTTP transport
//! - [`config`]: environment configuration for the server binary

pub mod auth;
pub mod config;
pub mod rpc;
pub mod task;
