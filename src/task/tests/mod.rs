//! Unit tests for the task domain, the registry service, and the
//! persistence row mapping.

mod domain_tests;
mod service_tests;
