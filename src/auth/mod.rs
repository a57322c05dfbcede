//! Token-verification capability for the task registry.
//!
//! The registry never inspects tokens itself. It depends on the
//! [`ports::TokenVerifier`] port, which turns an opaque bearer token into
//! an equally opaque [`ports::Claims`] object answering only one question:
//! does the identity carry a given role. Deployments plug in their own
//! verifier; the crate ships a static adapter for tests and single-token
//! installations.

pub mod adapters;
pub mod ports;

pub use adapters::StaticTokenVerifier;
pub use ports::{AuthError, AuthResult, Claims, TokenVerifier};
