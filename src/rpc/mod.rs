//! Remote-procedure surface of the task registry.
//!
//! One request/response pair per operation, carried as JSON over HTTP POST.
//! Every request embeds the caller's opaque bearer token; every failure is
//! rendered through the five-code status taxonomy in [`status`].

pub mod server;
pub mod status;
pub mod wire;


pub use server::router;
pub use status::{RpcError, StatusCode};
