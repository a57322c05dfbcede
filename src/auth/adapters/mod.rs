//! Adapter implementations of the token-verification port.

mod static_token;

pub use static_token::StaticTokenVerifier;
