//! Context providers for shared application state and services.

pub mod api;
pub mod session;

pub use session::{SessionProvider, use_session};
