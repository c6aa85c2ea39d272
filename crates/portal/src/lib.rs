//! The shared library for PORTal, the qualification-tracking portal's browser client.
//!
//! Everything that decides *where a visitor may go* lives here: the wire types,
//! the API client, persisted-session storage, the application context, the
//! session bootstrapper and route guards, and the roster helpers used by the
//! admin panel. The Yew frontend only wires these to the browser.

pub mod api;
pub mod config;
pub mod context;
pub mod data;
pub mod errors;
pub mod guard;
pub mod id;
pub mod log;
pub mod macros;
pub mod roster;
pub mod session;
pub mod storage;
pub mod time;

#[cfg(test)]
mod testing;

pub use serde;
pub use serde_json;
pub use tracing;
