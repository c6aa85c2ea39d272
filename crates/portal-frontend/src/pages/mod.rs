//! Page components for different routes in the application.

pub mod admin;
pub mod dashboard;
pub mod login;
pub mod qualifications;

pub use admin::*;
pub use dashboard::*;
pub use login::*;
pub use qualifications::*;
