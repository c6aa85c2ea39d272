//! Route guard hooks shared by the pages.

pub mod use_admin_required;
pub mod use_login_required;

pub use use_admin_required::use_admin_required;
pub use use_login_required::use_login_required;
