//! Reusable UI components for the portal frontend.
//!
//! Contains the session bootstrapper, navigation, and the building blocks of
//! the dashboard and admin pages.

pub mod admin;
pub mod bootstrapper;
pub mod full_page_spinner;
pub mod nav;
pub mod profile_card;
pub mod qualification_list;
pub mod search;

pub use bootstrapper::*;
pub use full_page_spinner::*;
pub use nav::*;
pub use profile_card::*;
pub use qualification_list::*;
pub use search::*;
