pub mod member_list;
pub mod subordinate_picker;

pub use member_list::*;
pub use subordinate_picker::*;
