pub mod create;
pub mod delete;
pub mod detail;
pub mod edit;
pub mod home;

pub use create::{create_form_handler, create_handler};
pub use delete::{delete_confirm_handler, delete_handler};
pub use detail::detail_handler;
pub use edit::{edit_form_handler, edit_handler};
pub use home::home_handler;
