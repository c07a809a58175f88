//! User domain actions - business logic functions

mod edit_user;
mod get_self;

pub use edit_user::edit_user;
pub use get_self::get_self;
