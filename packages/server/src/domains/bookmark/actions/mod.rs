//! Bookmark domain actions - business logic functions
//!
//! Every action takes the authenticated caller's id as an explicit argument;
//! there is no ambient request context at this layer.

mod create_bookmark;
mod delete_bookmark;
mod edit_bookmark;
mod queries;

pub use create_bookmark::create_bookmark;
pub use delete_bookmark::delete_bookmark;
pub use edit_bookmark::edit_bookmark;
pub use queries::{get_bookmark_by_id, get_bookmarks};
