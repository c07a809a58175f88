// HTTP routes
pub mod auth;
pub mod bookmarks;
pub mod health;
pub mod users;

pub use auth::*;
pub use bookmarks::*;
pub use health::*;
pub use users::*;
