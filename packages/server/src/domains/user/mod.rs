//! User domain - account records and self-service profile management

pub mod actions;
pub mod models;

pub use models::user::{User, UserChanges, UserProfile};
