//! Bookmark domain - per-user bookmark records
//!
//! Every operation is scoped to the authenticated owner. Reads use a single
//! owner-filtered query; mutations fetch by id first so a mismatched owner
//! produces a distinct forbidden signal in the logs.

pub mod actions;
pub mod models;

pub use models::bookmark::{Bookmark, BookmarkChanges, NewBookmark};
