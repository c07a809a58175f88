// Bookmark manager API
//
// This crate provides a multi-tenant bookmark API: users sign up, authenticate
// with bearer tokens, and manage bookmark records scoped to their account.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
