//! Auth domain - handles signup, signin, and bearer-token issuance
//!
//! Responsibilities:
//! - Password hashing and verification (argon2)
//! - JWT access-token management
//! - Login-on-signup: signup returns a token exactly as signin does

pub mod actions;
pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtService, TokenResponse};
