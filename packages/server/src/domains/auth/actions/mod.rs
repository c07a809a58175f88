//! Auth domain actions - business logic functions
//!
//! Actions are async functions called from route handlers. They take the
//! caller-supplied credentials plus the shared pool and token service, and
//! return a `TokenResponse` or a typed `ApiError`.

mod signin;
mod signup;

pub use signin::signin;
pub use signup::signup;
