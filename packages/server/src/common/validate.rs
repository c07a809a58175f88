//! Input validation helpers for request payloads.
//!
//! Validation runs in the route layer, before any workflow is invoked.

/// Check that an email address is plausibly well-formed.
///
/// Requires a non-empty local part, an `@`, and a domain containing a dot.
/// Full RFC 5322 parsing is deliberately out of scope; the unique constraint
/// on the users table is the real gatekeeper.
pub fn is_well_formed_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
