pub mod params;
pub mod server;

/// Authorization schemes recognized while reconstructing credentials from an
/// `Authorization` header value.
///
/// The scheme is the leading token of the value (`Basic dXNlcjpwdw==`,
/// `Digest realm="..."`, `Bearer <token>`). Anything else maps to
/// [`AuthScheme::Unknown`] and produces no credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    Basic,
    Digest,
    Bearer,
    Unknown,
}

/// Matches the leading scheme token of a raw authorization value,
/// ASCII-case-insensitively.
pub fn auth_scheme_from_value(value: &str) -> AuthScheme {
    if scheme_matches(value, "basic ") {
        AuthScheme::Basic
    } else if scheme_matches(value, "digest ") {
        AuthScheme::Digest
    } else if scheme_matches(value, "bearer ") {
        AuthScheme::Bearer
    } else {
        AuthScheme::Unknown
    }
}

// Compared as raw bytes; the prefixes are ASCII and the value may not be.
fn scheme_matches(value: &str, prefix: &str) -> bool {
    let value = value.as_bytes();
    let prefix = prefix.as_bytes();
    value.len() >= prefix.len() && value[..prefix.len()].eq_ignore_ascii_case(prefix)
}
