//! Log sanitization utilities
//!
//! Keeps bearer tokens out of logs and error dumps, and stops large
//! record bodies (DKIM keys, long TXT values) from flooding debug output.

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Placeholder written in place of a credential.
pub const REDACTED: &str = "<redacted>";

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit,
/// otherwise returns the first `TRUNCATE_LIMIT` bytes (on a char boundary)
/// with a suffix indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Replace every occurrence of `secret` in `s` with [`REDACTED`].
///
/// An empty secret leaves the input untouched.
pub fn redact(s: &str, secret: &str) -> String {
    if secret.is_empty() {
        s.to_string()
    } else {
        s.replace(secret, REDACTED)
    }
}

/// Render a request for diagnostics: request line, auth header and body, token redacted.
pub fn dump_request(method: &str, url: &str, body: Option<&str>, token: &str) -> String {
    let mut dump = format!("{method} {url}\nAuthorization: Bearer {REDACTED}");
    if let Some(body) = body {
        dump.push_str("\n\n");
        dump.push_str(body);
    }
    redact(&dump, token)
}
