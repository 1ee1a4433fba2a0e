//! Percent-encoding for identifiers interpolated into API paths.
//!
//! Board ids, host names, synthetics public ids and the like are caller
//! supplied; encoding them keeps `a/b` from becoming a nested path and `a?b`
//! from starting a query string.
//!
//! ```
//! use datadog_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("web-01/eu"), "web-01%2Feu");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters percent-encoded in a path segment.
///
/// RFC 3986 section 3.3 plus the characters that would change how the
/// segment is routed (`/`, `?`, `#`) and `%` to prevent double decoding.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'~')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
///
/// ```
/// use datadog_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("abc-def-ghi"), "abc-def-ghi");
/// assert_eq!(encode_path_segment("host name"), "host%20name");
/// assert_eq!(encode_path_segment("100%"), "100%25");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
