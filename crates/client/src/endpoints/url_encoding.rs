//! URL encoding utilities for constructing safe API paths.
//!
//! Provides percent-encoding for URL path segments to handle special
//! characters in resource names (collection names, synonym ids, ...) that
//! could otherwise cause path traversal or incorrect URL resolution.

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
///
/// Based on RFC 3986 section 3.3, plus characters that have special meaning
/// in URLs or are routinely mangled by proxies. Percent itself is encoded to
/// prevent double-decode issues; slash is encoded to prevent path traversal.
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
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
///
/// Use this for any user-provided value interpolated into a URL path:
/// collection names, synonym/override ids, stopwords set ids, alias names,
/// preset names, model ids, cluster ids.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
