//! Resource identifier derivation.
//!
//! Responsibilities:
//! - Turn arbitrary remote entity names (collection names, synonym ids, ...)
//!   into deterministic, collision-free declarative resource identifiers.
//!
//! Invariants:
//! - `sanitize_resource_name` is idempotent, never returns an empty string,
//!   and always yields a match for `[A-Za-z_][A-Za-z0-9_]*`.
//! - `unique_resource_name` never returns the same name twice against one
//!   seen-set.

use std::collections::HashSet;

/// Sanitize an entity name into a valid resource identifier.
///
/// ASCII alphanumerics are lowercased and kept, underscores are kept, and
/// every other character acts as a separator. Separator runs collapse into a
/// single `_`; trailing separators are dropped. Digit-leading results get a
/// `_` prefix. Empty input yields `_empty`; input with no usable characters
/// yields `_resource`.
pub fn sanitize_resource_name(raw: &str) -> String {
    if raw.is_empty() {
        return "_empty".to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut pending_sep = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_sep && !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            pending_sep = false;
            if ch == '_' {
                if !out.ends_with('_') {
                    out.push('_');
                }
            } else {
                out.push(ch.to_ascii_lowercase());
            }
        } else {
            pending_sep = true;
        }
    }

    if out.is_empty() {
        return "_resource".to_string();
    }
    if out.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// Disambiguate a sanitized base name against names already handed out.
///
/// Returns the base itself when free, otherwise `{base}_1`, `{base}_2`, ...
/// in first-available order. The returned name is recorded in `seen`.
pub fn unique_resource_name(base: &str, seen: &mut HashSet<String>) -> String {
    if seen.insert(base.to_string()) {
        return base.to_string();
    }
    let mut n = 1usize;
    loop {
        let candidate = format!("{}_{}", base, n);
        if seen.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}
