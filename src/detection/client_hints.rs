//! `Sec-CH-UA` header parsing.
//!
//! The header carries the same brand list as `navigator.userAgentData.brands`
//! as a structured-field list, e.g.
//! `"Chromium";v="121", "Not A(Brand";v="99"`.

use crate::{BrandEntry, IdentityError};
use once_cell::sync::Lazy;
use regex::Regex;

/// One list member: a quoted brand, its parameters, then the list separator
/// or end of input.
static MEMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"^\s*"((?:[^"\\]|\\.)*)""#,
        r#"((?:\s*;\s*[A-Za-z][A-Za-z0-9_.*-]*(?:\s*=\s*(?:"(?:[^"\\]|\\.)*"|[^,;\s]*))?)*)"#,
        r#"\s*(,|$)"#,
    ))
    .expect("Invalid Sec-CH-UA member pattern")
});

/// One `;key[=value]` parameter. Matches tile the parameter string captured
/// by `MEMBER`, so a `;` inside a quoted value never starts a new parameter.
static PARAM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"\s*;\s*([A-Za-z][A-Za-z0-9_.*-]*)"#,
        r#"(?:\s*=\s*(?:"((?:[^"\\]|\\.)*)"|([^,;\s]*)))?"#,
    ))
    .expect("Invalid Sec-CH-UA parameter pattern")
});

/// Parse a `Sec-CH-UA` header value into brand entries, preserving order.
///
/// An empty or all-whitespace header yields an empty list.
///
/// # Errors
///
/// `IdentityError::MalformedClientHints` when any member is not a quoted
/// string, including an empty member after a trailing comma.
///
/// # Example
///
/// ```rust
/// use browser_detect::parse_client_hints;
///
/// let brands = parse_client_hints(r#""Chromium";v="121", "Not A(Brand";v="99""#).unwrap();
/// assert_eq!(brands[0].brand, "Chromium");
/// assert_eq!(brands[0].version.as_deref(), Some("121"));
/// assert_eq!(brands[1].brand, "Not A(Brand");
/// ```
pub fn parse_client_hints(header: &str) -> Result<Vec<BrandEntry>, IdentityError> {
    let mut brands = Vec::new();
    let mut position = 0;

    while !header[position..].trim().is_empty() {
        let rest = &header[position..];
        let caps = MEMBER
            .captures(rest)
            .ok_or_else(|| IdentityError::MalformedClientHints {
                header: header.to_string(),
                position,
            })?;

        brands.push(BrandEntry {
            brand: unescape(&caps[1]),
            version: version_param(&caps[2]),
        });
        position += caps[0].len();

        if &caps[3] == "," && header[position..].trim().is_empty() {
            return Err(IdentityError::MalformedClientHints {
                header: header.to_string(),
                position,
            });
        }
    }

    tracing::trace!(count = brands.len(), "parsed Sec-CH-UA header");
    Ok(brands)
}

/// Value of the last `v` parameter, if any.
fn version_param(params: &str) -> Option<String> {
    PARAM
        .captures_iter(params)
        .filter(|param| &param[1] == "v")
        .last()
        .map(|param| match param.get(2) {
            Some(quoted) => unescape(quoted.as_str()),
            None => param.get(3).map_or("", |m| m.as_str()).to_string(),
        })
}

/// Decode `\"` and `\\` escapes of a structured-field string.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    out
}
