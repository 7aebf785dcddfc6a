//! Row validation and mapping.
//!
//! Converts one raw six-column row into a [`Cookie`], or rejects it.
//! Rejection is the only failure channel at this granularity: browser
//! stores routinely contain rows the current cookie semantics cannot
//! represent, and one bad row must never cost the rest of the batch.

use std::net::IpAddr;

use crate::cookie::Cookie;

/// Canonical column indices within a result row.
pub(crate) const COL_DOMAIN: usize = 0;
pub(crate) const COL_PATH: usize = 1;
pub(crate) const COL_SECURE: usize = 2;
pub(crate) const COL_EXPIRY: usize = 3;
pub(crate) const COL_NAME: usize = 4;
pub(crate) const COL_VALUE: usize = 5;

/// Number of columns every schema query must produce.
pub(crate) const COLUMN_COUNT: usize = 6;

/// Raw row as returned by the store reader: six nullable text columns in
/// canonical order.
pub type RawRow = [Option<String>; COLUMN_COUNT];

/// Map a raw row to a validated [`Cookie`], or `None` if the row is
/// malformed. Expiry values above `max_expiry` are clamped, not rejected.
///
/// The returned cookie carries placeholder (zero) timestamps; the parser
/// stamps the real reference time over the whole batch afterwards.
pub(crate) fn map_row(row: &RawRow, max_expiry: i64) -> Option<Cookie> {
    let raw_domain = text(&row[COL_DOMAIN]);
    let domain = remove_preceding_dots(raw_domain);
    if domain.is_empty() {
        return None;
    }
    let name = text(&row[COL_NAME]);
    if name.is_empty() {
        return None;
    }
    let path = text(&row[COL_PATH]);
    if !good_path(path) {
        return None;
    }
    let mut expiry_time = text(&row[COL_EXPIRY]).parse::<i64>().ok()?;
    if expiry_time > max_expiry {
        expiry_time = max_expiry;
    }
    // Host-only unless the stored domain carried a leading dot, with an
    // exception for IP literals, which can never be domain cookies.
    let host_only = is_numeric_host(domain) || !raw_domain.starts_with('.');
    let secure = text(&row[COL_SECURE]) == "1";

    Some(Cookie::new(
        name.to_string(),
        text(&row[COL_VALUE]).to_string(),
        domain.to_string(),
        path.to_string(),
        expiry_time,
        host_only,
        secure,
        true, // store-sourced cookies are persistent by construction
        0,
    ))
}

fn text(column: &Option<String>) -> &str {
    column.as_deref().unwrap_or("")
}

/// Strip leading `.` characters. Idempotent.
pub(crate) fn remove_preceding_dots(domain: &str) -> &str {
    domain.trim_start_matches('.')
}

fn good_path(path: &str) -> bool {
    path.starts_with('/')
}

fn is_numeric_host(host: &str) -> bool {
    host.parse::<IpAddr>().is_ok()
}
