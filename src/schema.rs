//! Vendor-specific cookie store schemas.
//!
//! Each browser family lays out its cookies table differently. The schema
//! contract hides that behind a single SELECT statement whose result
//! columns always appear in the canonical order
//! `[domain, path, secure, expiry, name, value]`, so the row mapper never
//! needs to know which vendor a store came from. Supporting a new browser
//! means writing one more `StoreSchema` impl.

/// Chromium stores timestamps as microseconds since 1601-01-01 00:00:00 UTC
/// (Windows FILETIME epoch). Offset to the Unix epoch, in seconds.
///
/// Reference: `base/time/time.h`
pub const CHROME_EPOCH_OFFSET_SECS: i64 = 11_644_473_600;

/// Source of the vendor-specific SELECT statement.
///
/// Postcondition: executing `query()` against a correctly shaped store of
/// that vendor yields rows in the canonical six-column order, with the
/// expiry column in Unix epoch seconds.
pub trait StoreSchema {
    fn query(&self) -> &str;
}

/// Firefox / Mozilla family (`cookies.sqlite`, table `moz_cookies`).
/// The `expiry` column is already Unix epoch seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct MozillaSchema;

impl StoreSchema for MozillaSchema {
    fn query(&self) -> &str {
        "SELECT host, path, isSecure, expiry, name, value FROM moz_cookies"
    }
}

/// Chromium family (`Cookies`, table `cookies`).
/// `expires_utc` is converted from FILETIME microseconds to Unix epoch
/// seconds inside the query, keeping the canonical expiry unit uniform.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromiumSchema;

impl StoreSchema for ChromiumSchema {
    fn query(&self) -> &str {
        "SELECT host_key, path, is_secure, \
         CAST(expires_utc / 1000000 - 11644473600 AS INTEGER), \
         name, value FROM cookies"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Column order is load-bearing for the mapper; a reordered SELECT
    // would silently swap fields.
    #[test]
    fn test_mozilla_column_order() {
        let q = MozillaSchema.query();
        let host = q.find("host").unwrap();
        let path = q.find("path").unwrap();
        let secure = q.find("isSecure").unwrap();
        let expiry = q.find("expiry").unwrap();
        let name = q.find(" name").unwrap();
        let value = q.find("value").unwrap();
        assert!(host < path && path < secure && secure < expiry);
        assert!(expiry < name && name < value);
    }

    #[test]
    fn test_chromium_column_order() {
        let q = ChromiumSchema.query();
        let host = q.find("host_key").unwrap();
        let path = q.find("path").unwrap();
        let secure = q.find("is_secure").unwrap();
        let expiry = q.find("expires_utc").unwrap();
        let name = q.find(" name").unwrap();
        let value = q.find("value").unwrap();
        assert!(host < path && path < secure && secure < expiry);
        assert!(expiry < name && name < value);
    }

    #[test]
    fn test_chromium_query_embeds_epoch_offset() {
        assert!(ChromiumSchema
            .query()
            .contains(&CHROME_EPOCH_OFFSET_SECS.to_string()));
    }
}
