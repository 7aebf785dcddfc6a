//! Batch parse orchestration.
//!
//! Ties the schema query, store reader and row mapper together: one parse
//! executes the vendor SELECT, maps each row (dropping malformed ones
//! silently), stamps the batch-wide timestamps and hands the whole batch
//! to the caller. Execution-level failures are all-or-nothing; row-level
//! failures are best-effort.

use tracing::{debug, trace};

use crate::cookie::Cookie;
use crate::error::StoreError;
use crate::mapper::map_row;
use crate::reader::StoreReader;
use crate::schema::{ChromiumSchema, MozillaSchema, StoreSchema};

/// Width of the time representation expiry values must fit.
///
/// Downloaders embedding this crate may run on platforms whose `time_t`
/// is 32-bit; expiry values beyond its range are clamped rather than
/// rejected. Kept as explicit configuration instead of sniffing the host,
/// so the clamping path is testable everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeWidth {
    Bits32,
    #[default]
    Bits64,
}

impl TimeWidth {
    fn max_expiry(self) -> i64 {
        match self {
            TimeWidth::Bits32 => i64::from(i32::MAX),
            TimeWidth::Bits64 => i64::MAX,
        }
    }
}

/// Parser for one vendor's cookie store layout.
pub struct SqliteCookieParser<S: StoreSchema> {
    schema: S,
    time_width: TimeWidth,
}

impl SqliteCookieParser<MozillaSchema> {
    /// Parser for Firefox-family `cookies.sqlite` stores.
    pub fn mozilla() -> Self {
        Self::new(MozillaSchema)
    }
}

impl SqliteCookieParser<ChromiumSchema> {
    /// Parser for Chromium-family `Cookies` stores.
    pub fn chromium() -> Self {
        Self::new(ChromiumSchema)
    }
}

impl<S: StoreSchema> SqliteCookieParser<S> {
    pub fn new(schema: S) -> Self {
        Self {
            schema,
            time_width: TimeWidth::default(),
        }
    }

    pub fn with_time_width(mut self, time_width: TimeWidth) -> Self {
        self.time_width = time_width;
        self
    }

    /// Parse the store behind `reader` into a batch of cookies, every one
    /// stamped with `reference_time` as creation and last-access time.
    ///
    /// Fails with [`StoreError::StoreUnavailable`] if the reader never
    /// opened, or [`StoreError::QueryExecution`] if the engine rejects the
    /// query; in both cases no partial batch is returned. Malformed rows
    /// are dropped without affecting the rest of the batch.
    pub fn parse(
        &self,
        reader: &StoreReader,
        reference_time: i64,
    ) -> Result<Vec<Cookie>, StoreError> {
        if !reader.is_usable() {
            return Err(StoreError::StoreUnavailable);
        }
        let max_expiry = self.time_width.max_expiry();
        let mut cookies = Vec::new();
        reader.execute_query(self.schema.query(), |row| match map_row(row, max_expiry) {
            Some(cookie) => cookies.push(cookie),
            None => trace!("dropping malformed cookie row"),
        })?;
        // Creation and last-access times are not reliably stored across
        // vendors, so the whole batch gets the caller's reference time.
        for cookie in &mut cookies {
            cookie.set_creation_time(reference_time);
            cookie.set_last_access_time(reference_time);
        }
        debug!(count = cookies.len(), "parsed cookie store");
        Ok(cookies)
    }

    /// Like [`parse`](Self::parse), but commits the batch into `cookies`
    /// only on success: a failed parse leaves the previous contents
    /// untouched, a successful one replaces them entirely.
    pub fn parse_into(
        &self,
        reader: &StoreReader,
        cookies: &mut Vec<Cookie>,
        reference_time: i64,
    ) -> Result<(), StoreError> {
        *cookies = self.parse(reader, reference_time)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_width_max_expiry() {
        assert_eq!(TimeWidth::Bits32.max_expiry(), i32::MAX as i64);
        assert_eq!(TimeWidth::Bits64.max_expiry(), i64::MAX);
        assert_eq!(TimeWidth::default(), TimeWidth::Bits64);
    }

    #[test]
    fn test_parse_unusable_reader_fails() {
        let reader = StoreReader::open("/nonexistent/cookies.sqlite");
        let err = SqliteCookieParser::mozilla().parse(&reader, 1000).unwrap_err();
        assert_eq!(err, StoreError::StoreUnavailable);
    }

    #[test]
    fn test_parse_into_preserves_prior_batch_on_failure() {
        let reader = StoreReader::open("/nonexistent/cookies.sqlite");
        let parser = SqliteCookieParser::mozilla();
        let mut cookies = vec![Cookie::new(
            "old".to_string(),
            "v".to_string(),
            "example.com".to_string(),
            "/".to_string(),
            100,
            true,
            false,
            true,
            1,
        )];
        assert!(parser.parse_into(&reader, &mut cookies, 1000).is_err());
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies[0].name, "old");
    }
}
