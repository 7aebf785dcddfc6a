/// A single cookie read from a browser's persistent store.
///
/// Modeled after Chromium's `net::CanonicalCookie`, reduced to the fields
/// a store-sourced cookie can actually carry. Instances are produced only
/// by the row mapper, which enforces the invariants below before
/// construction:
///
/// - `name` is non-empty
/// - `domain` is non-empty and has no leading `.`
/// - `path` is non-empty and begins with `/`
///
/// Timestamps are Unix epoch seconds. `creation_time` and
/// `last_access_time` are not stored in the same form by every browser,
/// so they are stamped batch-wide by the parser after mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    pub expiry_time: i64,
    pub host_only: bool,
    pub secure: bool,
    pub persistent: bool,
    pub creation_time: i64,
    pub last_access_time: i64,
}

impl Cookie {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        value: String,
        domain: String,
        path: String,
        expiry_time: i64,
        host_only: bool,
        secure: bool,
        persistent: bool,
        creation_time: i64,
    ) -> Self {
        Self {
            name,
            value,
            domain,
            path,
            expiry_time,
            host_only,
            secure,
            persistent,
            creation_time,
            last_access_time: creation_time,
        }
    }

    pub fn set_creation_time(&mut self, time: i64) {
        self.creation_time = time;
    }

    pub fn set_last_access_time(&mut self, time: i64) {
        self.last_access_time = time;
    }

    pub fn is_expired(&self, current_time: i64) -> bool {
        self.persistent && self.expiry_time < current_time
    }
}
