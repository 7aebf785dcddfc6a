//! # cookiedb
//!
//! Read-only ingestion of browser SQLite cookie stores.
//!
//! `cookiedb` turns a Firefox `cookies.sqlite` or Chromium `Cookies`
//! database into a validated, in-memory batch of [`Cookie`] records for a
//! downloader or HTTP client to load into its jar. The raw, vendor-shaped
//! rows are normalized into one canonical domain model: leading domain
//! dots stripped, host-only and secure flags derived, expiry clamped to a
//! configurable time width, malformed rows silently dropped.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cookiedb::{SqliteCookieParser, StoreReader};
//!
//! let reader = StoreReader::open("/home/user/.mozilla/firefox/x.default/cookies.sqlite");
//! let cookies = SqliteCookieParser::mozilla().parse(&reader, 1_700_000_000)?;
//! println!("loaded {} cookies", cookies.len());
//! # Ok::<(), cookiedb::StoreError>(())
//! ```
//!
//! ## Modules
//!
//! - [`cookie`] - The canonical cookie record
//! - [`schema`] - Per-vendor query text behind one trait
//! - [`reader`] - Read-only store access that never fails at open time
//! - [`parser`] - Batch orchestration and timestamp stamping
//! - [`error`] - Store-level error taxonomy
//!
//! ## Failure policy
//!
//! Opening a store never errors; a missing or corrupt file produces an
//! unusable reader and the failure surfaces as
//! [`StoreError::StoreUnavailable`] at parse time. Engine-level query
//! failures abort the whole batch. Malformed individual rows are dropped
//! silently: the store is uncontrolled external input, and keeping the
//! good rows matters more than reporting the bad ones.

pub mod cookie;
pub mod error;
mod mapper;
pub mod parser;
pub mod reader;
pub mod schema;

pub use cookie::Cookie;
pub use error::StoreError;
pub use parser::{SqliteCookieParser, TimeWidth};
pub use reader::StoreReader;
pub use schema::{ChromiumSchema, MozillaSchema, StoreSchema};
