//! Explicit container types for presence and fallibility, with asynchronous
//! chaining and validation report shaping.
//!
//! The core of the crate is a pair of closed two-variant containers:
//! [`Maybe`] for presence/absence and [`Outcome`] for success/failure, each
//! with an asynchronous counterpart ([`AsyncMaybe`], [`AsyncOutcome`]) that
//! defers a chain of combinators until awaited and settles exactly once.
//!
//! ```
//! use railcar::{Maybe, Outcome};
//!
//! let port: Outcome<u16, String> = Maybe::Some("8080")
//!     .filter(|raw| !raw.is_empty())
//!     .ok_or_else(|| "port missing".to_owned())
//!     .and_then(|raw| match raw.parse() {
//!         Ok(port) => Outcome::Ok(port),
//!         Err(_) => Outcome::Err(format!("bad port: {raw}")),
//!     });
//! assert_eq!(port.unwrap(), 8080);
//! ```
//!
//! The [`report`] module shapes a validation collaborator's issue list into
//! caller-facing error structures:
//!
//! ```
//! use railcar::report::{Issue, Report, Segment, flatten_error};
//!
//! let report = Report::new(vec![Issue::new(
//!     [Segment::from("array"), Segment::from(2)],
//!     "expected a string",
//! )]);
//! let flat = flatten_error(&report)?;
//! assert_eq!(flat.field("array[2]").unwrap(), "expected a string");
//! # Ok::<(), railcar::report::ReportError>(())
//! ```

pub mod maybe;
pub mod outcome;
pub mod report;

pub use maybe::{AsyncMaybe, IntoAsyncMaybe, Maybe};
pub use outcome::{AsyncOutcome, IntoAsyncOutcome, Outcome};
pub use report::{
    ErrorTree, FlatError, Issue, Report, ReportError, Segment, flatten_error, structured_error,
};
