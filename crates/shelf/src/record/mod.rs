//! The records that make up the rows of a library.
//!
//! Books are stored as [`BookRecord`]s. Periodicals arrive from the registry as a nested
//! [`RawPeriodicalRecord`], are flattened by [`normalize`] into a [`FlatRecord`] and are stored
//! as a [`SerialEntry`] once the details of the issue are merged in.

mod book;
mod periodical;
mod serial;

pub use book::BookRecord;
pub use periodical::{normalize, FlatRecord, RawPeriodicalRecord, ScalarMap, SEPARATOR};
pub use serial::{IssueDetails, SerialEntry};
