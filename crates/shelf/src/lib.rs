#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]

//! # shelf
//!
//! shelf is a library for looking up the metadata of books by ISBN and of periodicals by ISSN,
//! and for keeping that metadata as rows of a CSV [`library::Library`] file.
//!
//! Periodical metadata arrives from the registry as a nested [`record::RawPeriodicalRecord`]
//! which is flattened into the columns of a [`record::FlatRecord`] by [`record::normalize`].

mod api;
mod error;
pub mod identifier;
pub mod library;
pub mod record;

pub use error::{Error, ErrorKind};

use log::trace;
use record::{BookRecord, FlatRecord, RawPeriodicalRecord};

type Client = reqwest::blocking::Client;

/// Search the metadata of a book by `isbn` using the default API.
///
/// The `isbn` may be an ISBN-10 or ISBN-13, with or without hyphens.
///
/// # Errors
///
/// An `Err` is returned when the `isbn` is not a valid ISBN.
/// An `Err` is returned when no book is found for the `isbn`.
/// An `Err` is returned when the response from the API cannot be parsed into a [`BookRecord`].
#[inline]
pub fn book_by_isbn(isbn: &str) -> Result<BookRecord, Error> {
    trace!("Search book by ISBN of '{isbn}'");
    api::google_books::get_book_by_isbn::<Client>(isbn)
}

/// Search the registry record of a periodical by `issn` using the default API.
///
/// # Errors
///
/// An `Err` is returned when the `issn` is not a valid ISSN.
/// An `Err` is returned when no periodical is registered with the `issn`.
/// An `Err` is returned when the response from the API cannot be deserialized.
#[inline]
pub fn raw_periodical_by_issn(issn: &str) -> Result<RawPeriodicalRecord, Error> {
    trace!("Search periodical by ISSN of '{issn}'");
    api::cross_ref::get_periodical_by_issn::<Client>(issn)
}

/// Search a periodical by `issn` and flatten the registry record with [`record::normalize`].
///
/// # Errors
///
/// An `Err` is returned for the same reasons as [`raw_periodical_by_issn`].
/// An `Err` with [`ErrorKind::MissingField`] is returned when the registry record cannot be
/// flattened.
#[inline]
pub fn periodical_by_issn(issn: &str) -> Result<FlatRecord, Error> {
    raw_periodical_by_issn(issn).and_then(record::normalize)
}
