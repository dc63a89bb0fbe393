//! Contains the [`Library`] trait, its implementors and the CSV [`LibraryWriter`].

use std::{io, marker::PhantomData};

use log::trace;

use crate::{
    record::{BookRecord, SerialEntry},
    Error, ErrorKind,
};

/// A value that can be written as a single row of a library file.
pub trait Row {
    /// The cells of the row, in the column order of the library header.
    fn cells(&self) -> Vec<&str>;
}

/// A kind of library file, which fixes the header and the type of row stored in it.
///
/// Libraries are promises at the type level about what a CSV file contains.
pub trait Library {
    /// The type of each row in the library.
    type Row: Row;

    /// The display name of the library.
    fn name() -> &'static str;

    /// Column names written as the first row of a new library file.
    fn header() -> &'static [&'static str];

    /// File name used when no file is given.
    fn file_name() -> &'static str;
}

/// Library of books, looked up by ISBN.
#[derive(Debug)]
pub struct Books;

impl Library for Books {
    type Row = BookRecord;

    fn name() -> &'static str {
        "book"
    }

    fn header() -> &'static [&'static str] {
        &BookRecord::HEADER
    }

    fn file_name() -> &'static str {
        "ISBNlibrary.csv"
    }
}

/// Library of magazines and other serials, looked up by ISSN.
#[derive(Debug)]
pub struct Serials;

impl Library for Serials {
    type Row = SerialEntry;

    fn name() -> &'static str {
        "serial"
    }

    fn header() -> &'static [&'static str] {
        &SerialEntry::HEADER
    }

    fn file_name() -> &'static str {
        "ISSNlibrary.csv"
    }
}

/// Writes the header and rows of a [`Library`] as CSV to any [`io::Write`].
///
/// Quoting of cells containing the delimiter or quote character is left to the `csv` crate. Each
/// row is flushed as soon as it is written so a row is either in the file in full or not at all.
pub struct LibraryWriter<L: Library, W: io::Write> {
    writer: csv::Writer<W>,
    _library: PhantomData<L>,
}

impl<L: Library, W: io::Write> LibraryWriter<L, W> {
    /// Wrap a writer positioned where the next row should go.
    pub fn new(inner: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(inner);

        Self {
            writer,
            _library: PhantomData,
        }
    }

    /// Write the header row of the library.
    ///
    /// # Errors
    ///
    /// An [`Err`] is returned when the row cannot be written to the underlying writer.
    pub fn write_header(&mut self) -> Result<(), Error> {
        trace!("Writing {} library header", L::name());
        self.write_cells(L::header())
    }

    /// Append a row to the library.
    ///
    /// # Errors
    ///
    /// An [`Err`] is returned when the row does not have a cell for every column or when it cannot
    /// be written to the underlying writer.
    pub fn append(&mut self, row: &L::Row) -> Result<(), Error> {
        let cells = row.cells();
        if cells.len() != L::header().len() {
            return Err(Error::new(
                ErrorKind::InvalidRow,
                format!(
                    "{} library rows have {} columns but the row has {}",
                    L::name(),
                    L::header().len(),
                    cells.len()
                ),
            ));
        }

        self.write_cells(&cells)
    }

    /// Unwrap the underlying writer, flushing anything that is buffered.
    ///
    /// # Errors
    ///
    /// An [`Err`] is returned when the buffered data cannot be flushed.
    pub fn into_inner(self) -> Result<W, Error> {
        self.writer
            .into_inner()
            .map_err(|e| Error::wrap(ErrorKind::IO, e.into_error()))
    }

    fn write_cells(&mut self, cells: &[&str]) -> Result<(), Error> {
        self.writer.write_record(cells)?;
        self.writer
            .flush()
            .map_err(|e| Error::wrap(ErrorKind::IO, e))
    }
}
