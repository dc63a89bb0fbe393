use log::{info, trace};
use serde::Deserialize;

use crate::{identifier::Isbn, record::BookRecord, Error, ErrorKind};

use super::Client;

const GOOGLE_BOOKS_URL: &str = "https://www.googleapis.com/books/v1/volumes?q=isbn:";

pub(crate) fn get_book_by_isbn<C: Client>(isbn: &str) -> Result<BookRecord, Error> {
    let isbn = Isbn::parse(isbn)?;
    get_book_info::<C>(&isbn).and_then(BookRecord::try_from)
}

pub(crate) fn get_book_info<C: Client>(isbn: &Isbn) -> Result<Book, Error> {
    info!("Searching for ISBN '{isbn}' using Google Books API");
    let mut url = GOOGLE_BOOKS_URL.to_owned();
    url.push_str(isbn.as_str());

    let client = C::default();
    let GoogleModel { mut items } = client.get_json(&url)?;

    trace!("Request was successful");

    let item = items
        .drain(..)
        .next()
        .ok_or_else(|| Error::new(ErrorKind::NoValue, "No books found!"))?;

    Ok(item.build(isbn.to_isbn13()))
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct GoogleModel {
    // absent rather than empty when nothing matches
    #[serde(default)]
    items: Vec<Item>,
}

/// The API does not include the ISBN.. so this struct also acts as
/// a builder for the [`Book`] type, see [`Item::build`].
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct Item {
    #[serde(rename = "volumeInfo")]
    volume_info: VolumeInfo,
}

#[cfg_attr(test, derive(Debug))]
pub(crate) struct Book {
    isbn13: String,
    volume_info: VolumeInfo,
}

/// Volume information from the Google Book API
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct VolumeInfo {
    title: String,
    #[serde(default)]
    authors: Vec<String>,
    publisher: Option<String>,
    #[serde(rename = "publishedDate")]
    published_date: Option<String>,
    language: Option<String>,
}

impl Item {
    // We use a builder pattern here to enforce a valid [`Book`] is always returned.
    #[allow(clippy::missing_const_for_fn)] // can't be const
    fn build(self, isbn13: String) -> Book {
        Book {
            isbn13,
            volume_info: self.volume_info,
        }
    }
}

impl TryFrom<Book> for BookRecord {
    type Error = Error;

    fn try_from(book: Book) -> Result<Self, Error> {
        // Deconstruct book to take ownership of fields (avoids cloning).
        let Book {
            isbn13,
            volume_info:
                VolumeInfo {
                    title,
                    mut authors,
                    publisher,
                    published_date,
                    language,
                },
        } = book;

        // published_date = Year-Month-Day, where Month and Day are not always present.
        let year = published_date
            .map(|date| {
                date.split('-')
                    .next()
                    .filter(|s| s.parse::<u16>().is_ok())
                    .map(str::to_owned)
                    .ok_or_else(|| {
                        Error::new(
                            ErrorKind::Deserialize,
                            "Date format was different then expected - aborting to avoid invalid dates in entry",
                        )
                    })
            })
            .transpose()?;

        authors.retain(|author| !author.is_empty());

        Ok(Self {
            isbn13,
            title,
            authors: authors.join(", "),
            publisher,
            year,
            language,
        })
    }
}
