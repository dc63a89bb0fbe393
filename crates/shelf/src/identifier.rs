//! Canonical forms of the identifiers used to look up library items.
//!
//! Both [`Isbn`] and [`Issn`] can only be constructed through their `parse` functions, which
//! strip formatting characters (hyphens, spaces, a leading `ISBN`/`ISSN` label) and check the
//! check digit, so holding one is a promise that the identifier is well formed.

use std::fmt;

use crate::{Error, ErrorKind};

/// An International Standard Book Number in canonical form (digits and an optional trailing `X`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Isbn(String);

impl Isbn {
    /// Parse an ISBN-10 or ISBN-13 from user input.
    ///
    /// # Errors
    ///
    /// An [`Err`] with [`ErrorKind::InvalidIdentifier`] is returned when the input does not
    /// contain 10 or 13 ISBN characters or when the check digit is wrong.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let canonical = canonical_chars(raw);

        let valid = match canonical.len() {
            10 => is_valid_isbn10(&canonical),
            13 => is_valid_isbn13(&canonical),
            _ => false,
        };

        if valid {
            Ok(Self(canonical))
        } else {
            Err(Error::new(
                ErrorKind::InvalidIdentifier,
                format!("'{raw}' is not a valid ISBN"),
            ))
        }
    }

    /// The canonical ISBN string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the ISBN-13 form, converting an ISBN-10 using the `978` prefix.
    #[must_use]
    pub fn to_isbn13(&self) -> String {
        if self.0.len() == 13 {
            return self.0.clone();
        }

        let mut isbn13 = String::with_capacity(13);
        isbn13.push_str("978");
        isbn13.push_str(&self.0[..9]);
        let check = isbn13_check_digit(&isbn13);
        isbn13.push(check);
        isbn13
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An International Standard Serial Number.
///
/// Stored without the hyphen, displayed in the registry form `NNNN-NNNC`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Issn(String);

impl Issn {
    /// Parse an ISSN from user input, with or without the hyphen.
    ///
    /// # Errors
    ///
    /// An [`Err`] with [`ErrorKind::InvalidIdentifier`] is returned when the input does not
    /// contain 8 ISSN characters or when the check digit is wrong.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let canonical = canonical_chars(raw);

        if canonical.len() == 8 && is_valid_issn(&canonical) {
            Ok(Self(canonical))
        } else {
            Err(Error::new(
                ErrorKind::InvalidIdentifier,
                format!("'{raw}' is not a valid ISSN"),
            ))
        }
    }

    /// The ISSN without the hyphen.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Issn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", &self.0[..4], &self.0[4..])
    }
}

fn canonical_chars(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_label = ["ISBN", "isbn", "ISSN", "issn"]
        .iter()
        .find_map(|label| trimmed.strip_prefix(*label))
        .unwrap_or(trimmed);

    without_label
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == 'X' || *c == 'x')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn digit(c: char) -> Option<u32> {
    c.to_digit(10)
}

fn is_valid_isbn10(isbn: &str) -> bool {
    let mut sum = 0;
    for (weight, c) in (1..=10).rev().zip(isbn.chars()) {
        let value = match (weight, c) {
            (1, 'X') => 10,
            (_, c) => match digit(c) {
                Some(d) => d,
                None => return false,
            },
        };
        sum += value * weight;
    }
    sum % 11 == 0
}

fn isbn13_check_digit(first_twelve: &str) -> char {
    let sum: u32 = first_twelve
        .chars()
        .filter_map(digit)
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { d } else { d * 3 })
        .sum();
    let check = (10 - sum % 10) % 10;
    char::from_digit(check, 10).unwrap_or('0')
}

fn is_valid_isbn13(isbn: &str) -> bool {
    if !isbn.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    isbn.ends_with(isbn13_check_digit(&isbn[..12]))
}

fn is_valid_issn(issn: &str) -> bool {
    let (body, check) = issn.split_at(7);
    let mut sum = 0;
    for (weight, c) in (2..=8).rev().zip(body.chars()) {
        match digit(c) {
            Some(d) => sum += d * weight,
            None => return false,
        }
    }

    let expected = match (11 - sum % 11) % 11 {
        10 => 'X',
        d => char::from_digit(d, 10).unwrap_or('0'),
    };
    check.starts_with(expected)
}
