use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{Error, ErrorKind};

/// Separator placed between the values of a flattened list.
pub const SEPARATOR: &str = ", ";

/// A nested mapping from the registry, e.g. `{"ASJC": 2202, "name": "Aerospace Engineering"}`.
///
/// Keys keep the order they had in the response.
pub type ScalarMap = Map<String, Value>;

/// Periodical metadata as returned by the ISSN registry, before it is flattened.
///
/// Every field is optional as the registry omits fields it has no data for. Only the fields used
/// by [`normalize`] are kept, everything else in the response is ignored.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawPeriodicalRecord {
    /// Title of the periodical.
    pub title: Option<String>,
    /// Publisher of the periodical.
    pub publisher: Option<String>,
    /// Subject classifications.
    pub subjects: Option<Vec<ScalarMap>>,
    /// Every ISSN registered for the periodical.
    #[serde(rename = "ISSN")]
    pub issn: Option<Vec<String>>,
    /// The ISSNs paired with their medium, e.g. `{"value": "0028-0836", "type": "print"}`.
    #[serde(rename = "issn-type")]
    pub issn_type: Option<Vec<ScalarMap>>,
}

/// A periodical record flattened to the five columns stored for each periodical.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlatRecord {
    /// Title, absent when the registry has none.
    pub title: Option<String>,
    /// Publisher, absent when the registry has none.
    pub publisher: Option<String>,
    /// All subject values joined with [`SEPARATOR`].
    pub subjects: String,
    /// All ISSNs joined with [`SEPARATOR`].
    pub issn: String,
    /// All ISSN type values joined with [`SEPARATOR`].
    pub issn_type: String,
}

/// Flatten a [`RawPeriodicalRecord`] into a [`FlatRecord`].
///
/// `title` and `publisher` are passed through. Each nested mapping in `subjects` and `issn-type`
/// has its values joined with [`SEPARATOR`] and those strings are joined again with the same
/// separator, `ISSN` is joined directly. Empty lists flatten to an empty string.
///
/// Empty and `null` values are left out before joining, so no value of a flattened list is ever
/// empty and the result never starts or ends with the separator.
///
/// # Errors
///
/// An [`Err`] with [`ErrorKind::MissingField`] is returned when the record has no `subjects` or
/// no `issn-type` field at all. A field that is present but empty is not an error.
pub fn normalize(raw: RawPeriodicalRecord) -> Result<FlatRecord, Error> {
    let RawPeriodicalRecord {
        title,
        publisher,
        subjects,
        issn,
        issn_type,
    } = raw;

    let subjects = subjects.ok_or_else(|| missing_field("subjects"))?;
    let issn_type = issn_type.ok_or_else(|| missing_field("issn-type"))?;

    Ok(FlatRecord {
        title: title.map(|s| single_line(&s)),
        publisher: publisher.map(|s| single_line(&s)),
        subjects: flatten_mappings(&subjects),
        issn: join_non_empty(
            issn.unwrap_or_default()
                .iter()
                .map(String::as_str)
                .map(single_line),
        ),
        issn_type: flatten_mappings(&issn_type),
    })
}

fn missing_field(name: &str) -> Error {
    Error::new(
        ErrorKind::MissingField,
        format!("record has no '{name}' field"),
    )
}

/// Joins the values of every mapping, in order, leaving out empty values.
fn flatten_mappings(mappings: &[ScalarMap]) -> String {
    join_non_empty(
        mappings
            .iter()
            .flat_map(Map::values)
            .map(|value| single_line(&scalar_to_string(value))),
    )
}

fn join_non_empty<I: Iterator<Item = String>>(values: I) -> String {
    values
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

// csv quoting copes with newlines but one row per line keeps the library greppable.
fn single_line(s: &str) -> String {
    if s.contains(['\n', '\r']) {
        s.split(['\n', '\r'])
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        s.to_owned()
    }
}
