use crate::library::Row;

use super::FlatRecord;

/// Details of the particular issue being added, which the registry does not know about.
///
/// Values are stored as entered; `N/A` or an absent value is fine for any of them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IssueDetails {
    /// Year the issue was published.
    pub year: Option<String>,
    /// Month the issue was published.
    pub month: Option<String>,
    /// Volume number.
    pub volume: Option<String>,
    /// Issue number.
    pub issue: Option<String>,
}

/// One row of the serial library: the registry metadata plus the issue details.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SerialEntry {
    record: FlatRecord,
    details: IssueDetails,
}

impl SerialEntry {
    /// Column names, in the same order as [`Row::cells`].
    pub const HEADER: [&'static str; 9] = [
        "ISSN",
        "ISSN Type",
        "Title",
        "Publisher",
        "Subjects",
        "Year",
        "Month",
        "Volume",
        "Issue",
    ];

    /// Merge a flattened registry record with the details of an issue.
    #[must_use]
    pub const fn merge(record: FlatRecord, details: IssueDetails) -> Self {
        Self { record, details }
    }
}

impl Row for SerialEntry {
    fn cells(&self) -> Vec<&str> {
        let Self { record, details } = self;
        vec![
            record.issn.as_str(),
            record.issn_type.as_str(),
            record.title.as_deref().unwrap_or_default(),
            record.publisher.as_deref().unwrap_or_default(),
            record.subjects.as_str(),
            details.year.as_deref().unwrap_or_default(),
            details.month.as_deref().unwrap_or_default(),
            details.volume.as_deref().unwrap_or_default(),
            details.issue.as_deref().unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::{IssueDetails, SerialEntry};
    use crate::{library::Row, record::FlatRecord};

    #[test]
    fn merged_row_follows_serial_header_order() {
        let record = FlatRecord {
            title: Some("Nature".to_owned()),
            publisher: Some("Springer".to_owned()),
            subjects: "Science".to_owned(),
            issn: "0028-0836, 1476-4687".to_owned(),
            issn_type: "0028-0836, print".to_owned(),
        };
        let details = IssueDetails {
            year: Some("2021".to_owned()),
            month: Some("March".to_owned()),
            volume: Some("591".to_owned()),
            issue: Some("7851".to_owned()),
        };

        let entry = SerialEntry::merge(record, details);

        assert_eq!(
            vec![
                "0028-0836, 1476-4687",
                "0028-0836, print",
                "Nature",
                "Springer",
                "Science",
                "2021",
                "March",
                "591",
                "7851",
            ],
            entry.cells()
        );
        assert_eq!(SerialEntry::HEADER.len(), entry.cells().len());
    }

    #[test]
    fn missing_details_are_empty_cells() {
        let entry = SerialEntry::merge(FlatRecord::default(), IssueDetails::default());
        assert!(entry.cells().iter().all(|cell| cell.is_empty()));
    }

    #[test]
    fn absent_title_and_publisher_are_empty_cells() {
        let record = FlatRecord {
            issn: "1000-9361".to_owned(),
            ..FlatRecord::default()
        };
        let entry = SerialEntry::merge(record, IssueDetails::default());

        assert_eq!(vec!["1000-9361", "", "", "", ""], entry.cells()[..5].to_vec());
    }
}
