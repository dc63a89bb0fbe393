use std::{io, path::PathBuf};

use eyre::{eyre, Context};
use log::{info, trace, warn};
use shelf::{
    library::{Books, Library, LibraryWriter, Serials},
    record::{IssueDetails, SerialEntry},
};

use crate::{commands::LibraryKind, file, interact::user_issue_details};

/// What a single run of the program does.
#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    /// Create an empty library file.
    Init { kind: LibraryKind, force: bool },
    /// Add books to the book library.
    Books,
    /// Add serials to the serial library, using `details` for each issue.
    Serials { details: IssueDetails },
}

/// Everything a run needs, built from the command line.
#[derive(Debug)]
pub struct Config {
    pub mode: Mode,
    pub identifiers: Vec<String>,
    /// The library file, the default file of the library is used when absent.
    pub output: Option<PathBuf>,
    pub interact: bool,
}

/// Counts for a batch of lookups.
#[derive(Debug, PartialEq, Eq)]
pub struct Summary {
    pub added: usize,
    pub total: usize,
}

pub fn run(config: Config) -> eyre::Result<String> {
    let Config {
        mode,
        identifiers,
        output,
        interact,
    } = config;

    match mode {
        Mode::Init { kind, force } => {
            let path = match kind {
                LibraryKind::Books => file::create_library_file::<Books>(output, force)?,
                LibraryKind::Serials => file::create_library_file::<Serials>(output, force)?,
            };
            Ok(format!("Created the library file `{}`", path.display()))
        }
        Mode::Books => {
            let (path, mut writer) = file::open_or_create_library_file::<Books>(output)?;
            let summary = add_entries(
                &identifiers,
                &mut writer,
                |isbn| {
                    shelf::book_by_isbn(isbn)
                        .wrap_err_with(|| format!("Cannot find a book for ISBN '{isbn}'"))
                },
                |_, book| Ok(book),
            )?;
            Ok(summary.message(&path))
        }
        Mode::Serials { details } => {
            let (path, mut writer) = file::open_or_create_library_file::<Serials>(output)?;
            let summary = add_entries(
                &identifiers,
                &mut writer,
                |issn| {
                    shelf::periodical_by_issn(issn)
                        .wrap_err_with(|| format!("Cannot find a serial for ISSN '{issn}'"))
                },
                |issn, record| {
                    let details = if interact {
                        let title = record.title.as_deref().unwrap_or(issn);
                        user_issue_details(title, &details)
                            .wrap_err_with(|| format!("No issue details given for ISSN '{issn}'"))?
                    } else {
                        details.clone()
                    };

                    Ok(SerialEntry::merge(record, details))
                },
            )?;
            Ok(summary.message(&path))
        }
    }
}

/// Look up every identifier, turn what was found into a row with `complete` and append it.
///
/// A failed lookup only skips that identifier. A failure in `complete`, such as cancelled user
/// input, or a failure to write is returned straight away.
pub fn add_entries<L, W, T, F, G>(
    identifiers: &[String],
    writer: &mut LibraryWriter<L, W>,
    mut lookup: F,
    mut complete: G,
) -> eyre::Result<Summary>
where
    L: Library,
    W: io::Write,
    F: FnMut(&str) -> eyre::Result<T>,
    G: FnMut(&str, T) -> eyre::Result<L::Row>,
{
    let total = identifiers.len();
    let mut added = 0;

    for identifier in identifiers {
        trace!("Looking up '{identifier}'");
        match lookup(identifier) {
            Ok(found) => {
                let row = complete(identifier, found)?;
                writer
                    .append(&row)
                    .wrap_err("Cannot write entry to the library file")?;
                info!("Added '{identifier}' to the {} library", L::name());
                added += 1;
            }
            Err(err) => warn!("Skipping '{identifier}': {err:#}"),
        }
    }

    if added == 0 && total > 0 {
        return Err(eyre!(
            "None of the {total} identifiers could be added to the {} library",
            L::name()
        ));
    }

    Ok(Summary { added, total })
}

impl Summary {
    fn message(&self, path: &std::path::Path) -> String {
        format!(
            "Added {} of {} entries to {}",
            self.added,
            self.total,
            path.display()
        )
    }
}
