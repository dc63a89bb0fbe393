use std::path::PathBuf;

use shelf::record::IssueDetails;

use clap::{ArgEnum, Args, Subcommand};
use log::trace;

use crate::app::{Config, Mode};

#[derive(Subcommand)]
#[non_exhaustive]
pub enum Commands {
    /// Create a new library file containing only the header row
    ///
    /// Libraries are also created on first use by the `isbn` and `issn` commands, this command
    /// is for starting over or for creating a file ahead of time.
    #[clap(arg_required_else_help = true)]
    Init {
        /// The kind of library to create
        #[clap(arg_enum)]
        kind: LibraryKind,

        /// Overwrite the library file if it already exists
        #[clap(long)]
        force: bool,
    },

    /// Look up books by ISBN and add them to the book library
    #[clap(arg_required_else_help = true)]
    Isbn {
        /// The ISBNs to search for, ISBN-10 or ISBN-13 with or without hyphens
        #[clap(required = true)]
        isbns: Vec<String>,
    },

    /// Look up magazines and other serials by ISSN and add them to the serial library
    ///
    /// The registry does not know which issue is being added, so the year, month, volume and
    /// issue can be given as options or entered for each item with `--interact`.
    #[clap(arg_required_else_help = true)]
    Issn {
        /// The ISSNs to search for, with or without the hyphen
        #[clap(required = true)]
        issns: Vec<String>,

        #[clap(flatten)]
        issue: IssueArgs,
    },
}

#[derive(ArgEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LibraryKind {
    /// Books, looked up by ISBN
    Books,
    /// Magazines and other serials, looked up by ISSN
    Serials,
}

#[derive(Debug, Args)]
pub struct IssueArgs {
    /// Year the issue was published
    #[clap(long)]
    year: Option<String>,

    /// Month the issue was published
    #[clap(long)]
    month: Option<String>,

    /// Volume of the issue
    #[clap(long)]
    volume: Option<String>,

    /// Issue number
    #[clap(long)]
    issue: Option<String>,
}

impl From<IssueArgs> for IssueDetails {
    fn from(args: IssueArgs) -> Self {
        let IssueArgs {
            year,
            month,
            volume,
            issue,
        } = args;

        Self {
            year,
            month,
            volume,
            issue,
        }
    }
}

impl Commands {
    pub fn into_config(self, output: Option<PathBuf>, interact: bool) -> Config {
        let (mode, identifiers) = match self {
            Commands::Init { kind, force } => (Mode::Init { kind, force }, vec![]),
            Commands::Isbn { isbns } => (Mode::Books, isbns),
            Commands::Issn { issns, issue } => (
                Mode::Serials {
                    details: issue.into(),
                },
                issns,
            ),
        };
        trace!("Running in {mode:?} mode with {} identifiers", identifiers.len());

        Config {
            mode,
            identifiers,
            output,
            interact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issn_command_carries_issue_details() {
        let command = Commands::Issn {
            issns: vec!["0028-0836".to_owned()],
            issue: IssueArgs {
                year: Some("2021".to_owned()),
                month: None,
                volume: Some("591".to_owned()),
                issue: None,
            },
        };

        let config = command.into_config(None, false);

        assert_eq!(vec!["0028-0836".to_owned()], config.identifiers);
        assert_eq!(
            Mode::Serials {
                details: IssueDetails {
                    year: Some("2021".to_owned()),
                    month: None,
                    volume: Some("591".to_owned()),
                    issue: None,
                }
            },
            config.mode
        );
    }

    #[test]
    fn init_command_has_no_identifiers() {
        let command = Commands::Init {
            kind: LibraryKind::Serials,
            force: true,
        };

        let config = command.into_config(Some(PathBuf::from("serials.csv")), false);

        assert!(config.identifiers.is_empty());
        assert_eq!(Some(PathBuf::from("serials.csv")), config.output);
    }
}
