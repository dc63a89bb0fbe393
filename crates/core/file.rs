use std::{
    fs::{File, OpenOptions},
    path::{Path, PathBuf},
};

use shelf::library::{Library, LibraryWriter};

use eyre::{eyre, Context, Result};
use log::{info, trace};

const CSV_EXT: &str = "csv";

/// Open the library file for appending, creating it with a header row when it does not exist.
#[allow(clippy::module_name_repetitions)]
pub fn open_or_create_library_file<L: Library>(
    file_name: Option<PathBuf>,
) -> Result<(PathBuf, LibraryWriter<L, File>)> {
    let path = library_path::<L>(file_name);

    if path.is_file() {
        trace!("opening {} as a {} library", path.display(), L::name());
        let writer = open_file_for_append::<L>(&path)?;
        Ok((path, writer))
    } else {
        info!(
            "No {} library found - creating the new file `{}`",
            L::name(),
            path.display()
        );
        let writer = create_file_with_header::<L>(&path, false)?;
        Ok((path, writer))
    }
}

/// Create a library file containing only the header row.
///
/// An existing file is only replaced when `force` is set.
#[allow(clippy::module_name_repetitions)]
pub fn create_library_file<L: Library>(file_name: Option<PathBuf>, force: bool) -> Result<PathBuf> {
    let path = library_path::<L>(file_name);

    if path.exists() && !force {
        return Err(eyre!(
            "The file '{}' already exists - use --force to overwrite it",
            path.display()
        ));
    }

    create_file_with_header::<L>(&path, force)?
        .into_inner()
        .wrap_err("Cannot write the header row")?;
    Ok(path)
}

fn library_path<L: Library>(file_name: Option<PathBuf>) -> PathBuf {
    file_name.map_or_else(
        || PathBuf::from(L::file_name()),
        |path| path.with_extension(CSV_EXT),
    )
}

#[inline]
fn open_file_for_append<L: Library>(path: &Path) -> Result<LibraryWriter<L, File>> {
    let file = OpenOptions::new()
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("Failed to open the '{}' file for appending.", path.display()))?;

    let is_empty = file
        .metadata()
        .map(|m| m.len() == 0)
        .wrap_err("Cannot read the size of the library file")?;

    let mut writer = LibraryWriter::new(file);
    if is_empty {
        trace!("library file is empty - writing the header first");
        writer.write_header()?;
    }
    Ok(writer)
}

fn create_file_with_header<L: Library>(path: &Path, truncate: bool) -> Result<LibraryWriter<L, File>> {
    let mut options = OpenOptions::new();
    options.write(true);
    if truncate {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let file = options
        .open(path)
        .wrap_err_with(|| format!("Failed to create the '{}' file.", path.display()))?;

    let mut writer = LibraryWriter::new(file);
    writer.write_header()?;
    Ok(writer)
}

#[cfg(test)]
mod tests {

    use super::*;
    use shelf::{
        library::{Books, Serials},
        record::{BookRecord, FlatRecord, IssueDetails, SerialEntry},
    };

    use assert_fs::{
        fixture::{FileTouch, FileWriteStr, PathChild},
        TempDir,
    };

    const BOOK_HEADER: &str = "ISBN-13,Title,Authors,Publisher,Year,Language\n";

    fn read(path: &Path) -> String {
        std::fs::read_to_string(path).expect("Cannot read library file for test")
    }

    #[test]
    fn missing_file_is_created_with_header() {
        let dir = TempDir::new().expect("Cannot create temp directory for test");
        let path = dir.child("books.csv").path().to_path_buf();

        let (opened, writer) = open_or_create_library_file::<Books>(Some(path.clone())).unwrap();
        writer.into_inner().unwrap();

        assert_eq!(path, opened);
        assert_eq!(BOOK_HEADER, read(&path));
    }

    #[test]
    fn existing_file_is_appended_to() {
        let dir = TempDir::new().expect("Cannot create temp directory for test");
        let child = dir.child("books.csv");
        child.write_str(BOOK_HEADER).unwrap();

        let (_, mut writer) =
            open_or_create_library_file::<Books>(Some(child.path().to_path_buf())).unwrap();
        let book = BookRecord {
            isbn13: "9780735619678".to_owned(),
            title: "Code Complete".to_owned(),
            ..BookRecord::default()
        };
        writer.append(&book).unwrap();
        writer.into_inner().unwrap();

        assert_eq!(
            format!("{BOOK_HEADER}9780735619678,Code Complete,,,,\n"),
            read(child.path())
        );
    }

    #[test]
    fn empty_existing_file_gets_a_header() {
        let dir = TempDir::new().expect("Cannot create temp directory for test");
        let child = dir.child("serials.csv");
        child.touch().unwrap();

        let (_, mut writer) =
            open_or_create_library_file::<Serials>(Some(child.path().to_path_buf())).unwrap();
        writer
            .append(&SerialEntry::merge(
                FlatRecord::default(),
                IssueDetails::default(),
            ))
            .unwrap();
        writer.into_inner().unwrap();

        assert_eq!(
            "ISSN,ISSN Type,Title,Publisher,Subjects,Year,Month,Volume,Issue\n,,,,,,,,\n",
            read(child.path())
        );
    }

    #[test]
    fn file_name_gets_csv_extension() {
        assert_eq!(
            PathBuf::from("my_books.csv"),
            library_path::<Books>(Some(PathBuf::from("my_books")))
        );
        assert_eq!(PathBuf::from("ISSNlibrary.csv"), library_path::<Serials>(None));
    }

    #[test]
    #[should_panic(expected = "already exists - use --force to overwrite it")]
    fn create_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().expect("Cannot create temp directory for test");
        let child = dir.child("books.csv");
        child.write_str("keep me\n").unwrap();

        create_library_file::<Books>(Some(child.path().to_path_buf()), false).unwrap();
    }

    #[test]
    fn create_with_force_replaces_contents() {
        let dir = TempDir::new().expect("Cannot create temp directory for test");
        let child = dir.child("books.csv");
        child.write_str("old contents that are longer than the header row\n").unwrap();

        create_library_file::<Books>(Some(child.path().to_path_buf()), true).unwrap();

        assert_eq!(BOOK_HEADER, read(child.path()));
    }

    #[test]
    #[should_panic(expected = "Failed to create the")]
    fn path_that_is_a_directory_cannot_be_opened() {
        let dir = TempDir::new().expect("Cannot create temp directory for test");
        let child = dir.child("library.csv");
        std::fs::create_dir(child.path()).unwrap();

        // not a file, so creation is attempted and fails
        open_or_create_library_file::<Books>(Some(child.path().to_path_buf())).unwrap();
    }
}
