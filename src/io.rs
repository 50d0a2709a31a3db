//! Read and write structure catalogs to files

mod corpus;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use corpus::{read_corpus, write_corpus};

use crate::catalog::CatalogError;
use crate::Catalog;

/// Reason why a corpus could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A token that should be an integer is not
    #[error("invalid integer {0:?}")]
    InvalidInteger(String),
    /// A header or structure line does not have the expected number of values
    #[error("expected {expected} values, found {found}")]
    WrongValueCount {
        /// Number of values expected on the line
        expected: usize,
        /// Number of values found
        found: usize,
    },
    /// The corpus has no header line
    #[error("missing header line")]
    MissingHeader,
    /// The corpus has more than one header line
    #[error("duplicate header line")]
    DuplicateHeader,
    /// A structure appears before the header line
    #[error("structure before the header line")]
    StructureBeforeHeader,
    /// The structure does not fit in the catalog
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Errors raised while reading or writing a corpus
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The file could not be opened or created
    #[error("failed to open {}: {source}", path.display())]
    Open {
        /// Path of the file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// Reading or writing failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The corpus is malformed
    #[error("line {line}: {kind}")]
    Parse {
        /// Line of the error, starting at 1
        line: usize,
        /// Reason of the error
        kind: ParseErrorKind,
    },
    /// Corpora with different bounds cannot be combined
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Read a catalog from a corpus file
pub fn read_corpus_file(path: &Path) -> Result<Catalog, CorpusError> {
    let f = File::open(path).map_err(|source| CorpusError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_corpus(f)
}

/// Read several corpus files with the same bounds into a single catalog
///
/// Structures are appended to their buckets in the order of the files.
pub fn read_corpus_files(paths: &[PathBuf]) -> Result<Catalog, CorpusError> {
    let mut ret: Option<Catalog> = None;
    for path in paths {
        let catalog = read_corpus_file(path)?;
        log::info!(
            "Read {} structures from {}",
            catalog.nb_structures(),
            path.display()
        );
        match &mut ret {
            None => ret = Some(catalog),
            Some(c) => c.join(catalog)?,
        }
    }
    ret.ok_or(CorpusError::Parse {
        line: 0,
        kind: ParseErrorKind::MissingHeader,
    })
}

/// Write a catalog to a corpus file
///
/// The catalog is first written to a temporary file in the same directory, which then replaces
/// the destination. A failure never leaves a partial file behind.
pub fn write_corpus_file(path: &Path, catalog: &Catalog) -> Result<(), CorpusError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let open_error = |source| CorpusError::Open {
        path: path.to_path_buf(),
        source,
    };
    let tmp = tempfile::NamedTempFile::new_in(dir).map_err(open_error)?;
    let mut w = BufWriter::new(tmp);
    write_corpus(&mut w, catalog)?;
    w.flush()?;
    let tmp = w.into_inner().map_err(|e| e.into_error())?;
    tmp.persist(path).map_err(|e| open_error(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{read_corpus_file, read_corpus_files, write_corpus_file, CorpusError};
    use crate::catalog::CatalogError;
    use crate::{Catalog, Structure};

    fn example() -> Catalog {
        let mut cat = Catalog::new(3, 2);
        cat.add(Structure::new(3, 1, vec![vec![0, 1, -2]])).unwrap();
        cat.add(Structure::new(2, 2, vec![vec![1], vec![0, 1]]))
            .unwrap();
        cat
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.txt");
        let cat = example();
        write_corpus_file(&path, &cat).unwrap();
        assert_eq!(read_corpus_file(&path).unwrap(), cat);

        // Overwrite an existing file
        let empty = Catalog::new(3, 2);
        write_corpus_file(&path, &empty).unwrap();
        assert_eq!(read_corpus_file(&path).unwrap(), empty);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        assert!(matches!(
            read_corpus_file(&path),
            Err(CorpusError::Open { .. })
        ));
        let bad_dir = dir.path().join("missing").join("out.txt");
        assert!(matches!(
            write_corpus_file(&bad_dir, &example()),
            Err(CorpusError::Open { .. })
        ));
        assert!(!bad_dir.exists());
    }

    #[test]
    fn test_multiple_files() {
        let dir = tempfile::tempdir().unwrap();
        let p1 = dir.path().join("a.txt");
        let p2 = dir.path().join("b.txt");
        let p3 = dir.path().join("c.txt");
        write_corpus_file(&p1, &example()).unwrap();
        write_corpus_file(&p2, &example()).unwrap();
        write_corpus_file(&p3, &Catalog::new(2, 2)).unwrap();

        let joined = read_corpus_files(&[p1.clone(), p2.clone()]).unwrap();
        assert_eq!(joined.nb_structures(), 4);
        assert_eq!(joined.bucket(3, 1).len(), 2);

        assert!(matches!(
            read_corpus_files(&[p1, p3]),
            Err(CorpusError::Catalog(CatalogError::BoundsMismatch(3, 2, 2, 2)))
        ));
        assert!(read_corpus_files(&Vec::<PathBuf>::new()).is_err());
    }
}
