//! IO for structure corpus files

use std::io::{BufRead, BufReader, Read, Write};
use std::str::FromStr;

use crate::io::{CorpusError, ParseErrorKind};
use crate::{Catalog, Structure};

fn parse_error(line: usize, kind: ParseErrorKind) -> CorpusError {
    CorpusError::Parse { line, kind }
}

fn parse_values<T: FromStr>(line: usize, s: &str) -> Result<Vec<T>, CorpusError> {
    s.split_whitespace()
        .map(|t| {
            t.parse::<T>()
                .map_err(|_| parse_error(line, ParseErrorKind::InvalidInteger(t.to_owned())))
        })
        .collect()
}

/// Parse the two values following the `h` or `c` keyword
fn parse_pair(line: usize, s: &str) -> Result<(usize, usize), CorpusError> {
    let values = parse_values::<usize>(line, &s[1..])?;
    if values.len() != 2 {
        return Err(parse_error(
            line,
            ParseErrorKind::WrongValueCount {
                expected: 2,
                found: values.len(),
            },
        ));
    }
    Ok((values[0], values[1]))
}

/// Structure being read, with the line where it started
struct PendingStructure {
    line: usize,
    width: usize,
    gate_count: usize,
    rows: Vec<Vec<i32>>,
}

impl PendingStructure {
    fn finish(self, catalog: &mut Catalog) -> Result<(), CorpusError> {
        let line = self.line;
        catalog
            .add(Structure::new(self.width, self.gate_count, self.rows))
            .map_err(|e| parse_error(line, e.into()))
    }
}

/// Read a catalog from a corpus
///
/// Corpus files describe the catalog bounds, then each structure followed by its literal rows:
/// ```text
///     h 3 2
///
///     c 3 1
///     0 1 -2
///
///     c 3 2
///     1
///     0 2
/// ```
/// A structure ends at the first blank line. Other lines outside of a structure are ignored.
pub fn read_corpus<R: Read>(r: R) -> Result<Catalog, CorpusError> {
    let mut catalog: Option<Catalog> = None;
    let mut pending: Option<PendingStructure> = None;
    for (i, l) in BufReader::new(r).lines().enumerate() {
        let l = l?;
        let line = i + 1;
        let t = l.trim();
        if t.is_empty() {
            if let (Some(p), Some(c)) = (pending.take(), catalog.as_mut()) {
                p.finish(c)?;
            }
            continue;
        }
        if let Some(p) = &mut pending {
            p.rows.push(parse_values::<i32>(line, t)?);
            continue;
        }
        if t.starts_with('h') {
            if catalog.is_some() {
                return Err(parse_error(line, ParseErrorKind::DuplicateHeader));
            }
            let (max_width, max_gate_count) = parse_pair(line, t)?;
            let c = Catalog::try_new(max_width, max_gate_count)
                .map_err(|e| parse_error(line, e.into()))?;
            catalog = Some(c);
        } else if t.starts_with('c') {
            if catalog.is_none() {
                return Err(parse_error(line, ParseErrorKind::StructureBeforeHeader));
            }
            let (width, gate_count) = parse_pair(line, t)?;
            pending = Some(PendingStructure {
                line,
                width,
                gate_count,
                rows: Vec::new(),
            });
        } else {
            log::warn!("Ignoring line {}: {:?}", line, t);
        }
    }
    let mut catalog = catalog.ok_or_else(|| parse_error(0, ParseErrorKind::MissingHeader))?;
    if let Some(p) = pending {
        p.finish(&mut catalog)?;
    }
    Ok(catalog)
}

/// Write a catalog as a corpus
///
/// The header comes first, then every structure by increasing width and gate count,
/// each followed by a blank line.
pub fn write_corpus<W: Write>(w: &mut W, catalog: &Catalog) -> Result<(), CorpusError> {
    write!(w, "{}", catalog)?;
    Ok(())
}
