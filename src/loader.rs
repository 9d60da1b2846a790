use crate::catalog::Catalog;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Field separator of the catalog file format. There is no quoting or escaping.
pub const DELIMITER: char = ',';

/// Errors that abort a whole load. Malformed lines are not errors; they are
/// reported and skipped.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(
        "Cannot open file \"{}\". Check if the file exists and the path is correct.",
        path.display()
    )]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read line {line_number}: {source}")]
    Read {
        line_number: usize,
        #[source]
        source: std::io::Error,
    },
}

/// Split one catalog line into fields.
///
/// Whitespace is not trimmed. A single trailing delimiter does not produce an
/// empty final field, so `"A,B,"` has two fields and `","` has one.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.strip_suffix(DELIMITER)
        .unwrap_or(line)
        .split(DELIMITER)
        .collect()
}

/// Parse catalog lines from `reader`.
///
/// Lines are read as bytes; invalid UTF-8 is replaced rather than rejected.
/// Blank lines are skipped. Lines with fewer than two fields are reported to
/// `stderr` and skipped. Only I/O failures abort the read.
pub fn read_catalog<R: BufRead>(mut reader: R, stderr: &mut dyn Write) -> Result<Catalog, LoadError> {
    let mut catalog = Catalog::new();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        line_number += 1;
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| LoadError::Read {
                line_number,
                source,
            })?;
        if read == 0 {
            break;
        }

        let raw = String::from_utf8_lossy(&buf);
        let line = raw.strip_suffix('\n').unwrap_or(&raw);
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            continue;
        }

        let fields = split_fields(line);
        let [id, name, prerequisites @ ..] = fields.as_slice() else {
            tracing::warn!(line_number, line, "skipping malformed catalog line");
            // a failed diagnostic write must not abort the load
            let _ = writeln!(stderr, "Error: Invalid line format: {}", line);
            continue;
        };

        catalog.define(id, name);
        for prereq in prerequisites {
            catalog.add_prerequisite(id, prereq);
        }
    }

    Ok(catalog)
}

/// Open `path` and parse it with [`read_catalog`].
pub fn try_load_catalog(path: &Path, stderr: &mut dyn Write) -> Result<Catalog, LoadError> {
    tracing::debug!(path = %path.display(), "opening catalog file");
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_catalog(BufReader::new(file), stderr)
}

/// Load a catalog from `path`, never failing.
///
/// Any [`LoadError`] is reported to `stderr` and yields an empty catalog, which
/// the shell then treats as "no data loaded".
pub fn load_catalog(path: &Path, stderr: &mut dyn Write) -> Catalog {
    match try_load_catalog(path, stderr) {
        Ok(catalog) => {
            tracing::info!(path = %path.display(), courses = catalog.len(), "catalog loaded");
            catalog
        }
        Err(err) => {
            tracing::error!(error = ?err, "catalog load failed");
            let _ = writeln!(stderr, "Error: {}", err);
            Catalog::new()
        }
    }
}
