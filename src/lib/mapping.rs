use std::{
    collections::HashSet,
    io::{BufRead, Write},
    path::Path,
};

use ahash::AHashSet;
use fgoxide::io::Io;
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The error that may occur when reading or writing a [`MappingFile`].
#[derive(Error, Debug)]
pub enum MappingError {
    #[error("Io error occurred")]
    Io(#[from] std::io::Error),

    #[error("Io error occurred")]
    FgError(#[from] fgoxide::FgError),
}

/// A collaborating table of sample data.
///
/// The only capability required of the table is the set of sample identifiers it
/// holds; implementations are provided for the common collection types so callers
/// do not need a wrapper.
pub trait SampleIdSource {
    /// Returns the identifiers of every sample in the table.
    fn sample_ids(&self) -> AHashSet<&str>;
}

impl SampleIdSource for AHashSet<String> {
    fn sample_ids(&self) -> AHashSet<&str> {
        self.iter().map(String::as_str).collect()
    }
}

impl SampleIdSource for HashSet<String> {
    fn sample_ids(&self) -> AHashSet<&str> {
        self.iter().map(String::as_str).collect()
    }
}

impl SampleIdSource for Vec<String> {
    fn sample_ids(&self) -> AHashSet<&str> {
        self.iter().map(String::as_str).collect()
    }
}

/// A single row of a mapping file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Hash, Eq)]
pub struct MappingRow {
    /// The barcode that uniquely identifies the sample.
    pub sample_id: String,

    /// Everything after the first tab of the line, with any further tabs left in
    /// place.
    pub rest: String,
}

impl MappingRow {
    /// Create a new [`MappingRow`].
    pub fn new<I: Into<String>, R: Into<String>>(sample_id: I, rest: R) -> Self {
        Self { sample_id: sample_id.into(), rest: rest.into() }
    }

    /// Rejoins the row into its on-disk form, `sample_id<TAB>rest`.
    ///
    /// Rows parsed from a line that contained no tab reconstruct with a trailing
    /// tab.
    pub fn reconstruct(&self) -> String {
        format!("{}\t{}", self.sample_id, self.rest)
    }
}

/// A parsed mapping file: the header line plus every row in its original order.
///
/// The header is opaque and rows are not validated in any way; duplicate sample
/// identifiers, uneven field counts, and blank lines are all passed through
/// unchanged for the caller to deal with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MappingFile {
    /// The header line, trimmed of trailing whitespace.
    pub header: String,

    /// The rows in the order they appeared in the input.
    pub rows: Vec<MappingRow>,
}

impl MappingFile {
    /// Reads a mapping file from the given reader.
    ///
    /// The first line is taken as the header. Each remaining line is trimmed of
    /// surrounding whitespace and split on its first tab into the sample identifier
    /// and the rest of the line; a line with no tab becomes a row with an empty
    /// `rest`. An empty input yields an empty header and no rows.
    ///
    /// # Errors
    ///
    /// - [`MappingError::Io`] if the reader cannot be read
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, MappingError> {
        let mut lines = reader.lines();

        let header = match lines.next() {
            Some(line) => line?.trim_end().to_string(),
            None => String::new(),
        };

        let mut rows = Vec::new();
        for line in lines {
            let line = line?;
            let line = line.trim();
            let (sample_id, rest) = match line.split_once('\t') {
                Some((sample_id, rest)) => (sample_id, rest),
                None => (line, ""),
            };
            rows.push(MappingRow::new(sample_id, rest));
        }

        Ok(Self { header, rows })
    }

    /// Reads a mapping file from the given path.
    ///
    /// # Errors
    ///
    /// - [`MappingError::FgError`] if the file cannot be opened
    /// - [`MappingError::Io`] if the file cannot be read
    pub fn from_path<P: AsRef<Path>>(path: &P) -> Result<Self, MappingError> {
        let io = Io::default();
        let mapping = Self::from_reader(io.new_reader(path)?)?;
        debug!(
            "read {} mapping rows from {}",
            mapping.rows.len(),
            path.as_ref().to_string_lossy()
        );
        Ok(mapping)
    }

    /// Writes the header and each reconstructed row to the given path.
    ///
    /// # Errors
    ///
    /// - [`MappingError::FgError`] if the file cannot be created
    /// - [`MappingError::Io`] if a line cannot be written
    pub fn to_path<P: AsRef<Path>>(&self, path: &P) -> Result<(), MappingError> {
        let io = Io::default();
        let mut writer = io.new_writer(path)?;
        writeln!(writer, "{}", self.header)?;
        for row in &self.rows {
            writeln!(writer, "{}", row.reconstruct())?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Returns the set of sample identifiers across all rows.
    pub fn sample_ids(&self) -> AHashSet<&str> {
        self.rows.iter().map(|row| row.sample_id.as_str()).collect()
    }

    /// Returns true if every sample identifier in the table appears among this
    /// mapping's rows.
    ///
    /// Set semantics: duplicates and ordering are ignored on both sides.
    pub fn verify_subset<T: SampleIdSource>(&self, table: &T) -> bool {
        let ids = self.sample_ids();
        let table_ids = table.sample_ids();
        let is_subset = table_ids.is_subset(&ids);
        if !is_subset {
            debug!(
                "table ids missing from the mapping: {}",
                table_ids.difference(&ids).join(", ")
            );
        }
        is_subset
    }

    /// Returns the reconstructed rows whose sample identifier is present in the
    /// table, preserving this mapping's row order.
    ///
    /// Rows for samples the table does not know are dropped silently.
    pub fn slice<T: SampleIdSource>(&self, table: &T) -> Vec<String> {
        let table_ids = table.sample_ids();
        self.rows
            .iter()
            .filter(|row| table_ids.contains(row.sample_id.as_str()))
            .map(MappingRow::reconstruct)
            .collect()
    }
}
