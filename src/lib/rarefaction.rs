//! Lookup of the rarefaction depth that holds a given sample.
//!
//! A pipeline may rarefy its results at several depths (e.g. 1k, 10k), each with
//! its own barcode lookup table. Finding a sample means scanning the depths in
//! priority order and reporting the first one that knows the barcode.

use std::{
    collections::{HashMap, HashSet},
    path::Path,
};

use ahash::{AHashMap, AHashSet};
use log::debug;
use thiserror::Error;

/// The error that may occur when loading a rarefaction lookup table.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Io error occurred")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Deserialize(#[from] csv::Error),
}

/// The capability a rarefaction lookup must provide: membership of a sample
/// identifier.
pub trait IdLookup {
    /// Returns true if the lookup contains the given identifier.
    fn contains_id(&self, id: &str) -> bool;
}

impl<V> IdLookup for AHashMap<String, V> {
    fn contains_id(&self, id: &str) -> bool {
        self.contains_key(id)
    }
}

impl<V> IdLookup for HashMap<String, V> {
    fn contains_id(&self, id: &str) -> bool {
        self.contains_key(id)
    }
}

impl IdLookup for AHashSet<String> {
    fn contains_id(&self, id: &str) -> bool {
        self.contains(id)
    }
}

impl IdLookup for HashSet<String> {
    fn contains_id(&self, id: &str) -> bool {
        self.contains(id)
    }
}

/// Determines which rarefaction level contains the given sample identifier.
///
/// The lookups are scanned in the order given and the name of the first one
/// containing the identifier is returned, so earlier levels take priority.
/// Returns `None` when no lookup has the identifier.
pub fn pick_rarefaction_level<'a, N, L>(id: &str, lookups: &'a [(N, L)]) -> Option<&'a str>
where
    N: AsRef<str>,
    L: IdLookup,
{
    lookups
        .iter()
        .find(|(_, lookup)| lookup.contains_id(id))
        .map(|(name, _)| name.as_ref())
}

/// Loads the barcode lookup for a single rarefaction depth from a two-column
/// tab-separated file: the sample identifier, then the identifier of the rarefied
/// result for that sample. No header line is expected.
///
/// # Errors
///
/// - [`LookupError::Deserialize`] if the file cannot be read or a record does not
///   have two columns
pub fn read_lookup<P: AsRef<Path>>(path: &P) -> Result<AHashMap<String, String>, LookupError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_path(path.as_ref())?;

    let mut lookup = AHashMap::new();
    for record in reader.deserialize() {
        let (id, rarefied): (String, String) = record?;
        lookup.insert(id, rarefied);
    }
    debug!(
        "read {} lookup entries from {}",
        lookup.len(),
        path.as_ref().to_string_lossy()
    );
    Ok(lookup)
}
