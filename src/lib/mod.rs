//! A library of file and collection helpers for a sample-metadata pipeline.
//!
//! # Overview
//!
//! Each helper is an independent, single-pass transformation that a driver
//! pipeline chains as needed:
//!
//! - [`mapping::MappingFile`] parses a tab-delimited mapping file, verifies that a
//!   table's samples are covered ([`mapping::MappingFile::verify_subset`]), and
//!   slices the mapping down to them ([`mapping::MappingFile::slice`]).
//! - [`rarefaction::pick_rarefaction_level`] finds the first rarefaction depth
//!   whose lookup contains a given sample identifier.
//! - [`fasta::trim_fasta`] truncates two-line FASTA records to a fixed length.
//! - [`utils`] holds the path-existence guard and chunked file concatenation.
//!
//! The helpers hold no state across calls and never open or close a resource they
//! were not given, other than the path-based convenience wrappers.
#![deny(unsafe_code)]
#![allow(
    clippy::must_use_candidate,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]
pub mod fasta;
pub mod mapping;
pub mod rarefaction;
pub mod utils;
