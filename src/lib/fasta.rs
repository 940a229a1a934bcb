//! Trimming of two-line FASTA records.

use std::{
    io::{BufRead, Write},
    path::Path,
};

use anyhow::Context;
use fgoxide::io::Io;
use log::debug;

/// Trims each FASTA sequence in the input to at most `length` characters.
///
/// The input must hold two-line records: a header line followed by a single
/// sequence line, with no wrapping and no blank lines. Each header is copied
/// whitespace-trimmed; each sequence is whitespace-trimmed and then truncated.
/// Sequences already at or below `length` are left unmodified.
///
/// Lines are paired up as they are read, so an input with an odd number of lines
/// ends with a header that cannot form a record; it is dropped without output.
/// Headers and sequences are not validated.
///
/// # Errors
///
/// Any error produced by reading the input or writing the output.
pub fn trim_fasta<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    length: usize,
) -> std::io::Result<()> {
    let mut records: usize = 0;
    loop {
        let mut header = String::new();
        if input.read_line(&mut header)? == 0 {
            break;
        }
        let mut sequence = String::new();
        if input.read_line(&mut sequence)? == 0 {
            // a trailing header with no sequence line cannot form a record
            break;
        }

        let sequence: String = sequence.trim().chars().take(length).collect();
        writeln!(output, "{}", header.trim())?;
        writeln!(output, "{}", sequence)?;
        records += 1;
    }
    debug!("trimmed {} records to at most {} characters", records, length);
    Ok(())
}

/// Opens the input and output paths and trims the records between them.
///
/// # Errors
///
/// An error if either path cannot be opened, or if trimming fails.
pub fn trim_fasta_paths<P: AsRef<Path>>(
    input: &P,
    output: &P,
    length: usize,
) -> Result<(), anyhow::Error> {
    let io = Io::default();
    let mut reader = io
        .new_reader(input)
        .with_context(|| format!("Failed to open {}", input.as_ref().to_string_lossy()))?;
    let mut writer = io
        .new_writer(output)
        .with_context(|| format!("Failed to create {}", output.as_ref().to_string_lossy()))?;
    trim_fasta(&mut reader, &mut writer, length)?;
    writer.flush()?;
    Ok(())
}
