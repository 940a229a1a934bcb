//! Utility functions.
use std::{
    io::{Read, Write},
    path::Path,
};

use anyhow::{anyhow, Context};
use fgoxide::io::Io;
use log::debug;

/// The default number of bytes read at a time when concatenating files.
pub const DEFAULT_READ_CHUNK: usize = 10_000;

/// Verifies that a file (or directory) exists.
///
/// This is a guard for drivers to run before a long pipeline stage; it reads
/// filesystem metadata only and has no other side effect.
///
/// # Errors
///
/// An error naming the path if it does not exist on the filesystem. Callers that
/// need a more specific error can layer their own context onto it.
pub fn check_path<P: AsRef<Path>>(path: &P) -> Result<(), anyhow::Error> {
    let path = path.as_ref();
    if path.exists() {
        Ok(())
    } else {
        Err(anyhow!("Cannot continue! The file {} does not exist!", path.to_string_lossy()))
    }
}

/// Copies every byte of every input, in the order given, into the output.
///
/// Reads are bounded to `chunk_size` bytes, so arbitrarily large inputs are never
/// held in memory. Inputs are consumed one at a time with no interleaving; the
/// output is the strict byte-for-byte concatenation of the inputs.
///
/// # Errors
///
/// Any error produced by reading an input or writing the output.
pub fn concatenate_files_with_chunk_size<R: Read, W: Write>(
    inputs: &mut [R],
    output: &mut W,
    chunk_size: usize,
) -> std::io::Result<()> {
    let mut chunk = vec![0u8; chunk_size];
    for input in inputs.iter_mut() {
        loop {
            let bytes_read = input.read(&mut chunk)?;
            if bytes_read == 0 {
                break;
            }
            output.write_all(&chunk[..bytes_read])?;
        }
    }
    Ok(())
}

/// Copies every byte of every input, in the order given, into the output using
/// [`DEFAULT_READ_CHUNK`] sized reads.
///
/// # Errors
///
/// Any error produced by reading an input or writing the output.
pub fn concatenate_files<R: Read, W: Write>(
    inputs: &mut [R],
    output: &mut W,
) -> std::io::Result<()> {
    concatenate_files_with_chunk_size(inputs, output, DEFAULT_READ_CHUNK)
}

/// Opens each input path in order and concatenates their contents into the output
/// path.
///
/// # Errors
///
/// An error if any path cannot be opened, or if the copy fails.
pub fn concatenate_paths<P: AsRef<Path>>(inputs: &[P], output: &P) -> Result<(), anyhow::Error> {
    let io = Io::default();
    let mut writer = io
        .new_writer(output)
        .with_context(|| format!("Failed to create {}", output.as_ref().to_string_lossy()))?;
    let mut readers = inputs
        .iter()
        .map(|input| {
            io.new_reader(input)
                .with_context(|| format!("Failed to open {}", input.as_ref().to_string_lossy()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    concatenate_files(&mut readers, &mut writer)?;
    writer.flush()?;
    debug!(
        "concatenated {} files into {}",
        inputs.len(),
        output.as_ref().to_string_lossy()
    );
    Ok(())
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use rstest::rstest;
    use tempfile::tempdir;

    use super::{check_path, concatenate_files, concatenate_files_with_chunk_size, concatenate_paths};

    #[test]
    fn test_check_path_ok() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("exists.txt");
        std::fs::write(&file, "hello").unwrap();

        assert!(check_path(&file).is_ok());
        assert!(check_path(&dir.path().to_path_buf()).is_ok());
    }

    #[test]
    fn test_check_path_missing() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("does_not_exist.txt");

        let result = check_path(&file);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }

    #[test]
    fn test_concatenate_in_order() {
        let mut inputs = vec![Cursor::new("abc"), Cursor::new("def")];
        let mut output = Vec::new();
        concatenate_files(&mut inputs, &mut output).unwrap();
        assert_eq!(output, b"abcdef");
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(5)]
    #[case(10_000)]
    fn test_concatenate_is_chunk_size_invariant(#[case] chunk_size: usize) {
        let mut inputs = vec![Cursor::new("abc"), Cursor::new(""), Cursor::new("defg")];
        let mut output = Vec::new();
        concatenate_files_with_chunk_size(&mut inputs, &mut output, chunk_size).unwrap();
        assert_eq!(output, b"abcdefg");
    }

    #[test]
    fn test_concatenate_no_inputs() {
        let mut inputs: Vec<Cursor<&str>> = vec![];
        let mut output = Vec::new();
        concatenate_files(&mut inputs, &mut output).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_concatenate_paths() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        let output = dir.path().join("combined.txt");
        std::fs::write(&first, "abc").unwrap();
        std::fs::write(&second, "def").unwrap();

        concatenate_paths(&[first, second], &output).unwrap();

        assert_eq!(std::fs::read_to_string(&output).unwrap(), "abcdef");
    }

    #[test]
    fn test_concatenate_paths_missing_input() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does_not_exist.txt");
        let output = dir.path().join("combined.txt");
        assert!(concatenate_paths(&[missing], &output).is_err());
    }
}
