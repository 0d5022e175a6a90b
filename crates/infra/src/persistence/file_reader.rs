use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use northwind_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> InfraResult<BufReader<File>> {
        File::open(path).map(BufReader::new).map_err(|source| file_read(path, source))
    }

    /// Read the entire file into a UTF-8 string.
    pub fn read_to_string(path: &Path) -> InfraResult<String> {
        let mut reader = Self::open_buffered(path)?;
        let mut buf = String::new();
        reader.read_to_string(&mut buf).map_err(|source| file_read(path, source))?;
        Ok(buf)
    }
}

fn file_read(path: &Path, source: std::io::Error) -> InfrastructureError {
    InfrastructureError::FileRead { path: path.to_path_buf(), source }
}
