use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Something a whole script can be read from.
pub trait ByteSource {
    /// Human-readable name used in error messages.
    fn name(&self) -> String;

    /// Reads the complete script into memory.
    fn read_all(self) -> io::Result<Vec<u8>>;
}

/// A script file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ByteSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn read_all(self) -> io::Result<Vec<u8>> {
        fs::read(&self.path)
    }
}

/// Any reader, drained to its end.
#[derive(Debug)]
pub struct ReaderSource<R> {
    name: String,
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self { name: name.into(), reader }
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn read_all(mut self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.reader.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

impl ByteSource for Vec<u8> {
    fn name(&self) -> String {
        "<memory>".to_string()
    }

    fn read_all(self) -> io::Result<Vec<u8>> {
        Ok(self)
    }
}
