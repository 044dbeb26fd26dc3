use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// An open, readable file that knows its own name
///
/// The name is what the dispatcher derives the extension from.
pub trait SourceFile: Read {
    fn name(&self) -> &str;
}

impl<S: SourceFile + ?Sized> SourceFile for &mut S {
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<S: SourceFile + ?Sized> SourceFile for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// A file on disk opened for reading
#[derive(Debug)]
pub struct NamedFile {
    name: String,
    file: File,
}

impl NamedFile {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Ok(Self::new(path.to_string_lossy(), file))
    }

    /// Wrap an already-open handle
    pub fn new(name: impl Into<String>, file: File) -> Self {
        Self {
            name: name.into(),
            file,
        }
    }
}

impl Read for NamedFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl SourceFile for NamedFile {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Any reader paired with a file name (stdin, in-memory buffers)
#[derive(Debug)]
pub struct NamedReader<R> {
    name: String,
    inner: R,
}

impl<R: Read> NamedReader<R> {
    pub fn new(name: impl Into<String>, inner: R) -> Self {
        Self {
            name: name.into(),
            inner,
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for NamedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R: Read> SourceFile for NamedReader<R> {
    fn name(&self) -> &str {
        &self.name
    }
}
