use crate::error::{Result, ResultExt, VersionError};
use crate::{SemverVersion, Version, VersionType};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// File name used when no path is given on the command line
pub const DEFAULT_VERSION_FILE: &str = "VERSION";

/// Outcome of a single bump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bump {
    pub previous: SemverVersion,
    pub current: SemverVersion,
}

/// A version file held open for reading and writing.
///
/// The handle lives exactly as long as the store and is closed on drop,
/// on success and error paths alike.
#[derive(Debug)]
pub struct VersionStore {
    path: PathBuf,
    file: File,
}

impl VersionStore {
    /// Open the backing file for read and write access
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&path)
            .map_err(|source| VersionError::ResourceNotFound {
                path: path.clone(),
                source,
            })?;

        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the first line of the file
    pub fn load(&mut self) -> Result<SemverVersion> {
        let line = self.read_first_line()?;
        Version::parse(&line)
            .with_context(|| format!("Failed to read version from '{}'", self.path.display()))
    }

    /// Replace the whole file content with `MAJOR.MINOR.PATCH`, no trailing newline.
    ///
    /// The file is truncated before writing, so a failure in between leaves
    /// it empty.
    pub fn save(&mut self, version: &SemverVersion) -> Result<()> {
        self.file
            .seek(SeekFrom::Start(0))
            .and_then(|_| self.file.set_len(0))
            .and_then(|_| write!(self.file, "{version}"))
            .and_then(|_| self.file.flush())
            .map_err(VersionError::WriteFailure)
            .with_context(|| format!("Failed to write version {} to '{}'", version, self.path.display()))
    }

    /// Load, apply one increment and save
    pub fn bump(&mut self, version_type: VersionType) -> Result<Bump> {
        let previous = self.load()?;
        let current = Version::increment(&previous, version_type)?;
        self.save(&current)?;

        Ok(Bump { previous, current })
    }

    fn read_first_line(&mut self) -> Result<String> {
        let mut line = String::new();
        self.file
            .seek(SeekFrom::Start(0))
            .and_then(|_| BufReader::new(&mut self.file).read_line(&mut line))
            .map_err(|source| match source.kind() {
                io::ErrorKind::InvalidData => {
                    VersionError::FormatError(format!("'{}' is not valid UTF-8", self.path.display()))
                }
                _ => VersionError::ResourceNotFound {
                    path: self.path.clone(),
                    source,
                },
            })?;

        let line = line.strip_suffix('\n').unwrap_or(&line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Ok(line.to_string())
    }
}
