use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::models::Dimensions;

/// One directory entry as seen by the image service.
#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    pub name: String,
    pub is_file: bool,
    pub size: u64,
    pub modified: DateTime<Utc>,
}

/// Read-only access to the images root. Folder names are relative to it.
pub trait ImageStore: Send + Sync {
    fn read_folder(&self, folder: &str) -> io::Result<Vec<FileEntry>>;

    /// Names of the subdirectories of the root.
    fn list_folders(&self) -> io::Result<Vec<String>>;

    /// Pixel size from the file header, `None` if it cannot be determined.
    fn dimensions(&self, folder: &str, file: &str) -> Option<Dimensions>;

    fn read_file(&self, relative: &Path) -> io::Result<Vec<u8>>;
}

pub struct FsImageStore {
    root: PathBuf,
}

impl FsImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    // Rejects anything that could escape the root
    fn resolve(&self, relative: &Path) -> io::Result<PathBuf> {
        let mut path = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => path.push(part),
                Component::CurDir => {}
                _ => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("path escapes images root: {}", relative.display()),
                    ))
                }
            }
        }
        Ok(path)
    }
}

impl ImageStore for FsImageStore {
    fn read_folder(&self, folder: &str) -> io::Result<Vec<FileEntry>> {
        let dir = self.resolve(Path::new(folder))?;
        let mut entries = Vec::new();

        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let metadata = fs::metadata(entry.path())?;
            let modified = metadata.modified().map(DateTime::<Utc>::from)?;

            entries.push(FileEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_file: metadata.is_file(),
                size: metadata.len(),
                modified,
            });
        }

        Ok(entries)
    }

    fn list_folders(&self) -> io::Result<Vec<String>> {
        let mut folders = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                folders.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        folders.sort();
        Ok(folders)
    }

    fn dimensions(&self, folder: &str, file: &str) -> Option<Dimensions> {
        let path = self.resolve(&Path::new(folder).join(file)).ok()?;
        match image::image_dimensions(&path) {
            Ok((width, height)) => Some(Dimensions { width, height }),
            Err(e) => {
                log::debug!("Could not read dimensions of {}: {}", path.display(), e);
                None
            }
        }
    }

    fn read_file(&self, relative: &Path) -> io::Result<Vec<u8>> {
        fs::read(self.resolve(relative)?)
    }
}
