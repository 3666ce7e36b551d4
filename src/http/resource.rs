use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

/// What the store knows about a request target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Absent,
    Directory,
    File { modified: SystemTime },
}

/// Read access to the files the server publishes. Targets are request URIs,
/// resolved relative to the store's root.
pub trait ResourceStore: Send + Sync {
    fn stat(&self, uri: &str) -> io::Result<Resource>;

    fn read(&self, uri: &str) -> io::Result<Vec<u8>>;
}

/// Serves files from a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> FsStore {
        FsStore { root: root.into() }
    }

    fn resolve(&self, uri: &str) -> PathBuf {
        let mut path = self.root.clone();
        path.extend(
            Path::new(uri)
                .components()
                .filter(|c| matches!(c, Component::Normal(_))),
        );
        path
    }
}

impl ResourceStore for FsStore {
    fn stat(&self, uri: &str) -> io::Result<Resource> {
        match fs::metadata(self.resolve(uri)) {
            Ok(meta) if meta.is_dir() => Ok(Resource::Directory),
            Ok(meta) => Ok(Resource::File {
                modified: meta.modified()?,
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Resource::Absent),
            Err(e) => Err(e),
        }
    }

    fn read(&self, uri: &str) -> io::Result<Vec<u8>> {
        fs::read(self.resolve(uri))
    }
}

/// True when the target tries to climb above the root with a `..` segment.
pub fn escapes_root(uri: &str) -> bool {
    uri.split('/').any(|segment| segment == "..")
}
