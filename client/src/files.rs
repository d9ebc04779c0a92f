use std::{
    fs, io,
    path::{Path, PathBuf},
    time::UNIX_EPOCH,
};

/// Contents and modification time of one project file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectFile {
    pub contents: Vec<u8>,
    pub modified_unix: i64,
}

/// Read access to the files of the local project, addressed by paths
/// relative to the project's content directory
pub trait ProjectFiles: Send {
    fn exists(&self, relative_path: &str) -> bool;

    fn load(&self, relative_path: &str) -> io::Result<ProjectFile>;
}

/// [`ProjectFiles`] backed by a directory on the local filesystem
#[derive(Clone, Debug)]
pub struct ContentDir {
    root: PathBuf,
}

impl ContentDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, relative_path: &str) -> PathBuf {
        self.root.join(relative_path)
    }
}

impl ProjectFiles for ContentDir {
    fn exists(&self, relative_path: &str) -> bool {
        self.resolve(relative_path).is_file()
    }

    fn load(&self, relative_path: &str) -> io::Result<ProjectFile> {
        let path = self.resolve(relative_path);
        let contents = fs::read(&path)?;
        let modified = fs::metadata(&path)?.modified()?;
        let modified_unix = match modified.duration_since(UNIX_EPOCH) {
            Ok(since) => i64::try_from(since.as_secs()).unwrap_or(i64::MAX),
            Err(before) => -i64::try_from(before.duration().as_secs()).unwrap_or(i64::MAX),
        };
        Ok(ProjectFile {
            contents,
            modified_unix,
        })
    }
}
