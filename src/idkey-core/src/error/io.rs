use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoErrorKind {
    #[error("Refusing to overwrite existing file {0}")]
    AlreadyExists(PathBuf),

    #[error("Failed to create {0}: {1}")]
    CreateDirectoryFailed(PathBuf, std::io::Error),

    #[error("Failed to create a temporary file in {0}: {1}")]
    CreateTempFileFailed(PathBuf, std::io::Error),

    #[error("Cannot determine parent folder for {0}")]
    NoParent(PathBuf),

    #[error("Failed to read permissions of {0}: {1}")]
    ReadPermissionsFailed(PathBuf, std::io::Error),

    #[error("Failed to read {0} as string: {1}")]
    ReadToStringFailed(PathBuf, std::io::Error),

    #[error("Failed to rename {0} to {1}: {2}")]
    RenameFailed(Box<PathBuf>, Box<PathBuf>, std::io::Error),

    #[error("Failed to write to {0}: {1}")]
    WriteFileFailed(PathBuf, std::io::Error),

    #[error("Failed to set permissions of {0}: {1}")]
    WritePermissionsFailed(PathBuf, std::io::Error),

    #[error("Failed to write to output: {0}")]
    WriteSinkFailed(std::io::Error),
}

#[derive(Error, Debug)]
#[error(transparent)]
pub struct IoError(pub Box<IoErrorKind>);

impl IoError {
    pub fn new(kind: IoErrorKind) -> Self {
        IoError(Box::new(kind))
    }

    pub fn kind(&self) -> &IoErrorKind {
        &self.0
    }
}

impl<E> From<E> for IoError
where
    IoErrorKind: From<E>,
{
    fn from(err: E) -> Self {
        IoError(Box::new(IoErrorKind::from(err)))
    }
}
