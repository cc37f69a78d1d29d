use crate::error::io::IoError;
use crate::error::io::IoErrorKind::{
    CreateDirectoryFailed, CreateTempFileFailed, NoParent, ReadPermissionsFailed,
    ReadToStringFailed, RenameFailed, WriteFileFailed, WritePermissionsFailed,
};

use std::fs::Permissions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn create_dir_all(path: &Path) -> Result<(), IoError> {
    std::fs::create_dir_all(path)
        .map_err(|err| CreateDirectoryFailed(path.to_path_buf(), err).into())
}

pub fn parent(path: &Path) -> Result<PathBuf, IoError> {
    match path.parent() {
        None => Err(IoError::new(NoParent(path.to_path_buf()))),
        // A bare file name lives in the current directory.
        Some(parent) if parent.as_os_str().is_empty() => Ok(PathBuf::from(".")),
        Some(parent) => Ok(parent.to_path_buf()),
    }
}

pub fn read_to_string(path: &Path) -> Result<String, IoError> {
    std::fs::read_to_string(path).map_err(|err| ReadToStringFailed(path.to_path_buf(), err).into())
}

pub fn read_permissions(path: &Path) -> Result<Permissions, IoError> {
    std::fs::metadata(path)
        .map_err(|err| ReadPermissionsFailed(path.to_path_buf(), err).into())
        .map(|x| x.permissions())
}

pub fn set_permissions(path: &Path, permissions: Permissions) -> Result<(), IoError> {
    std::fs::set_permissions(path, permissions)
        .map_err(|err| WritePermissionsFailed(path.to_path_buf(), err).into())
}

/// Sets the unix mode bits of `path`. A no-op on other platforms.
pub fn set_mode(path: &Path, mode: u32) -> Result<(), IoError> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut permissions = read_permissions(path)?;
        permissions.set_mode(mode);
        set_permissions(path, permissions)?;
    }
    #[cfg(not(unix))]
    let _ = (path, mode);
    Ok(())
}

/// Writes `contents` to a temporary file next to `path`, applies `mode`, then renames it over
/// `path`. Readers never observe a partially written file; the temporary file is removed
/// on every failure path.
///
/// Automatically creates required directories.
pub fn write_atomic(path: &Path, contents: &[u8], mode: u32) -> Result<(), IoError> {
    let containing_folder = parent(path)?;
    create_dir_all(&containing_folder)?;

    let mut file = tempfile::NamedTempFile::new_in(&containing_folder)
        .map_err(|err| CreateTempFileFailed(containing_folder.clone(), err))?;
    set_mode(file.path(), mode)?;
    file.write_all(contents)
        .and_then(|()| file.as_file().sync_all())
        .map_err(|err| WriteFileFailed(path.to_path_buf(), err))?;

    let temp_path = file.path().to_path_buf();
    file.persist(path).map_err(|err| {
        RenameFailed(Box::new(temp_path), Box::new(path.to_path_buf()), err.error)
    })?;
    Ok(())
}
