use crate::error::structured_file::StructuredFileError;
use crate::error::structured_file::StructuredFileError::{
    DeserializeJsonFileFailed, ReadJsonFileFailed,
};
use std::path::Path;

pub fn load_json_file<T: for<'a> serde::de::Deserialize<'a>>(
    path: &Path,
) -> Result<T, StructuredFileError> {
    let content = crate::fs::read_to_string(path).map_err(ReadJsonFileFailed)?;

    serde_json::from_str(&content)
        .map_err(|err| DeserializeJsonFileFailed(Box::new(path.to_path_buf()), err))
}
