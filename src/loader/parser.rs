use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Reads the file at `file_path` and deserializes its JSON content into `T`.
///
/// Fails with `Error::IoError` if the file cannot be read and with
/// `Error::DeserializationError` if the content does not match `T`.
pub fn parse_json_file<T: DeserializeOwned>(file_path: impl AsRef<Path>) -> Result<T> {
    let file_path = file_path.as_ref();
    let data = fs::read_to_string(file_path)?;
    log::debug!("Read {} byte(s) of JSON from '{}'.", data.len(), file_path.display());

    Ok(serde_json::from_str(&data)?)
}
