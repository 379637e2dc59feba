//! Document source: a JSON file or inline JSON content.

use std::fs;
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::ConvertError;

/// Where the JSON document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    File(PathBuf),
    Inline(String),
}

impl DocumentSource {
    /// Select the source; empty values count as not supplied and exactly one
    /// of the two must be given.
    pub fn from_options(file: Option<&str>, content: Option<&str>) -> Result<Self, ConvertError> {
        let file = file.filter(|f| !f.is_empty());
        let content = content.filter(|c| !c.is_empty());

        match (file, content) {
            (Some(_), Some(_)) => Err(ConvertError::ConfigConflict),
            (Some(path), None) => Ok(DocumentSource::File(PathBuf::from(path))),
            (None, Some(json)) => Ok(DocumentSource::Inline(json.to_string())),
            (None, None) => Err(ConvertError::MissingSource),
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, ConvertError> {
        Self::from_options(
            Some(settings.json_file_name.as_str()),
            Some(settings.json_content.as_str()),
        )
    }

    /// Read the raw JSON text.
    pub fn read(&self) -> Result<String, ConvertError> {
        match self {
            DocumentSource::File(path) => {
                fs::read_to_string(path).map_err(|source| ConvertError::SourceUnavailable {
                    path: path.clone(),
                    source,
                })
            }
            DocumentSource::Inline(json) => Ok(json.clone()),
        }
    }

    /// Short description for logs.
    pub fn describe(&self) -> String {
        match self {
            DocumentSource::File(path) => format!("file {}", path.display()),
            DocumentSource::Inline(json) => format!("inline content ({} bytes)", json.len()),
        }
    }
}
