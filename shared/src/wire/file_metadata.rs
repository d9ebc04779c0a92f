use std::fmt;

use crate::wire::{codec::encode_text, error::MetadataParseError};

const FILE_RECORD_TAG: &str = "file";

/// Describes one file offered to the launcher, sent ahead of its payload as
/// `file:<relative path>:<byte length>:<project>:<unix mtime>`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FileMetadata {
    pub relative_path: String,
    pub byte_length: u64,
    pub project_name: String,
    pub modified_unix: i64,
}

impl FileMetadata {
    pub fn new(
        relative_path: impl Into<String>,
        byte_length: u64,
        project_name: impl Into<String>,
        modified_unix: i64,
    ) -> Self {
        Self {
            relative_path: relative_path.into(),
            byte_length,
            project_name: project_name.into(),
            modified_unix,
        }
    }

    pub fn to_record(&self) -> String {
        format!(
            "{}:{}:{}:{}:{}",
            FILE_RECORD_TAG,
            self.relative_path,
            self.byte_length,
            self.project_name,
            self.modified_unix
        )
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        encode_text(&self.to_record())
    }

    /// Parses a record as the launcher receives it.
    ///
    /// The relative path is the only field that may itself contain `:`, so
    /// the trailing fields are split off from the right.
    pub fn parse(record: &str) -> Result<Self, MetadataParseError> {
        let body = record
            .strip_prefix(FILE_RECORD_TAG)
            .and_then(|rest| rest.strip_prefix(':'))
            .ok_or_else(|| MetadataParseError::MissingTag {
                record: record.to_string(),
            })?;

        let mut fields = body.rsplitn(4, ':');
        let (Some(modified), Some(project_name), Some(length), Some(relative_path)) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(MetadataParseError::MissingField {
                record: record.to_string(),
            });
        };

        let byte_length = length
            .parse::<u64>()
            .map_err(|_| MetadataParseError::InvalidNumber {
                field: "byte length",
                value: length.to_string(),
            })?;
        let modified_unix = modified
            .parse::<i64>()
            .map_err(|_| MetadataParseError::InvalidNumber {
                field: "modification time",
                value: modified.to_string(),
            })?;

        Ok(Self {
            relative_path: relative_path.to_string(),
            byte_length,
            project_name: project_name.to_string(),
            modified_unix,
        })
    }
}

impl fmt::Display for FileMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_record())
    }
}
