use thiserror::Error;

/// Errors that can occur while parsing a file metadata record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataParseError {
    /// The record does not start with the `file:` tag
    #[error("Record '{record}' is not a file metadata record, expected a 'file:' prefix")]
    MissingTag { record: String },

    /// The record has fewer than four colon separated fields
    #[error("File metadata record '{record}' is missing fields, expected 'file:<path>:<length>:<project>:<mtime>'")]
    MissingField { record: String },

    /// A numeric field could not be parsed
    #[error("Invalid {field} '{value}' in file metadata record")]
    InvalidNumber { field: &'static str, value: String },
}
