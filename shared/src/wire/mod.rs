pub mod codec;
pub mod error;
pub mod file_metadata;
pub mod reply;
pub mod reproduction;
pub mod status;

/// Maximum payload bytes offered to the transport per send while streaming
/// a file
pub const FILE_CHUNK_SIZE: usize = 1024;
