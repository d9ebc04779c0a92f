use crate::wire::codec::decode_text;

pub const ACK_REPLY: &str = "ack";
pub const EXISTS_REPLY: &str = "exists";

/// The launcher's answer to a file metadata record
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MetadataReply {
    /// `ack`: the launcher waits for the payload
    Acknowledged,
    /// `exists`: the launcher already holds a copy of identical size
    AlreadyExists,
    /// Anything else, carrying the literal reply text
    Rejected(String),
}

impl MetadataReply {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let text = decode_text(bytes);
        match text.as_str() {
            ACK_REPLY => MetadataReply::Acknowledged,
            EXISTS_REPLY => MetadataReply::AlreadyExists,
            _ => MetadataReply::Rejected(text),
        }
    }
}

/// Whether a plain text reply is exactly `ack`
pub fn is_ack(bytes: &[u8]) -> bool {
    bytes == ACK_REPLY.as_bytes()
}
