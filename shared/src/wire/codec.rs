//! Text codec for the launcher control channel.
//!
//! The launcher speaks a plain 8-bit protocol: every character travels as a
//! single byte and there is neither a length prefix nor a terminator. A
//! stray `0x00` would end the peer's text read early, so the encoder drops
//! them.

/// Encodes `text` into raw protocol bytes.
///
/// Each character contributes the low 8 bits of its code point. Characters
/// that map to `0x00` are skipped.
pub fn encode_text(text: &str) -> Vec<u8> {
    let mut output = Vec::with_capacity(text.len());
    for character in text.chars() {
        let byte = (u32::from(character) & 0xFF) as u8;
        if byte != 0 {
            output.push(byte);
        }
    }
    output
}

/// Decodes raw protocol bytes into a `String`.
///
/// Every byte is widened to the character with the same code point
/// (U+0000..=U+00FF), so no input is ever rejected.
pub fn decode_text(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| char::from(*byte)).collect()
}
