//! Short-code generator.

use crate::rng::SeededStream;

/// Code alphabet: A-Z without `I`, then digits 2-9.
pub const SHORT_CODE_ALPHABET: &[u8; 33] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ23456789";

/// Characters per code.
pub const SHORT_CODE_LENGTH: usize = 4;

/// Draws a short code. Codes are decorative and may repeat across records.
pub fn generate_short_code(stream: &mut SeededStream) -> String {
    (0..SHORT_CODE_LENGTH)
        .map(|_| SHORT_CODE_ALPHABET[stream.index(SHORT_CODE_ALPHABET.len())] as char)
        .collect()
}
