//! Token value generation

use base64::{Engine as _, engine::general_purpose};
use rand::RngCore;
use rand::rngs::OsRng;

/// Random bytes behind every token value (256 bits)
pub const TOKEN_BYTES: usize = 32;

/// Generate an unguessable, fixed-length token value.
///
/// The value is URL-safe base64 without padding, so it can travel in an
/// `Authorization` header or a query string unescaped.
pub fn generate_token_value() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Encoded length of a value produced by [`generate_token_value`]
pub const fn token_value_len() -> usize {
    (TOKEN_BYTES * 4).div_ceil(3)
}
