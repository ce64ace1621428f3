/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Fixed-width string decoding.

/// Decodes a zero-padded byte array.
///
/// Returns the bytes before the first zero byte, or the whole array if it
/// has none. Invalid UTF-8 is replaced rather than rejected; symbol and
/// asset codes are ASCII.
#[must_use]
pub fn decode_fixed_width(bytes: &[u8]) -> String {
    let len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..len]).into_owned()
}
