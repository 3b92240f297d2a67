//! Server-style object identifiers.
//!
//! Ids are 16 random bytes encoded as 26 characters of unpadded base32 over
//! the alphabet `ybndrfg8ejkmcpqxot1uwisza345h769`.

use uuid::Uuid;

/// Length of an encoded id.
pub const ID_LEN: usize = 26;

const ALPHABET: &[u8; 32] = b"ybndrfg8ejkmcpqxot1uwisza345h769";

/// Generate a fresh id.
///
/// ```
/// use mattermost_client::model::{is_valid_id, new_id};
///
/// let id = new_id();
/// assert!(is_valid_id(&id));
/// ```
pub fn new_id() -> String {
    encode(Uuid::new_v4().as_bytes())
}

/// Check that `id` has the shape of a server id.
pub fn is_valid_id(id: &str) -> bool {
    id.len() == ID_LEN && id.bytes().all(|b| ALPHABET.contains(&b))
}

fn encode(bytes: &[u8; 16]) -> String {
    let mut out = String::with_capacity(ID_LEN);
    let mut buffer: u32 = 0;
    let mut bits = 0;
    for &byte in bytes {
        buffer = (buffer << 8) | u32::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(ALPHABET[((buffer >> bits) & 0x1f) as usize] as char);
        }
    }
    if bits > 0 {
        out.push(ALPHABET[((buffer << (5 - bits)) & 0x1f) as usize] as char);
    }
    out
}
