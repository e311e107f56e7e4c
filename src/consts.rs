// src/consts.rs
//! Shared constants — cipher geometry and key encoding

/// AES-256 key length in bytes
pub const KEY_LEN: usize = 32;

/// Hex characters in a key at rest (`KEY_LEN * 2`)
pub const KEY_HEX_LEN: usize = 64;

/// AES-GCM nonce length in bytes (96-bit, the standard GCM nonce)
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length in bytes
pub const TAG_LEN: usize = 16;

/// Fixed overhead added to every sealed payload
pub const SEALED_OVERHEAD: usize = NONCE_LEN + TAG_LEN;
