// src/key_ops.rs
//! Key generation and representation utilities
//!
//! Mints fresh 256-bit master keys and renders them in the at-rest
//! encodings operators store in env vars or secret files.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;

use crate::aliases::{MasterKey32, RevealSecret, ToHex};

pub type Key = MasterKey32;

/// Generate a new random 256-bit master key
#[inline]
pub fn generate_key() -> Key {
    Key::from_random()
}

/// Multiple string representations of a key for export/display
#[derive(Debug, Clone)]
pub struct KeyRepr {
    pub hex: String,
    pub base64: String,
    pub base64url_no_pad: String,
}

/// The `hex` form is what [`crate::EnvKeySource`] and
/// [`crate::FileKeySource`] expect to find at rest.
pub fn key_representations(key: &Key) -> KeyRepr {
    KeyRepr {
        hex: key.expose_secret().to_hex(),
        base64: STANDARD.encode(key.expose_secret()),
        base64url_no_pad: URL_SAFE_NO_PAD.encode(key.expose_secret()),
    }
}
