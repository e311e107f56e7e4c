// src/error.rs
//! Public error types for the entire crate

use thiserror::Error;

/// Errors raised by [`crate::Vault`].
#[derive(Error, Debug)]
pub enum VaultError {
    /// Construction was handed a key that is not exactly 32 bytes.
    #[error("key must be 32 bytes (64 hex characters at rest)")]
    InvalidKeySize,

    /// Underlying cipher failure outside the decryption path. Unreachable
    /// with a well-formed 32-byte key on a correct backend.
    #[error("cipher operation failed")]
    Cipher,

    /// The OS random source could not supply nonce bytes. There is no
    /// fallback to a weaker source.
    #[error("secure random source failed to supply nonce bytes")]
    RandomSource,

    /// Single opaque failure for every open error: too-short input, tampered
    /// bytes, wrong context, wrong key. Callers must not be able to tell
    /// these apart.
    #[error("decryption failed (integrity check or context mismatch)")]
    DecryptionFailed,
}

/// Errors raised by [`crate::KeySource`] implementations.
///
/// Absence and decode failures stay distinguishable for operator diagnosis.
#[derive(Error, Debug)]
pub enum KeySourceError {
    #[error("key source absent: {0}")]
    Absent(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("key material is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
