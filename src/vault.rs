// src/vault.rs
//! AES-256-GCM vault — encrypt and decrypt byte payloads bound to a context
//!
//! Wire format: `[nonce: 12][ciphertext: N][tag: 16]`, total `28 + N` bytes.
//! The nonce is drawn fresh from the OS CSPRNG on every encryption; the
//! context (AAD) is authenticated but never encrypted. No version byte, no
//! algorithm identifier — callers agree on those out of band.

use aes_gcm::{
    aead::{Aead, KeyInit, OsRng, Payload},
    Aes256Gcm, Nonce,
};

use crate::consts::{KEY_LEN, NONCE_LEN};
use crate::error::VaultError;

pub type Result<T> = std::result::Result<T, VaultError>;

/// Immutable AEAD handle bound to one 256-bit key.
///
/// Every operation takes `&self` and holds no per-call state, so a single
/// `Vault` may be shared across any number of threads without coordination.
pub struct Vault {
    cipher: Aes256Gcm,
}

impl Vault {
    /// Build a vault from exactly [`KEY_LEN`] raw key bytes.
    ///
    /// The caller's buffer may be discarded afterwards; the key lives on
    /// only inside the cipher's key schedule.
    pub fn new(key: &[u8]) -> Result<Self> {
        if key.len() != KEY_LEN {
            return Err(VaultError::InvalidKeySize);
        }
        let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| VaultError::Cipher)?;
        Ok(Self { cipher })
    }

    /// Encrypt `plaintext` bound to `context`, returning `nonce || ciphertext+tag`.
    ///
    /// Both inputs may be empty. Output length is always
    /// `plaintext.len() + SEALED_OVERHEAD`.
    pub fn encrypt(&self, plaintext: &[u8], context: &[u8]) -> Result<Vec<u8>> {
        use aes_gcm::aead::rand_core::RngCore;

        let mut nonce_bytes = [0u8; NONCE_LEN];
        OsRng
            .try_fill_bytes(&mut nonce_bytes)
            .map_err(|_| VaultError::RandomSource)?;
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .cipher
            .encrypt(
                nonce,
                Payload {
                    msg: plaintext,
                    aad: context,
                },
            )
            .map_err(|_| VaultError::Cipher)?;

        let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        sealed.extend_from_slice(&nonce_bytes);
        sealed.extend_from_slice(&ciphertext);
        Ok(sealed)
    }

    /// Authenticate and decrypt a sealed payload under `context`.
    ///
    /// Every verification failure collapses to [`VaultError::DecryptionFailed`]:
    /// the caller cannot distinguish a wrong key from a wrong context or
    /// tampered bytes, and no unauthenticated plaintext ever escapes.
    pub fn decrypt(&self, sealed: &[u8], context: &[u8]) -> Result<Vec<u8>> {
        if sealed.len() < NONCE_LEN {
            return Err(VaultError::DecryptionFailed);
        }
        let (nonce_bytes, body) = sealed.split_at(NONCE_LEN);
        let nonce = Nonce::from_slice(nonce_bytes);

        self.cipher
            .decrypt(
                nonce,
                Payload {
                    msg: body,
                    aad: context,
                },
            )
            .map_err(|_| VaultError::DecryptionFailed)
    }
}
