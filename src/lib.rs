// src/lib.rs
//! sealbox — context-bound authenticated encryption
//!
//! Features:
//! - AES-256-GCM sealing with per-call associated data (context)
//! - `nonce || ciphertext+tag` wire format, 28 bytes of fixed overhead
//! - Pluggable master-key sources (env var, file) with hex at-rest encoding
//! - secure-gate wrappers for every buffer that carries key material

pub mod aliases;
pub mod consts;
pub mod error;
pub mod key_ops;
pub mod key_source;
pub mod vault;

// Re-export everything users need at the crate root
pub use aliases::{KeyMaterial, MasterKey32, RevealSecret, ToHex};
pub use error::{KeySourceError, VaultError};
pub use key_ops::{generate_key, key_representations, KeyRepr};
pub use key_source::{EnvKeySource, FileKeySource, KeySource};
pub use vault::Vault;
