// src/key_source.rs
//! Master-key sources — pluggable loaders for raw key bytes
//!
//! Key material at rest is a whitespace-trimmed hex string (64 characters
//! for a 32-byte key), read from an environment variable or a file. Loaders
//! decode and hand back raw bytes; length validation belongs to
//! [`crate::Vault::new`].

use std::path::PathBuf;

use tracing::debug;

use crate::aliases::KeyMaterial;
use crate::error::KeySourceError;

pub type Result<T> = std::result::Result<T, KeySourceError>;

/// Single-method capability: produce raw key bytes or fail.
///
/// New sources (e.g. a secrets-manager client) slot in as additional
/// implementations without touching the vault.
pub trait KeySource {
    fn load(&self) -> Result<KeyMaterial>;
}

/// Reads a hex-encoded key from an environment variable.
///
/// Example: `MASTER_KEY="a1b2..."`
pub struct EnvKeySource {
    var_name: String,
}

impl EnvKeySource {
    pub fn new(var_name: impl Into<String>) -> Self {
        Self {
            var_name: var_name.into(),
        }
    }
}

impl KeySource for EnvKeySource {
    fn load(&self) -> Result<KeyMaterial> {
        let val = std::env::var(&self.var_name).unwrap_or_default();
        let trimmed = val.trim();
        if trimmed.is_empty() {
            return Err(KeySourceError::Absent(format!(
                "env var {} is unset or empty",
                self.var_name
            )));
        }
        let bytes = hex::decode(trimmed)?;
        debug!(var = %self.var_name, "loaded master key from environment");
        Ok(KeyMaterial::new(bytes))
    }
}

/// Reads a hex-encoded key from a file (Docker/Kubernetes secret mounts).
pub struct FileKeySource {
    path: PathBuf,
}

impl FileKeySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl KeySource for FileKeySource {
    fn load(&self) -> Result<KeyMaterial> {
        let content = std::fs::read_to_string(&self.path)?;
        let bytes = hex::decode(content.trim())?;
        debug!(path = %self.path.display(), "loaded master key from file");
        Ok(KeyMaterial::new(bytes))
    }
}
