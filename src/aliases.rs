// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical types used throughout sealbox.

pub use secure_gate::{dynamic_alias, fixed_alias, RevealSecret, ToHex};

// Fixed-size secrets
fixed_alias!(pub MasterKey32, 32); // 256-bit AES-GCM master key

// Dynamic secrets
dynamic_alias!(pub KeyMaterial, Vec<u8>); // raw key bytes as handed back by a KeySource
