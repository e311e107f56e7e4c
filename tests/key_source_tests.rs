// tests/key_source_tests.rs
use sealbox::consts::KEY_HEX_LEN;
use sealbox::error::KeySourceError;
use sealbox::{
    generate_key, key_representations, EnvKeySource, FileKeySource, KeySource, RevealSecret, Vault,
};

fn test_key_hex() -> String {
    hex::encode((0u8..32).collect::<Vec<u8>>())
}

#[test]
fn test_env_source_loads_key() {
    let var = "SEALBOX_TEST_KEY";
    std::env::set_var(var, test_key_hex());

    let loaded = EnvKeySource::new(var).load().unwrap();
    assert_eq!(loaded.expose_secret().len(), 32);
    assert_eq!(loaded.expose_secret().as_slice(), &(0u8..32).collect::<Vec<u8>>()[..]);

    std::env::remove_var(var);
}

#[test]
fn test_env_source_trims_whitespace() {
    let var = "SEALBOX_TEST_KEY_PADDED";
    std::env::set_var(var, format!("  {}\n", test_key_hex()));

    let loaded = EnvKeySource::new(var).load().unwrap();
    assert_eq!(loaded.expose_secret().len(), 32);

    std::env::remove_var(var);
}

#[test]
fn test_env_source_fails_when_unset() {
    let var = "SEALBOX_TEST_KEY_UNSET";
    std::env::remove_var(var);

    let result = EnvKeySource::new(var).load();
    assert!(matches!(result, Err(KeySourceError::Absent(_))));
}

#[test]
fn test_env_source_fails_when_empty() {
    let var = "SEALBOX_TEST_KEY_EMPTY";
    std::env::set_var(var, "");

    let result = EnvKeySource::new(var).load();
    assert!(matches!(result, Err(KeySourceError::Absent(_))));

    std::env::remove_var(var);
}

#[test]
fn test_env_source_fails_on_invalid_hex() {
    let var = "SEALBOX_TEST_KEY_INVALID";
    std::env::set_var(var, "not-valid-hex!!!");

    let result = EnvKeySource::new(var).load();
    assert!(matches!(result, Err(KeySourceError::InvalidHex(_))));

    std::env::remove_var(var);
}

#[test]
fn test_file_source_loads_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("master-key.hex");
    std::fs::write(&path, test_key_hex()).unwrap();

    let loaded = FileKeySource::new(&path).load().unwrap();
    assert_eq!(loaded.expose_secret().len(), 32);
}

#[test]
fn test_file_source_trims_trailing_newline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("master-key.hex");
    std::fs::write(&path, format!("{}\n", test_key_hex())).unwrap();

    let loaded = FileKeySource::new(&path).load().unwrap();
    assert_eq!(loaded.expose_secret().len(), 32);
}

#[test]
fn test_file_source_fails_on_missing_file() {
    let result = FileKeySource::new("/nonexistent/path/to/key.hex").load();
    assert!(matches!(result, Err(KeySourceError::Io(_))));
}

#[test]
fn test_file_source_fails_on_invalid_hex() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad-key.hex");
    std::fs::write(&path, "not-valid-hex!!!").unwrap();

    let result = FileKeySource::new(&path).load();
    assert!(matches!(result, Err(KeySourceError::InvalidHex(_))));
}

#[test]
fn test_generated_key_representations() {
    let key = generate_key();
    let repr = key_representations(&key);

    assert_eq!(repr.hex.len(), KEY_HEX_LEN);
    assert_eq!(hex::decode(&repr.hex).unwrap(), key.expose_secret().as_slice());
    assert!(!repr.base64.is_empty());
    assert!(!repr.base64url_no_pad.is_empty());
}

/// Full wiring: mint a key, store its hex form in a file, load it back
/// through a KeySource, and build a working vault from the result.
#[test]
fn test_key_minted_stored_loaded_and_used() {
    let key = generate_key();
    let repr = key_representations(&key);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vault-key.hex");
    std::fs::write(&path, &repr.hex).unwrap();

    let material = FileKeySource::new(&path).load().unwrap();
    let vault = Vault::new(material.expose_secret()).unwrap();

    let sealed = vault.encrypt(b"wired end to end", b"boot").unwrap();
    assert_eq!(vault.decrypt(&sealed, b"boot").unwrap(), b"wired end to end");
}
