use std::io::Write as _;
use z32_identity::{Error, IdentityConfig, PublicKey};

const PUBLIC_Z32: &str = "gcumbhd7sqit6nn457jxmrwqx9pyymqwamnarekgo3xppqo6a19o";

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_config_from_json() {
    let file = config_file(r#"{"accept_prefix": false, "case_insensitive": false}"#);
    let config = IdentityConfig::from_json_file(file.path()).unwrap();

    assert!(!config.accept_prefix);
    assert!(config.accept_domain);
    assert!(!config.case_insensitive);

    assert!(PublicKey::parse_with(&format!("pk:{PUBLIC_Z32}"), &config).is_err());
    assert!(PublicKey::parse_with(&format!("pubky.{PUBLIC_Z32}"), &config).is_ok());
    assert!(PublicKey::parse_with(&PUBLIC_Z32.to_uppercase(), &config).is_err());
}

#[test]
fn empty_object_is_default() {
    let file = config_file("{}");
    assert_eq!(
        IdentityConfig::from_json_file(file.path()).unwrap(),
        IdentityConfig::default()
    );
}

#[test]
fn reports_malformed_config() {
    let file = config_file("{ not json");
    assert!(matches!(
        IdentityConfig::from_json_file(file.path()),
        Err(Error::Config(_))
    ));
}

#[test]
fn reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        IdentityConfig::from_json_file(dir.path().join("missing.json")),
        Err(Error::Io(_))
    ));
}
