use std::fs;

use hmac::{Hmac, Mac};
use secrecy::ExposeSecret;
use serial_test::serial;
use sha1::Sha1;
use tempfile::TempDir;

use cloudconn::config::{ConfigStore, CREDENTIALS_SECTION};
use cloudconn::provider::{CredentialSource, HeaderRole, Provider, ProviderKind, StorageErrorKind};
use cloudconn::{OsEnv, ProviderError, StaticEnv};

type HmacSha1 = Hmac<Sha1>;

fn sign(key: &[u8], string_to_sign: &str) -> Vec<u8> {
    let mut mac = HmacSha1::new_from_slice(key).unwrap();
    mac.update(string_to_sign.as_bytes());
    mac.finalize().into_bytes().to_vec()
}

#[test]
fn every_role_and_error_kind_is_defined_for_every_provider() {
    for kind in ProviderKind::ALL {
        let provider = Provider::builder(kind.as_str())
            .env(StaticEnv::new())
            .build()
            .unwrap();
        let summary = provider.summary();
        assert_eq!(summary.headers.len(), HeaderRole::ALL.len());
        assert_eq!(summary.errors.len(), StorageErrorKind::ALL.len());
        for role in HeaderRole::ALL {
            assert_eq!(provider.header(role), provider.header(role));
        }
    }
}

#[test]
fn explicit_value_beats_environment_and_config() {
    let env = StaticEnv::new()
        .with_var("AWS_ACCESS_KEY_ID", "from-env")
        .with_var("AWS_SECRET_ACCESS_KEY", "secret-from-env");
    let config = ConfigStore::new()
        .with(CREDENTIALS_SECTION, "aws_access_key_id", "from-config")
        .with(CREDENTIALS_SECTION, "aws_secret_access_key", "secret-from-config");

    let provider = Provider::builder("aws")
        .access_key("explicit")
        .secret_key("secret-explicit")
        .env(env)
        .config(config)
        .build()
        .unwrap();

    assert_eq!(provider.access_key(), Some("explicit"));
    assert_eq!(
        provider.secret_key().map(|k| k.expose_secret().as_slice()),
        Some(&b"secret-explicit"[..])
    );
    assert_eq!(provider.credential_sources().access_key, CredentialSource::Explicit);
}

#[test]
#[serial]
fn access_key_read_from_process_environment() {
    std::env::set_var("AWS_ACCESS_KEY_ID", "FOO");
    let provider = Provider::builder("aws").env(OsEnv).build();
    std::env::remove_var("AWS_ACCESS_KEY_ID");

    let provider = provider.unwrap();
    assert_eq!(provider.access_key(), Some("FOO"));
    assert_eq!(provider.credential_sources().access_key, CredentialSource::Environment);
}

#[test]
fn unknown_provider_yields_no_resolver() {
    let result = Provider::builder("azure").env(StaticEnv::new()).build();
    assert!(matches!(result, Err(ProviderError::UnsupportedProvider(ref name)) if name == "azure"));
}

#[test]
fn short_names_and_chunked_transfer() {
    let aws = Provider::builder("aws").env(StaticEnv::new()).build().unwrap();
    let google = Provider::builder("google").env(StaticEnv::new()).build().unwrap();
    assert_eq!(aws.provider_name(), "s3");
    assert_eq!(google.provider_name(), "gs");
    assert!(!aws.supports_chunked_transfer());
    assert!(google.supports_chunked_transfer());
}

#[test]
fn secret_key_feeds_hmac_signer_unmodified() {
    let raw = "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY";
    let provider = Provider::builder("google")
        .env(StaticEnv::new().with_var("GS_SECRET_ACCESS_KEY", raw))
        .build()
        .unwrap();

    let secret = provider.secret_key().unwrap().expose_secret();
    let string_to_sign = "GET\n\n\nTue, 27 Mar 2007 19:36:42 +0000\n/bucket/photo.jpg";
    assert_eq!(sign(secret, string_to_sign), sign(raw.as_bytes(), string_to_sign));
}

#[test]
fn config_file_supplies_credentials_and_host() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cloudconn.toml");
    fs::write(
        &path,
        "[Credentials]\n\
         gs_access_key_id = \"GOOGFROMFILE\"\n\
         gs_secret_access_key = \"filesecret\"\n\
         gs_host = \"storage.internal.example\"\n",
    )
    .unwrap();

    let provider = Provider::builder("google")
        .env(StaticEnv::new())
        .config(ConfigStore::load(&path).unwrap())
        .build()
        .unwrap();

    assert_eq!(provider.access_key(), Some("GOOGFROMFILE"));
    assert_eq!(provider.default_host(), Some("storage.internal.example"));
    assert_eq!(provider.credential_sources().secret_key, CredentialSource::ConfigStore);
}

#[test]
#[serial]
fn default_provider_is_aws_with_configured_host() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cloudconn.toml");
    fs::write(&path, "[Credentials]\ns3_host = \"s3.eu-central-1.amazonaws.com\"\n").unwrap();

    std::env::set_var("CLOUDCONN_CONFIG", &path);
    let provider = cloudconn::get_default();
    std::env::remove_var("CLOUDCONN_CONFIG");

    assert_eq!(provider.kind(), ProviderKind::Aws);
    assert_eq!(provider.default_host(), Some("s3.eu-central-1.amazonaws.com"));
}
