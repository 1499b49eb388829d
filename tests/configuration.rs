//! Process-wide client. Tests share one global, so they run serialized.

mod common;

use common::FakeTransport;
use document_atom_sdk::configuration::{self, is_configured, reset};
use document_atom_sdk::{
    configure, configure_with, AtomExtraction, Connectivity, DocumentAtomClientBuilder, Error,
    TypeDetection,
};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

static GLOBAL: Mutex<()> = Mutex::new(());

fn lock() -> MutexGuard<'static, ()> {
    let guard = GLOBAL.lock().unwrap_or_else(|e| e.into_inner());
    reset();
    guard
}

#[test]
fn facades_fail_before_configure() {
    let _guard = lock();

    assert!(!is_configured());
    for err in [
        Connectivity::shared().unwrap_err(),
        TypeDetection::shared().unwrap_err(),
        AtomExtraction::shared().unwrap_err(),
    ] {
        assert!(matches!(err, Error::NotConfigured));
        assert_eq!(
            err.to_string(),
            "SDK is not configured. Call 'configure' first."
        );
    }
}

#[test]
fn configure_uses_defaults() {
    let _guard = lock();

    let client = configure("http://localhost:8000").unwrap();
    assert!(is_configured());
    assert_eq!(client.base_url(), "http://localhost:8000");
    assert_eq!(client.timeout(), Duration::from_secs(10));
    assert_eq!(client.retries(), 3);
    assert!(Arc::ptr_eq(&client, &configuration::client().unwrap()));
    assert!(AtomExtraction::shared().is_ok());
}

#[test]
fn reconfigure_replaces_client() {
    let _guard = lock();

    let first = configure("http://first.example").unwrap();
    let second = configure_with(
        DocumentAtomClientBuilder::new()
            .endpoint("http://second.example")
            .timeout(Duration::from_secs(30))
            .retries(1),
    )
    .unwrap();

    let current = configuration::client().unwrap();
    assert!(!Arc::ptr_eq(&first, &current));
    assert!(Arc::ptr_eq(&second, &current));
    assert_eq!(current.timeout(), Duration::from_secs(30));
    assert_eq!(current.retries(), 1);
    // Holders of the old handle keep a working client.
    assert_eq!(first.base_url(), "http://first.example");
}

#[test]
fn failed_configure_keeps_previous_client() {
    let _guard = lock();

    let previous = configure("http://localhost:8000").unwrap();
    let err = configure("").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("Endpoint is required"));
    assert!(Arc::ptr_eq(&previous, &configuration::client().unwrap()));
}

#[test]
fn reset_unconfigures() {
    let _guard = lock();

    configure("http://localhost:8000").unwrap();
    assert!(reset().is_some());
    assert!(matches!(
        configuration::client().unwrap_err(),
        Error::NotConfigured
    ));
}

#[test]
fn shared_facade_end_to_end() {
    let _guard = lock();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.pdf");
    std::fs::write(&path, b"%PDF-1.4").unwrap();

    let fake = FakeTransport::ok(r#"{"Atoms":[{"Content":"hello"}]}"#);
    configure_with(
        DocumentAtomClientBuilder::new()
            .endpoint("http://test-api.com")
            .transport(fake.clone()),
    )
    .unwrap();

    let result = AtomExtraction::shared()
        .unwrap()
        .extract_atoms_pdf(path.as_path(), Some(true), None)
        .unwrap();
    assert_eq!(result.atoms.len(), 1);
    assert_eq!(result.atoms[0].content, "hello");

    let sent = fake.last_request();
    assert_eq!(sent.url.as_str(), "http://test-api.com/atom/pdf?ocr");
    assert_eq!(sent.headers[reqwest::header::CONTENT_TYPE], "application/pdf");
}
