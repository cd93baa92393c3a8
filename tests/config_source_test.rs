use qrisgen::application::checkout::Checkout;
use qrisgen::domain::ports::{MerchantConfigBox, MerchantConfigSource};
use qrisgen::infrastructure::in_memory::InMemoryConfigSource;
use qrisgen::infrastructure::json_file::JsonFileConfigSource;
use qrisgen::{Amount, verify_checksum};
use std::io::{Seek, SeekFrom, Write};
use std::sync::Arc;
use tempfile::NamedTempFile;
use std::thread;

mod common;

#[test]
fn test_sources_as_trait_objects() {
    let sources: Vec<MerchantConfigBox> = vec![
        Box::new(InMemoryConfigSource::from_payload(common::STATIC_QRIS)),
        Box::new(JsonFileConfigSource::new("tests/fixtures/merchant.json")),
    ];

    // Verify Send + Sync by loading on other threads
    let handles: Vec<_> = sources
        .into_iter()
        .map(|source| thread::spawn(move || source.load().unwrap()))
        .collect();

    for handle in handles {
        let config = handle.join().unwrap();
        assert_eq!(config.qris_static, common::STATIC_QRIS);
    }
}

#[test]
fn test_checkout_shared_across_threads() {
    let checkout = Arc::new(Checkout::new(Box::new(JsonFileConfigSource::new(
        "tests/fixtures/merchant.json",
    ))));

    let handles: Vec<_> = (1..=8u64)
        .map(|i| {
            let checkout = Arc::clone(&checkout);
            thread::spawn(move || {
                let amount = Amount::try_from(i * 1000).unwrap();
                (i, checkout.dynamic_payload(&amount).unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (i, payload) = handle.join().unwrap();
        assert!(verify_checksum(&payload).is_ok());
        let field = format!("54{:02}{}", (i * 1000).to_string().len(), i * 1000);
        assert!(payload.contains(&field));
    }
}

#[test]
fn test_merchant_metadata_from_fixture() {
    let config = JsonFileConfigSource::new("tests/fixtures/merchant.json")
        .load()
        .unwrap();
    assert_eq!(config.store_name, "Warung Sayur Bu Sugeng");
    assert_eq!(config.logo_url.as_deref(), Some("https://example.com/logo.png"));
}

#[test]
fn test_prepared_checkout_keeps_loaded_payload() {
    let write_config = |file: &mut NamedTempFile, payload: &str| {
        let json = serde_json::json!({ "store_name": "Toko", "qris_static": payload });
        let handle = file.as_file_mut();
        handle.set_len(0).unwrap();
        handle.seek(SeekFrom::Start(0)).unwrap();
        handle.write_all(json.to_string().as_bytes()).unwrap();
        handle.flush().unwrap();
    };

    let mut file = NamedTempFile::new().unwrap();
    write_config(&mut file, common::STATIC_QRIS);
    let checkout = Checkout::new(Box::new(JsonFileConfigSource::new(file.path())));
    let prepared = checkout.prepare().unwrap();

    write_config(&mut file, "0002015802ID63041234");
    let amount = Amount::try_from(50000u64).unwrap();
    assert_eq!(prepared.dynamic_payload(&amount).unwrap(), common::DYNAMIC_50000);

    // An unprepared call reads the rewritten file.
    let fresh = checkout.dynamic_payload(&amount).unwrap();
    assert!(fresh.starts_with("0002015405500005802ID6304"));
}
