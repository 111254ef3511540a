/*
[INPUT]:  Ethereum private keys and mock wallet signers
[OUTPUT]: Test results for key derivation and payload signing
[POS]:    Integration tests - auth layer
[UPDATE]: When derivation or signature schemes change
*/

mod common;

use std::sync::Arc;

use common::{REFERENCE_PRIVATE_KEY, REFERENCE_STARK_PUBLIC_KEY, TEST_ETH_ADDRESS, TEST_PRIVATE_KEY};
use imx_client::{
    EthWalletSigner, ImxError, KeyDerivationConfig, KeyDeriver, MockWalletSigner, PayloadSigner,
    StarkSigner, WalletSigner, verify_eth_signature, verify_stark_signature,
};
use rand::RngCore;
use rstest::rstest;
use tokio_test::assert_ok;

#[tokio::test]
async fn test_reference_vector() {
    let deriver = KeyDeriver::default();
    let key_pair = assert_ok!(deriver.derive_from_private_key(REFERENCE_PRIVATE_KEY).await);
    assert_eq!(key_pair.public_key_hex(), REFERENCE_STARK_PUBLIC_KEY);
}

#[tokio::test]
async fn test_derivation_is_deterministic_for_random_keys() {
    let deriver = KeyDeriver::default();
    let mut rng = rand::thread_rng();

    for _ in 0..4 {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        // Keep the key nonzero and well below the secp256k1 order
        bytes[0] &= 0x7f;
        bytes[31] |= 0x01;
        let key = format!("0x{}", hex::encode(bytes));

        let first = assert_ok!(deriver.derive_from_private_key(&key).await);
        let second = assert_ok!(deriver.derive_from_private_key(&key).await);
        assert_eq!(first, second);
        assert_eq!(first.public_key_hex().len(), 66);
    }
}

#[tokio::test]
async fn test_custom_derivation_config_changes_key() {
    let default_pair = assert_ok!(
        KeyDeriver::default()
            .derive_from_private_key(TEST_PRIVATE_KEY)
            .await
    );
    let custom = KeyDeriver::new(KeyDerivationConfig {
        index: 2,
        ..Default::default()
    });
    let custom_pair = assert_ok!(custom.derive_from_private_key(TEST_PRIVATE_KEY).await);
    assert_ne!(default_pair, custom_pair);
}

#[rstest]
#[case("")]
#[case("0x1234")]
#[case("0xzz0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80")]
#[case("0x0000000000000000000000000000000000000000000000000000000000000000")]
#[case("0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141")]
#[tokio::test]
async fn test_malformed_keys_rejected(#[case] key: &str) {
    let err = KeyDeriver::default()
        .derive_from_private_key(key)
        .await
        .unwrap_err();
    assert!(matches!(err, ImxError::InvalidKey(_)));
}

#[tokio::test]
async fn test_mock_wallet_signer() {
    let wallet = MockWalletSigner::new(TEST_ETH_ADDRESS, "0xmock_signature");
    assert_eq!(wallet.address(), TEST_ETH_ADDRESS);

    let signature = assert_ok!(wallet.sign_message("test").await);
    assert_eq!(signature, "0xmock_signature");
}

#[tokio::test]
async fn test_payload_signatures_verify_with_public_helpers() {
    let wallet = assert_ok!(EthWalletSigner::new(TEST_PRIVATE_KEY));
    let key_pair = assert_ok!(KeyDeriver::default().derive(&wallet).await);
    let signer = PayloadSigner::new(Arc::new(wallet), StarkSigner::new(key_pair));

    let first = assert_ok!(signer.sign("Sign this", "0x1234").await);
    let second = assert_ok!(signer.sign("Sign this", "0x1234").await);

    for signed in [&first, &second] {
        assert!(assert_ok!(verify_stark_signature(
            &key_pair.public_key(),
            "0x1234",
            &signed.stark_signature
        )));
        assert!(assert_ok!(verify_eth_signature(
            "Sign this",
            &signed.eth_signature,
            TEST_ETH_ADDRESS
        )));
    }
    assert!(!assert_ok!(verify_stark_signature(
        &key_pair.public_key(),
        "0x1235",
        &first.stark_signature
    )));
}

#[tokio::test]
async fn test_eth_signature_format() {
    let wallet = assert_ok!(EthWalletSigner::new(TEST_PRIVATE_KEY));
    let signature = assert_ok!(wallet.sign_message("hello").await);

    assert!(signature.starts_with("0x"));
    assert_eq!(signature.len(), 2 + 130);
    assert!(signature.ends_with("00") || signature.ends_with("01"));
}

#[tokio::test]
async fn test_payload_hash_out_of_field_rejected() {
    let wallet = assert_ok!(EthWalletSigner::new(TEST_PRIVATE_KEY));
    let key_pair = assert_ok!(KeyDeriver::default().derive(&wallet).await);
    let signer = StarkSigner::new(key_pair);

    let too_large = format!("0x08{}", "0".repeat(62));
    let err = signer.sign(&too_large).unwrap_err();
    assert!(matches!(err, ImxError::Signing(_)));
}
