/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for imx-client tests

#![allow(dead_code)]

use imx_client::{ImxClient, ImxClientOptions};
use wiremock::MockServer;

/// Ethereum key with a known Stark public key
pub const REFERENCE_PRIVATE_KEY: &str =
    "0x1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b";
pub const REFERENCE_STARK_PUBLIC_KEY: &str =
    "0x04ffbbee4a76255360197d36ea99ee9285cde259d16345fee186f673355f138b";

/// First default anvil/hardhat account
pub const TEST_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const TEST_ETH_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

pub const RECIPIENT: &str = "0x8f0e4f8d5b2c4a3e9d6c1b0a7f8e9d0c1b2a3f4e";
pub const FEE_ADDRESS: &str = "0x00000000000000000000000000000000000fee01";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client whose API calls go to the mock server
pub async fn client_for(server: &MockServer) -> ImxClient {
    let options = ImxClientOptions {
        base_url: Some(server.uri()),
        ..Default::default()
    };
    ImxClient::with_options(TEST_PRIVATE_KEY, options)
        .await
        .expect("client init")
}

/// Payload hash small enough for the Stark field
pub fn mock_signable_registration() -> serde_json::Value {
    serde_json::json!({
        "payload_hash": "0x1234",
        "signable_message": "Sign this",
    })
}

pub fn mock_signable_transfer() -> serde_json::Value {
    serde_json::json!({
        "payload_hash": "0x5678",
        "signable_message": "Sign this transfer",
        "amount": "1000000000000000000",
        "asset_id": "0xAssetId",
        "expiration_timestamp": 1234567890,
        "nonce": 1,
        "receiver_stark_key": "0xReceiverStarkKey",
        "receiver_vault_id": 2,
        "sender_stark_key": "0xSenderStarkKey",
        "sender_vault_id": 1
    })
}

pub fn mock_signable_trade() -> serde_json::Value {
    serde_json::json!({
        "payload_hash": "0x9012",
        "signable_message": "Sign this trade",
        "amount_buy": "100",
        "amount_sell": "1",
        "asset_id_buy": "0xBuyAsset",
        "asset_id_sell": "0xSellAsset",
        "expiration_timestamp": 1234567890,
        "fee_info": [],
        "nonce": 2,
        "stark_key": "0xStarkKey",
        "vault_id_buy": 3,
        "vault_id_sell": 4
    })
}
