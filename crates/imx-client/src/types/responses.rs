/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::models::serde_helpers;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignableRegistration {
    pub payload_hash: String,
    pub signable_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterUserResponse {
    #[serde(default)]
    pub tx_hash: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetUserResponse {
    #[serde(default)]
    pub accounts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignableTransfer {
    pub payload_hash: String,
    pub signable_message: String,
    pub amount: String,
    pub asset_id: String,
    pub expiration_timestamp: i64,
    pub nonce: i64,
    pub receiver_stark_key: String,
    pub receiver_vault_id: i64,
    pub sender_stark_key: String,
    pub sender_vault_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransferResponse {
    #[serde(default, deserialize_with = "serde_helpers::deserialize_optional_id")]
    pub transfer_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignableTrade {
    pub payload_hash: String,
    pub signable_message: String,
    pub amount_buy: String,
    pub amount_sell: String,
    pub asset_id_buy: String,
    pub asset_id_sell: String,
    pub expiration_timestamp: i64,
    #[serde(default)]
    pub fee_info: Value,
    pub nonce: i64,
    pub stark_key: String,
    pub vault_id_buy: i64,
    pub vault_id_sell: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTradeResponse {
    #[serde(default, deserialize_with = "serde_helpers::deserialize_optional_id")]
    pub trade_id: Option<String>,
}

/// Cursor-paginated list envelope shared by the read endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub result: Vec<T>,
    #[serde(default)]
    pub cursor: Option<String>,
    #[serde(default)]
    pub remaining: i64,
}

impl<T> Paginated<T> {
    pub fn has_more(&self) -> bool {
        self.remaining > 0 && self.cursor.as_deref().is_some_and(|cursor| !cursor.is_empty())
    }
}
