/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::{OrderStatus, SortDirection};
use super::models::{FeeEntry, TokenSpec};
use super::responses::{SignableTrade, SignableTransfer};

/// Caller-facing transfer description, validated before any network call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub recipient: String,
    pub token: TokenSpec,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignableRegistrationRequest {
    pub ether_key: String,
    pub stark_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub ether_key: String,
    pub stark_key: String,
    pub eth_signature: String,
    pub stark_signature: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetSignableTransferRequest {
    pub amount: String,
    pub receiver: String,
    pub sender: String,
    pub token: TokenSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransferRequest {
    pub amount: String,
    pub asset_id: String,
    pub expiration_timestamp: i64,
    pub nonce: i64,
    pub receiver_stark_key: String,
    pub receiver_vault_id: i64,
    pub sender_stark_key: String,
    pub sender_vault_id: i64,
    pub stark_signature: String,
}

impl CreateTransferRequest {
    pub fn from_signable(details: &SignableTransfer, stark_signature: impl Into<String>) -> Self {
        Self {
            amount: details.amount.clone(),
            asset_id: details.asset_id.clone(),
            expiration_timestamp: details.expiration_timestamp,
            nonce: details.nonce,
            receiver_stark_key: details.receiver_stark_key.clone(),
            receiver_vault_id: details.receiver_vault_id,
            sender_stark_key: details.sender_stark_key.clone(),
            sender_vault_id: details.sender_vault_id,
            stark_signature: stark_signature.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetSignableTradeRequest {
    pub order_id: i64,
    pub user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees: Option<Vec<FeeEntry>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTradeRequest {
    pub amount_buy: String,
    pub amount_sell: String,
    pub asset_id_buy: String,
    pub asset_id_sell: String,
    pub expiration_timestamp: i64,
    pub fee_info: Value,
    pub nonce: i64,
    pub order_id: i64,
    pub stark_key: String,
    pub stark_signature: String,
    pub vault_id_buy: i64,
    pub vault_id_sell: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees: Option<Vec<FeeEntry>>,
}

impl CreateTradeRequest {
    pub fn from_signable(
        order_id: i64,
        details: &SignableTrade,
        stark_signature: impl Into<String>,
        fees: Option<Vec<FeeEntry>>,
    ) -> Self {
        Self {
            amount_buy: details.amount_buy.clone(),
            amount_sell: details.amount_sell.clone(),
            asset_id_buy: details.asset_id_buy.clone(),
            asset_id_sell: details.asset_id_sell.clone(),
            expiration_timestamp: details.expiration_timestamp,
            fee_info: details.fee_info.clone(),
            nonce: details.nonce,
            order_id,
            stark_key: details.stark_key.clone(),
            stark_signature: stark_signature.into(),
            vault_id_buy: details.vault_id_buy,
            vault_id_sell: details.vault_id_sell,
            fees,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListAssetsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListOrdersQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sell_token_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_token_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListTradesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_a_token_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_b_token_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListBalancesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}
