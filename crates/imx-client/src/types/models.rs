/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::{OrderStatus, TokenType};

/// Token section of a signable transfer request
///
/// Serializes as `{"type": "ETH", "data": {"decimals": 18}}` and friends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum TokenSpec {
    #[serde(rename = "ETH")]
    Eth { decimals: u32 },
    #[serde(rename = "ERC20")]
    Erc20 { token_address: String, decimals: u32 },
    #[serde(rename = "ERC721")]
    Erc721 {
        token_address: String,
        token_id: String,
    },
}

impl TokenSpec {
    pub fn eth() -> Self {
        TokenSpec::Eth { decimals: 18 }
    }

    pub fn token_type(&self) -> TokenType {
        match self {
            TokenSpec::Eth { .. } => TokenType::Eth,
            TokenSpec::Erc20 { .. } => TokenType::Erc20,
            TokenSpec::Erc721 { .. } => TokenType::Erc721,
        }
    }
}

/// Marketplace/royalty fee attached to a trade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeEntry {
    pub address: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub fee_percentage: Decimal,
}

/// Both signatures over one signable payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPayload {
    pub signable_message: String,
    pub payload_hash: String,
    pub eth_signature: String,
    pub stark_signature: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetCollection {
    pub name: String,
    #[serde(default)]
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub token_address: String,
    pub token_id: String,
    #[serde(default)]
    pub id: Option<String>,
    pub user: String,
    pub status: String,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub metadata: Option<Value>,
    #[serde(default)]
    pub collection: Option<AssetCollection>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTokenData {
    #[serde(default)]
    pub token_id: Option<String>,
    #[serde(default)]
    pub token_address: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub decimals: Option<u32>,
    pub quantity: String,
    #[serde(default)]
    pub quantity_with_fees: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderToken {
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub data: OrderTokenData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i64,
    pub status: OrderStatus,
    pub user: String,
    pub sell: OrderToken,
    pub buy: OrderToken,
    #[serde(default)]
    pub amount_sold: Option<String>,
    #[serde(default)]
    pub expiration_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeSide {
    pub order_id: i64,
    pub token_type: TokenType,
    #[serde(default)]
    pub token_id: Option<String>,
    #[serde(default)]
    pub token_address: Option<String>,
    pub sold: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub transaction_id: i64,
    pub status: String,
    pub a: TradeSide,
    pub b: TradeSide,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub token_address: String,
    pub symbol: String,
    pub balance: String,
    pub preparing_withdrawal: String,
    pub withdrawable: String,
}

pub(crate) mod serde_helpers {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Accept ids sent either as JSON strings or numbers
    pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        match value {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(raw)) if raw.trim().is_empty() => Ok(None),
            Some(Value::String(raw)) => Ok(Some(raw)),
            Some(Value::Number(num)) => Ok(Some(num.to_string())),
            Some(other) => Err(serde::de::Error::custom(format!(
                "expected string or number id, got {other}"
            ))),
        }
    }
}
