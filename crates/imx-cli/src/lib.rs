/*
[INPUT]:  Raw CLI argument strings
[OUTPUT]: Parsed fees, order statuses and configuration
[POS]:    Library root - helpers shared by the binary and its tests
[UPDATE]: When adding command arguments that need parsing
*/

pub mod config;

pub use config::{CliConfig, PRIVATE_KEY_ENV};

use std::str::FromStr;

use anyhow::{Context, bail};
use imx_client::{FeeEntry, OrderStatus};
use rust_decimal::Decimal;

/// Parse `ADDRESS:PERCENT`, e.g. `0xabc...:1.5`
pub fn parse_fee(raw: &str) -> anyhow::Result<FeeEntry> {
    let (address, percentage) = raw
        .rsplit_once(':')
        .with_context(|| format!("fee must look like ADDRESS:PERCENT, got {raw:?}"))?;
    let fee_percentage = Decimal::from_str(percentage.trim())
        .with_context(|| format!("invalid fee percentage {percentage:?}"))?;

    Ok(FeeEntry {
        address: address.trim().to_string(),
        fee_percentage,
    })
}

pub fn parse_order_status(raw: &str) -> anyhow::Result<OrderStatus> {
    let status: OrderStatus =
        serde_json::from_value(serde_json::Value::String(raw.trim().to_ascii_lowercase()))?;
    if status == OrderStatus::Unknown {
        bail!("unknown order status {raw:?}");
    }
    Ok(status)
}
