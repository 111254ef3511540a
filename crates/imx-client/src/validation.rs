/*
[INPUT]:  Caller-supplied recipient, amount and token symbol
[OUTPUT]: Validated values or ImxError::Validation
[POS]:    Facade helpers - local checks before any network call
[UPDATE]: When accepted address/amount/token formats change
*/

use alloy_primitives::U256;

use crate::http::{ImxError, Result};
use crate::types::TokenSpec;

/// `0x` followed by exactly 40 hex digits
pub fn validate_eth_address(address: &str) -> Result<()> {
    let hex_part = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| ImxError::Validation(format!("address must start with 0x: {address}")))?;

    if hex_part.len() != 40 || !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ImxError::Validation(format!(
            "address must be 40 hex digits: {address}"
        )));
    }
    Ok(())
}

/// Positive base-10 integer that fits in 256 bits
pub fn validate_amount(amount: &str) -> Result<U256> {
    if amount.is_empty() || !amount.chars().all(|c| c.is_ascii_digit()) {
        return Err(ImxError::Validation(format!(
            "amount must be a base-10 integer: {amount:?}"
        )));
    }

    let value = U256::from_str_radix(amount, 10)
        .map_err(|_| ImxError::Validation(format!("amount exceeds 256 bits: {amount}")))?;
    if value.is_zero() {
        return Err(ImxError::Validation("amount must be positive".to_string()));
    }
    Ok(value)
}

/// Only ETH is addressable by symbol; other tokens need a contract address
pub fn parse_token_symbol(symbol: &str) -> Result<TokenSpec> {
    if symbol.trim().eq_ignore_ascii_case("ETH") {
        Ok(TokenSpec::eth())
    } else {
        Err(ImxError::Validation(format!(
            "unsupported token symbol {symbol:?}, use a TokenSpec with a contract address"
        )))
    }
}
