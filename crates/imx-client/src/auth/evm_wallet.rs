/*
[INPUT]:  Ethereum private key (hex string)
[OUTPUT]: EIP-191 signatures, checksummed address, signature verification
[POS]:    Auth layer - local Ethereum wallet implementation
[UPDATE]: When signing logic or address formatting changes
*/

use alloy_primitives::{Address, B256, Signature, U256};
use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;

use crate::auth::WalletSigner;
use crate::http::{ImxError, Result};

/// Signer backed by a raw secp256k1 private key
pub struct EthWalletSigner {
    signer: PrivateKeySigner,
    address: String,
}

impl EthWalletSigner {
    /// Create a signer from a hex-encoded 32-byte private key
    ///
    /// Supports both "0x"-prefixed and non-prefixed hex strings. Zero and
    /// values at or above the secp256k1 order are rejected.
    pub fn new(private_key_hex: &str) -> Result<Self> {
        let key = parse_private_key(private_key_hex)?;
        let signer = PrivateKeySigner::from_bytes(&key)
            .map_err(|e| ImxError::InvalidKey(format!("key outside secp256k1 range: {e}")))?;

        let address = signer.address().to_checksum(None);

        Ok(Self { signer, address })
    }
}

impl std::fmt::Debug for EthWalletSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EthWalletSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl WalletSigner for EthWalletSigner {
    fn address(&self) -> &str {
        &self.address
    }

    async fn sign_message(&self, message: &str) -> Result<String> {
        let signature = self
            .signer
            .sign_message(message.as_bytes())
            .await
            .map_err(|e| ImxError::Signing(format!("failed to sign Ethereum message: {e}")))?;

        Ok(encode_signature(&signature))
    }
}

fn parse_private_key(private_key_hex: &str) -> Result<B256> {
    let trimmed = private_key_hex.trim();
    let raw = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if raw.len() != 64 {
        return Err(ImxError::InvalidKey(format!(
            "expected 64 hex digits, got {}",
            raw.len()
        )));
    }

    let mut bytes = [0u8; 32];
    hex::decode_to_slice(raw, &mut bytes)
        .map_err(|e| ImxError::InvalidKey(format!("private key is not hex: {e}")))?;

    Ok(B256::from(bytes))
}

/// `0x{r:64}{s:64}{v:02}` with `v` as the raw recovery id
fn encode_signature(signature: &Signature) -> String {
    let mut bytes = Vec::with_capacity(65);
    bytes.extend_from_slice(&signature.r().to_be_bytes::<32>());
    bytes.extend_from_slice(&signature.s().to_be_bytes::<32>());
    bytes.push(u8::from(signature.v()));
    format!("0x{}", hex::encode(bytes))
}

/// Split an encoded signature into its 65 raw bytes
pub(crate) fn decode_signature_bytes(signature_hex: &str) -> Result<[u8; 65]> {
    let raw = signature_hex.trim();
    let raw = raw.strip_prefix("0x").unwrap_or(raw);
    let mut bytes = [0u8; 65];
    hex::decode_to_slice(raw, &mut bytes)
        .map_err(|e| ImxError::Signing(format!("malformed Ethereum signature: {e}")))?;
    Ok(bytes)
}

/// Check that `signature_hex` is an EIP-191 signature of `message` by `expected_address`
pub fn verify_eth_signature(
    message: &str,
    signature_hex: &str,
    expected_address: &str,
) -> Result<bool> {
    let bytes = decode_signature_bytes(signature_hex)?;
    let parity = match bytes[64] {
        0 | 27 => false,
        1 | 28 => true,
        other => {
            return Err(ImxError::Signing(format!("invalid recovery id {other}")));
        }
    };
    let signature = Signature::new(
        U256::from_be_slice(&bytes[..32]),
        U256::from_be_slice(&bytes[32..64]),
        parity,
    );

    let expected: Address = expected_address
        .parse()
        .map_err(|e| ImxError::Validation(format!("invalid Ethereum address: {e}")))?;

    match signature.recover_address_from_msg(message.as_bytes()) {
        Ok(recovered) => Ok(recovered == expected),
        Err(_) => Ok(false),
    }
}
