/*
[INPUT]:  Ethereum wallet (private key or external signer) and derivation labels
[OUTPUT]: Deterministic Stark key pair
[POS]:    Auth layer - Stark key derivation (EIP-191 seed -> BIP32 -> grind)
[UPDATE]: When derivation path layout or grinding rules change
*/

use alloy_primitives::U256;
use coins_bip32::prelude::*;
use k256::ecdsa::SigningKey;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use starknet_crypto::Felt;
use tracing::debug;

use crate::auth::evm_wallet::decode_signature_bytes;
use crate::auth::{EthWalletSigner, StarkKeyPair, WalletSigner};
use crate::http::{ImxError, Result};

/// Order of the Stark curve generator
const EC_ORDER_BE: [u8; 32] = [
    0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xb7, 0x81, 0x12, 0x6d, 0xca, 0xe7, 0xb2, 0x32, 0x1e, 0x66, 0xa2, 0x41, 0xad, 0xc6, 0x4d, 0x2f,
];

/// Purpose field of the EIP-2645 path
const EIP2645_PURPOSE: u32 = 2645;

const LOW_31_BITS: u64 = (1 << 31) - 1;

/// Grinding gives up after this many rejected candidates
const MAX_GRIND_ATTEMPTS: u32 = 1 << 16;

/// Labels feeding the derivation path and seed message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyDerivationConfig {
    pub signature_message: String,
    pub layer: String,
    pub application: String,
    pub index: u32,
}

impl Default for KeyDerivationConfig {
    fn default() -> Self {
        Self {
            signature_message:
                "Only sign this request if you\u{2019}ve initiated an action with Immutable X."
                    .to_string(),
            layer: "starkex".to_string(),
            application: "immutablex".to_string(),
            index: 1,
        }
    }
}

/// Derives Stark keys from Ethereum keys
///
/// Pure and local: the wallet signs a fixed message, the signature's `s`
/// seeds a BIP32 tree, and the key at the EIP-2645 path is ground into the
/// Stark curve order.
#[derive(Debug, Clone, Default)]
pub struct KeyDeriver {
    config: KeyDerivationConfig,
}

impl KeyDeriver {
    pub fn new(config: KeyDerivationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KeyDerivationConfig {
        &self.config
    }

    /// Derive from a hex-encoded 32-byte Ethereum private key
    pub async fn derive_from_private_key(&self, private_key_hex: &str) -> Result<StarkKeyPair> {
        let wallet = EthWalletSigner::new(private_key_hex)?;
        self.derive(&wallet).await
    }

    /// Derive using any Ethereum wallet signer
    pub async fn derive(&self, wallet: &dyn WalletSigner) -> Result<StarkKeyPair> {
        let signature = wallet.sign_message(&self.config.signature_message).await?;
        let seed = seed_from_signature(&signature)?;
        let path = self.account_path(wallet.address())?;

        let bip32_key = private_key_from_path(&seed, &path)?;
        let key_pair = StarkKeyPair::from_private_key(grind_key(&bip32_key)?)?;

        debug!(
            eth_address = wallet.address(),
            stark_public_key = %key_pair.public_key_hex(),
            "stark key derived"
        );
        Ok(key_pair)
    }

    /// `m/2645'/{layer}'/{application}'/{eth1}'/{eth2}'/{index}`
    pub fn account_path(&self, eth_address: &str) -> Result<String> {
        let layer = low_bits_of_hash(&self.config.layer);
        let application = low_bits_of_hash(&self.config.application);

        let address = address_low_u64(eth_address)?;
        let eth1 = address & LOW_31_BITS;
        let eth2 = (address >> 31) & LOW_31_BITS;

        Ok(format!(
            "m/{EIP2645_PURPOSE}'/{layer}'/{application}'/{eth1}'/{eth2}'/{}",
            self.config.index
        ))
    }
}

/// Low 31 bits of `sha256(label)`
fn low_bits_of_hash(label: &str) -> u64 {
    let digest = Sha256::digest(label.as_bytes());
    let mut tail = [0u8; 8];
    tail.copy_from_slice(&digest[24..]);
    u64::from_be_bytes(tail) & LOW_31_BITS
}

/// Low 64 bits of a hex address
fn address_low_u64(eth_address: &str) -> Result<u64> {
    let raw = eth_address.trim();
    let raw = raw.strip_prefix("0x").unwrap_or(raw);
    let raw = if raw.len() % 2 == 1 {
        format!("0{raw}")
    } else {
        raw.to_string()
    };
    let bytes = hex::decode(&raw)
        .map_err(|e| ImxError::InvalidKey(format!("wallet address is not hex: {e}")))?;

    let mut tail = [0u8; 8];
    let take = bytes.len().min(8);
    tail[8 - take..].copy_from_slice(&bytes[bytes.len() - take..]);
    Ok(u64::from_be_bytes(tail))
}

/// The signature's `s` component with leading zero bytes dropped
fn seed_from_signature(signature_hex: &str) -> Result<Vec<u8>> {
    let bytes = decode_signature_bytes(signature_hex)?;
    Ok(minimal_be_bytes(&bytes[32..64]))
}

fn private_key_from_path(seed: &[u8], path: &str) -> Result<[u8; 32]> {
    let master = XPriv::root_from_seed(seed, None)
        .map_err(|e| ImxError::InvalidKey(format!("failed to build BIP32 root: {e}")))?;
    let derived = master
        .derive_path(path)
        .map_err(|e| ImxError::InvalidKey(format!("failed to derive {path}: {e}")))?;

    let signing_key: &SigningKey = derived.as_ref();
    let mut key = [0u8; 32];
    key.copy_from_slice(&signing_key.to_bytes());
    Ok(key)
}

/// Map a 256-bit key uniformly into `[0, EC_ORDER)`
///
/// Candidates are `sha256(key || index)` with both integers in minimal
/// big-endian form; those at or above the largest multiple of the order
/// below 2^256 are skipped.
pub(crate) fn grind_key(key_seed: &[u8; 32]) -> Result<Felt> {
    let order = U256::from_be_bytes(EC_ORDER_BE);
    // 2^256 mod order
    let remainder = (U256::MAX % order + U256::from(1u8)) % order;
    let max_allowed = U256::MAX - remainder;

    let seed = minimal_be_bytes(key_seed);
    for index in 0..MAX_GRIND_ATTEMPTS {
        let mut hasher = Sha256::new();
        hasher.update(&seed);
        hasher.update(minimal_be_bytes(&index.to_be_bytes()));
        let candidate = U256::from_be_slice(&hasher.finalize());

        if remainder.is_zero() || candidate <= max_allowed {
            let key = candidate % order;
            return Ok(Felt::from_bytes_be(&key.to_be_bytes::<32>()));
        }
    }

    Err(ImxError::InvalidKey(
        "key grinding did not converge".to_string(),
    ))
}

fn minimal_be_bytes(bytes: &[u8]) -> Vec<u8> {
    let first = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    if first == bytes.len() {
        vec![0]
    } else {
        bytes[first..].to_vec()
    }
}
