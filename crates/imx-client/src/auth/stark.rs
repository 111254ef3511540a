/*
[INPUT]:  Stark private key and API payload hashes (hex)
[OUTPUT]: Stark curve ECDSA signatures and verification results
[POS]:    Auth layer - StarkEx key pair and signing
[UPDATE]: When signature encoding or nonce generation changes
*/

use starknet_crypto::{Felt, SignError, get_public_key, rfc6979_generate_k, sign, verify};

use crate::http::{ImxError, Result};

/// Upper bound on nonce re-generation when RFC 6979 yields an unusable k
const MAX_NONCE_ATTEMPTS: u32 = 64;

/// Stark key pair derived from an Ethereum key
///
/// Immutable once built. `Debug` never prints the private key.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct StarkKeyPair {
    private_key: Felt,
    public_key: Felt,
}

impl StarkKeyPair {
    /// Build the pair from a private key in `[1, EC_ORDER)`
    pub fn from_private_key(private_key: Felt) -> Result<Self> {
        if private_key == Felt::ZERO {
            return Err(ImxError::InvalidKey(
                "stark private key must be non-zero".to_string(),
            ));
        }
        Ok(Self {
            private_key,
            public_key: get_public_key(&private_key),
        })
    }

    pub fn public_key(&self) -> Felt {
        self.public_key
    }

    /// `0x`-prefixed, zero-padded public key as the API expects it
    pub fn public_key_hex(&self) -> String {
        felt_to_hex(&self.public_key)
    }

    pub fn private_key_hex(&self) -> String {
        felt_to_hex(&self.private_key)
    }

    pub(crate) fn private_key(&self) -> &Felt {
        &self.private_key
    }
}

impl std::fmt::Debug for StarkKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StarkKeyPair")
            .field("public_key", &self.public_key_hex())
            .finish_non_exhaustive()
    }
}

/// Signs API payload hashes with a Stark key
#[derive(Debug, Clone)]
pub struct StarkSigner {
    key_pair: StarkKeyPair,
}

impl StarkSigner {
    pub fn new(key_pair: StarkKeyPair) -> Self {
        Self { key_pair }
    }

    pub fn key_pair(&self) -> &StarkKeyPair {
        &self.key_pair
    }

    pub fn public_key_hex(&self) -> String {
        self.key_pair.public_key_hex()
    }

    /// Sign a `0x`-hex payload hash, returning `0x{r:64}{s:64}`
    pub fn sign(&self, payload_hash: &str) -> Result<String> {
        let message = parse_payload_hash(payload_hash)?;
        let private_key = self.key_pair.private_key();

        let mut seed: Option<Felt> = None;
        for _ in 0..MAX_NONCE_ATTEMPTS {
            let k = rfc6979_generate_k(&message, private_key, seed.as_ref());
            match sign(private_key, &message, &k) {
                Ok(signature) => {
                    return Ok(format!(
                        "0x{}{}",
                        hex::encode(signature.r.to_bytes_be()),
                        hex::encode(signature.s.to_bytes_be())
                    ));
                }
                Err(SignError::InvalidK) => {
                    seed = Some(seed.map_or(Felt::ONE, |s| s + Felt::ONE));
                }
                Err(err) => {
                    return Err(ImxError::Signing(format!("stark signing failed: {err}")));
                }
            }
        }

        Err(ImxError::Signing(
            "stark signing failed: no usable nonce".to_string(),
        ))
    }

    /// Verify a signature produced by [`StarkSigner::sign`] against this key
    pub fn verify(&self, payload_hash: &str, signature: &str) -> Result<bool> {
        verify_stark_signature(&self.key_pair.public_key, payload_hash, signature)
    }
}

/// Verify `0x{r}{s}` over `payload_hash` for a Stark public key
pub fn verify_stark_signature(public_key: &Felt, payload_hash: &str, signature: &str) -> Result<bool> {
    let message = parse_payload_hash(payload_hash)?;

    let raw = signature.trim();
    let raw = raw.strip_prefix("0x").unwrap_or(raw);
    if !raw.is_ascii() {
        return Err(ImxError::Signing(
            "stark signature must be ascii hex".to_string(),
        ));
    }
    if raw.len() != 128 {
        return Err(ImxError::Signing(format!(
            "stark signature must be 128 hex digits, got {}",
            raw.len()
        )));
    }
    let r = felt_from_hex(&raw[..64])?;
    let s = felt_from_hex(&raw[64..])?;

    verify(public_key, &message, &r, &s)
        .map_err(|e| ImxError::Signing(format!("stark verification failed: {e}")))
}

/// Parse a payload hash; must be non-empty hex below 2^251
fn parse_payload_hash(payload_hash: &str) -> Result<Felt> {
    let raw = payload_hash.trim();
    let raw = raw.strip_prefix("0x").unwrap_or(raw);
    if raw.is_empty() {
        return Err(ImxError::Signing("payload hash is empty".to_string()));
    }

    let bytes = hex_to_bytes32(raw)
        .map_err(|e| ImxError::Signing(format!("malformed payload hash: {e}")))?;
    if bytes[0] >= 0x08 {
        return Err(ImxError::Signing(
            "payload hash exceeds 251 bits".to_string(),
        ));
    }
    Ok(Felt::from_bytes_be(&bytes))
}

fn felt_from_hex(raw: &str) -> Result<Felt> {
    let bytes = hex_to_bytes32(raw)
        .map_err(|e| ImxError::Signing(format!("malformed signature component: {e}")))?;
    Ok(Felt::from_bytes_be(&bytes))
}

/// Left-pad a hex string (at most 64 digits) to 32 bytes
fn hex_to_bytes32(raw: &str) -> std::result::Result<[u8; 32], String> {
    if raw.len() > 64 {
        return Err(format!("{} hex digits exceeds 32 bytes", raw.len()));
    }
    let padded = format!("{raw:0>64}");
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(&padded, &mut bytes).map_err(|e| e.to_string())?;
    Ok(bytes)
}

pub(crate) fn felt_to_hex(value: &Felt) -> String {
    format!("0x{}", hex::encode(value.to_bytes_be()))
}
