/*
[INPUT]:  Message to sign and wallet private key
[OUTPUT]: EIP-191 signature string for account linking
[POS]:    Auth layer - Ethereum wallet integration abstraction
[UPDATE]: When adding new wallet types or changing signature format
*/

use async_trait::async_trait;

use crate::http::Result;

/// Trait for Ethereum wallet signing operations
///
/// The trait is async to support hardware wallets and external signers.
#[async_trait]
pub trait WalletSigner: Send + Sync {
    /// Get the wallet address (`0x`-prefixed)
    fn address(&self) -> &str;

    /// Sign a message with EIP-191 `personal_sign`
    ///
    /// Returns `0x{r}{s}{v}` hex where `v` is the recovery id (0 or 1).
    async fn sign_message(&self, message: &str) -> Result<String>;
}

/// Mock wallet signer for testing
#[derive(Debug, Clone)]
pub struct MockWalletSigner {
    address: String,
    signature: String,
}

impl MockWalletSigner {
    /// Create a new mock signer with predetermined signature
    pub fn new(address: &str, signature: &str) -> Self {
        Self {
            address: address.to_string(),
            signature: signature.to_string(),
        }
    }
}

#[async_trait]
impl WalletSigner for MockWalletSigner {
    fn address(&self) -> &str {
        &self.address
    }

    async fn sign_message(&self, _message: &str) -> Result<String> {
        Ok(self.signature.clone())
    }
}
