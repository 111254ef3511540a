/*
[INPUT]:  Signable message + payload hash returned by the API
[OUTPUT]: SignedPayload carrying both Ethereum and Stark signatures
[POS]:    Auth layer - signs API payloads with both key schemes
[UPDATE]: When the signable-details handshake changes
*/

use std::sync::Arc;

use crate::auth::{StarkSigner, WalletSigner};
use crate::http::{ImxError, Result};
use crate::types::SignedPayload;

/// Pairs an Ethereum wallet with its derived Stark signer
#[derive(Clone)]
pub struct PayloadSigner {
    wallet: Arc<dyn WalletSigner>,
    stark: StarkSigner,
}

impl PayloadSigner {
    pub fn new(wallet: Arc<dyn WalletSigner>, stark: StarkSigner) -> Self {
        Self { wallet, stark }
    }

    pub fn eth_address(&self) -> &str {
        self.wallet.address()
    }

    pub fn stark_signer(&self) -> &StarkSigner {
        &self.stark
    }

    pub fn stark_public_key(&self) -> String {
        self.stark.public_key_hex()
    }

    /// EIP-191 over the message (account linking), Stark ECDSA over the hash
    pub async fn sign(&self, signable_message: &str, payload_hash: &str) -> Result<SignedPayload> {
        if signable_message.trim().is_empty() {
            return Err(ImxError::Signing("signable message is empty".to_string()));
        }

        let stark_signature = self.stark.sign(payload_hash)?;
        let eth_signature = self.wallet.sign_message(signable_message).await?;

        Ok(SignedPayload {
            signable_message: signable_message.to_string(),
            payload_hash: payload_hash.to_string(),
            eth_signature,
            stark_signature,
        })
    }
}

impl std::fmt::Debug for PayloadSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayloadSigner")
            .field("eth_address", &self.eth_address())
            .field("stark_public_key", &self.stark_public_key())
            .finish()
    }
}
