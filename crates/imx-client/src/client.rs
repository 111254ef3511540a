/*
[INPUT]:  Ethereum private key (or wallet signer) and client options
[OUTPUT]: Registration receipts, transfer ids, trade ids, balances
[POS]:    Facade - derive keys once, then validate -> fetch signable -> sign -> submit
[UPDATE]: When adding user-level operations or changing the signing handshake
*/

use std::sync::Arc;

use tracing::info;

use crate::auth::{
    EthWalletSigner, KeyDerivationConfig, KeyDeriver, PayloadSigner, StarkKeyPair, StarkSigner,
    WalletSigner,
};
use crate::http::{ClientConfig, Environment, ImxApiClient, ImxError, Result};
use crate::types::{
    Balance, CreateTradeRequest, CreateTransferRequest, FeeEntry, GetSignableTradeRequest,
    GetSignableTransferRequest, ListBalancesQuery, Paginated, RegisterUserRequest,
    TransferRequest,
};
use crate::validation::{parse_token_symbol, validate_amount, validate_eth_address};

/// Construction options for [`ImxClient`]
#[derive(Debug, Clone, Default)]
pub struct ImxClientOptions {
    pub environment: Environment,
    /// Overrides the environment's base URL when set
    pub base_url: Option<String>,
    pub http: ClientConfig,
    pub derivation: KeyDerivationConfig,
}

impl ImxClientOptions {
    pub fn build_api(&self) -> Result<ImxApiClient> {
        match &self.base_url {
            Some(url) => ImxApiClient::with_config_and_base_url(self.http.clone(), url),
            None => ImxApiClient::with_config(self.http.clone(), self.environment),
        }
    }
}

/// User-level Immutable X client
///
/// Holds one Ethereum identity and the Stark key derived from it. The key
/// pair is computed at construction and never changes.
#[derive(Debug, Clone)]
pub struct ImxClient {
    api: ImxApiClient,
    signer: PayloadSigner,
}

impl ImxClient {
    /// Mainnet client for a hex-encoded Ethereum private key
    pub async fn new(private_key: &str) -> Result<Self> {
        Self::with_options(private_key, ImxClientOptions::default()).await
    }

    pub async fn with_options(private_key: &str, options: ImxClientOptions) -> Result<Self> {
        let wallet = EthWalletSigner::new(private_key)?;
        let api = options.build_api()?;
        Self::from_wallet(Arc::new(wallet), api, &options.derivation).await
    }

    /// Build from any wallet signer (hardware, remote, mock)
    pub async fn from_wallet(
        wallet: Arc<dyn WalletSigner>,
        api: ImxApiClient,
        derivation: &KeyDerivationConfig,
    ) -> Result<Self> {
        let key_pair = KeyDeriver::new(derivation.clone())
            .derive(wallet.as_ref())
            .await?;
        let signer = PayloadSigner::new(wallet, StarkSigner::new(key_pair));
        Ok(Self { api, signer })
    }

    pub fn eth_address(&self) -> &str {
        self.signer.eth_address()
    }

    pub fn stark_public_key(&self) -> String {
        self.signer.stark_public_key()
    }

    pub fn key_pair(&self) -> &StarkKeyPair {
        self.signer.stark_signer().key_pair()
    }

    pub fn signer(&self) -> &PayloadSigner {
        &self.signer
    }

    /// Raw REST client for endpoints the facade does not wrap
    pub fn api(&self) -> &ImxApiClient {
        &self.api
    }

    /// Register this Ethereum/Stark key pairing off-chain, returning the tx hash
    pub async fn register(&self) -> Result<String> {
        let stark_key = self.stark_public_key();
        let details = self
            .api
            .sign_registration(self.eth_address(), &stark_key)
            .await?;
        let signed = self
            .signer
            .sign(&details.signable_message, &details.payload_hash)
            .await?;

        let response = self
            .api
            .register_user(&RegisterUserRequest {
                ether_key: self.eth_address().to_string(),
                stark_key,
                eth_signature: signed.eth_signature,
                stark_signature: signed.stark_signature,
            })
            .await?;

        let tx_hash = response.tx_hash.ok_or_else(|| {
            ImxError::InvalidResponse("registration response missing tx_hash".to_string())
        })?;
        info!(eth_address = self.eth_address(), %tx_hash, "user registered");
        Ok(tx_hash)
    }

    /// Transfer by token symbol (only `ETH` is addressable by symbol)
    pub async fn transfer(&self, recipient: &str, token: &str, amount: &str) -> Result<String> {
        let token = parse_token_symbol(token)?;
        self.transfer_request(TransferRequest {
            recipient: recipient.to_string(),
            token,
            amount: amount.to_string(),
        })
        .await
    }

    /// Transfer any supported token, returning the transfer id
    pub async fn transfer_request(&self, request: TransferRequest) -> Result<String> {
        validate_eth_address(&request.recipient)?;
        validate_amount(&request.amount)?;

        let details = self
            .api
            .get_signable_transfer(&GetSignableTransferRequest {
                amount: request.amount,
                receiver: request.recipient.clone(),
                sender: self.eth_address().to_string(),
                token: request.token,
            })
            .await?;
        let signed = self
            .signer
            .sign(&details.signable_message, &details.payload_hash)
            .await?;

        let response = self
            .api
            .create_transfer(
                &CreateTransferRequest::from_signable(&details, signed.stark_signature),
                self.eth_address(),
                &signed.eth_signature,
            )
            .await?;

        let transfer_id = response.transfer_id.ok_or_else(|| {
            ImxError::InvalidResponse("transfer response missing transfer_id".to_string())
        })?;
        info!(
            recipient = %request.recipient,
            %transfer_id,
            "transfer created"
        );
        Ok(transfer_id)
    }

    /// Fill an existing order, returning the trade id
    pub async fn trade(&self, order_id: i64, fees: Option<Vec<FeeEntry>>) -> Result<String> {
        if order_id <= 0 {
            return Err(ImxError::Validation(format!(
                "order id must be positive: {order_id}"
            )));
        }
        for fee in fees.iter().flatten() {
            validate_eth_address(&fee.address)?;
            if fee.fee_percentage.is_sign_negative() {
                return Err(ImxError::Validation(format!(
                    "fee percentage must not be negative: {}",
                    fee.fee_percentage
                )));
            }
        }

        let details = self
            .api
            .get_signable_trade(&GetSignableTradeRequest {
                order_id,
                user: self.eth_address().to_string(),
                fees: fees.clone(),
            })
            .await?;
        let signed = self
            .signer
            .sign(&details.signable_message, &details.payload_hash)
            .await?;

        let response = self
            .api
            .create_trade(
                &CreateTradeRequest::from_signable(order_id, &details, signed.stark_signature, fees),
                self.eth_address(),
                &signed.eth_signature,
            )
            .await?;

        let trade_id = response.trade_id.ok_or_else(|| {
            ImxError::InvalidResponse("trade response missing trade_id".to_string())
        })?;
        info!(order_id, %trade_id, "trade created");
        Ok(trade_id)
    }

    /// First page of balances held by this client's address
    pub async fn balances(&self) -> Result<Paginated<Balance>> {
        self.api
            .list_balances(self.eth_address(), &ListBalancesQuery::default())
            .await
    }

    /// Whether the API knows any Stark key for this address
    pub async fn is_registered(&self) -> Result<bool> {
        match self.api.get_user(self.eth_address()).await {
            Ok(user) => Ok(!user.accounts.is_empty()),
            Err(ImxError::Api { status: 404, .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }
}
