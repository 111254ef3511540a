/*
[INPUT]:  Transfer parameters and eth/stark signatures
[OUTPUT]: Signable transfer details and created transfer id
[POS]:    HTTP layer - transfer endpoints (eth signature headers on create)
[UPDATE]: When transfer endpoints or payloads change
*/

use reqwest::Method;

use crate::http::{ImxApiClient, Result};
use crate::types::{
    CreateTransferRequest, CreateTransferResponse, GetSignableTransferRequest, SignableTransfer,
};

impl ImxApiClient {
    /// Retrieve signable details for a transfer between two users
    ///
    /// POST /v1/signable-transfer-details
    pub async fn get_signable_transfer(
        &self,
        req: &GetSignableTransferRequest,
    ) -> Result<SignableTransfer> {
        let builder = self
            .request(Method::POST, "/v1/signable-transfer-details")?
            .json(req);
        self.send_json(builder).await
    }

    /// Execute a signed transfer
    ///
    /// POST /v1/transfers
    /// Requires: x-imx-eth-address + x-imx-eth-signature headers
    pub async fn create_transfer(
        &self,
        req: &CreateTransferRequest,
        eth_address: &str,
        eth_signature: &str,
    ) -> Result<CreateTransferResponse> {
        let builder = self
            .signed_request(Method::POST, "/v1/transfers", eth_address, eth_signature)?
            .json(req);
        self.send_json(builder).await
    }
}
