/*
[INPUT]:  Order id, user address, optional fees and signatures
[OUTPUT]: Signable trade details and created trade id
[POS]:    HTTP layer - trading endpoints (eth signature headers on create)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use reqwest::Method;

use crate::http::{ImxApiClient, Result};
use crate::types::{CreateTradeRequest, CreateTradeResponse, GetSignableTradeRequest, SignableTrade};

impl ImxApiClient {
    /// Retrieve signable details for filling an order
    ///
    /// POST /v3/signable-trade-details
    pub async fn get_signable_trade(&self, req: &GetSignableTradeRequest) -> Result<SignableTrade> {
        let builder = self
            .request(Method::POST, "/v3/signable-trade-details")?
            .json(req);
        self.send_json(builder).await
    }

    /// Execute a signed trade
    ///
    /// POST /v3/trades
    /// Requires: x-imx-eth-address + x-imx-eth-signature headers
    pub async fn create_trade(
        &self,
        req: &CreateTradeRequest,
        eth_address: &str,
        eth_signature: &str,
    ) -> Result<CreateTradeResponse> {
        let builder = self
            .signed_request(Method::POST, "/v3/trades", eth_address, eth_signature)?
            .json(req);
        self.send_json(builder).await
    }
}
