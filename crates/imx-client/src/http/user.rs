/*
[INPUT]:  Ethereum address, Stark public key, registration signatures
[OUTPUT]: Signable registration details, registration receipt, user accounts
[POS]:    HTTP layer - user registration endpoints
[UPDATE]: When registration endpoints or payloads change
*/

use reqwest::Method;

use crate::http::{ImxApiClient, Result};
use crate::types::{
    GetUserResponse, RegisterUserRequest, RegisterUserResponse, SignableRegistration,
    SignableRegistrationRequest,
};
use crate::validation::validate_eth_address;

impl ImxApiClient {
    /// Request signable registration details
    ///
    /// POST /v1/signable-registration-offchain
    pub async fn sign_registration(
        &self,
        eth_address: &str,
        stark_public_key: &str,
    ) -> Result<SignableRegistration> {
        let body = SignableRegistrationRequest {
            ether_key: eth_address.to_string(),
            stark_key: stark_public_key.to_string(),
        };
        let builder = self
            .request(Method::POST, "/v1/signable-registration-offchain")?
            .json(&body);
        self.send_json(builder).await
    }

    /// Register a user off-chain
    ///
    /// POST /v1/users
    pub async fn register_user(&self, req: &RegisterUserRequest) -> Result<RegisterUserResponse> {
        let builder = self.request(Method::POST, "/v1/users")?.json(req);
        self.send_json(builder).await
    }

    /// Stark keys registered to an Ethereum address
    ///
    /// GET /v1/users/{address}
    pub async fn get_user(&self, eth_address: &str) -> Result<GetUserResponse> {
        validate_eth_address(eth_address)?;
        let endpoint = format!("/v1/users/{eth_address}");
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }
}
