/*
[INPUT]:  Owner addresses and list query filters
[OUTPUT]: Paginated assets, orders, trades and balances
[POS]:    HTTP layer - public read endpoints (no signatures required)
[UPDATE]: When adding new read endpoints or changing query parameters
*/

use reqwest::Method;

use crate::http::{ImxApiClient, Result};
use crate::types::{
    Asset, Balance, ListAssetsQuery, ListBalancesQuery, ListOrdersQuery, ListTradesQuery, Order,
    Paginated, Trade,
};
use crate::validation::validate_eth_address;

impl ImxApiClient {
    /// List assets
    ///
    /// GET /v1/assets?user={user}&collection={collection}&...
    pub async fn list_assets(&self, query: &ListAssetsQuery) -> Result<Paginated<Asset>> {
        let builder = self.request(Method::GET, "/v1/assets")?.query(query);
        self.send_json(builder).await
    }

    /// List orders
    ///
    /// GET /v3/orders?user={user}&status={status}&...
    pub async fn list_orders(&self, query: &ListOrdersQuery) -> Result<Paginated<Order>> {
        let builder = self.request(Method::GET, "/v3/orders")?.query(query);
        self.send_json(builder).await
    }

    /// List settled trades
    ///
    /// GET /v3/trades?page_size={n}&cursor={cursor}
    pub async fn list_trades(&self, query: &ListTradesQuery) -> Result<Paginated<Trade>> {
        let builder = self.request(Method::GET, "/v3/trades")?.query(query);
        self.send_json(builder).await
    }

    /// Token balances held by an owner
    ///
    /// GET /v2/balances/{owner}
    pub async fn list_balances(
        &self,
        owner: &str,
        query: &ListBalancesQuery,
    ) -> Result<Paginated<Balance>> {
        validate_eth_address(owner)?;
        let endpoint = format!("/v2/balances/{owner}");
        let builder = self.request(Method::GET, &endpoint)?.query(query);
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, ImxApiClient, ImxError};
    use crate::types::{
        ListAssetsQuery, ListBalancesQuery, ListOrdersQuery, ListTradesQuery, OrderStatus,
        TokenType,
    };
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_assets_with_filters() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "result": [
                {
                    "token_address": "0xacb3c6a43d15b907e8433077b6d38ae40936fe2c",
                    "token_id": "42",
                    "id": "0x1f2a",
                    "user": "0x8f0e4f8d5b2c4a3e9d6c1b0a7f8e9d0c1b2a3f4e",
                    "status": "imx",
                    "name": "Sword",
                    "collection": {"name": "Gods Unchained", "icon_url": null},
                    "created_at": "2024-01-01T00:00:00Z"
                }
            ],
            "cursor": "next-page",
            "remaining": 1
        }"#;

        Mock::given(method("GET"))
            .and(path("/v1/assets"))
            .and(query_param("user", "0x8f0e4f8d5b2c4a3e9d6c1b0a7f8e9d0c1b2a3f4e"))
            .and(query_param("page_size", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            ImxApiClient::with_config_and_base_url(ClientConfig::default(), &server.uri()).unwrap();
        let page = client
            .list_assets(&ListAssetsQuery {
                user: Some("0x8f0e4f8d5b2c4a3e9d6c1b0a7f8e9d0c1b2a3f4e".to_string()),
                page_size: Some(10),
                ..Default::default()
            })
            .await
            .expect("list_assets failed");

        assert_eq!(page.result.len(), 1);
        assert_eq!(page.result[0].token_id, "42");
        assert_eq!(
            page.result[0].collection.as_ref().map(|c| c.name.as_str()),
            Some("Gods Unchained")
        );
        assert!(page.has_more());
    }

    #[tokio::test]
    async fn test_list_orders_by_status() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "result": [
                {
                    "order_id": 12345,
                    "status": "active",
                    "user": "0x8f0e4f8d5b2c4a3e9d6c1b0a7f8e9d0c1b2a3f4e",
                    "sell": {
                        "type": "ERC721",
                        "data": {
                            "token_id": "42",
                            "token_address": "0xacb3c6a43d15b907e8433077b6d38ae40936fe2c",
                            "quantity": "1"
                        }
                    },
                    "buy": {
                        "type": "ETH",
                        "data": {"decimals": 18, "quantity": "100000000000000000"}
                    },
                    "timestamp": "2024-01-01T00:00:00Z"
                }
            ],
            "cursor": "",
            "remaining": 0
        }"#;

        Mock::given(method("GET"))
            .and(path("/v3/orders"))
            .and(query_param("status", "active"))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            ImxApiClient::with_config_and_base_url(ClientConfig::default(), &server.uri()).unwrap();
        let page = client
            .list_orders(&ListOrdersQuery {
                status: Some(OrderStatus::Active),
                ..Default::default()
            })
            .await
            .expect("list_orders failed");

        let order = &page.result[0];
        assert_eq!(order.order_id, 12345);
        assert_eq!(order.status, OrderStatus::Active);
        assert_eq!(order.sell.token_type, TokenType::Erc721);
        assert_eq!(order.buy.data.decimals, Some(18));
        assert!(!page.has_more());
    }

    #[tokio::test]
    async fn test_list_trades() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "result": [
                {
                    "transaction_id": 987,
                    "status": "success",
                    "a": {"order_id": 1, "token_type": "ETH", "sold": "100"},
                    "b": {
                        "order_id": 2,
                        "token_type": "ERC721",
                        "token_id": "42",
                        "token_address": "0xacb3c6a43d15b907e8433077b6d38ae40936fe2c",
                        "sold": "1"
                    },
                    "timestamp": "2024-01-01T00:00:00Z"
                }
            ],
            "cursor": "",
            "remaining": 0
        }"#;

        Mock::given(method("GET"))
            .and(path("/v3/trades"))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            ImxApiClient::with_config_and_base_url(ClientConfig::default(), &server.uri()).unwrap();
        let page = client
            .list_trades(&ListTradesQuery::default())
            .await
            .expect("list_trades failed");

        assert_eq!(page.result[0].transaction_id, 987);
        assert_eq!(page.result[0].b.token_type, TokenType::Erc721);
    }

    #[tokio::test]
    async fn test_list_balances() {
        let server = MockServer::start().await;
        let owner = "0x8f0e4f8d5b2c4a3e9d6c1b0a7f8e9d0c1b2a3f4e";
        let mock_response = r#"{
            "result": [
                {
                    "token_address": "",
                    "symbol": "ETH",
                    "balance": "1000000000000000000",
                    "preparing_withdrawal": "0",
                    "withdrawable": "0"
                }
            ],
            "cursor": ""
        }"#;

        Mock::given(method("GET"))
            .and(path(format!("/v2/balances/{owner}")))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            ImxApiClient::with_config_and_base_url(ClientConfig::default(), &server.uri()).unwrap();
        let page = client
            .list_balances(owner, &ListBalancesQuery::default())
            .await
            .expect("list_balances failed");

        assert_eq!(page.result[0].symbol, "ETH");
        assert_eq!(page.result[0].balance, "1000000000000000000");
    }

    #[tokio::test]
    async fn test_list_assets_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/assets"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&server)
            .await;

        let client =
            ImxApiClient::with_config_and_base_url(ClientConfig::default(), &server.uri()).unwrap();
        let err = client
            .list_assets(&ListAssetsQuery::default())
            .await
            .unwrap_err();

        match err {
            ImxError::Api { status, ref body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "upstream exploded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_list_balances_rejects_path_like_owner() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client =
            ImxApiClient::with_config_and_base_url(ClientConfig::default(), &server.uri()).unwrap();
        let err = client
            .list_balances("a/../x", &ListBalancesQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ImxError::Validation(_)));
    }
}
