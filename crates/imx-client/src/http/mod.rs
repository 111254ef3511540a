/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod public;
pub mod trade;
pub mod transfer;
pub mod user;

pub use error::{ImxError, Result};

pub use client::{
    ClientConfig, ETH_ADDRESS_HEADER, ETH_SIGNATURE_HEADER, Environment, ImxApiClient,
};
