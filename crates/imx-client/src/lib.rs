/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Immutable X client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod client;
pub mod http;
pub mod types;
pub mod validation;

pub use client::{ImxClient, ImxClientOptions};

// Re-export commonly used types from auth
pub use auth::{
    EthWalletSigner,
    KeyDerivationConfig,
    KeyDeriver,
    MockWalletSigner,
    PayloadSigner,
    StarkKeyPair,
    StarkSigner,
    WalletSigner,
    verify_eth_signature,
    verify_stark_signature,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Environment,
    ImxApiClient,
    ImxError,
    Result,
};

// Re-export all types
pub use types::*;
