/*
[INPUT]:  Ethereum private key or external wallet signer
[OUTPUT]: Derived Stark keys and signed API payloads
[POS]:    Auth layer - key derivation and payload signing
[UPDATE]: When derivation or signature schemes change
*/

pub mod derivation;
pub mod evm_wallet;
pub mod payload;
pub mod stark;
pub mod wallet;

pub use derivation::{KeyDerivationConfig, KeyDeriver};
pub use evm_wallet::{EthWalletSigner, verify_eth_signature};
pub use payload::PayloadSigner;
pub use stark::{StarkKeyPair, StarkSigner, verify_stark_signature};
pub use wallet::{MockWalletSigner, WalletSigner};
