/*
[INPUT]:  Ethereum private key (IMX_PRIVATE_KEY or a throwaway demo key)
[OUTPUT]: Derived Stark key pair and a sample signed payload
[POS]:    Examples - offline key derivation and signing
[UPDATE]: When derivation or signing API changes
*/

use imx_client::*;

/// Example: derive the Stark key for an Ethereum account, then sign a payload
///
/// Runs fully offline; no API calls are made.
#[tokio::main]
async fn main() {
    println!("=== Immutable X Key Derivation Example ===\n");

    let private_key = std::env::var("IMX_PRIVATE_KEY").unwrap_or_else(|_| {
        "0x1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b".to_string()
    });

    let client = match ImxClient::with_options(
        &private_key,
        ImxClientOptions {
            environment: Environment::Sandbox,
            ..Default::default()
        },
    )
    .await
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to derive keys: {}", e);
            return;
        }
    };

    println!("✓ Ethereum address:  {}", client.eth_address());
    println!("✓ Stark public key:  {}", client.stark_public_key());

    let deriver = KeyDeriver::default();
    if let Ok(path) = deriver.account_path(client.eth_address()) {
        println!("  derivation path:   {}", path);
    }

    // The API hands out signable_message + payload_hash pairs; sign a stand-in
    match client.signer().sign("Sign this transfer", "0x5678").await {
        Ok(signed) => {
            println!("\nSigned payload:");
            println!("  eth_signature:   {}", signed.eth_signature);
            println!("  stark_signature: {}", signed.stark_signature);
        }
        Err(e) => eprintln!("Signing failed: {}", e),
    }

    // In production:
    // let tx_hash = client.register().await?;
    // let transfer_id = client.transfer("0x...", "ETH", "1000000000000000").await?;

    println!("\n=== Example Complete ===");
}
