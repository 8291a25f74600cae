//! Solana JSON-RPC reads, proxied for the browser frontend.
//!
//! Only one call is needed: the SPL token balance a wallet holds for the
//! club's mint. Proxying it through the backend avoids CORS trouble with
//! public RPC endpoints.

use serde_json::{json, Value};
use std::time::Duration;

const RPC_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("Failed to reach Solana RPC: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Solana RPC error: {0}")]
    Rpc(Value),
}

/// Fetch the SPL token balance `wallet_address` holds for `mint`.
///
/// Returns 0 when the wallet has no token account for the mint.
pub async fn token_balance(
    http: &reqwest::Client,
    rpc_url: &str,
    mint: &str,
    wallet_address: &str,
) -> Result<f64, RpcError> {
    let payload = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "getTokenAccountsByOwner",
        "params": [
            wallet_address,
            { "mint": mint },
            { "encoding": "jsonParsed" },
        ],
    });

    let resp = http
        .post(rpc_url)
        .timeout(RPC_TIMEOUT)
        .json(&payload)
        .send()
        .await?;
    let body: Value = resp.json().await?;

    parse_balance(&body)
}

/// Extract the ui amount from a getTokenAccountsByOwner response.
fn parse_balance(body: &Value) -> Result<f64, RpcError> {
    if let Some(err) = body.get("error") {
        return Err(RpcError::Rpc(err.clone()));
    }

    // Missing account list, empty list, and null uiAmount all mean zero
    let amount = body
        .pointer("/result/value/0/account/data/parsed/info/tokenAmount/uiAmount")
        .and_then(Value::as_f64)
        .unwrap_or(0.0);
    Ok(amount)
}
