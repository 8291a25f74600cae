//! Ed25519 wallet signature verification.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};

/// Verify that the holder of `wallet_address`'s private key signed `message`.
///
/// # Arguments
/// * `wallet_address` - Base58-encoded Ed25519 public key (32 bytes), as
///   produced by Solana wallet adapters
/// * `signature` - Base58-encoded signature (64 bytes)
/// * `message` - The exact text that was signed; matched byte-for-byte as UTF-8
///
/// Total over all inputs: malformed encodings, wrong-length keys, and failed
/// verification alike return `false`. Callers cannot observe *why* a check
/// failed, so the login endpoint leaks nothing to a probing client.
pub fn verify_wallet_signature(wallet_address: &str, signature: &str, message: &str) -> bool {
    let Some(verifying_key) = decode_pubkey(wallet_address) else {
        return false;
    };
    let Some(signature) = decode_signature(signature) else {
        return false;
    };

    // Constant-time comparison is built into ed25519-dalek
    verifying_key.verify(message.as_bytes(), &signature).is_ok()
}

fn decode_pubkey(wallet_address: &str) -> Option<VerifyingKey> {
    let bytes = bs58::decode(wallet_address).into_vec().ok()?;
    let bytes: [u8; 32] = bytes.try_into().ok()?;
    VerifyingKey::from_bytes(&bytes).ok()
}

fn decode_signature(signature: &str) -> Option<Signature> {
    let bytes = bs58::decode(signature).into_vec().ok()?;
    let bytes: [u8; 64] = bytes.try_into().ok()?;
    Some(Signature::from_bytes(&bytes))
}
