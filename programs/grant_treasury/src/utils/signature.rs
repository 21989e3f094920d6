use anchor_lang::solana_program::keccak;
use anchor_lang::solana_program::secp256k1_recover::secp256k1_recover;

use crate::types::{EthAddress, GrantSignature};

/// Derive the Ethereum-style address of an uncompressed secp256k1 public key (x || y)
pub fn eth_address(pubkey: &[u8; 64]) -> EthAddress {
    let hash = keccak::hash(pubkey).to_bytes();
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// Map v to a recovery id, accepting both the 27/28 and 0/1 conventions
fn recovery_id(v: u8) -> Option<u8> {
    match v {
        0 | 1 => Some(v),
        27 | 28 => Some(v - 27),
        _ => None,
    }
}

/**
 * Recovers the address that produced `signature` over `digest`
 *
 * Returns None for any malformed signature so callers cannot mistake a
 * failed recovery for some default identity.
 */
pub fn recover_signer(digest: &[u8; 32], signature: &GrantSignature) -> Option<EthAddress> {
    let recovery_id = recovery_id(signature.v)?;
    if signature.r == [0; 32] || signature.s == [0; 32] {
        return None;
    }

    let mut compact = [0u8; 64];
    compact[..32].copy_from_slice(&signature.r);
    compact[32..].copy_from_slice(&signature.s);

    let pubkey = secp256k1_recover(digest, recovery_id, &compact).ok()?;
    Some(eth_address(&pubkey.to_bytes()))
}

/// True only if `signature` recovers to `expected`
pub fn verify_signer(digest: &[u8; 32], signature: &GrantSignature, expected: &EthAddress) -> bool {
    matches!(recover_signer(digest, signature), Some(signer) if signer == *expected)
}
