use anchor_lang::solana_program::keccak;

use crate::types::Grant;

/// Left-pad an unsigned integer to a 32-byte big-endian word (uint256)
fn uint256(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

/**
 * Packed canonical encoding of the signed grant fields
 *
 * Layout: round_number (32) | recipient (32) | project_name (raw) | time_stamp (32) | amount (32)
 *
 * Matches solidityKeccak256(["uint256", "bytes32", "string", "uint256", "uint256"], ...)
 * on the signing side. project_name is the only variable-length field, so the
 * packed form stays unambiguous without a length prefix.
 */
pub fn encode_grant(grant: &Grant) -> Vec<u8> {
    let name = grant.project_name.as_bytes();
    let mut out = Vec::with_capacity(32 * 4 + name.len());
    out.extend_from_slice(&uint256(grant.round_number));
    out.extend_from_slice(grant.recipient.as_ref());
    out.extend_from_slice(name);
    out.extend_from_slice(&uint256(grant.time_stamp));
    out.extend_from_slice(&uint256(grant.amount));
    out
}

/**
 * Keccak-256 of the canonical encoding
 *
 * This digest is both the message the verifier signs and the replay
 * protection key of the claim ledger.
 *
 * Note: the token mint is not covered. A signature is valid for any token the
 * treasury holds, and the ledger entry is shared across tokens, so a grant
 * still pays out at most once.
 */
pub fn claim_key(grant: &Grant) -> [u8; 32] {
    keccak::hash(&encode_grant(grant)).to_bytes()
}
