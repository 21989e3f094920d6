use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Timing policy, payload bounds and PDA seeds used by the grant treasury.
 */

#[constant]
/// ===== TIMING CONSTANTS =====

/// Default claim window measured from a grant's own time_stamp (14 days)
/// - Used when a treasury is initialized with claim_window = 0
/// - Owner may change the window later with update_claim_window
/// - Value: 14 days * 24 hours * 60 minutes * 60 seconds = 1,209,600 seconds
pub const DEFAULT_CLAIM_WINDOW: u64 = 14 * 24 * 60 * 60; // 14 days in seconds

/// ===== PAYLOAD CONSTANTS =====

/// Longest project name accepted in a grant, in bytes
pub const MAX_PROJECT_NAME_LEN: usize = 256;

/// ===== PDA SEED CONSTANTS =====

/// Seed for treasury PDA derivation
/// - Used in: ["treasury", creator]
/// - creator is pinned at initialization so ownership transfer keeps the address stable
pub const TREASURY_SEED: &str = "treasury";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", treasury_key, token_mint]
/// - One vault per token held by the treasury, authority is the treasury PDA
pub const VAULT_SEED: &str = "vault";

/// Seed for grant claim PDA derivation
/// - Used in: ["grant", treasury_key, claim_key]
/// - One ledger entry per signed grant, never closed
pub const GRANT_SEED: &str = "grant";
