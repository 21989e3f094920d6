use anchor_lang::prelude::*;

use crate::error::GrantTreasuryError;
use crate::types::Grant;

/**
 * Claim ledger entry for one signed grant
 *
 * Derivation: ["grant", treasury_key, claim_key]
 *
 * Lifecycle:
 * 1. Created on the first claim attempt that reaches the handler (init_if_needed)
 * 2. Marked claimed exactly once, before the payout transfer
 * 3. Never closed, so a claim key can never become unclaimed again
 *
 * A failed claim rolls back the whole transaction, including account creation,
 * so an existing entry is always a claimed one.
 */
#[account]
#[derive(Default, Debug)]
pub struct GrantClaim {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Set once the grant has been paid, never reset
    pub claimed: bool,

    /// Wallet the payout went to
    pub recipient: Pubkey,

    /// Token mint the payout was made in
    pub token_mint: Pubkey,

    /// Account that submitted the claim (may differ from recipient)
    pub claimed_by: Pubkey,

    /// Funding round of the grant
    pub round_number: u64,

    /// Amount paid out
    pub amount: u64,

    /// Unix timestamp of the payout
    pub claimed_at: i64,
}

impl GrantClaim {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<GrantClaim>();

    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    /// Check-then-mark in one step
    pub fn record(
        &mut self,
        bump: u8,
        grant: &Grant,
        token_mint: Pubkey,
        claimed_by: Pubkey,
        now: i64,
    ) -> Result<()> {
        require!(!self.claimed, GrantTreasuryError::AlreadyClaimed);

        self.bump = bump;
        self.claimed = true;
        self.recipient = grant.recipient;
        self.token_mint = token_mint;
        self.claimed_by = claimed_by;
        self.round_number = grant.round_number;
        self.amount = grant.amount;
        self.claimed_at = now;
        Ok(())
    }
}
