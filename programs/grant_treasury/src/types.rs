use anchor_lang::prelude::*;

use crate::constants::MAX_PROJECT_NAME_LEN;
use crate::error::GrantTreasuryError;

/// Ethereum-style account identifier of the off-line verifier
pub type EthAddress = [u8; 20];

/**
 * Grant terms as signed off-line by the verifier
 *
 * Supplied fresh on every claim attempt and never stored as a whole.
 * Two grants with identical fields describe the same grant.
 * The token being paid is the mint account passed with the claim and is
 * not part of these terms.
 */
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Grant {
    /// Funding round the grant belongs to
    pub round_number: u64,
    /// Wallet that receives the payout
    pub recipient: Pubkey,
    /// Human readable project name
    pub project_name: String,
    /// Grant creation time (Unix seconds), the claim window starts here
    pub time_stamp: u64,
    /// Payout amount in base units of the token
    pub amount: u64,
}

impl Grant {
    /// Reject payloads the encoder should never see
    pub fn validate(&self) -> Result<()> {
        require!(
            self.project_name.len() <= MAX_PROJECT_NAME_LEN,
            GrantTreasuryError::ProjectNameTooLong
        );
        require!(self.amount > 0, GrantTreasuryError::InvalidAmount);
        Ok(())
    }

    /// Last second at which the grant can still be claimed
    pub fn deadline(&self, claim_window: u64) -> u64 {
        self.time_stamp.saturating_add(claim_window)
    }

    pub fn is_expired(&self, claim_window: u64, now: i64) -> bool {
        match u64::try_from(now) {
            Ok(now) => now > self.deadline(claim_window),
            Err(_) => false,
        }
    }
}

/// Recoverable secp256k1 signature in Ethereum (v, r, s) form
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrantSignature {
    /// 27/28 as produced by ecsign, or a raw recovery id 0/1
    pub v: u8,
    pub r: [u8; 32],
    pub s: [u8; 32],
}
