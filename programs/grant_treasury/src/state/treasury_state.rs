use anchor_lang::prelude::*;

use crate::constants::DEFAULT_CLAIM_WINDOW;
use crate::error::GrantTreasuryError;
use crate::state::GrantClaim;
use crate::types::{EthAddress, Grant, GrantSignature};
use crate::utils::{claim_key, ensure_vault_covers, verify_signer};

/// Account facts the claim decision depends on, read from the loaded accounts
#[derive(Clone, Copy, Debug)]
pub struct ClaimAccounts {
    /// Owner of the destination token account
    pub destination_owner: Pubkey,
    /// Balance of the vault for the claimed mint
    pub vault_amount: u64,
    /// Mint the payout is made in
    pub token_mint: Pubkey,
    /// Account submitting the claim
    pub relayer: Pubkey,
    /// Bump of the ledger entry PDA
    pub ledger_bump: u8,
}

/**
 * Treasury state account
 *
 * Holds the access-control identities and the claim policy of one treasury.
 * Token balances live in per-mint vault token accounts owned by this PDA.
 *
 * Derivation: ["treasury", creator]
 *
 * Lifecycle:
 * 1. Created by initialize_treasury, creator becomes the first owner
 * 2. Owner may rotate the verifier wallet, change the claim window or hand over ownership
 * 3. grants_claimed increments with each successful claim
 * 4. Never closed
 */
#[account]
#[derive(Default, Debug)]
pub struct Treasury {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Account that created the treasury
    /// - Part of the PDA seeds, never changes
    pub creator: Pubkey,

    /// Administrator of the treasury
    /// - Only account allowed to withdraw funds and change configuration
    pub owner: Pubkey,

    /// Address of the off-line signer whose grant signatures are accepted
    /// - keccak256(uncompressed secp256k1 pubkey)[12..]
    pub verifier_wallet: EthAddress,

    /// Seconds after a grant's time_stamp during which it can be claimed
    pub claim_window: u64,

    /// Number of grants paid out so far
    pub grants_claimed: u64,
}

impl Treasury {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Treasury>();

    pub fn initialize(
        &mut self,
        bump: u8,
        creator: Pubkey,
        verifier_wallet: EthAddress,
        claim_window: u64,
    ) -> Result<()> {
        self.bump = bump;
        self.creator = creator;
        self.owner = creator;
        self.grants_claimed = 0;
        self.set_verifier_wallet(verifier_wallet)?;
        self.set_claim_window(if claim_window == 0 {
            DEFAULT_CLAIM_WINDOW
        } else {
            claim_window
        })
    }

    /// Gate for every administrative instruction
    pub fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, GrantTreasuryError::NotOwner);
        Ok(())
    }

    pub fn set_verifier_wallet(&mut self, verifier_wallet: EthAddress) -> Result<()> {
        // zero address is never recovered from a valid signature
        require!(
            verifier_wallet != [0u8; 20],
            GrantTreasuryError::InvalidVerifier
        );
        self.verifier_wallet = verifier_wallet;
        Ok(())
    }

    pub fn set_owner(&mut self, new_owner: Pubkey) -> Result<()> {
        require!(
            new_owner != Pubkey::default(),
            GrantTreasuryError::InvalidOwner
        );
        self.owner = new_owner;
        Ok(())
    }

    pub fn set_claim_window(&mut self, claim_window: u64) -> Result<()> {
        require!(claim_window > 0, GrantTreasuryError::InvalidClaimWindow);
        self.claim_window = claim_window;
        Ok(())
    }

    /**
     * Decides whether `grant` may be paid out at time `now`
     *
     * Checks run in a fixed order so that a replay is always reported as
     * AlreadyClaimed, even after the grant has expired:
     * 1. ledger entry not yet claimed
     * 2. now <= time_stamp + claim_window
     * 3. signature recovers to the registered verifier wallet
     *
     * Returns the claim key on success. Pure, the caller applies effects.
     */
    pub fn authorize_claim(
        &self,
        ledger_entry: &GrantClaim,
        grant: &Grant,
        signature: &GrantSignature,
        now: i64,
    ) -> Result<[u8; 32]> {
        require!(
            !ledger_entry.is_claimed(),
            GrantTreasuryError::AlreadyClaimed
        );
        require!(
            !grant.is_expired(self.claim_window, now),
            GrantTreasuryError::TimedOut
        );

        let key = claim_key(grant);
        require!(
            verify_signer(&key, signature, &self.verifier_wallet),
            GrantTreasuryError::UnauthorizedSigner
        );
        Ok(key)
    }

    pub fn record_payout(&mut self) -> Result<u64> {
        self.grants_claimed = self
            .grants_claimed
            .checked_add(1)
            .ok_or(GrantTreasuryError::ArithmeticOverflow)?;
        Ok(self.grants_claimed)
    }

    /**
     * Runs every claim check and applies the state effects of a payout
     *
     * Order:
     * 1. claim_key must be the canonical digest of grant
     * 2. grant payload must be well formed (amount, project name length)
     * 3. authorize_claim (replay, expiry, signer)
     * 4. destination token account must belong to grant.recipient
     * 5. vault must cover the amount
     * 6. ledger entry marked claimed, payout counter incremented
     *
     * The caller performs the token transfer afterwards, only on success.
     * Returns the new grants_claimed count.
     */
    pub fn process_claim(
        &mut self,
        ledger_entry: &mut GrantClaim,
        claim_key: [u8; 32],
        grant: &Grant,
        signature: &GrantSignature,
        accounts: &ClaimAccounts,
        now: i64,
    ) -> Result<u64> {
        require!(
            crate::utils::claim_key(grant) == claim_key,
            GrantTreasuryError::ClaimKeyMismatch
        );
        // rejects malformed grants before paying for signature recovery
        grant.validate()?;

        self.authorize_claim(ledger_entry, grant, signature, now)?;

        require_keys_eq!(
            accounts.destination_owner,
            grant.recipient,
            GrantTreasuryError::RecipientMismatch
        );
        ensure_vault_covers(accounts.vault_amount, grant.amount)?;

        // Effects before the transfer so a reentrant claim sees the entry as claimed
        ledger_entry.record(
            accounts.ledger_bump,
            grant,
            accounts.token_mint,
            accounts.relayer,
            now,
        )?;
        self.record_payout()
    }
}
