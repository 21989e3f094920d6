use anchor_lang::prelude::*;

declare_id!("96R36Hchs1AUV5CYpQStrnfkG6i8p4HC3HxcD2yxm91E");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod types;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use types::{Grant, GrantSignature};

/**
 * Grant Treasury Program
 *
 * A custodial payout program for grants that a trusted verifier signs off-line.
 * Anyone holding a grant and the verifier's signature can submit it, and the
 * treasury pays the grant recipient from its vault.
 *
 * Key Features:
 * - secp256k1 (Ethereum-style) signature authorization over a canonical grant encoding
 * - Replay protection, each signed grant pays out at most once
 * - Claim window measured from the grant's own timestamp (14 days by default)
 * - Third-party relaying, payouts always go to the grant recipient
 * - Owner-restricted withdrawal and verifier rotation
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Treasury PDA: owner, verifier wallet and claim window
 * - Token Vault PDAs: one per mint, created by the first deposit
 * - Grant Claim PDAs: one per claim key, the replay protection ledger
 *
 * Workflow:
 * 1. Creator initializes a treasury with the verifier wallet
 * 2. Anyone funds the treasury vaults
 * 3. Verifier signs grant terms off-line
 * 4. Anyone submits a signed grant, the recipient is paid
 * 5. Owner withdraws leftover funds or rotates the verifier as needed
 */
#[program]
pub mod grant_treasury {
    use super::*;

    /**
     * Creates a treasury owned by the signer
     *
     * @param ctx - Account context containing treasury and creator accounts
     * @param verifier_wallet - 20-byte address of the off-line grant signer
     * @param claim_window - Claim window in seconds, 0 selects the 14 day default
     *
     * Access Control: Anyone, the signer becomes the owner
     */
    pub fn initialize_treasury(
        ctx: Context<InitializeTreasury>,
        verifier_wallet: [u8; 20],
        claim_window: u64,
    ) -> Result<()> {
        handle_initialize_treasury(ctx, verifier_wallet, claim_window)
    }

    /**
     * Deposits tokens into the treasury
     *
     * @param ctx - Account context containing treasury, vault and funder accounts
     * @param amount - Amount of tokens to pull from the funder
     *
     * Access Control: Anyone
     */
    pub fn fund_treasury(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
        handle_fund_treasury(ctx, amount)
    }

    /**
     * Claims a grant signed by the verifier wallet
     *
     * @param ctx - Account context containing treasury, ledger entry, vault and recipient accounts
     * @param claim_key - Canonical digest of the grant terms
     * @param grant - Grant terms as signed
     * @param signature - Verifier's (v, r, s) signature
     *
     * Access Control: Anyone, payout goes to grant.recipient
     */
    pub fn claim_grant(
        ctx: Context<ClaimGrant>,
        claim_key: [u8; 32],
        grant: Grant,
        signature: GrantSignature,
    ) -> Result<()> {
        handle_claim_grant(ctx, claim_key, grant, signature)
    }

    /**
     * Withdraws tokens from a vault to the owner
     *
     * @param ctx - Account context containing treasury, vault and owner accounts
     * @param amount - Amount of tokens to withdraw
     *
     * Access Control: Owner only
     */
    pub fn withdraw_funds(ctx: Context<WithdrawFunds>, amount: u64) -> Result<()> {
        handle_withdraw_funds(ctx, amount)
    }

    /**
     * Rotates the verifier wallet
     *
     * Access Control: Owner only
     */
    pub fn change_verifier_wallet(
        ctx: Context<ChangeVerifierWallet>,
        new_verifier: [u8; 20],
    ) -> Result<()> {
        handle_change_verifier_wallet(ctx, new_verifier)
    }

    /**
     * Hands over treasury ownership
     *
     * Access Control: Owner only
     */
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        handle_transfer_ownership(ctx, new_owner)
    }

    /**
     * Changes how long grants stay claimable
     *
     * Access Control: Owner only
     */
    pub fn update_claim_window(ctx: Context<UpdateClaimWindow>, claim_window: u64) -> Result<()> {
        handle_update_claim_window(ctx, claim_window)
    }

    /// Returns the registered verifier wallet
    pub fn verifier_wallet(ctx: Context<ReadTreasury>) -> Result<[u8; 20]> {
        handle_verifier_wallet(ctx)
    }

    /// Returns the vault balance for one mint
    pub fn vault_balance(ctx: Context<ReadVault>) -> Result<u64> {
        handle_vault_balance(ctx)
    }
}
