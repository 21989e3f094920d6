use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::types::{Grant, GrantSignature};
use crate::utils::transfer_token;

/**
 * Account context for claiming a signed grant
 *
 * Pays a grant signed off-line by the treasury's verifier wallet from the
 * vault of the supplied mint to a token account owned by the grant recipient.
 *
 * Access Control: Anyone may relay a claim, funds only ever go to the recipient
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(claim_key: [u8; 32])]
pub struct ClaimGrant<'info> {
    /// The treasury paying the grant
    #[account(
        mut,
        seeds = [TREASURY_SEED.as_bytes(), treasury.creator.as_ref()],
        bump = treasury.bump
    )]
    pub treasury: Account<'info, Treasury>,

    /// Claim ledger entry for this grant
    /// - Derived from: ["grant", treasury_key, claim_key]
    /// - Created on first use, paid for by the relayer
    #[account(
        init_if_needed,
        payer = relayer,
        space = GrantClaim::LEN,
        seeds = [GRANT_SEED.as_bytes(), treasury.key().as_ref(), claim_key.as_ref()],
        bump
    )]
    pub grant_claim: Account<'info, GrantClaim>,

    /// Vault holding the tokens of this mint
    /// - Derived from: ["vault", treasury_key, token_mint]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), treasury.key().as_ref(), token_mint.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Recipient's token account to receive the payout
    /// - Ownership is checked against grant.recipient in the handler
    #[account(
        mut,
        token::mint = token_mint,
        token::token_program = token_program,
    )]
    pub recipient_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Token mint the grant is paid in
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Account submitting the claim, may be any third party
    #[account(mut)]
    pub relayer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Pays out a signed grant
 *
 * @param ctx - The account context containing treasury, ledger entry, vault and recipient accounts
 * @param claim_key - keccak256 of the canonical grant encoding, seeds the ledger entry
 * @param grant - Grant terms exactly as signed
 * @param signature - Verifier's (v, r, s) signature over claim_key
 *
 * Validation Process:
 * 1. claim_key must be the canonical digest of grant
 * 2. Grant payload must be well formed
 * 3. Grant must not be claimed yet
 * 4. Grant must still be inside the claim window
 * 5. Signature must recover to the verifier wallet
 * 6. Destination must belong to the recipient and the vault must cover the amount
 *
 * The ledger entry is marked before the token transfer.
 */
pub fn handle_claim_grant(
    ctx: Context<ClaimGrant>,
    claim_key: [u8; 32],
    grant: Grant,
    signature: GrantSignature,
) -> Result<()> {
    // ===== VALIDATION + EFFECTS PHASE =====

    let current_time = Clock::get()?.unix_timestamp;

    // Snapshot the account facts the claim decision depends on
    let claim_accounts = ClaimAccounts {
        destination_owner: ctx.accounts.recipient_token_account.owner,
        vault_amount: ctx.accounts.token_vault.amount,
        token_mint: ctx.accounts.token_mint.key(),
        relayer: ctx.accounts.relayer.key(),
        ledger_bump: ctx.bumps.grant_claim,
    };

    // Key check, signature authorization, recipient and balance checks,
    // then marks the ledger entry (CEI pattern - effects before interactions)
    let grants_claimed = ctx.accounts.treasury.process_claim(
        &mut ctx.accounts.grant_claim,
        claim_key,
        &grant,
        &signature,
        &claim_accounts,
        current_time,
    )?;

    // Prepare other immutable references
    let treasury_key = ctx.accounts.treasury.key();
    let creator_key = ctx.accounts.treasury.creator;
    let treasury_bump = ctx.accounts.treasury.bump;

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    // Prepare PDA signing seeds for token transfer
    let seeds = &[
        TREASURY_SEED.as_bytes(),
        creator_key.as_ref(),
        &[treasury_bump],
    ];
    let signer = &[&seeds[..]];

    // Transfer tokens from vault to the recipient using PDA authority
    transfer_token(
        ctx.accounts.treasury.to_account_info(),           // Vault authority (treasury PDA)
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.recipient_token_account.to_account_info(), // Owned by grant.recipient
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        grant.amount,
        ctx.accounts.token_mint.decimals,
        Some(signer), // PDA signing for secure transfer
    )?;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(GrantClaimed {
        treasury: treasury_key,
        claim_key,
        round_number: grant.round_number,
        recipient: grant.recipient,                 // Always the payee, never the relayer
        relayer: claim_accounts.relayer,
        token_mint: claim_accounts.token_mint,
        amount: grant.amount,
        grants_claimed,                             // Total grants paid by this treasury
    });

    Ok(())
}
