use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{ensure_vault_covers, transfer_token};

/**
 * Account context for withdrawing tokens from a vault
 *
 * Access Control: Only the treasury owner can withdraw
 *
 * Business Logic:
 * - Any amount up to the vault balance may be withdrawn at any time
 * - Tokens go to a token account owned by the owner
 * - The vault stays open for future deposits
 */
#[event_cpi]
#[derive(Accounts)]
pub struct WithdrawFunds<'info> {
    /// The treasury owning the vault
    #[account(
        seeds = [TREASURY_SEED.as_bytes(), treasury.creator.as_ref()],
        bump = treasury.bump
    )]
    pub treasury: Account<'info, Treasury>,

    /// Vault to withdraw from
    /// - Derived from: ["vault", treasury_key, token_mint]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), treasury.key().as_ref(), token_mint.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Owner's token account to receive the tokens
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint being withdrawn
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Caller, must be the treasury owner
    pub owner: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Withdraws tokens from a vault to the owner
 *
 * @param ctx - The account context containing treasury, vault and owner accounts
 * @param amount - Amount of tokens to withdraw
 */
pub fn handle_withdraw_funds(ctx: Context<WithdrawFunds>, amount: u64) -> Result<()> {
    let treasury = &ctx.accounts.treasury;

    // ===== VALIDATION PHASE =====

    // Only the owner may move funds out of the treasury
    treasury.require_owner(&ctx.accounts.owner.key())?;

    // Amount must be positive and covered by the vault balance
    ensure_vault_covers(ctx.accounts.token_vault.amount, amount)?;

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    // Prepare PDA signing seeds for token transfer
    let seeds = &[
        TREASURY_SEED.as_bytes(),
        treasury.creator.as_ref(),
        &[treasury.bump],
    ];
    let signer = &[&seeds[..]];

    // Transfer tokens from vault to the owner using PDA authority
    transfer_token(
        ctx.accounts.treasury.to_account_info(),  // Vault authority (treasury PDA)
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.owner_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        Some(signer),  // PDA signing for secure transfer
    )?;

    // Emit event for off-chain indexing and monitoring
    // Note: the vault stays open, later deposits reuse it
    emit_cpi!(FundsWithdrawn {
        treasury: treasury.key(),
        owner: ctx.accounts.owner.key(),
        token_mint: ctx.accounts.token_mint.key(),
        amount,
    });

    Ok(())
}
