use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;

/**
 * Account context for depositing tokens into the treasury
 *
 * Pulls tokens from the funder's token account into the treasury vault for
 * that mint. The vault is created on the first deposit of a mint.
 *
 * Access Control: Anyone may donate
 */
#[event_cpi]
#[derive(Accounts)]
pub struct FundTreasury<'info> {
    /// The treasury receiving the deposit
    #[account(
        seeds = [TREASURY_SEED.as_bytes(), treasury.creator.as_ref()],
        bump = treasury.bump
    )]
    pub treasury: Account<'info, Treasury>,

    /// Vault token account (PDA) for this mint
    /// - Controlled by the treasury PDA as token authority
    /// - Derived from: ["vault", treasury_key, token_mint]
    #[account(
        init_if_needed,
        payer = funder,
        token::mint = token_mint,
        token::authority = treasury,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), treasury.key().as_ref(), token_mint.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint being deposited
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Funder's token account the deposit is pulled from
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = funder,
        token::token_program = token_program,
    )]
    pub funder_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The account depositing tokens, pays for vault creation if needed
    #[account(mut)]
    pub funder: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Deposits tokens into the treasury vault
 *
 * @param ctx - The account context containing treasury, vault and funder accounts
 * @param amount - Amount of tokens to deposit
 *
 * A failed pull (insufficient balance, missing delegation) aborts the whole instruction.
 */
pub fn handle_fund_treasury(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
    require!(amount > 0, GrantTreasuryError::InvalidAmount);

    transfer_token(
        ctx.accounts.funder.to_account_info(),
        ctx.accounts.funder_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        None, // Funder signs the transaction
    )?;

    ctx.accounts.token_vault.reload()?;

    emit_cpi!(TreasuryFunded {
        treasury: ctx.accounts.treasury.key(),
        funder: ctx.accounts.funder.key(),
        token_mint: ctx.accounts.token_mint.key(),
        amount,
        vault_balance: ctx.accounts.token_vault.amount,
    });

    Ok(())
}
