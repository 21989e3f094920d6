use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount};
use crate::constants::*;
use crate::state::*;
use crate::types::EthAddress;

/// Read-only access to the treasury configuration
#[derive(Accounts)]
pub struct ReadTreasury<'info> {
    #[account(
        seeds = [TREASURY_SEED.as_bytes(), treasury.creator.as_ref()],
        bump = treasury.bump
    )]
    pub treasury: Account<'info, Treasury>,
}

/// Read-only access to one vault
#[derive(Accounts)]
pub struct ReadVault<'info> {
    #[account(
        seeds = [TREASURY_SEED.as_bytes(), treasury.creator.as_ref()],
        bump = treasury.bump
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(
        seeds = [VAULT_SEED.as_bytes(), treasury.key().as_ref(), token_mint.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    pub token_mint: InterfaceAccount<'info, Mint>,
}

pub fn handle_verifier_wallet(ctx: Context<ReadTreasury>) -> Result<EthAddress> {
    Ok(ctx.accounts.treasury.verifier_wallet)
}

pub fn handle_vault_balance(ctx: Context<ReadVault>) -> Result<u64> {
    Ok(ctx.accounts.token_vault.amount)
}
