use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, TransferChecked};

use crate::error::GrantTreasuryError;

/// Moves tokens through the token program (SPL Token or Token 2022)
///
/// Pass `signer_seeds` when the authority is the treasury PDA.
pub fn transfer_token<'a>(
    authority: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from,
        mint,
        to,
        authority,
    };

    let cpi_ctx = match signer_seeds {
        Some(seeds) => CpiContext::new_with_signer(token_program, cpi_accounts, seeds),
        None => CpiContext::new(token_program, cpi_accounts),
    };

    transfer_checked(cpi_ctx, amount, decimals)
}

/// Outflow guard for the vault: a debit never exceeds what the vault holds
pub fn ensure_vault_covers(vault_balance: u64, amount: u64) -> Result<()> {
    require!(amount > 0, GrantTreasuryError::InvalidAmount);
    require!(vault_balance >= amount, GrantTreasuryError::InsufficientFunds);
    Ok(())
}
