use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::types::EthAddress;

/**
 * Account context for rotating the verifier wallet
 *
 * Access Control: Only the treasury owner
 *
 * Business Logic:
 * - Signatures by the previous verifier stop being accepted immediately
 * - Grants already claimed stay claimed
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ChangeVerifierWallet<'info> {
    /// The treasury to update
    #[account(
        mut,
        seeds = [TREASURY_SEED.as_bytes(), treasury.creator.as_ref()],
        bump = treasury.bump
    )]
    pub treasury: Account<'info, Treasury>,

    /// Caller, must be the treasury owner
    pub owner: Signer<'info>,
}

/**
 * Replaces the verifier wallet
 *
 * @param ctx - The account context containing treasury and owner accounts
 * @param new_verifier - Address of the new off-line signer, must not be zero
 */
pub fn handle_change_verifier_wallet(
    ctx: Context<ChangeVerifierWallet>,
    new_verifier: EthAddress,
) -> Result<()> {
    let treasury = &mut ctx.accounts.treasury;
    treasury.require_owner(&ctx.accounts.owner.key())?;

    let previous_verifier = treasury.verifier_wallet;
    treasury.set_verifier_wallet(new_verifier)?;
    msg!("Verifier wallet changed");

    emit_cpi!(VerifierWalletChanged {
        treasury: treasury.key(),
        previous_verifier,
        new_verifier,
    });

    Ok(())
}
