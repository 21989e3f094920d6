use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for handing over treasury ownership
 *
 * Access Control: Only the current owner
 *
 * The treasury address does not change, its seeds use the immutable creator.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    /// The treasury to update
    #[account(
        mut,
        seeds = [TREASURY_SEED.as_bytes(), treasury.creator.as_ref()],
        bump = treasury.bump
    )]
    pub treasury: Account<'info, Treasury>,

    /// Caller, must be the current owner
    pub owner: Signer<'info>,
}

/**
 * Transfers ownership to `new_owner`
 *
 * @param ctx - The account context containing treasury and owner accounts
 * @param new_owner - Account that becomes the administrator, must not be the default pubkey
 */
pub fn handle_transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let treasury = &mut ctx.accounts.treasury;
    treasury.require_owner(&ctx.accounts.owner.key())?;

    let previous_owner = treasury.owner;
    treasury.set_owner(new_owner)?;
    msg!("Ownership transferred from {} to {}", previous_owner, new_owner);

    emit_cpi!(OwnershipTransferred {
        treasury: treasury.key(),
        previous_owner,
        new_owner,
    });

    Ok(())
}
