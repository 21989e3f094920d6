use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for changing the claim window
 *
 * Access Control: Only the treasury owner
 *
 * Business Logic:
 * - Applies to every unclaimed grant, deadlines are computed at claim time
 * - Shortening the window can expire grants that were still claimable
 */
#[event_cpi]
#[derive(Accounts)]
pub struct UpdateClaimWindow<'info> {
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
 * Sets the claim window
 *
 * @param ctx - The account context containing treasury and owner accounts
 * @param claim_window - Seconds a grant stays claimable after its time_stamp, must be positive
 */
pub fn handle_update_claim_window(ctx: Context<UpdateClaimWindow>, claim_window: u64) -> Result<()> {
    let treasury = &mut ctx.accounts.treasury;
    treasury.require_owner(&ctx.accounts.owner.key())?;

    let previous_window = treasury.claim_window;
    treasury.set_claim_window(claim_window)?;
    msg!("Claim window set to {} seconds", claim_window);

    emit_cpi!(ClaimWindowUpdated {
        treasury: treasury.key(),
        previous_window,
        new_window: claim_window,
    });

    Ok(())
}
