use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::types::EthAddress;

/**
 * Account context for creating a treasury
 *
 * The signing creator pays for the treasury PDA and becomes its first owner.
 * Vaults are not created here, each one is opened by the first deposit of its token.
 *
 * Access Control: Anyone may create their own treasury
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializeTreasury<'info> {
    /// The treasury state account (PDA)
    /// - Derived from: ["treasury", creator]
    #[account(
        init,
        payer = creator,
        space = Treasury::LEN,
        seeds = [TREASURY_SEED.as_bytes(), creator.key().as_ref()],
        bump
    )]
    pub treasury: Account<'info, Treasury>,

    /// Creator of the treasury, becomes the owner
    #[account(mut)]
    pub creator: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Creates a treasury
 *
 * @param ctx - The account context containing treasury and creator accounts
 * @param verifier_wallet - Address of the off-line grant signer
 * @param claim_window - Seconds a grant stays claimable after its time_stamp, 0 for the default
 */
pub fn handle_initialize_treasury(
    ctx: Context<InitializeTreasury>,
    verifier_wallet: EthAddress,
    claim_window: u64,
) -> Result<()> {
    let treasury = &mut ctx.accounts.treasury;

    treasury.initialize(
        ctx.bumps.treasury,
        ctx.accounts.creator.key(),
        verifier_wallet,
        claim_window,
    )?;

    emit_cpi!(TreasuryInitialized {
        treasury: treasury.key(),
        owner: treasury.owner,
        verifier_wallet: treasury.verifier_wallet,
        claim_window: treasury.claim_window,
    });

    Ok(())
}
