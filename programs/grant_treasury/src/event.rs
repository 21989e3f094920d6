use anchor_lang::prelude::*;

use crate::types::EthAddress;

/// Event emitted when a treasury is created
#[event]
pub struct TreasuryInitialized {
    /// The treasury account public key
    pub treasury: Pubkey,
    /// Creator and first owner of the treasury
    pub owner: Pubkey,
    /// Registered verifier wallet
    pub verifier_wallet: EthAddress,
    /// Claim window in seconds
    pub claim_window: u64,
}

/// Event emitted when tokens are deposited into a vault
#[event]
pub struct TreasuryFunded {
    /// The treasury account public key
    pub treasury: Pubkey,
    /// Account the tokens were pulled from
    pub funder: Pubkey,
    /// Token mint of the deposit
    pub token_mint: Pubkey,
    /// Amount deposited
    pub amount: u64,
    /// Vault balance after the deposit
    pub vault_balance: u64,
}

/// Event emitted when a grant is paid out
#[event]
pub struct GrantClaimed {
    /// The treasury account public key
    pub treasury: Pubkey,
    /// Replay protection key of the grant
    pub claim_key: [u8; 32],
    /// Funding round of the grant
    pub round_number: u64,
    /// Wallet that received the payout
    pub recipient: Pubkey,
    /// Account that submitted the claim
    pub relayer: Pubkey,
    /// Token mint of the payout
    pub token_mint: Pubkey,
    /// Amount paid out
    pub amount: u64,
    /// Total number of grants paid by this treasury
    pub grants_claimed: u64,
}

/// Event emitted when the owner withdraws from a vault
#[event]
pub struct FundsWithdrawn {
    /// The treasury account public key
    pub treasury: Pubkey,
    /// Owner who withdrew the tokens
    pub owner: Pubkey,
    /// Token mint of the withdrawal
    pub token_mint: Pubkey,
    /// Amount withdrawn
    pub amount: u64,
}

/// Event emitted when the verifier wallet is rotated
#[event]
pub struct VerifierWalletChanged {
    /// The treasury account public key
    pub treasury: Pubkey,
    pub previous_verifier: EthAddress,
    pub new_verifier: EthAddress,
}

/// Event emitted when ownership is handed over
#[event]
pub struct OwnershipTransferred {
    /// The treasury account public key
    pub treasury: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}

/// Event emitted when the claim window changes
#[event]
pub struct ClaimWindowUpdated {
    /// The treasury account public key
    pub treasury: Pubkey,
    pub previous_window: u64,
    pub new_window: u64,
}
