use anchor_lang::prelude::*;

#[error_code]
pub enum GrantTreasuryError {
    // Claim errors
    #[msg("Grant already claimed")]
    AlreadyClaimed,
    #[msg("Timed out")]
    TimedOut,
    #[msg("Unauthorized signer")]
    UnauthorizedSigner,
    #[msg("Claim key does not match grant terms")]
    ClaimKeyMismatch,
    #[msg("Destination token account is not owned by the grant recipient")]
    RecipientMismatch,
    #[msg("Project name too long")]
    ProjectNameTooLong,

    // Access control errors
    #[msg("Ownable: caller is not the owner")]
    NotOwner,
    #[msg("Invalid verifier wallet")]
    InvalidVerifier,
    #[msg("Invalid owner")]
    InvalidOwner,

    // Configuration errors
    #[msg("Invalid claim window")]
    InvalidClaimWindow,

    // Amount validation errors
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Insufficient funds")]
    InsufficientFunds,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
