#[cfg(test)]
mod tests {
    use anchor_lang::prelude::Pubkey;

    use crate::constants::DEFAULT_CLAIM_WINDOW;
    use crate::error::GrantTreasuryError;
    use crate::state::Treasury;
    use crate::test::error_msg;

    const VERIFIER: [u8; 20] = [0x11; 20];

    fn new_treasury(creator: Pubkey, claim_window: u64) -> Treasury {
        let mut treasury = Treasury::default();
        treasury
            .initialize(254, creator, VERIFIER, claim_window)
            .expect("initialize treasury");
        treasury
    }

    #[test]
    fn test_initialize_defaults() {
        let creator = Pubkey::new_unique();
        let treasury = new_treasury(creator, 0);

        assert_eq!(treasury.bump, 254);
        assert_eq!(treasury.creator, creator);
        assert_eq!(treasury.owner, creator);
        assert_eq!(treasury.verifier_wallet, VERIFIER);
        assert_eq!(treasury.claim_window, DEFAULT_CLAIM_WINDOW);
        assert_eq!(DEFAULT_CLAIM_WINDOW, 1_209_600);
        assert_eq!(treasury.grants_claimed, 0);
    }

    #[test]
    fn test_initialize_custom_window() {
        let treasury = new_treasury(Pubkey::new_unique(), 60);
        assert_eq!(treasury.claim_window, 60);
    }

    #[test]
    fn test_initialize_rejects_zero_verifier() {
        let mut treasury = Treasury::default();
        let err = treasury
            .initialize(255, Pubkey::new_unique(), [0; 20], 0)
            .unwrap_err();
        assert_eq!(error_msg(err), GrantTreasuryError::InvalidVerifier.to_string());
    }

    #[test]
    fn test_require_owner() {
        let owner = Pubkey::new_unique();
        let treasury = new_treasury(owner, 0);

        assert!(treasury.require_owner(&owner).is_ok());

        let err = treasury.require_owner(&Pubkey::new_unique()).unwrap_err();
        assert_eq!(error_msg(err), "Ownable: caller is not the owner");
    }

    #[test]
    fn test_ownership_transfer_moves_admin_gate() {
        let creator = Pubkey::new_unique();
        let successor = Pubkey::new_unique();
        let mut treasury = new_treasury(creator, 0);

        treasury.set_owner(successor).unwrap();

        assert!(treasury.require_owner(&successor).is_ok());
        assert!(treasury.require_owner(&creator).is_err());
        // seeds keep pointing at the creator
        assert_eq!(treasury.creator, creator);
    }

    #[test]
    fn test_set_owner_rejects_default_pubkey() {
        let mut treasury = new_treasury(Pubkey::new_unique(), 0);
        let err = treasury.set_owner(Pubkey::default()).unwrap_err();
        assert_eq!(error_msg(err), GrantTreasuryError::InvalidOwner.to_string());
    }

    #[test]
    fn test_set_verifier_wallet() {
        let mut treasury = new_treasury(Pubkey::new_unique(), 0);

        treasury.set_verifier_wallet([0x22; 20]).unwrap();
        assert_eq!(treasury.verifier_wallet, [0x22; 20]);

        assert!(treasury.set_verifier_wallet([0; 20]).is_err());
        assert_eq!(treasury.verifier_wallet, [0x22; 20]);
    }

    #[test]
    fn test_set_claim_window_rejects_zero() {
        let mut treasury = new_treasury(Pubkey::new_unique(), 0);
        let err = treasury.set_claim_window(0).unwrap_err();

        assert_eq!(error_msg(err), GrantTreasuryError::InvalidClaimWindow.to_string());
        assert_eq!(treasury.claim_window, DEFAULT_CLAIM_WINDOW);
    }

    #[test]
    fn test_record_payout_overflow() {
        let mut treasury = new_treasury(Pubkey::new_unique(), 0);
        assert_eq!(treasury.record_payout().unwrap(), 1);

        treasury.grants_claimed = u64::MAX;
        let err = treasury.record_payout().unwrap_err();
        assert_eq!(error_msg(err), GrantTreasuryError::ArithmeticOverflow.to_string());
    }
}
