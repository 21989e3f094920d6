#[cfg(test)]
mod tests {
    use crate::test::TestSigner;
    use crate::types::GrantSignature;
    use crate::utils::{recover_signer, verify_signer};

    // Verifier key pair used by the off-line signing scripts
    const VERIFIER_SECRET: &str = "ac0274bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const VERIFIER_ADDRESS: [u8; 20] = [
        77, 236, 186, 160, 37, 110, 184, 166, 96, 138, 138, 102, 3, 15, 178, 187, 211, 217, 190, 241,
    ];

    const DIGEST: [u8; 32] = [0x42; 32];

    #[test]
    fn test_known_verifier_address() {
        let verifier = TestSigner::from_hex(VERIFIER_SECRET);
        assert_eq!(verifier.address(), VERIFIER_ADDRESS);
    }

    #[test]
    fn test_recover_signer() {
        let verifier = TestSigner::from_hex(VERIFIER_SECRET);
        let signature = verifier.sign_digest(DIGEST);

        assert!(signature.v == 27 || signature.v == 28);
        assert_eq!(recover_signer(&DIGEST, &signature), Some(VERIFIER_ADDRESS));
        assert!(verify_signer(&DIGEST, &signature, &VERIFIER_ADDRESS));
    }

    #[test]
    fn test_raw_recovery_id_accepted() {
        let verifier = TestSigner::from_hex(VERIFIER_SECRET);
        let signature = verifier.sign_digest(DIGEST);
        let raw = GrantSignature {
            v: signature.v - 27,
            ..signature
        };

        assert_eq!(recover_signer(&DIGEST, &raw), Some(VERIFIER_ADDRESS));
    }

    #[test]
    fn test_other_signer_rejected() {
        let impostor = TestSigner::from_bytes([3; 32]);
        let signature = impostor.sign_digest(DIGEST);

        assert_eq!(recover_signer(&DIGEST, &signature), Some(impostor.address()));
        assert!(!verify_signer(&DIGEST, &signature, &VERIFIER_ADDRESS));
    }

    #[test]
    fn test_signature_bound_to_digest() {
        let verifier = TestSigner::from_hex(VERIFIER_SECRET);
        let signature = verifier.sign_digest(DIGEST);

        let mut other_digest = DIGEST;
        other_digest[0] ^= 1;
        assert!(!verify_signer(&other_digest, &signature, &VERIFIER_ADDRESS));
    }

    #[test]
    fn test_malformed_signatures_fail_closed() {
        let verifier = TestSigner::from_hex(VERIFIER_SECRET);
        let signature = verifier.sign_digest(DIGEST);

        let bad_v = GrantSignature { v: 29, ..signature };
        assert_eq!(recover_signer(&DIGEST, &bad_v), None);

        let zero_r = GrantSignature { r: [0; 32], ..signature };
        assert_eq!(recover_signer(&DIGEST, &zero_r), None);

        let zero_s = GrantSignature { s: [0; 32], ..signature };
        assert_eq!(recover_signer(&DIGEST, &zero_s), None);

        // s above the curve order is not a valid scalar
        let overflow_s = GrantSignature { s: [0xff; 32], ..signature };
        assert!(!verify_signer(&DIGEST, &overflow_s, &VERIFIER_ADDRESS));

        let mut tampered_r = signature;
        tampered_r.r[31] ^= 1;
        assert!(!verify_signer(&DIGEST, &tampered_r, &VERIFIER_ADDRESS));
    }

    #[test]
    fn test_flipped_recovery_id_rejected() {
        let verifier = TestSigner::from_hex(VERIFIER_SECRET);
        let signature = verifier.sign_digest(DIGEST);
        let flipped = GrantSignature {
            v: if signature.v == 27 { 28 } else { 27 },
            ..signature
        };

        assert!(!verify_signer(&DIGEST, &flipped, &VERIFIER_ADDRESS));
    }
}
