#[cfg(test)]
mod tests {
    use anchor_lang::prelude::Pubkey;

    use crate::types::Grant;
    use crate::utils::{claim_key, encode_grant};

    fn fixture_grant() -> Grant {
        Grant {
            round_number: 12,
            recipient: Pubkey::new_from_array([7; 32]),
            project_name: "Project 1".to_string(),
            time_stamp: 1_700_000_000,
            amount: 100_000_000_000,
        }
    }

    #[test]
    fn test_encoding_layout() {
        let grant = fixture_grant();
        let encoded = encode_grant(&grant);

        assert_eq!(encoded.len(), 32 + 32 + "Project 1".len() + 32 + 32);

        // round_number as a big-endian uint256 word
        assert!(encoded[..31].iter().all(|b| *b == 0));
        assert_eq!(encoded[31], 12);

        assert_eq!(&encoded[32..64], &[7u8; 32]);
        assert_eq!(&encoded[64..73], b"Project 1");

        let mut time_word = [0u8; 32];
        time_word[24..].copy_from_slice(&1_700_000_000u64.to_be_bytes());
        assert_eq!(&encoded[73..105], &time_word);

        let mut amount_word = [0u8; 32];
        amount_word[24..].copy_from_slice(&100_000_000_000u64.to_be_bytes());
        assert_eq!(&encoded[105..], &amount_word);
    }

    #[test]
    fn test_claim_key_matches_offline_signer() {
        // keccak256 of the packed encoding above, computed independently off-chain
        let expected = [
            87, 154, 120, 70, 100, 123, 26, 79, 39, 150, 186, 199, 253, 254, 57, 112,
            132, 82, 250, 32, 116, 138, 172, 106, 201, 27, 1, 96, 252, 209, 238, 158,
        ];
        assert_eq!(claim_key(&fixture_grant()), expected);
    }

    #[test]
    fn test_identical_grants_share_key() {
        let first = fixture_grant();
        let second = fixture_grant();
        assert_eq!(claim_key(&first), claim_key(&second));
    }

    #[test]
    fn test_every_signed_field_changes_key() {
        let base = fixture_grant();
        let base_key = claim_key(&base);

        let variants = vec![
            Grant { round_number: 13, ..base.clone() },
            Grant { recipient: Pubkey::new_from_array([8; 32]), ..base.clone() },
            Grant { project_name: "Project 2".to_string(), ..base.clone() },
            Grant { time_stamp: base.time_stamp + 1, ..base.clone() },
            Grant { amount: base.amount + 1, ..base.clone() },
        ];

        for variant in variants {
            assert_ne!(claim_key(&variant), base_key, "{:?} collided with base grant", variant);
        }
    }

    #[test]
    fn test_empty_project_name() {
        let grant = Grant {
            project_name: String::new(),
            ..fixture_grant()
        };
        assert_eq!(encode_grant(&grant).len(), 128);
        assert_ne!(claim_key(&grant), claim_key(&fixture_grant()));
    }
}
