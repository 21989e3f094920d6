pub mod test_message;
pub mod test_signature;
pub mod test_treasury;

use anchor_lang::error::Error;
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};

use crate::types::{EthAddress, Grant, GrantSignature};
use crate::utils::{claim_key, eth_address};

/// Off-line grant signer used across the tests
pub struct TestSigner {
    secret: SecretKey,
}

impl TestSigner {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        TestSigner {
            secret: SecretKey::from_slice(&bytes).expect("valid secret key"),
        }
    }

    pub fn from_hex(hex: &str) -> Self {
        Self::from_bytes(hex32(hex))
    }

    pub fn address(&self) -> EthAddress {
        let secp = Secp256k1::new();
        let uncompressed = PublicKey::from_secret_key(&secp, &self.secret).serialize_uncompressed();
        let mut xy = [0u8; 64];
        xy.copy_from_slice(&uncompressed[1..]);
        eth_address(&xy)
    }

    /// Sign a raw digest, v in the 27/28 convention
    pub fn sign_digest(&self, digest: [u8; 32]) -> GrantSignature {
        let secp = Secp256k1::new();
        let signature = secp.sign_ecdsa_recoverable(&Message::from_digest(digest), &self.secret);
        let (recovery_id, compact) = signature.serialize_compact();

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&compact[..32]);
        s.copy_from_slice(&compact[32..]);

        GrantSignature {
            v: recovery_id.to_i32() as u8 + 27,
            r,
            s,
        }
    }

    pub fn sign(&self, grant: &Grant) -> GrantSignature {
        self.sign_digest(claim_key(grant))
    }
}

pub fn hex32(hex: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&hex[2 * i..2 * i + 2], 16).expect("hex digit");
    }
    out
}

/// Message of an anchor error, panics on raw program errors
pub fn error_msg(err: Error) -> String {
    match err {
        Error::AnchorError(e) => e.error_msg.clone(),
        Error::ProgramError(e) => panic!("unexpected program error: {:?}", e),
    }
}
