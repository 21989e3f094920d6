pub mod initialize_treasury;
pub mod fund_treasury;
pub mod claim_grant;
pub mod withdraw_funds;
pub mod change_verifier_wallet;
pub mod transfer_ownership;
pub mod update_claim_window;
pub mod views;

pub use initialize_treasury::*;
pub use fund_treasury::*;
pub use claim_grant::*;
pub use withdraw_funds::*;
pub use change_verifier_wallet::*;
pub use transfer_ownership::*;
pub use update_claim_window::*;
pub use views::*;
