pub mod treasury_state;
pub mod grant_claim_state;

pub use treasury_state::*;
pub use grant_claim_state::*;
