pub mod message;
pub mod signature;
pub mod token;

pub use message::*;
pub use signature::*;
pub use token::*;
