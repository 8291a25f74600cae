//! Authentication layer: Ed25519 wallet signature verification, session
//! token issuance/validation, and the request gating extractors.

pub mod middleware;
pub mod token;
pub mod verify;

pub use middleware::{AppState, AuthWallet, ModeratorWallet};
pub use token::{Claims, TokenAuthority};
pub use verify::verify_wallet_signature;
