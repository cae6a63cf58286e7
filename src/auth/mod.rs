//! Wallet sessions.
//!
//! A session is a JWT carrying the connected wallet address. Tokens are
//! issued by `POST /api/wallet/connect` and presented either as a bearer
//! header or as the `token` query parameter when opening the relay socket.
mod claims;
mod crypto;
mod middleware;

pub use claims::*;
pub use crypto::*;
pub use middleware::*;
