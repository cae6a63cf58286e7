//! Live game-room relay.
//!
//! Players open a WebSocket, join the room of the game they are watching,
//! and receive every draw and bingo claim announced to that room. The relay
//! keeps no game state: it only tracks who is in which room and fans out
//! what it is told.
//!
//! ## Types
//!
//! - [`Relay`] — Connection registry, room membership, and fan-out
//! - [`Client`] — One connected session and its outbox
//! - [`GameId`] / [`RoomKey`] — Game identifier and the room it maps to
//! - [`Protocol`] — Inbound frame decoding into [`Command`]s
//! - [`ServerMessage`] — Outbound wire events
mod client;
mod message;
mod protocol;
mod relay;
mod room;

pub use client::*;
pub use message::*;
pub use protocol::*;
pub use relay::*;
pub use room::*;
