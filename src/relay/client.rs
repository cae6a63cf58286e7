use super::*;
use crate::wallet::Address;
use std::collections::HashSet;
use tokio::sync::mpsc::UnboundedSender;

/// Sending half of a client's socket writer.
pub type Outbox = UnboundedSender<String>;

/// Opaque identifier of one connection. Time-ordered so logs sort by arrival.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientId(uuid::Uuid);

impl Default for ClientId {
    fn default() -> Self {
        Self(uuid::Uuid::now_v7())
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// A connected session, owned by the relay registry from connect to disconnect.
#[derive(Debug)]
pub struct Client {
    outbox: Outbox,
    wallet: Option<Address>,
    rooms: HashSet<RoomKey>,
}

impl Client {
    pub fn new(outbox: Outbox, wallet: Option<Address>) -> Self {
        Self {
            outbox,
            wallet,
            rooms: HashSet::new(),
        }
    }
    /// Wallet bound by a session token at connect time.
    pub fn wallet(&self) -> Option<&Address> {
        self.wallet.as_ref()
    }
    /// Whether this connection may act for `wallet`, ignoring case.
    /// Anonymous connections may act for any wallet.
    pub fn speaks_for(&self, wallet: &str) -> bool {
        self.wallet.as_ref().map_or(true, |w| w.same(wallet))
    }
    pub fn rooms(&self) -> &HashSet<RoomKey> {
        &self.rooms
    }
    pub fn enter(&mut self, room: RoomKey) {
        self.rooms.insert(room);
    }
    pub fn exit(&mut self, room: &RoomKey) {
        self.rooms.remove(room);
    }
    pub fn send(&self, json: String) -> Result<(), tokio::sync::mpsc::error::SendError<String>> {
        self.outbox.send(json)
    }
}
