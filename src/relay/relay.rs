use super::*;
use crate::wallet::Address;
use serde_json::Value;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::mpsc::unbounded_channel;

const GREETING: &str = "Connected to BingoChain server";

/// Connection registry and room membership.
///
/// Every mutation and every fan-out runs under one lock, so events
/// reach the members of a room in the order they arrived at the relay.
/// Nothing inside the lock awaits I/O: outboxes are unbounded channels
/// drained by each connection's socket pump.
#[derive(Default)]
pub struct Relay {
    registry: Mutex<Registry>,
}

#[derive(Default)]
struct Registry {
    clients: HashMap<ClientId, Client>,
    rooms: HashMap<RoomKey, HashSet<ClientId>>,
}

impl Relay {
    /// Registers a connection and greets it.
    pub async fn connect(&self, outbox: Outbox, wallet: Option<Address>) -> ClientId {
        let id = ClientId::default();
        let client = Client::new(outbox, wallet);
        client
            .send(ServerMessage::status(GREETING).to_json())
            .inspect_err(|e| log::warn!("failed greeting to {}: {:?}", id, e))
            .ok();
        match client.wallet() {
            Some(wallet) => log::info!("client {} connected as {}", id, wallet),
            None => log::info!("client {} connected", id),
        }
        self.registry.lock().await.clients.insert(id, client);
        id
    }

    /// Adds the client to the game's room and announces it to the room,
    /// joiner included. Joining twice leaves membership unchanged.
    pub async fn join(&self, id: ClientId, game: &GameId, wallet: &Address) -> usize {
        let room = game.room();
        let mut registry = self.registry.lock().await;
        match registry.clients.get_mut(&id) {
            None => return 0,
            Some(client) if !client.speaks_for(wallet.as_str()) => {
                log::warn!("client {} tried to join {} as {}", id, room, wallet);
                return 0;
            }
            Some(client) => client.enter(room.clone()),
        }
        registry.rooms.entry(room.clone()).or_default().insert(id);
        log::info!("client {} joined room {}", id, room);
        registry.fanout(&room, &ServerMessage::joined_room(game))
    }

    /// Removes the client from the game's room, if present,
    /// and tells the remaining members.
    pub async fn leave(&self, id: ClientId, game: &GameId) -> usize {
        let room = game.room();
        let mut registry = self.registry.lock().await;
        registry.evict(id, &room);
        if let Some(client) = registry.clients.get_mut(&id) {
            client.exit(&room);
        }
        log::info!("client {} left room {}", id, room);
        registry.fanout(&room, &ServerMessage::left_room(game))
    }

    /// Relays a drawn number to the game's room as-is.
    pub async fn broadcast_number(&self, game: &GameId, number: Value, timestamp: Value) -> usize {
        self.registry
            .lock()
            .await
            .fanout(&game.room(), &ServerMessage::number_called(game, number, timestamp))
    }

    /// Relays a bingo claim to the game's room. Whether the claim wins is
    /// not checked; the backend settles that.
    pub async fn broadcast_bingo(&self, game: &GameId, wallet: String, timestamp: Value) -> usize {
        self.registry
            .lock()
            .await
            .fanout(&game.room(), &ServerMessage::bingo_claimed(game, wallet, timestamp))
    }

    /// Relays a bingo claim made by a connection. A connection bound to a
    /// wallet may only claim for that wallet.
    pub async fn claim(&self, id: ClientId, game: &GameId, wallet: String, timestamp: Value) -> usize {
        let registry = self.registry.lock().await;
        match registry.clients.get(&id) {
            None => 0,
            Some(client) if !client.speaks_for(&wallet) => {
                log::warn!("client {} tried to claim bingo in {} as {}", id, game.room(), wallet);
                0
            }
            Some(_) => registry.fanout(&game.room(), &ServerMessage::bingo_claimed(game, wallet, timestamp)),
        }
    }

    /// Drops the client from the registry and from every room it was in.
    pub async fn disconnect(&self, id: ClientId) {
        let mut registry = self.registry.lock().await;
        if let Some(client) = registry.clients.remove(&id) {
            client.rooms().iter().for_each(|room| registry.evict(id, room));
            log::info!("client {} disconnected", id);
        }
    }

    /// Decodes one inbound frame and applies it.
    /// Frames that fail to decode are dropped without reply.
    pub async fn dispatch(&self, id: ClientId, text: &str) -> usize {
        match Protocol::decode(text) {
            Err(e) => {
                log::debug!("dropped frame from {}: {}", id, e);
                0
            }
            Ok(Command::Join { game, wallet }) => self.join(id, &game, &wallet).await,
            Ok(Command::Leave { game }) => self.leave(id, &game).await,
            Ok(Command::Number {
                game,
                number,
                timestamp,
            }) => self.broadcast_number(&game, number, timestamp).await,
            Ok(Command::Bingo {
                game,
                wallet,
                timestamp,
            }) => self.claim(id, &game, wallet, timestamp).await,
        }
    }

    /// Drops every connection. Their outboxes close, which ends each socket pump.
    pub async fn shutdown(&self) {
        let mut registry = self.registry.lock().await;
        log::info!("closing {} relay connections", registry.clients.len());
        registry.clients.clear();
        registry.rooms.clear();
    }
}

impl Relay {
    /// Current members of the game's room.
    pub async fn members(&self, game: &GameId) -> Vec<ClientId> {
        let mut members = self
            .registry
            .lock()
            .await
            .rooms
            .get(&game.room())
            .map(|set| set.iter().copied().collect::<Vec<_>>())
            .unwrap_or_default();
        members.sort();
        members
    }
    pub async fn rooms(&self) -> usize {
        self.registry.lock().await.rooms.len()
    }
    pub async fn clients(&self) -> usize {
        self.registry.lock().await.clients.len()
    }
}

impl Relay {
    /// Spawns the pump between a WebSocket session and the relay.
    /// Outbox frames go to the socket; socket text frames are dispatched.
    pub async fn bridge(
        self: Arc<Self>,
        mut session: actix_ws::Session,
        mut stream: actix_ws::MessageStream,
        wallet: Option<Address>,
    ) {
        use futures::StreamExt;
        let (tx, mut rx) = unbounded_channel::<String>();
        let id = self.connect(tx, wallet).await;
        actix_web::rt::spawn(async move {
            'sesh: loop {
                tokio::select! {
                    biased;
                    msg = rx.recv() => match msg {
                        Some(json) => if session.text(json).await.is_err() { break 'sesh },
                        None => break 'sesh,
                    },
                    msg = stream.next() => match msg {
                        Some(Ok(actix_ws::Message::Text(text))) => { self.dispatch(id, &text).await; },
                        Some(Ok(actix_ws::Message::Ping(bytes))) => if session.pong(&bytes).await.is_err() { break 'sesh },
                        Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                        Some(Err(_)) => break 'sesh,
                        None => break 'sesh,
                        _ => continue 'sesh,
                    },
                }
            }
            self.disconnect(id).await;
            let _ = session.close(None).await;
        });
    }
}

impl Registry {
    fn evict(&mut self, id: ClientId, room: &RoomKey) {
        if let Some(members) = self.rooms.get_mut(room) {
            members.remove(&id);
            if members.is_empty() {
                self.rooms.remove(room);
            }
        }
    }
    fn fanout(&self, room: &RoomKey, message: &ServerMessage) -> usize {
        let Some(members) = self.rooms.get(room) else {
            return 0;
        };
        let json = message.to_json();
        members
            .iter()
            .filter_map(|id| self.clients.get(id).map(|client| (id, client)))
            .map(|(id, client)| (id, client.send(json.clone())))
            .filter_map(|(id, res)| match res {
                Ok(()) => Some(()),
                Err(e) => {
                    log::warn!("failed broadcast to {} in {}: {:?}", id, room, e);
                    None
                }
            })
            .count()
    }
}
