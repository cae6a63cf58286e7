use super::*;
use serde::Serialize;
use serde_json::Value;

/// Events sent from server to client over WebSocket.
/// Framed as `{"event": <name>, "data": {...}}`.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Greeting sent to a client right after it connects.
    Status { msg: String },
    /// A client joined the room. Also serves as the joiner's confirmation.
    JoinedRoom { room: RoomKey, game_id: GameId },
    /// A client left the room.
    LeftRoom { room: RoomKey, game_id: GameId },
    /// A number was drawn in the game.
    NumberCalled {
        game_id: GameId,
        number: Value,
        timestamp: Value,
    },
    /// A player claimed bingo.
    BingoClaimed {
        game_id: GameId,
        winner: String,
        timestamp: Value,
    },
}

impl ServerMessage {
    pub fn status(msg: &str) -> Self {
        Self::Status {
            msg: msg.to_string(),
        }
    }
    pub fn joined_room(game: &GameId) -> Self {
        Self::JoinedRoom {
            room: game.room(),
            game_id: game.clone(),
        }
    }
    pub fn left_room(game: &GameId) -> Self {
        Self::LeftRoom {
            room: game.room(),
            game_id: game.clone(),
        }
    }
    pub fn number_called(game: &GameId, number: Value, timestamp: Value) -> Self {
        Self::NumberCalled {
            game_id: game.clone(),
            number,
            timestamp,
        }
    }
    pub fn bingo_claimed(game: &GameId, winner: String, timestamp: Value) -> Self {
        Self::BingoClaimed {
            game_id: game.clone(),
            winner,
            timestamp,
        }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize server message")
    }
}
