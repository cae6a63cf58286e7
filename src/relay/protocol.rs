use super::*;
use crate::wallet::Address;
use serde::Deserialize;
use serde_json::Value;

/// Errors that can occur while decoding a client frame.
#[derive(Debug, Clone, PartialEq)]
pub enum ProtocolError {
    Malformed(String),
    MissingField(&'static str),
    InvalidWallet(String),
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(s) => write!(f, "malformed frame: {}", s),
            Self::MissingField(s) => write!(f, "missing field: {}", s),
            Self::InvalidWallet(s) => write!(f, "invalid wallet address: {}", s),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// A validated client request.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Join { game: GameId, wallet: Address },
    Leave { game: GameId },
    Number { game: GameId, number: Value, timestamp: Value },
    Bingo { game: GameId, wallet: String, timestamp: Value },
}

/// Frames sent from client to server over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
enum ClientMessage {
    JoinGameRoom(Fields),
    LeaveGameRoom(Fields),
    NumberCalled(Fields),
    BingoClaimed(Fields),
}

#[derive(Debug, Deserialize)]
struct Fields {
    #[serde(default)]
    game_id: Value,
    #[serde(default)]
    number: Value,
    #[serde(default)]
    timestamp: Value,
    wallet_address: Option<String>,
}

impl Fields {
    fn game(&self) -> Result<GameId, ProtocolError> {
        GameId::try_from(self.game_id.clone()).map_err(|_| ProtocolError::MissingField("game_id"))
    }
    fn number(&self) -> Result<Value, ProtocolError> {
        match &self.number {
            Value::Null => Err(ProtocolError::MissingField("number")),
            number => Ok(number.clone()),
        }
    }
    fn wallet(&self) -> Result<Address, ProtocolError> {
        match self.wallet_address.as_deref() {
            None | Some("") => Err(ProtocolError::MissingField("wallet_address")),
            Some(s) => Address::try_from(s).map_err(|e| ProtocolError::InvalidWallet(e.0)),
        }
    }
    /// Claimed winner, relayed as sent. Only presence is checked.
    fn claimant(&self) -> Result<String, ProtocolError> {
        match self.wallet_address.as_deref() {
            Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
            _ => Err(ProtocolError::MissingField("wallet_address")),
        }
    }
}

/// Parses inbound frames into commands.
/// Anything that fails here is dropped by the relay without a reply.
pub struct Protocol;

impl Protocol {
    pub fn decode(text: &str) -> Result<Command, ProtocolError> {
        match serde_json::from_str::<ClientMessage>(text)
            .map_err(|e| ProtocolError::Malformed(e.to_string()))?
        {
            ClientMessage::JoinGameRoom(f) => Ok(Command::Join {
                game: f.game()?,
                wallet: f.wallet()?,
            }),
            ClientMessage::LeaveGameRoom(f) => Ok(Command::Leave { game: f.game()? }),
            ClientMessage::NumberCalled(f) => Ok(Command::Number {
                game: f.game()?,
                number: f.number()?,
                timestamp: f.timestamp,
            }),
            ClientMessage::BingoClaimed(f) => Ok(Command::Bingo {
                game: f.game()?,
                wallet: f.claimant()?,
                timestamp: f.timestamp,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const WALLET: &str = "0x90F8bf6A479f320ead074411a4B0e7944Ea8c9C1";

    fn frame(event: &str, data: Value) -> String {
        json!({ "event": event, "data": data }).to_string()
    }

    #[test]
    fn decode_join() {
        let text = frame("join_game_room", json!({"game_id": 7, "wallet_address": WALLET}));
        assert_eq!(
            Protocol::decode(&text),
            Ok(Command::Join {
                game: GameId::from(7),
                wallet: Address::try_from(WALLET).unwrap(),
            })
        );
    }
    #[test]
    fn decode_number_without_timestamp() {
        let text = frame("number_called", json!({"game_id": "7", "number": 42}));
        match Protocol::decode(&text) {
            Ok(Command::Number { number, timestamp, .. }) => {
                assert_eq!(number, json!(42));
                assert_eq!(timestamp, Value::Null);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
    #[test]
    fn decode_missing_fields() {
        assert_eq!(
            Protocol::decode(&frame("join_game_room", json!({"game_id": 7}))),
            Err(ProtocolError::MissingField("wallet_address"))
        );
        assert_eq!(
            Protocol::decode(&frame("leave_game_room", json!({}))),
            Err(ProtocolError::MissingField("game_id"))
        );
        assert_eq!(
            Protocol::decode(&frame("number_called", json!({"game_id": 7}))),
            Err(ProtocolError::MissingField("number"))
        );
        assert_eq!(
            Protocol::decode(&frame("bingo_claimed", json!({"game_id": "", "wallet_address": WALLET}))),
            Err(ProtocolError::MissingField("game_id"))
        );
    }
    #[test]
    fn decode_bad_wallet() {
        let text = frame("join_game_room", json!({"game_id": 7, "wallet_address": "0xnope"}));
        assert_eq!(
            Protocol::decode(&text),
            Err(ProtocolError::InvalidWallet("0xnope".to_string()))
        );
    }
    #[test]
    fn decode_bingo_keeps_wallet_verbatim() {
        let text = frame("bingo_claimed", json!({"game_id": 7, "wallet_address": "0xnope", "timestamp": 5}));
        assert_eq!(
            Protocol::decode(&text),
            Ok(Command::Bingo {
                game: GameId::from(7),
                wallet: "0xnope".to_string(),
                timestamp: json!(5),
            })
        );
        assert_eq!(
            Protocol::decode(&frame("bingo_claimed", json!({"game_id": 7, "wallet_address": " "}))),
            Err(ProtocolError::MissingField("wallet_address"))
        );
    }
    #[test]
    fn decode_malformed() {
        assert!(matches!(Protocol::decode("not json"), Err(ProtocolError::Malformed(_))));
        assert!(matches!(
            Protocol::decode(&frame("start_game", json!({"game_id": 7}))),
            Err(ProtocolError::Malformed(_))
        ));
    }
}
