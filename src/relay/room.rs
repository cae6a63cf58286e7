use serde::Serialize;
use serde_json::Value;

/// Game identifier exactly as the client sent it, either a number or a
/// non-empty string. Echoed back verbatim in outbound events.
#[derive(Debug, Clone, PartialEq)]
pub struct GameId(Value);

impl GameId {
    /// Room that members of this game sit in.
    pub fn room(&self) -> RoomKey {
        match &self.0 {
            Value::String(s) => RoomKey(format!("game_{}", s)),
            other => RoomKey(format!("game_{}", other)),
        }
    }
}

impl TryFrom<Value> for GameId {
    type Error = Value;
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let present = match &value {
            Value::Number(_) => true,
            Value::String(s) => !s.trim().is_empty(),
            _ => false,
        };
        match present {
            true => Ok(Self(value)),
            false => Err(value),
        }
    }
}

impl From<u64> for GameId {
    fn from(id: u64) -> Self {
        Self(Value::from(id))
    }
}

impl Serialize for GameId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

/// Name of a room: `game_<game_id>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RoomKey(String);

impl std::fmt::Display for RoomKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
