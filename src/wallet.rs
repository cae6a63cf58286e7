use serde::Serialize;

/// Public wallet address of a player: `0x` followed by 40 hex digits.
/// Case is preserved as given so it can be echoed back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Address(String);

/// Rejected wallet address text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidAddress(pub String);

impl std::fmt::Display for InvalidAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid wallet address: {}", self.0)
    }
}

impl std::error::Error for InvalidAddress {}

impl Address {
    pub fn as_str(&self) -> &str {
        &self.0
    }
    /// Case-insensitive comparison, since checksummed and lowercase
    /// spellings name the same account.
    pub fn same(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl TryFrom<&str> for Address {
    type Error = InvalidAddress;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .filter(|hex| hex.len() == 40)
            .filter(|hex| hex.chars().all(|c| c.is_ascii_hexdigit()))
            .map(|_| Self(s.to_string()))
            .ok_or_else(|| InvalidAddress(s.to_string()))
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
