use super::*;
use crate::wallet::Address;

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(wallet: &Address) -> Self {
        let now = now();
        Self {
            sub: wallet.to_string(),
            iat: now,
            exp: now + Crypto::duration().as_secs() as i64,
        }
    }
    pub fn expired(&self) -> bool {
        self.exp < now()
    }
    /// Wallet the session was issued for.
    /// None if the subject no longer parses, which only a forged token could produce.
    pub fn wallet(&self) -> Option<Address> {
        Address::try_from(self.sub.as_str()).ok()
    }
}

fn now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
