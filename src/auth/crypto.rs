use super::*;

const SESSION_DURATION: std::time::Duration = std::time::Duration::from_secs(12 * 60 * 60);

/// Signs and checks wallet session tokens.
///
/// A token is an HS256 JWT whose subject is the wallet address handed to
/// `/api/wallet/connect`. The same key serves the bearer header on
/// `/api/wallet/me` and the `?token=` query that binds a socket to a wallet.
pub struct Crypto {
    encoding: jsonwebtoken::EncodingKey,
    decoding: jsonwebtoken::DecodingKey,
}

impl Crypto {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: jsonwebtoken::EncodingKey::from_secret(secret),
            decoding: jsonwebtoken::DecodingKey::from_secret(secret),
        }
    }
    pub fn encode(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), claims, &self.encoding)
    }
    pub fn decode(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &jsonwebtoken::Validation::default())
            .map(|data| data.claims)
    }
    /// Wallet bound to a token, if the token is genuine and unexpired.
    pub fn verify(&self, token: &str) -> Option<crate::wallet::Address> {
        self.decode(token)
            .ok()
            .filter(|c| !c.expired())
            .and_then(|c| c.wallet())
    }
    pub const fn duration() -> std::time::Duration {
        SESSION_DURATION
    }
}
