use super::*;
use crate::wallet::Address;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::Payload;
use actix_web::web;
use std::future::Ready;
use std::future::ready;

/// Extractor for requests carrying a valid wallet session.
/// Reads `Authorization: Bearer <token>`.
pub struct Session(pub Claims);

impl Session {
    pub fn claims(&self) -> &Claims {
        &self.0
    }
}

impl FromRequest for Session {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map(Session))
    }
}

fn authenticate(req: &HttpRequest) -> Result<Claims, actix_web::Error> {
    let header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| actix_web::error::ErrorUnauthorized("missing authorization header"))?;
    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| actix_web::error::ErrorUnauthorized("invalid authorization format"))?;
    let crypto = req
        .app_data::<web::Data<Crypto>>()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("token service not configured"))?;
    let claims = crypto
        .decode(token)
        .map_err(|_| actix_web::error::ErrorUnauthorized("invalid token"))?;
    if claims.expired() {
        return Err(actix_web::error::ErrorUnauthorized("token expired"));
    }
    Ok(claims)
}

/// Optional session: resolves to the wallet when a valid `token`
/// query parameter is present, otherwise anonymous.
pub struct MaybeWallet(pub Option<Address>);

impl FromRequest for MaybeWallet {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let wallet = web::Query::<std::collections::HashMap<String, String>>::from_query(
            req.query_string(),
        )
        .ok()
        .and_then(|query| query.get("token").cloned())
        .zip(req.app_data::<web::Data<Crypto>>())
        .and_then(|(token, crypto)| crypto.verify(&token));
        ready(Ok(MaybeWallet(wallet)))
    }
}
