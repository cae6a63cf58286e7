use crate::auth::Claims;
use crate::auth::Crypto;
use crate::auth::MaybeWallet;
use crate::auth::Session;
use crate::backend::Backend;
use crate::backend::Reply;
use crate::backend::UpstreamError;
use crate::chain::Chain;
use crate::relay::Relay;
use crate::wallet::Address;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::http::StatusCode;
use actix_web::web;
use serde::Deserialize;
use serde_json::Value;
use serde_json::json;

pub async fn health(backend: web::Data<Backend>, chain: web::Data<Chain>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "BingoChain Frontend",
        "version": env!("CARGO_PKG_VERSION"),
        "services": {
            "backend": backend.base(),
            "blockchain": chain.rpc_url,
        },
    }))
}

pub async fn status(relay: web::Data<Relay>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "rooms": relay.rooms().await,
        "clients": relay.clients().await,
    }))
}

pub async fn network(chain: web::Data<Chain>) -> impl Responder {
    HttpResponse::Ok().json(chain.get_ref())
}

pub async fn lotteries(backend: web::Data<Backend>) -> impl Responder {
    proxied(
        backend.lotteries().await,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Failed to fetch lotteries",
    )
}

pub async fn lottery(backend: web::Data<Backend>, path: web::Path<u64>) -> impl Responder {
    proxied(
        backend.lottery(path.into_inner()).await,
        StatusCode::NOT_FOUND,
        "Lottery not found",
    )
}

pub async fn player_tickets(backend: web::Data<Backend>, path: web::Path<String>) -> impl Responder {
    match Address::try_from(path.as_str()) {
        Err(_) => error(StatusCode::BAD_REQUEST, "Invalid wallet address"),
        Ok(wallet) => proxied(
            backend.player_tickets(&wallet).await,
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to fetch tickets",
        ),
    }
}

pub async fn purchase(backend: web::Data<Backend>, ticket: web::Json<Value>) -> impl Responder {
    proxied(
        backend.purchase(&ticket).await,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Failed to purchase ticket",
    )
}

pub async fn validate_numbers(backend: web::Data<Backend>, numbers: web::Json<Value>) -> impl Responder {
    proxied(
        backend.validate_numbers(&numbers).await,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Failed to validate numbers",
    )
}

#[derive(Deserialize)]
pub struct ConnectRequest {
    pub address: Option<String>,
}

pub async fn connect_wallet(
    crypto: web::Data<Crypto>,
    chain: web::Data<Chain>,
    req: web::Json<ConnectRequest>,
) -> impl Responder {
    let wallet = match req.address.as_deref() {
        None | Some("") => return error(StatusCode::BAD_REQUEST, "Wallet address is required"),
        Some(text) => match Address::try_from(text) {
            Err(_) => return error(StatusCode::BAD_REQUEST, "Invalid wallet address"),
            Ok(wallet) => wallet,
        },
    };
    match crypto.encode(&Claims::new(&wallet)) {
        Err(e) => {
            log::error!("failed to sign session for {}: {}", wallet, e);
            error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
        Ok(token) => {
            log::info!("wallet {} connected", wallet);
            HttpResponse::Ok().json(json!({
                "success": true,
                "address": wallet,
                "network": chain.network,
                "token": token,
            }))
        }
    }
}

pub async fn me(session: Session) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "address": session.claims().sub,
        "expires": session.claims().exp,
    }))
}

pub async fn socket(
    relay: web::Data<Relay>,
    wallet: MaybeWallet,
    body: web::Payload,
    req: HttpRequest,
) -> impl Responder {
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => {
            relay.into_inner().bridge(session, stream, wallet.0).await;
            response
        }
        Err(e) => e.error_response(),
    }
}

/// Relays a backend reply, or maps the failure to a generic error body.
fn proxied(result: Result<Reply, UpstreamError>, rejected: StatusCode, message: &str) -> HttpResponse {
    match result {
        Ok(reply) => HttpResponse::build(
            StatusCode::from_u16(reply.status.as_u16()).unwrap_or(StatusCode::OK),
        )
        .json(reply.body),
        Err(UpstreamError::Rejected(status)) => {
            log::warn!("{}: backend answered {}", message, status);
            error(rejected, message)
        }
        Err(e) => {
            log::error!("{}: {}", message, e);
            error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

fn error(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(json!({ "error": message }))
}
