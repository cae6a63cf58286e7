//! HTTP server: shared context, route table, and lifecycle.
//!
//! ## Submodules
//!
//! - [`handlers`] — REST proxy, wallet, health, and WebSocket routes
//! - [`pages`] — HTML page shells and the 404 fallback
pub mod handlers;
pub mod pages;

use crate::Config;
use crate::auth::Crypto;
use crate::backend::Backend;
use crate::chain::Chain;
use crate::relay::Relay;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

/// Everything a handler may touch, built once at startup.
/// Cloning shares the same underlying relay, backend, and keys.
#[derive(Clone)]
pub struct Context {
    pub relay: web::Data<Relay>,
    pub backend: web::Data<Backend>,
    pub crypto: web::Data<Crypto>,
    pub chain: web::Data<Chain>,
}

impl From<&Config> for Context {
    fn from(config: &Config) -> Self {
        Self {
            relay: web::Data::new(Relay::default()),
            backend: web::Data::new(Backend::new(&config.backend_url)),
            crypto: web::Data::new(Crypto::new(&config.secret())),
            chain: web::Data::new(Chain::from(config)),
        }
    }
}

impl Context {
    /// Registers shared state and every route on an app.
    #[rustfmt::skip]
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.relay.clone())
            .app_data(self.backend.clone())
            .app_data(self.crypto.clone())
            .app_data(self.chain.clone())
            .route("/", web::get().to(pages::index))
            .route("/lottery/{id}", web::get().to(pages::lottery))
            .route("/my-tickets", web::get().to(pages::my_tickets))
            .route("/purchase/{id}", web::get().to(pages::purchase))
            .route("/health", web::get().to(handlers::health))
            .route("/status", web::get().to(handlers::status))
            .route("/ws", web::get().to(handlers::socket))
            .service(
                web::scope("/api")
                    .route("/lotteries", web::get().to(handlers::lotteries))
                    .route("/lotteries/{id}", web::get().to(handlers::lottery))
                    .route("/tickets/player/{wallet}", web::get().to(handlers::player_tickets))
                    .route("/tickets/purchase", web::post().to(handlers::purchase))
                    .route("/tickets/validate-numbers", web::post().to(handlers::validate_numbers))
                    .route("/wallet/connect", web::post().to(handlers::connect_wallet))
                    .route("/wallet/me", web::get().to(handlers::me))
                    .route("/network", web::get().to(handlers::network)),
            )
            .default_service(web::to(pages::not_found));
    }
}

pub struct Server;

impl Server {
    /// Serves until the process is interrupted, then closes every relay connection.
    pub async fn run(config: &Config, context: Context) -> anyhow::Result<()> {
        let origins = config.origins.clone();
        let shared = context.clone();
        log::info!("starting bingochain frontend on {}", config.bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(Self::cors(&origins))
                .configure(|cfg| shared.configure(cfg))
        })
        .workers(config.workers)
        .bind(&config.bind)?
        .run()
        .await?;
        context.relay.shutdown().await;
        log::info!("bingochain frontend stopped");
        Ok(())
    }

    fn cors(origins: &[String]) -> Cors {
        origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allow_any_method()
            .allow_any_header()
    }
}
