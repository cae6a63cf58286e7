//! BingoChain Frontend Binary
//!
//! Runs the HTTP server for the lottery pages, the REST proxy,
//! and the WebSocket game-room relay.

use bingochain::*;
use clap::Parser;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    log()?;
    let config = Config::parse();
    let context = Context::from(&config);
    context.chain.probe().await;
    Server::run(&config, context).await
}
